use std::path::{Path, PathBuf};
use thiserror::Error;

/// 题库合并错误类型
#[derive(Debug, Error)]
pub enum MergeError {
    /// 输入文件不存在
    #[error("文件不存在: {}", path.display())]
    NotFound { path: PathBuf },

    /// 读取文件失败（包括非 UTF-8 内容）
    #[error("读取文件失败 ({}): {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 写入输出文件失败
    #[error("写入文件失败 ({}): {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("配置文件解析失败 ({}): {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl MergeError {
    /// 根据 io 错误类型区分“不存在”和“读取失败”
    pub fn from_read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            MergeError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            MergeError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// 创建写入失败错误
    pub fn write_failed(path: &Path, source: std::io::Error) -> Self {
        MergeError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// 题库合并结果类型
pub type MergeResult<T> = Result<T, MergeError>;
