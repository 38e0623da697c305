use crate::error::{MergeError, MergeResult};
use serde::Deserialize;
use std::path::Path;

/// 可选的配置文件名（位于当前工作目录）
pub const CONFIG_FILE_NAME: &str = "question-merge.toml";

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 原题库文件
    pub source_path: String,
    /// 新增题目文件
    pub additions_path: String,
    /// 合并结果输出文件
    pub output_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: "public/student/data/cs50-questions.xml".to_string(),
            additions_path: "public/student/data/code-output-questions.xml".to_string(),
            output_path: "public/student/data/cs50-questions-updated.xml".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 默认值 + 环境变量覆盖
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，缺失字段使用默认值
    pub fn from_toml_file(path: &Path) -> MergeResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| MergeError::from_read(path, e))?;
        toml::from_str(&content).map_err(|source| MergeError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 加载完整配置：配置文件（如存在）→ 环境变量
    pub fn load() -> MergeResult<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        let base = if path.exists() {
            Self::from_toml_file(path)?
        } else {
            Self::default()
        };
        Ok(base.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            source_path: std::env::var("QUESTION_SOURCE_PATH").unwrap_or(self.source_path),
            additions_path: std::env::var("QUESTION_ADDITIONS_PATH").unwrap_or(self.additions_path),
            output_path: std::env::var("QUESTION_OUTPUT_PATH").unwrap_or(self.output_path),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }
}
