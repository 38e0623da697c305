//! 题库写入服务 - 业务能力层
//!
//! 只负责"把题库写成 quiz XML 文件"能力

use crate::error::{MergeError, MergeResult};
use crate::models::QuestionBank;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<quiz>\n";
const XML_FOOTER: &str = "\n</quiz>\n";

/// 生成完整的 quiz 文档：XML 声明 + `<quiz>` + 换行分隔的题目
pub fn render_quiz(bank: &QuestionBank) -> String {
    let body = bank
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let mut output = String::with_capacity(XML_HEADER.len() + body.len() + XML_FOOTER.len());
    output.push_str(XML_HEADER);
    output.push_str(&body);
    output.push_str(XML_FOOTER);
    output
}

/// quiz 文件写入服务
pub struct QuizWriter {
    output_path: String,
}

impl QuizWriter {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// 写入题库
    ///
    /// 先写同目录下的临时文件，再原子替换目标文件；失败时不会留下半个文件。
    pub fn write(&self, bank: &QuestionBank) -> MergeResult<()> {
        let path = Path::new(&self.output_path);
        let content = render_quiz(bank);

        debug!(
            "写入题库: {} | 题目数: {} | 字节数: {}",
            path.display(),
            bank.len(),
            content.len()
        );

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| MergeError::write_failed(path, e))?;

        let mut temp_file =
            create_temp_file(parent).map_err(|e| MergeError::write_failed(path, e))?;

        // 已有输出文件时沿用其权限
        if let Ok(metadata) = std::fs::metadata(path) {
            temp_file
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| MergeError::write_failed(path, e))?;
        }

        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.flush())
            .map_err(|e| MergeError::write_failed(path, e))?;
        temp_file
            .persist(path)
            .map_err(|e| MergeError::write_failed(path, e.error))?;

        Ok(())
    }
}

/// 在目标目录创建临时文件
///
/// unix 下以 0o666 打开，由 umask 收窄。
fn create_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
