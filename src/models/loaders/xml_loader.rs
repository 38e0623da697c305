use crate::error::{MergeError, MergeResult};
use crate::models::question::{QuestionBank, QuestionRecord};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// 题目块匹配：非贪婪，`.` 可跨行
const QUESTION_PATTERN: &str = r#"(?s)<question type="multichoice">.*?</question>"#;

fn question_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(QUESTION_PATTERN).expect("题目匹配正则无效"))
}

/// 从文本中按顺序提取所有题目块
///
/// 未闭合或格式错误的块不会被匹配，直接忽略。
pub fn extract_questions(content: &str) -> QuestionBank {
    question_regex()
        .find_iter(content)
        .map(|m| QuestionRecord::new(m.as_str()))
        .collect()
}

/// `\r\n` 和单独的 `\r` 统一为 `\n`，保证输出文档只有一种换行
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// 读取 XML 文件并提取题目
pub fn load_question_bank(xml_file_path: &Path) -> MergeResult<QuestionBank> {
    let raw = std::fs::read_to_string(xml_file_path)
        .map_err(|e| MergeError::from_read(xml_file_path, e))?;
    let content = normalize_newlines(&raw);

    let bank = extract_questions(&content);
    tracing::info!(
        "已加载 {}: {} 道题目",
        xml_file_path.display(),
        bank.len()
    );

    if bank.is_empty() && !content.trim().is_empty() {
        tracing::warn!(
            "文件 {} 非空，但没有匹配到任何题目",
            xml_file_path.display()
        );
    }

    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_file_order() {
        let xml = r#"<?xml version="1.0"?>
<quiz>
<question type="multichoice"><name>first</name></question>
<question type="multichoice">
  <name>second</name>
</question>
</quiz>"#;

        let bank = extract_questions(xml);
        assert_eq!(bank.len(), 2);
        assert!(bank.records()[0].contains("first"));
        assert!(bank.records()[1].contains("second"));
        assert!(bank.records()[1].as_str().starts_with("<question type=\"multichoice\">"));
        assert!(bank.records()[1].as_str().ends_with("</question>"));
    }

    #[test]
    fn test_extract_skips_other_question_types() {
        let xml = r#"<question type="truefalse">x</question><question type="multichoice">y</question>"#;
        let bank = extract_questions(xml);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.records()[0].as_str(), r#"<question type="multichoice">y</question>"#);
    }

    #[test]
    fn test_extract_ignores_unterminated_block() {
        let xml = r#"<question type="multichoice">ok</question>
<question type="multichoice">never closed"#;
        let bank = extract_questions(xml);
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_extract_empty_text() {
        assert!(extract_questions("").is_empty());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_question_bank(&dir.path().join("missing.xml")).unwrap_err();
        assert!(matches!(err, MergeError::NotFound { .. }));
    }

    #[test]
    fn test_load_normalizes_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.xml");
        std::fs::write(
            &path,
            "<quiz>\r\n<question type=\"multichoice\">\r\n  <name>a</name>\r\n</question>\r\n</quiz>\r\n",
        )
        .unwrap();

        let bank = load_question_bank(&path).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(
            bank.records()[0].as_str(),
            "<question type=\"multichoice\">\n  <name>a</name>\n</question>"
        );
    }

    #[test]
    fn test_load_invalid_utf8_is_read_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.xml");
        std::fs::write(&path, b"<question type=\"multichoice\">\xff\xfe</question>").unwrap();

        let err = load_question_bank(&path).unwrap_err();
        assert!(matches!(err, MergeError::ReadFailed { .. }));
    }

    #[test]
    fn test_load_text_without_questions_is_empty_bank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.xml");
        std::fs::write(&path, "<quiz>\n<question type=\"essay\">x</question>\n</quiz>\n").unwrap();

        let bank = load_question_bank(&path).unwrap();
        assert!(bank.is_empty());
    }
}
