use std::fmt;

/// 单道题目的原始 XML 块
///
/// 从 `<question type="multichoice">` 开始，到第一个 `</question>` 结束。
/// 内容不做解析或校验。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord(String);

impl QuestionRecord {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 区分大小写的子串匹配
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 有序题库，保留文件中的顺序，不去重
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: QuestionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// 拼接两个题库：`self` 在前，`other` 在后，各自顺序不变
    pub fn concat(mut self, other: QuestionBank) -> QuestionBank {
        self.records.extend(other.records);
        self
    }
}

impl From<Vec<QuestionRecord>> for QuestionBank {
    fn from(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<QuestionRecord> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = QuestionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for QuestionBank {
    type Item = QuestionRecord;
    type IntoIter = std::vec::IntoIter<QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
