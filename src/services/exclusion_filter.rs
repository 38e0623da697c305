//! 题目过滤服务 - 业务能力层
//!
//! 只负责"按关键词剔除题目"能力，不关心文件读写

use crate::models::{QuestionBank, QuestionRecord};
use crate::utils::logging::truncate_text;
use tracing::debug;

/// 复杂度类题目的排除关键词（区分大小写）
///
/// `О(` 中的 `О` 是西里尔字母。
pub const EXCLUSION_KEYWORDS: &[&str] = &["complexity", "Omega", "Big O", "О(", "Θ("];

/// 过滤结果
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// 保留的题目，顺序不变
    pub kept: QuestionBank,
    /// 被剔除的数量
    pub removed: usize,
}

/// 关键词过滤服务
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    keywords: &'static [&'static str],
}

impl ExclusionFilter {
    pub(crate) fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    /// 返回命中的第一个关键词
    pub fn matched_keyword(&self, record: &QuestionRecord) -> Option<&'static str> {
        self.keywords.iter().copied().find(|kw| record.contains(kw))
    }

    pub fn is_excluded(&self, record: &QuestionRecord) -> bool {
        self.matched_keyword(record).is_some()
    }

    /// 剔除包含任一关键词的题目
    pub fn apply(&self, bank: QuestionBank) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        for (index, record) in bank.into_iter().enumerate() {
            match self.matched_keyword(&record) {
                Some(keyword) => {
                    debug!(
                        "剔除题目 {} (关键词: {:?}): {}",
                        index + 1,
                        keyword,
                        truncate_text(record.as_str(), 80)
                    );
                    outcome.removed += 1;
                }
                None => outcome.kept.push(record),
            }
        }

        outcome
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(EXCLUSION_KEYWORDS)
    }
}
