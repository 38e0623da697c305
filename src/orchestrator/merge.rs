//! 合并流程编排
//!
//! 读原题库 → 过滤 → 读新增题目 → 拼接 → 写出

use crate::error::MergeResult;
use crate::models::{load_question_bank, QuestionBank};
use crate::services::{ExclusionFilter, QuizWriter};
use std::path::Path;
use tracing::info;

/// 合并统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// 原题库题目数
    pub source_total: usize,
    /// 剔除数
    pub removed: usize,
    /// 过滤后剩余数
    pub remaining: usize,
    /// 新增数
    pub added: usize,
    /// 合并后总数
    pub total: usize,
}

impl MergeReport {
    /// 各阶段的进度行
    pub fn progress_lines(&self) -> Vec<String> {
        vec![
            format!("Total questions found: {}", self.source_total),
            format!("Removed {} complexity questions", self.removed),
            format!("Remaining questions: {}", self.remaining),
            format!("Adding {} new code output questions", self.added),
            format!("Total after merge: {}", self.total),
        ]
    }

    /// 写入完成后的收尾行（首行为空行）
    pub fn summary_lines(&self, output_path: &str) -> Vec<String> {
        vec![
            String::new(),
            format!("✅ Saved to: {}", output_path),
            format!("📊 Final count: {} questions", self.total),
        ]
    }
}

/// 在内存中完成过滤与拼接
pub fn merge_banks(
    source: QuestionBank,
    additions: QuestionBank,
    filter: &ExclusionFilter,
) -> (QuestionBank, MergeReport) {
    let source_total = source.len();
    let outcome = filter.apply(source);
    let remaining = outcome.kept.len();
    let added = additions.len();

    let merged = outcome.kept.concat(additions);
    let report = MergeReport {
        source_total,
        removed: outcome.removed,
        remaining,
        added,
        total: merged.len(),
    };

    (merged, report)
}

/// 完整的文件级合并
///
/// 两个输入都读完之后才会创建输出文件；任一输入读取失败时不产生输出。
pub fn merge_question_files(
    source_path: &Path,
    additions_path: &Path,
    writer: &QuizWriter,
    filter: &ExclusionFilter,
) -> MergeResult<MergeReport> {
    let source = load_question_bank(source_path)?;
    let additions = load_question_bank(additions_path)?;

    let (merged, report) = merge_banks(source, additions, filter);
    info!(
        "过滤完成: 剔除 {} / 保留 {} / 新增 {}",
        report.removed, report.remaining, report.added
    );

    writer.write(&merged)?;
    info!("已写入: {}", writer.output_path());

    Ok(report)
}
