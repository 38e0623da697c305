use crate::config::Config;
use crate::orchestrator::merge::{merge_question_files, MergeReport};
use crate::services::{ExclusionFilter, QuizWriter};
use crate::utils::logging::{log_finished, log_startup};
use anyhow::{Context, Result};
use std::path::Path;

/// 应用主结构
pub struct App {
    config: Config,
    filter: ExclusionFilter,
    writer: QuizWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config.source_path, &config.additions_path, &config.output_path);

        let writer = QuizWriter::with_path(config.output_path.clone());
        Self {
            config,
            filter: ExclusionFilter::default(),
            writer,
        }
    }

    /// 运行合并并在 stdout 打印进度
    pub fn run(&self) -> Result<MergeReport> {
        let report = merge_question_files(
            Path::new(&self.config.source_path),
            Path::new(&self.config.additions_path),
            &self.writer,
            &self.filter,
        )
        .context("题库合并失败")?;

        for line in report
            .progress_lines()
            .into_iter()
            .chain(report.summary_lines(self.writer.output_path()))
        {
            println!("{}", line);
        }

        log_finished(report.total);

        Ok(report)
    }
}
