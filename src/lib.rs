//! # Question Bank Merge
//!
//! 一次性的题库维护工具：从 XML 题库中剔除复杂度类题目，追加新的代码输出题，写出新文件
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `QuestionRecord` / `QuestionBank`，以及从 XML 文本提取题目
//!
//! ### ② 业务能力层（Services）
//! - `ExclusionFilter` - 按关键词剔除题目
//! - `QuizWriter` - 生成 quiz XML 并原子写入
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/merge` - 读 → 过滤 → 拼接 → 写
//! - `orchestrator/app` - 打印进度
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{MergeError, MergeResult};
pub use models::{extract_questions, load_question_bank, QuestionBank, QuestionRecord};
pub use orchestrator::{merge_banks, merge_question_files, App, MergeReport};
pub use services::{render_quiz, ExclusionFilter, QuizWriter, EXCLUSION_KEYWORDS};
