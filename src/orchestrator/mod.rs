pub mod app;
pub mod merge;

pub use app::App;
pub use merge::{merge_banks, merge_question_files, MergeReport};
