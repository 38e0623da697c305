pub mod exclusion_filter;
pub mod quiz_writer;

pub use exclusion_filter::{ExclusionFilter, FilterOutcome, EXCLUSION_KEYWORDS};
pub use quiz_writer::{render_quiz, QuizWriter};
