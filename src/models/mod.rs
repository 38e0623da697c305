pub mod loaders;
pub mod question;

pub use loaders::{extract_questions, load_question_bank};
pub use question::{QuestionBank, QuestionRecord};
