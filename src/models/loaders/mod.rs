pub mod xml_loader;

pub use xml_loader::{extract_questions, load_question_bank};
