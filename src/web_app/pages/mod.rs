// web_app/pages/mod.rs - Page components module
//
// - StandardAnswersPage: browse, search and delete standard answers
// - NewStandardAnswerPage / EditStandardAnswerPage: the answer editor

pub mod editor;
pub mod standard_answers;

// Re-export page components
pub use editor::{EditStandardAnswerPage, NewStandardAnswerPage};
pub use standard_answers::StandardAnswersPage;
