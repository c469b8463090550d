// fixtures/tables/mod.rs
//
// Table definitions implementing the TestTable trait.

pub mod standard_answers;

pub use standard_answers::StandardAnswersTable;
