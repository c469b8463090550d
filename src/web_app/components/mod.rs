// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Loading, icons, etc.)
// - popup.rs: Single-slot toast channel and its host
// - table.rs: Standard answers table, search input and pager

pub mod common;
pub mod popup;
pub mod table;

// Re-export commonly used components for convenience
pub use common::*;
pub use popup::*;
pub use table::*;
