// Human-facing reports for problems found in a document

mod display;

// Re-export all public symbols
pub use display::*;
