//! Parser and document model for the Smart Game Format (SGF), the
//! bracket-delimited text format used to record board games as trees of
//! positions with alternative continuations.

#[macro_use]
mod regex;

pub mod error;
pub mod formatting;
pub mod language;
pub mod parsing;
