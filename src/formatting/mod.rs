//! Serialization of game records back to text

pub mod formatter;
mod renderer;
mod syntax;
mod terminal;

// Re-export all public symbols
pub use formatter::Layout;
pub use renderer::*;
pub use syntax::*;
pub use terminal::*;
