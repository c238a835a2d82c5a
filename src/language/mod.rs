// Types representing a game record document

mod cursor;
mod error;
mod node;
mod property;
mod sequence;
pub mod text;
mod tree;
mod value;

// Re-export all public symbols
pub use cursor::*;
pub use error::*;
pub use node::*;
pub use property::Property;
pub use sequence::*;
pub use tree::*;
pub use value::*;
