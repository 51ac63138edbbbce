//! A rope: a text stored in a splay tree ordered by position, that supports moving a segment
//! of the text to another place without copying the rest of it.
//!
//! The [`trees`] module has the tree engine, [`methods`] composes it into cut-and-paste, and
//! [`Rope`] is the text-facing type.

pub mod error;
pub mod methods;
pub mod rope;
pub mod trees;

pub use error::RopeError;
pub use rope::Rope;
pub use trees::splay::SplayTree;
pub use trees::*;
