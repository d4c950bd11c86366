//! Parsers for token documents.
//!
//! Token documents are JSON exports from a design tool. Each document holds
//! a core section (colours, spacing, radius) and two semantic sections (light
//! and dark themes) whose values reference core tokens.
//!
//! # Usage
//!
//! ```ignore
//! use tokenc::parser::{flatten, Document};
//!
//! let source = std::fs::read_to_string("tokens.json")?;
//! let doc = Document::parse(&source)?;
//! let colours = flatten(doc.subsection("Core/Main", "Colors")?);
//! ```

mod document;
pub mod literal;
pub mod tree;

pub(crate) use document::json_kind;
pub use document::Document;
pub use literal::{
    is_rgba, parse_number, parse_number_with_units, parse_rgba, Reference, RgbaExpr,
    DEFAULT_UNITS,
};
pub use tree::{as_leaf, flatten};
