//! tokenc - Design-token compiler
//!
//! Compiles a JSON design-token export (core colours, spacing, radius and
//! light/dark semantic themes) into generated source constants.

pub mod cli;
pub mod compile;
pub mod config;
pub mod emit;
pub mod error;
pub mod output;
pub mod parser;
pub mod resolve;
pub mod types;

pub use compile::{compile, Compiled, TokenSet};
pub use config::{Config, CONFIG_FILENAME};
pub use emit::{Declarations, Emitter, Renderer, SwiftRenderer};
pub use error::{HexFormatError, Result, TokenError};
pub use parser::{flatten, Document};
pub use resolve::{extract_numbers, extract_semantic, merge_variants, resolve_aliases, MergeOutcome};
pub use types::{Colour, FlatCoreMap, MergedEntry, NumericEntry, RawLeaf, SemanticEntry, SemanticSet, Variant};
