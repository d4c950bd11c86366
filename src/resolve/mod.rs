//! Token resolution.
//!
//! Turns flattened token data into concrete values:
//! - `alias` follows core aliases to their terminal values
//! - `semantic` looks up each themed token in the resolved core map
//! - `merge` joins the light and dark variants
//! - `number` extracts spacing and radius constants

pub mod alias;
pub mod merge;
pub mod number;
pub mod semantic;

pub use alias::{resolve_aliases, resolve_chain, Resolution};
pub use merge::{merge_variants, MergeOutcome, TokenKey};
pub use number::{extract_numbers, sort_by_value};
pub use semantic::{extract_semantic, lookup_key};
