//! Core domain types for tokenc.
//!
//! This module contains the values that flow through the pipeline:
//! - `Colour` - normalized RGBA colour values
//! - `RawLeaf` / `FlatCoreMap` - unresolved and flattened token data
//! - `SemanticSet`, `MergedEntry`, `NumericEntry` - resolved output records

mod colour;
mod token;

pub use colour::Colour;
pub use token::{
    FlatCoreMap, MergedEntry, NumericEntry, RawLeaf, SemanticEntry, SemanticSet, Variant,
};
