//! Token records passed between pipeline stages.

use std::collections::HashMap;
use std::fmt;

use super::Colour;

/// A token before resolution: its declared kind and raw value string.
///
/// `kind` is informational (`color`, `dimension`, ...). `value` is either a
/// literal or a reference expression such as `{Colors.Grey.500}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLeaf {
    pub kind: String,
    pub value: String,
}

impl RawLeaf {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Flattened core tokens keyed by lowercase dotted path.
pub type FlatCoreMap = HashMap<String, RawLeaf>;

/// Which themed rendering a semantic set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Light,
    Dark,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Light => write!(f, "light"),
            Variant::Dark => write!(f, "dark"),
        }
    }
}

/// A semantic token after alias lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticEntry {
    pub category: String,
    pub variable: String,
    /// The concrete core value, with any alpha override applied.
    pub value: RawLeaf,
}

/// All semantic entries of one variant.
#[derive(Debug, Clone)]
pub struct SemanticSet {
    pub variant: Variant,
    pub entries: Vec<SemanticEntry>,
}

impl SemanticSet {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            entries: Vec::new(),
        }
    }

    /// Find an entry by category and variable name.
    pub fn get(&self, category: &str, variable: &str) -> Option<&SemanticEntry> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.variable == variable)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A semantic colour present in both variants.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedEntry {
    pub category: String,
    pub variable: String,
    pub light: Colour,
    pub dark: Colour,
}

/// A spacing or radius constant.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericEntry {
    pub name: String,
    pub value: f64,
}

impl NumericEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
