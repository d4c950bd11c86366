//! Light/dark variant merging.
//!
//! The merged set is the inner join of the two variants on
//! `(category, variable)`. A key present in only one variant is dropped from
//! the output; the dropped keys are reported back so callers can surface
//! them, but they are never an error.

use std::collections::BTreeMap;

use crate::error::{Result, TokenError};
use crate::types::{Colour, MergedEntry, SemanticEntry, SemanticSet, Variant};

/// A `(category, variable)` pair identifying a semantic token.
pub type TokenKey = (String, String);

/// The result of joining two variants.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    /// Entries present in both variants, ordered by category then variable.
    pub entries: Vec<MergedEntry>,
    /// Keys only the light variant defines.
    pub light_only: Vec<TokenKey>,
    /// Keys only the dark variant defines.
    pub dark_only: Vec<TokenKey>,
}

impl MergeOutcome {
    /// Number of keys dropped because one variant lacked them.
    pub fn dropped(&self) -> usize {
        self.light_only.len() + self.dark_only.len()
    }
}

/// Join the light and dark sets, converting both values to colours.
pub fn merge_variants(light: &SemanticSet, dark: &SemanticSet) -> Result<MergeOutcome> {
    let light_map = index(light);
    let mut dark_map = index(dark);
    let mut outcome = MergeOutcome::default();

    for (key, light_entry) in light_map {
        let Some(dark_entry) = dark_map.remove(&key) else {
            outcome.light_only.push(key);
            continue;
        };

        outcome.entries.push(MergedEntry {
            light: to_colour(light_entry, Variant::Light)?,
            dark: to_colour(dark_entry, Variant::Dark)?,
            category: key.0,
            variable: key.1,
        });
    }

    outcome.dark_only = dark_map.into_keys().collect();
    Ok(outcome)
}

fn index(set: &SemanticSet) -> BTreeMap<TokenKey, &SemanticEntry> {
    set.entries
        .iter()
        .map(|e| ((e.category.clone(), e.variable.clone()), e))
        .collect()
}

fn to_colour(entry: &SemanticEntry, variant: Variant) -> Result<Colour> {
    Colour::from_hex(&entry.value.value).map_err(|e| match e {
        TokenError::HexFormat { value, reason, .. } => TokenError::HexFormat {
            value,
            reason,
            help: Some(format!(
                "unable to parse {} version of {}.{}",
                variant, entry.category, entry.variable
            )),
        },
        other => other,
    })
}
