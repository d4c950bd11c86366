//! Numeric token extraction (spacing, radius).

use serde_json::{Map, Value};

use crate::error::{Result, TokenError};
use crate::parser::{as_leaf, parse_number_with_units};
use crate::types::NumericEntry;

/// Extract a flat `name -> {type, value}` section of numeric tokens.
///
/// Entries are returned in ascending order of value; equal values are
/// ordered by name so the output is stable.
pub fn extract_numbers<S: AsRef<str>>(
    section: &Map<String, Value>,
    section_name: &str,
    units: &[S],
) -> Result<Vec<NumericEntry>> {
    let mut entries = section
        .iter()
        .map(|(name, node)| {
            let leaf = node.as_object().and_then(as_leaf).ok_or_else(|| TokenError::Schema {
                message: format!("{} token '{}' has no type/value pair", section_name, name),
                help: None,
            })?;
            let value = parse_number_with_units(&leaf.value, units)?;
            Ok(NumericEntry::new(name.clone(), value))
        })
        .collect::<Result<Vec<_>>>()?;

    sort_by_value(&mut entries);
    Ok(entries)
}

/// Sort ascending by value, then by name.
pub fn sort_by_value(entries: &mut [NumericEntry]) {
    entries.sort_by(|a, b| a.value.total_cmp(&b.value).then_with(|| a.name.cmp(&b.name)));
}
