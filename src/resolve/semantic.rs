//! Semantic token extraction.
//!
//! A semantic section is a shallow `category -> variable -> leaf` map whose
//! values reference core tokens:
//!
//! ```json
//! {
//!     "Focus": {
//!         "--color-focus": { "type": "color", "value": "{Colors.Secondary.Indigo.700}" }
//!     },
//!     "Button": {
//!         "--color-button-warning": { "type": "color", "value": "rgba( {Colors.Warning.400}, 0.5)" }
//!     }
//! }
//! ```
//!
//! Each reference is looked up in the resolved core map and replaced by the
//! concrete value found there.

use serde_json::{Map, Value};

use crate::error::{Result, TokenError};
use crate::parser::{as_leaf, is_rgba, json_kind, parse_rgba, Reference};
use crate::types::{Colour, FlatCoreMap, RawLeaf, SemanticEntry, SemanticSet, Variant};

/// Turn a semantic reference into a core lookup key.
///
/// Returns `None` for values that are not brace-wrapped references; those
/// never resolve, even if their text happens to match a core path.
pub fn lookup_key(reference: &str, namespace: &str) -> Option<String> {
    Reference::parse(reference, namespace).map(|r| r.key().to_string())
}

/// Extract the semantic entries of one variant.
///
/// Fails on the first variable whose reference has no concrete core value;
/// no partial set is returned.
pub fn extract_semantic(
    section: &Map<String, Value>,
    core: &FlatCoreMap,
    variant: Variant,
    namespace: &str,
) -> Result<SemanticSet> {
    let mut set = SemanticSet::new(variant);

    for (category, variables) in section {
        let Value::Object(variables) = variables else {
            return Err(TokenError::Schema {
                message: format!(
                    "{} category '{}' is {}, expected an object",
                    variant,
                    category,
                    json_kind(variables)
                ),
                help: None,
            });
        };

        for (variable, node) in variables {
            let leaf = node.as_object().and_then(as_leaf).ok_or_else(|| TokenError::Schema {
                message: format!("{} token {}.{} has no type/value pair", variant, category, variable),
                help: Some("Semantic tokens must be nested exactly one level deep".to_string()),
            })?;

            let value = resolve_semantic_value(variable, &leaf.value, core, namespace)?;

            set.entries.push(SemanticEntry {
                category: category.clone(),
                variable: variable.clone(),
                value: RawLeaf::new(leaf.kind, value),
            });
        }
    }

    Ok(set)
}

/// Look up one semantic value, applying an `rgba(...)` alpha override.
fn resolve_semantic_value(
    variable: &str,
    raw: &str,
    core: &FlatCoreMap,
    namespace: &str,
) -> Result<String> {
    let unresolved = || TokenError::UnresolvedReference {
        variable: variable.to_string(),
        value: raw.to_string(),
    };

    let (reference, alpha) = if is_rgba(raw) {
        let expr = parse_rgba(raw)?;
        (expr.reference, Some(expr.alpha))
    } else {
        (raw.to_string(), None)
    };

    let key = lookup_key(&reference, namespace).ok_or_else(unresolved)?;
    let core_leaf = core.get(&key).ok_or_else(unresolved)?;

    // A core alias that never reached a concrete value.
    if Reference::parse(&core_leaf.value, namespace).is_some() {
        return Err(unresolved());
    }

    let Some(alpha) = alpha else {
        return Ok(core_leaf.value.clone());
    };

    let colour = Colour::from_hex(&core_leaf.value).map_err(|e| match e {
        TokenError::HexFormat { value, reason, .. } => TokenError::HexFormat {
            value,
            reason,
            help: Some(format!("{} applies an alpha override to a non-hex value", variable)),
        },
        other => other,
    })?;

    Ok(colour.with_alpha(alpha).to_string())
}
