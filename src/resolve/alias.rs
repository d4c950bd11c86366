//! Alias resolution over a flattened core map.
//!
//! Core tokens may alias other core tokens (`{Colors.Base.White}`). Every
//! alias is followed to the concrete value at the end of its chain. Chains
//! are walked iteratively with a per-chain visited set, so a cycle is reported
//! as an error instead of recursing forever.

use std::collections::HashSet;

use crate::error::{Result, TokenError};
use crate::parser::Reference;
use crate::types::FlatCoreMap;

/// Outcome of following one alias chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The chain ended at a non-reference value.
    Concrete(String),
    /// The chain reached a path that does not exist in the map.
    Dangling { missing: String },
}

/// Follow the alias chain starting at `start`.
///
/// `start` must be a key of `map`. Returns an error if the chain revisits a
/// path; the error lists the chain from `start` up to the repeated path.
pub fn resolve_chain(start: &str, map: &FlatCoreMap, namespace: &str) -> Result<Resolution> {
    let mut chain = vec![start.to_string()];
    let mut visited: HashSet<&str> = HashSet::from([start]);

    let Some(mut current) = map.get(start) else {
        return Ok(Resolution::Dangling {
            missing: start.to_string(),
        });
    };

    loop {
        let Some(reference) = Reference::parse(&current.value, namespace) else {
            return Ok(Resolution::Concrete(current.value.clone()));
        };

        let Some((key, next)) = map.get_key_value(reference.key()) else {
            return Ok(Resolution::Dangling {
                missing: reference.key().to_string(),
            });
        };

        chain.push(key.clone());
        if !visited.insert(key.as_str()) {
            return Err(TokenError::CyclicReference { cycle: chain });
        }

        current = next;
    }
}

/// Resolve every alias in a flattened core map.
///
/// Entries whose chain ends at a concrete value take that value. Entries
/// whose chain dangles keep their original reference; the semantic
/// extractor reports them if anything actually uses them. Any cycle fails
/// the whole map.
pub fn resolve_aliases(map: &FlatCoreMap, namespace: &str) -> Result<FlatCoreMap> {
    let mut resolved = map.clone();

    // Sorted so the reported cycle does not depend on hash order.
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    for key in keys {
        if Reference::parse(&map[key].value, namespace).is_none() {
            continue;
        }

        if let Resolution::Concrete(value) = resolve_chain(key, map, namespace)? {
            if let Some(leaf) = resolved.get_mut(key) {
                leaf.value = value;
            }
        }
    }

    Ok(resolved)
}
