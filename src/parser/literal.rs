//! Literal parsers for token values.
//!
//! Hex colours live on [`Colour::from_hex`](crate::types::Colour::from_hex);
//! this module covers the other value shapes found in token documents:
//! - numbers with an optional unit suffix: `16px`, `0.5`
//! - references to other tokens: `{Colors.Grey.500}`
//! - alpha overrides around a reference: `rgba( {Colors.Grey.500}, 0.3)`

use crate::error::{Result, TokenError};

/// Unit suffixes accepted when no configuration is given.
pub const DEFAULT_UNITS: &[&str] = &["px"];

/// Parse a numeric literal with an optional trailing `px` suffix.
pub fn parse_number(s: &str) -> Result<f64> {
    parse_number_with_units(s, DEFAULT_UNITS)
}

/// Parse a numeric literal, stripping one of `units` if it ends the string.
///
/// The longest matching unit wins and empty units are ignored. The suffix is
/// only removed from the end, so `123pxabc` is rejected rather than
/// truncated. Non-finite values (`inf`, `NaN`) are rejected too.
pub fn parse_number_with_units<S: AsRef<str>>(s: &str, units: &[S]) -> Result<f64> {
    let trimmed = s.trim();
    let number = units
        .iter()
        .map(|unit| unit.as_ref())
        .filter(|unit| !unit.is_empty())
        .filter_map(|unit| trimmed.strip_suffix(unit))
        .min_by_key(|rest| rest.len())
        .unwrap_or(trimmed)
        .trim_end();

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TokenError::NumberFormat {
            value: s.to_string(),
        }),
    }
}

/// A reference to another token, e.g. `{Colors.Secondary.Indigo.700}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    key: String,
}

impl Reference {
    /// Parse a reference expression.
    ///
    /// Returns `None` if `value` is not wrapped in braces. A leading segment
    /// equal to `namespace` (case-insensitive) is dropped, and the remaining
    /// path is lowercased into a lookup key.
    pub fn parse(value: &str, namespace: &str) -> Option<Self> {
        let inner = value
            .trim()
            .strip_prefix('{')?
            .strip_suffix('}')?
            .trim();

        if inner.is_empty() {
            return None;
        }

        let path = match inner.split_once('.') {
            Some((head, rest)) if head.eq_ignore_ascii_case(namespace) && !rest.is_empty() => rest,
            _ => inner,
        };

        Some(Self {
            key: path.to_lowercase(),
        })
    }

    /// The lowercase dotted key to look up in a flattened map.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Check whether a value uses the `rgba( <ref>, <alpha> )` form.
pub fn is_rgba(value: &str) -> bool {
    value
        .trim_start()
        .get(..4)
        .is_some_and(|head| head.eq_ignore_ascii_case("rgba"))
}

/// A parsed `rgba( <ref>, <alpha> )` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaExpr {
    /// The reference text, still wrapped in braces.
    pub reference: String,
    /// The alpha override as written (not yet clamped).
    pub alpha: f64,
}

/// Parse an `rgba( <ref>, <alpha> )` expression.
///
/// The trailing component is the alpha override; everything before the last
/// comma is the reference.
pub fn parse_rgba(s: &str) -> Result<RgbaExpr> {
    let malformed = || TokenError::Schema {
        message: format!("Malformed rgba expression: {}", s),
        help: Some("Use rgba( {Colors.path.to.token}, 0.5 )".to_string()),
    };

    let trimmed = s.trim();
    if !is_rgba(trimmed) {
        return Err(malformed());
    }

    let args = trimmed[4..]
        .trim_start()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let (reference, alpha) = args.rsplit_once(',').ok_or_else(malformed)?;
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(malformed());
    }

    let alpha = alpha.trim();
    let alpha = alpha.parse::<f64>().ok().filter(|a| a.is_finite()).ok_or_else(|| {
        TokenError::NumberFormat {
            value: alpha.to_string(),
        }
    })?;

    Ok(RgbaExpr {
        reference: reference.to_string(),
        alpha,
    })
}
