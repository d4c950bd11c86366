//! Declaration emission.
//!
//! The emitter turns resolved tokens into a [`Declarations`] tree (sanitized
//! names, deterministic order) and hands it to a [`Renderer`] for the target
//! language's syntax. The rendered text is checked before it is returned;
//! nothing is resolved here.

pub mod ident;
pub mod swift;

pub use ident::{is_numeric, remove_category, to_camel_case, to_pascal_case, Sanitizer};
pub use swift::SwiftRenderer;

use std::collections::{BTreeMap, HashSet};

use crate::config::Config;
use crate::error::{Result, TokenError};
use crate::resolve::sort_by_value;
use crate::types::{Colour, MergedEntry, NumericEntry};

/// Target-language syntax for emitted declarations.
pub trait Renderer {
    /// File extension of generated sources, without the dot.
    fn extension(&self) -> &'static str;

    /// Whether `ident` collides with a reserved word.
    fn is_reserved(&self, ident: &str) -> bool;

    /// Escape a reserved word so it can be used as an identifier.
    fn escape(&self, ident: &str) -> String;

    /// Whether `ident` is usable as a declaration name.
    fn is_valid_identifier(&self, ident: &str) -> bool {
        let mut chars = ident.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' => {
                chars.all(|c| c.is_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    /// Render the declarations as source text.
    fn render(&self, declarations: &Declarations) -> Result<String>;
}

/// One dynamic light/dark colour constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorConstant {
    pub name: String,
    /// The raw token name the constant was generated from.
    pub source: String,
    pub light: Colour,
    pub dark: Colour,
}

/// All colour constants of one semantic category.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGroup {
    pub name: String,
    pub source: String,
    pub constants: Vec<ColorConstant>,
}

/// One numeric constant.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberConstant {
    pub name: String,
    pub source: String,
    pub value: f64,
}

/// A flat group of numeric constants, ascending by value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberGroup {
    pub name: String,
    pub constants: Vec<NumberConstant>,
}

/// Everything one generated file declares.
#[derive(Debug, Clone, PartialEq)]
pub struct Declarations {
    /// Name of the namespace nesting every colour group.
    pub colors: String,
    pub color_groups: Vec<ColorGroup>,
    pub spacing: NumberGroup,
    pub radius: NumberGroup,
}

impl Declarations {
    /// Total number of constants declared.
    pub fn constant_count(&self) -> usize {
        let colours: usize = self.color_groups.iter().map(|g| g.constants.len()).sum();
        colours + self.spacing.constants.len() + self.radius.constants.len()
    }
}

/// Builds and renders declarations for one run.
pub struct Emitter<'a> {
    config: &'a Config,
    renderer: &'a dyn Renderer,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a Config, renderer: &'a dyn Renderer) -> Self {
        Self { config, renderer }
    }

    /// Sanitize, order and validate the declarations.
    pub fn declarations(
        &self,
        colours: &[MergedEntry],
        spacing: &[NumericEntry],
        radius: &[NumericEntry],
    ) -> Result<Declarations> {
        let sanitizer = Sanitizer::new(&self.config.naming.color_prefix, self.renderer);

        let mut by_category: BTreeMap<&str, Vec<&MergedEntry>> = BTreeMap::new();
        for entry in colours {
            by_category.entry(&entry.category).or_default().push(entry);
        }

        let color_groups = by_category
            .into_iter()
            .map(|(category, mut entries)| {
                entries.sort_by(|a, b| a.variable.cmp(&b.variable));
                ColorGroup {
                    name: sanitizer.category(category),
                    source: category.to_string(),
                    constants: entries
                        .into_iter()
                        .map(|e| ColorConstant {
                            name: sanitizer.color_variable(&e.variable, category),
                            source: e.variable.clone(),
                            light: e.light,
                            dark: e.dark,
                        })
                        .collect(),
                }
            })
            .collect();

        let naming = &self.config.naming;
        let output = &self.config.output;
        let declarations = Declarations {
            colors: output.colors.clone(),
            color_groups,
            spacing: number_group(&sanitizer, &output.spacing, spacing, &naming.spacing_prefix),
            radius: number_group(&sanitizer, &output.radius, radius, &naming.radius_prefix),
        };

        self.validate(&declarations)?;
        Ok(declarations)
    }

    /// Produce the final source text.
    pub fn emit(
        &self,
        colours: &[MergedEntry],
        spacing: &[NumericEntry],
        radius: &[NumericEntry],
    ) -> Result<String> {
        let declarations = self.declarations(colours, spacing, radius)?;
        let text = self.renderer.render(&declarations)?;
        check_delimiters(&text)?;
        Ok(text)
    }

    fn validate(&self, declarations: &Declarations) -> Result<()> {
        let top_level = [
            (declarations.colors.as_str(), declarations.colors.as_str()),
            (declarations.spacing.name.as_str(), declarations.spacing.name.as_str()),
            (declarations.radius.name.as_str(), declarations.radius.name.as_str()),
        ];
        self.check_names("the top level", top_level)?;

        let groups = declarations
            .color_groups
            .iter()
            .map(|g| (g.name.as_str(), g.source.as_str()));
        self.check_names(&declarations.colors, groups)?;

        for group in &declarations.color_groups {
            let names = group.constants.iter().map(|c| (c.name.as_str(), c.source.as_str()));
            self.check_names(&group.source, names)?;
        }

        for group in [&declarations.spacing, &declarations.radius] {
            let names = group.constants.iter().map(|c| (c.name.as_str(), c.source.as_str()));
            self.check_names(&group.name, names)?;
        }

        Ok(())
    }

    /// Every name must be a valid (or escaped) identifier, unique in its scope.
    fn check_names<'n>(
        &self,
        scope: &str,
        names: impl IntoIterator<Item = (&'n str, &'n str)>,
    ) -> Result<()> {
        let mut seen = HashSet::new();

        for (name, source) in names {
            let bare = unescape(name);
            if !self.renderer.is_valid_identifier(bare) {
                return Err(TokenError::Emission {
                    message: format!("'{}' in {} is not a valid identifier", name, scope),
                    help: Some(format!("generated from token name '{}'", source)),
                });
            }

            if !seen.insert(bare) {
                return Err(TokenError::Emission {
                    message: format!("duplicate identifier '{}' in {}", name, scope),
                    help: Some(format!(
                        "'{}' sanitizes to the same name as another token",
                        source
                    )),
                });
            }
        }

        Ok(())
    }
}

fn number_group(
    sanitizer: &Sanitizer<'_>,
    name: &str,
    entries: &[NumericEntry],
    prefix: &str,
) -> NumberGroup {
    let mut sorted = entries.to_vec();
    sort_by_value(&mut sorted);

    NumberGroup {
        name: name.to_string(),
        constants: sorted
            .into_iter()
            .map(|e| NumberConstant {
                name: sanitizer.number_variable(&e.name, prefix),
                value: e.value,
                source: e.name,
            })
            .collect(),
    }
}

/// Strip one pair of surrounding backticks.
fn unescape(name: &str) -> &str {
    name.strip_prefix('`')
        .and_then(|n| n.strip_suffix('`'))
        .unwrap_or(name)
}

/// Check that brackets, braces and parentheses in `text` are balanced.
///
/// String literals and `//` comments are skipped.
pub fn check_delimiters(text: &str) -> Result<()> {
    let mismatch = |line: usize, detail: String| TokenError::Emission {
        message: format!("unbalanced delimiters at line {}: {}", line, detail),
        help: None,
    };

    let mut stack: Vec<(char, usize)> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let mut in_string = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if in_string {
                match c {
                    '\\' => {
                        chars.next();
                    }
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }

            match c {
                '"' => in_string = true,
                '/' if chars.peek() == Some(&'/') => break,
                '(' | '[' | '{' => stack.push((c, line_no)),
                ')' | ']' | '}' => {
                    let expected = match c {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    match stack.pop() {
                        Some((open, _)) if open == expected => {}
                        Some((open, opened_at)) => {
                            return Err(mismatch(
                                line_no,
                                format!("'{}' closes '{}' opened at line {}", c, open, opened_at),
                            ));
                        }
                        None => return Err(mismatch(line_no, format!("unexpected '{}'", c))),
                    }
                }
                _ => {}
            }
        }

        if in_string {
            return Err(mismatch(line_no, "unterminated string literal".to_string()));
        }
    }

    match stack.pop() {
        Some((open, line)) => Err(mismatch(line, format!("'{}' is never closed", open))),
        None => Ok(()),
    }
}
