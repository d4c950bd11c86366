//! The compile pipeline.
//!
//! ```text
//! JSON -> flatten core colours -> resolve aliases
//!      -> extract light + dark -> merge
//!      -> extract spacing + radius -> emit
//! ```
//!
//! Everything is built fresh per run; there is no state between runs.

use crate::config::Config;
use crate::emit::{Emitter, Renderer};
use crate::error::Result;
use crate::parser::{flatten, Document};
use crate::resolve::{extract_numbers, extract_semantic, merge_variants, resolve_aliases, MergeOutcome};
use crate::types::{NumericEntry, Variant};

/// Resolved tokens of one document, ready for emission.
#[derive(Debug, Clone)]
pub struct TokenSet {
    /// Number of core colour tokens after flattening.
    pub core_count: usize,
    pub light_count: usize,
    pub dark_count: usize,
    pub colours: MergeOutcome,
    pub spacing: Vec<NumericEntry>,
    pub radius: Vec<NumericEntry>,
}

impl TokenSet {
    /// Resolve every token group of `document`.
    pub fn from_document(document: &Document, config: &Config) -> Result<Self> {
        let core = &config.core;
        let namespace = core.colors.as_str();

        let colours = document.subsection(&core.section, &core.colors)?;
        let resolved = resolve_aliases(&flatten(colours), namespace)?;

        let light = extract_semantic(
            document.section(&config.semantic.light)?,
            &resolved,
            Variant::Light,
            namespace,
        )?;
        let dark = extract_semantic(
            document.section(&config.semantic.dark)?,
            &resolved,
            Variant::Dark,
            namespace,
        )?;
        let merged = merge_variants(&light, &dark)?;

        let spacing = extract_numbers(
            document.subsection(&core.section, &core.spacing)?,
            &core.spacing,
            &config.units,
        )?;
        let radius = extract_numbers(
            document.subsection(&core.section, &core.radius)?,
            &core.radius,
            &config.units,
        )?;

        Ok(Self {
            core_count: resolved.len(),
            light_count: light.len(),
            dark_count: dark.len(),
            colours: merged,
            spacing,
            radius,
        })
    }

    /// Number of constants the emitted file will declare.
    pub fn constant_count(&self) -> usize {
        self.colours.entries.len() + self.spacing.len() + self.radius.len()
    }
}

/// The result of a successful compile.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub tokens: TokenSet,
    pub text: String,
}

/// Parse, resolve and render a token document.
pub fn compile(source: &str, config: &Config, renderer: &dyn Renderer) -> Result<Compiled> {
    let document = Document::parse(source)?;
    let tokens = TokenSet::from_document(&document, config)?;

    let text = Emitter::new(config, renderer).emit(
        &tokens.colours.entries,
        &tokens.spacing,
        &tokens.radius,
    )?;

    Ok(Compiled { tokens, text })
}
