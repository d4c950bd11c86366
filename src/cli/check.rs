//! Check command implementation.
//!
//! Runs the whole pipeline on a token document without writing anything.

use std::path::PathBuf;

use clap::Args;

use crate::compile::compile;
use crate::config::Config;
use crate::emit::SwiftRenderer;
use crate::error::Result;
use crate::output::{plural, Printer};

use super::build::{parse_input, read_source, report};

/// Resolve a token document and report problems without generating output
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Token document, as a path or a one-element list `[path/to/tokens.json]`
    pub input: String,

    /// Configuration file (default: tokenc.yaml next to the input)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let input = parse_input(&args.input)?;
    let config = Config::discover(&input, args.config.as_deref())?;

    let source = read_source(&input, printer)?;
    let compiled = compile(&source, &config, &SwiftRenderer::new())?;
    report(&compiled.tokens, printer);

    let dropped = compiled.tokens.colours.dropped();
    let summary = if dropped == 0 {
        plural(compiled.tokens.constant_count(), "constant", "constants")
    } else {
        format!(
            "{} ({} skipped)",
            plural(compiled.tokens.constant_count(), "constant", "constants"),
            dropped
        )
    };
    printer.status("Checked", &summary);

    Ok(())
}
