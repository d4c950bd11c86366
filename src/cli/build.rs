//! Build command implementation.
//!
//! Compiles a token document into a generated source file. This is the
//! entry point build-tool plugins call.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use tempfile::NamedTempFile;

use crate::compile::{compile, TokenSet};
use crate::config::Config;
use crate::emit::{Renderer, SwiftRenderer};
use crate::error::{Result, TokenError};
use crate::output::{display_path, plural, Printer};

/// Generate constants from a design-token document
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Token document, as a path or a one-element list `[path/to/tokens.json]`
    pub input: String,

    /// Generated source file to write
    pub output: PathBuf,

    /// Configuration file (default: tokenc.yaml next to the input)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let renderer = SwiftRenderer::new();

    check_extension(&args.output, renderer.extension())?;
    let input = parse_input(&args.input)?;
    let config = Config::discover(&input, args.config.as_deref())?;

    let source = read_source(&input, printer)?;
    let compiled = compile(&source, &config, &renderer)?;
    report(&compiled.tokens, printer);

    write_atomic(&args.output, &compiled.text)?;
    printer.status(
        "Generated",
        &format!(
            "{} ({})",
            printer.cyan(&display_path(&args.output)),
            plural(compiled.tokens.constant_count(), "constant", "constants")
        ),
    );

    Ok(())
}

/// Parse the input argument.
///
/// Build-tool plugins pass their input files as a bracketed list; exactly
/// one file must be named, and it must be a `.json` document.
pub fn parse_input(arg: &str) -> Result<PathBuf> {
    let inner = arg.trim();
    let inner = match inner.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(list) => list,
        None => inner,
    };

    let paths: Vec<&str> = inner
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let [path] = paths.as_slice() else {
        return Err(TokenError::InputShape {
            message: format!("expected exactly one input file, got {}", paths.len()),
            help: Some("Pass a single path, e.g. [Resources/tokens.json]".to_string()),
        });
    };

    let path = PathBuf::from(*path);
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(TokenError::InputShape {
            message: format!("input {} is not a .json file", path.display()),
            help: None,
        });
    }

    Ok(path)
}

/// Reject output paths without the renderer's extension.
pub fn check_extension(output: &Path, expected: &str) -> Result<()> {
    match output.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext == expected => Ok(()),
        _ => Err(TokenError::OutputExtension {
            path: output.to_path_buf(),
            expected: expected.to_string(),
        }),
    }
}

pub(crate) fn read_source(input: &Path, printer: &Printer) -> Result<String> {
    printer.status("Reading", &display_path(input));

    fs::read_to_string(input).map_err(|e| TokenError::Io {
        path: input.to_path_buf(),
        message: format!("Failed to read token document: {}", e),
    })
}

/// Print resolution counts and any keys the merge dropped.
pub(crate) fn report(tokens: &TokenSet, printer: &Printer) {
    printer.status(
        "Resolved",
        &format!(
            "{}, {} light and {} dark",
            plural(tokens.core_count, "core colour", "core colours"),
            tokens.light_count,
            tokens.dark_count
        ),
    );

    for (category, variable) in &tokens.colours.light_only {
        printer.warning(
            "Warning",
            &format!("{}.{} has no dark variant; skipped", category, variable),
        );
    }
    for (category, variable) in &tokens.colours.dark_only {
        printer.warning(
            "Warning",
            &format!("{}.{} has no light variant; skipped", category, variable),
        );
    }

    printer.status(
        "Merged",
        &format!(
            "{}, {} spacing and {} radius",
            plural(tokens.colours.entries.len(), "colour", "colours"),
            tokens.spacing.len(),
            tokens.radius.len()
        ),
    );
}

/// Write `contents` to `path` via a temp file in the same directory, so a
/// failed run never leaves a partial file behind.
///
/// The replaced file keeps its permissions; a new file gets the usual
/// world-readable mode rather than the temp file's private one.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let io_err = |e: std::io::Error| TokenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    };

    let permissions = match fs::metadata(path) {
        Ok(existing) => Some(existing.permissions()),
        Err(_) => default_permissions(),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions).map_err(io_err)?;
    }
    file.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
