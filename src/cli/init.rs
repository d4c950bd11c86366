//! Init command implementation.
//!
//! Writes the default `tokenc.yaml` so the section keys, name prefixes and
//! output namespaces can be customised.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{Result, TokenError};
use crate::output::{display_path, Printer};

/// Write a default tokenc.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing tokenc.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(TokenError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = Config::with_defaults().to_yaml()?;

    fs::write(&config_path, yaml).map_err(|e| TokenError::Io {
        path: config_path.clone(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));

    Ok(())
}
