pub mod build;
pub mod check;
pub mod completions;
pub mod init;

use clap::{Parser, Subcommand};

/// tokenc - Design-token compiler
#[derive(Parser, Debug)]
#[command(name = "tokenc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate constants from a design-token document
    Build(build::BuildArgs),

    /// Resolve a token document without writing output
    Check(check::CheckArgs),

    /// Write a default tokenc.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_arguments() {
        let cli = Cli::try_parse_from(["tokenc", "build", "[tokens.json]", "Tokens.swift"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.input, "[tokens.json]");
                assert_eq!(args.output.to_str(), Some("Tokens.swift"));
                assert!(args.config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_build_requires_output() {
        assert!(Cli::try_parse_from(["tokenc", "build", "tokens.json"]).is_err());
    }
}
