use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tokenc::cli::{Cli, Commands};
use tokenc::error::exit;
use tokenc::output::Printer;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(exit::WRONG_ARGUMENTS);
        }
    };

    let printer = Printer::new();

    let result = match cli.command {
        Commands::Build(args) => tokenc::cli::build::run(args, &printer),
        Commands::Check(args) => tokenc::cli::check::run(args, &printer),
        Commands::Init(args) => tokenc::cli::init::run(args, &printer),
        Commands::Completions(args) => tokenc::cli::completions::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}
