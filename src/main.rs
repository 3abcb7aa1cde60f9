//! lintmux CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lintmux::commands::{run_check, run_linters, CommandContext};
use lintmux::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CommandContext::from_cli(cli.format, cli.verbose);

    let result = match &cli.command {
        Commands::Check(args) => run_check(args, &ctx).map(|outcome| {
            let code = if outcome.clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
            (outcome.output, code)
        }),
        Commands::Linters(args) => run_linters(args, &ctx).map(|out| (out, ExitCode::SUCCESS)),
    };

    match result {
        Ok((output, code)) => {
            print!("{}", output);
            code
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Initialize tracing on stderr; stdout stays reserved for results.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "lintmux=debug"
    } else {
        "lintmux=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
