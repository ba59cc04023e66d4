use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fit_cli::commands::{calc, kinds, run};
use fit_cli::{Cli, Commands, Config, ErrorPolicy, OutputArgs, OutputFormat};

/// Command-line flags win over the loaded configuration.
fn output_format(output: OutputArgs, config: &Config) -> OutputFormat {
    if output.json {
        OutputFormat::Json
    } else {
        config.format
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so report lines on stdout stay machine-readable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let command = cli.command.unwrap_or(Commands::Run {
        fail_fast: false,
        output: OutputArgs::default(),
    });

    match command {
        Commands::Run { fail_fast, output } => {
            let policy = if fail_fast {
                ErrorPolicy::FailFast
            } else {
                config.on_error
            };
            let packages = run::sample_packages();
            run::run(
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
                &packages,
                policy,
                output_format(output, &config),
            )?
            .ensure_success()?;
        }
        Commands::Calc {
            code,
            values,
            output,
        } => {
            calc::run(
                &mut io::stdout().lock(),
                &code,
                &values,
                output_format(output, &config),
            )?;
        }
        Commands::Kinds => kinds::run(&mut io::stdout().lock())?,
    }

    Ok(())
}
