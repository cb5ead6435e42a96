//! keyline - split Redis-style command lines into a command and arguments.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use keyline::cli::Cli;
use keyline::commands::CommandRegistry;
use keyline::config::Config;
use keyline::logging;
use keyline::runner::{InputResult, Runner};
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    let config = match Config::load_from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", e.category(), e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_stderr_logging(&config.logging.filter);
    info!("Loaded config from: {}", config_path.display());

    match run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<ExitCode> {
    let registry = build_registry(cli, config)?;
    let decode = config.display.decode()?;
    info!("Registry has {} commands", registry.len());

    let mut runner = Runner::new(registry, cli.output, decode);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    if let Some(line) = &cli.eval {
        let outcome = runner.process_line(line, &mut stdout, &mut stderr)?;
        return Ok(match outcome {
            Some(InputResult::Parsed(_) | InputResult::Exit) => ExitCode::SUCCESS,
            Some(InputResult::None) | None => ExitCode::FAILURE,
        });
    }

    let stdin = io::stdin();
    let summary = runner
        .run(stdin.lock(), &mut stdout, &mut stderr)
        .context("Failed to process input")?;

    if !summary.exited {
        // EOF ends the loop the same way `exit` does
        writeln!(stdout, "{}", keyline::runner::GOODBYE)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Builds the registry from config, honoring --no-builtin.
fn build_registry(cli: &Cli, config: &Config) -> anyhow::Result<CommandRegistry> {
    let mut config = config.clone();
    if cli.no_builtin {
        config.registry.builtin = false;
    }

    let registry = config
        .registry()
        .context("Failed to build command registry")?;
    if registry.is_empty() {
        anyhow::bail!("Command registry is empty: add extra_commands or drop --no-builtin");
    }
    Ok(registry)
}
