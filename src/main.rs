//! get-changelogs - find release notes for breaking dependency updates
//!
//! Reads package.json in the target directory, checks each dependency's
//! latest npm release, and prints a changelog link for every update that
//! crosses a breaking boundary.

use clap::Parser;
use get_changelogs::changelog::HttpProbe;
use get_changelogs::cli::CliArgs;
use get_changelogs::config::ScanConfig;
use get_changelogs::manifest::load_package_json;
use get_changelogs::output::create_formatter;
use get_changelogs::registry::NpmCli;
use get_changelogs::scanner::Scanner;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "get_changelogs=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = ScanConfig::from_cli(&args)?;
    debug!(path = %config.path.display(), npm = %config.npm_program, "starting scan");

    let Some(dependencies) = load_package_json(&config.path)? else {
        println!("could not find package.json in this directory");
        return Ok(ExitCode::SUCCESS);
    };

    let dependencies = config.filter().apply(dependencies);
    debug!(count = dependencies.len(), "dependencies to check");

    let registry = NpmCli::new(&config.npm_program);
    let probe = HttpProbe::new(config.probe_timeout)?;
    let scanner = Scanner::new(registry, probe).with_progress(config.show_progress());
    let formatter = create_formatter(config.output_config());

    let mut stdout = io::stdout().lock();
    let summary = scanner
        .run(&dependencies, formatter.as_ref(), &mut stdout)
        .await?;
    formatter.write_summary(&summary, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
