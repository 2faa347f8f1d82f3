mod cli;
mod config;

use cli::{Args, OutputTarget, Settings};
use inspector_prism::prelude::*;
use inspector_prism::shared::error::ExitCode;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();

    let (config, config_message) = match args.config.as_deref() {
        Some(path) => (
            Some(config::load_config_from_path(Path::new(path))?),
            Some(format!("⚙️  Loaded config from: {}", path)),
        ),
        None => {
            let discovered = config::discover_config(Path::new("."))?;
            let message = discovered.as_ref().map(|_| {
                format!("⚙️  Auto-discovered config file: {}", config::CONFIG_FILENAME)
            });
            (discovered, message)
        }
    };
    let settings = Settings::resolve(&args, config.as_ref());
    let reporter = progress_reporter(&settings);

    if let Some(message) = config_message {
        reporter.report(&message);
    }

    // Create adapters (Dependency Injection)
    let use_case = ConvertReportUseCase::new(FileSystemReader::new(), &reporter);

    let response = use_case.execute(ConvertRequest::new(settings.input.clone()))?;

    let formatter = if settings.pretty {
        PrismJsonFormatter::pretty()
    } else {
        PrismJsonFormatter::new()
    };
    let formatted_output = formatter.format(&response.report)?;

    match &settings.output {
        OutputTarget::File(path) => {
            FileSystemWriter::new(path.clone()).present(&formatted_output)?;
            reporter.report(&format!("✅ Output complete: {}", path.display()));
        }
        OutputTarget::Stdout => {
            StdoutPresenter::new().present(&format!("{}\n", formatted_output))?;
        }
    }

    Ok(())
}

fn progress_reporter(settings: &Settings) -> StderrProgressReporter {
    if settings.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}
