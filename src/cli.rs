use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigFile;

/// Report read when neither the CLI nor the config names one
pub const DEFAULT_INPUT: &str = "inspector.json";

/// File written when neither the CLI nor the config names one
pub const DEFAULT_OUTPUT: &str = "prism.json";

/// Convert AWS Inspector findings into a Prism issue import file
#[derive(Parser, Debug, Default)]
#[command(name = "inspector-prism")]
#[command(version)]
#[command(about = "Convert AWS Inspector findings into a Prism issue import file", long_about = None)]
pub struct Args {
    /// Inspector findings export to read [default: inspector.json]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Prism file to write [default: prism.json]
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<String>,

    /// Write the Prism document to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Pretty-print the Prism JSON
    #[arg(long)]
    pub pretty: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a config file [default: ./inspector-prism.config.yml if present]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Where the formatted Prism document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

/// Effective options after merging CLI flags, config file and defaults.
///
/// Precedence: CLI flag > config file > built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub pretty: bool,
    pub quiet: bool,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        let input = args
            .input
            .clone()
            .or_else(|| config.and_then(|c| c.input.clone()))
            .unwrap_or_else(|| DEFAULT_INPUT.to_string());

        let config_stdout = config.and_then(|c| c.stdout).unwrap_or(false);
        let output = match (&args.output, args.stdout) {
            (Some(path), _) => OutputTarget::File(PathBuf::from(path)),
            (None, true) => OutputTarget::Stdout,
            (None, false) if config_stdout => OutputTarget::Stdout,
            (None, false) => OutputTarget::File(PathBuf::from(
                config
                    .and_then(|c| c.output.clone())
                    .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            )),
        };

        Self {
            input: PathBuf::from(input),
            output,
            pretty: args.pretty || config.and_then(|c| c.pretty).unwrap_or(false),
            quiet: args.quiet || config.and_then(|c| c.quiet).unwrap_or(false),
        }
    }
}
