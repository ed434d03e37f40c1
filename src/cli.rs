//! CLI definitions and entry point

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use globfiles::expand::expand;
use globfiles::output::{Expansion, OutputMode};

/// Message printed when no pattern is given
const NO_ARGUMENT: &str = "no argument";

/// globfiles - collect files for build generators
#[derive(Parser, Debug)]
#[command(
    name = "globfiles",
    version,
    about = "Print the files matching a glob pattern, one per line",
    long_about = "Expand a glob pattern relative to the current directory and print each \
                  match on its own line.\n\n\
                  Backslashes in the results are rewritten to forward slashes so the list \
                  can be fed to build generators unchanged on every platform.\n\n\
                  Examples:\n  \
                  globfiles '../src/*.cpp'     just look in src\n  \
                  globfiles '../src/*/*.cpp'   look in the subdirectories of src"
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Glob pattern to expand (`*`, `?`, `[...]`, `**`); later arguments are ignored
    ///
    /// Everything from the pattern onward is taken literally, flags included.
    #[arg(
        value_name = "PATTERN",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// The pattern to expand, if one was given
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Arguments after the pattern
    #[must_use]
    pub fn extra(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let Some(pattern) = cli.pattern() else {
        println!("{NO_ARGUMENT}");
        return Ok(ExitCode::from(1));
    };

    if !cli.extra().is_empty() {
        log::debug!("ignoring extra arguments: {:?}", cli.extra());
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Lines
    };

    let matches = expand(pattern)?;
    let expansion = Expansion {
        pattern: pattern.to_string(),
        matches,
    };

    let mut out = BufWriter::new(io::stdout().lock());
    expansion
        .write_to(output_mode, &mut out)
        .context("failed to write matches to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(ExitCode::SUCCESS)
}
