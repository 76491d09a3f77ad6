//! Command-line interface for nakedret.

use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::detect::Runner;
use crate::report::{self, Format};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Find naked returns in long Go functions with named results.
///
/// With no packages, checks the package in the current directory.
/// Packages are directories; `dir/...` checks every directory below
/// `dir`. Naming `.go` files checks only those files.
#[derive(Parser)]
#[command(name = "nakedret")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "nakedret [flags] [packages]")]
pub struct Cli {
    /// Files, package directories, or `dir/...` patterns
    pub packages: Vec<String>,

    /// Maximum number of lines for a naked return function [default: 5]
    #[arg(short = 'l', long = "max-lines", value_name = "LINES")]
    pub max_lines: Option<u32>,

    /// Path to a config file (default: auto-discover .nakedret.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: text, json, or sarif
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Exit with status 1 when naked returns are found
    #[arg(long)]
    pub set_exit_status: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run a check and report the findings.
pub fn run(args: &Cli) -> anyhow::Result<i32> {
    let format: Format = match args.format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let config = match Config::load(args.config.as_deref(), Path::new(".")) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    let max_lines = config::resolve_max_lines(args.max_lines, config.as_ref());

    let runner = Runner::new(Some(max_lines));
    let result = match runner.run(args.packages.as_slice()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    match format {
        Format::Text => {
            let stderr = std::io::stderr();
            report::write_text(&mut stderr.lock(), &result)?;
        }
        _ => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            report::write(&mut out, format, &result, max_lines)?;
            out.flush()?;
        }
    }

    if args.set_exit_status && result.has_findings() {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}
