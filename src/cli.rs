//! Command-line surface shared by `rfml` and downstream suite binaries.
//!
//! A project with its own tests builds a binary that hands its [`Suite`] to
//! [`run`]:
//!
//! ```no_run
//! use clap::Parser;
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = rfml::cli::Cli::parse();
//!     let ok = rfml::cli::run(&cli, &rfml::demo::suite())?;
//!     std::process::exit(if ok { 0 } else { 1 });
//! }
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::{SiteConfig, DEFAULT_CONFIG_FILE};
use crate::output::{new_stubs, save_tests, DEFAULT_OUTPUT_DIR};
use crate::suite::Suite;

/// Compile test definitions into RFML files
#[derive(Debug, Parser)]
#[command(name = "rfml", version, about = "Compile test definitions into RFML files")]
pub struct Cli {
    /// Site configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate RFML files; builds every group when none are named
    Build {
        /// Test groups to build
        groups: Vec<String>,
        /// Directory the .rfml files are written to
        #[arg(long, short, default_value = DEFAULT_OUTPUT_DIR)]
        out: PathBuf,
    },
    /// Print code for new tests, each with a fresh id
    New {
        #[arg(default_value_t = 1)]
        count: usize,
    },
}

/// Execute a parsed command against `suite`.
///
/// Returns `Ok(false)` when some test failed to register; nothing is written
/// in that case.
pub fn run(cli: &Cli, suite: &Suite) -> anyhow::Result<bool> {
    let config = SiteConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    match &cli.command {
        Command::Build { groups, out } => {
            let registry = suite.build(config, groups.as_slice())?;
            if !registry.is_successful() {
                for failure in registry.failures() {
                    eprintln!("{}: {}", failure.id, failure.error);
                }
                eprintln!("no tests were built because errors were encountered.");
                return Ok(false);
            }
            let written = save_tests(registry.tests(), out)
                .with_context(|| format!("failed to write tests to {}", out.display()))?;
            // one path per line so the list can be piped to an uploader
            for path in written {
                println!("{}", path.display());
            }
            Ok(true)
        }
        Command::New { count } => {
            for stub in new_stubs(*count, config.first_site_tag()) {
                println!("{}", stub);
            }
            println!();
            Ok(true)
        }
    }
}
