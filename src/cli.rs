//! Command-line interface implementation for msa-starter.
//! Provides argument parsing using clap.

use crate::constants::{DEFAULT_TEMPLATES_DIR, OUTPUT_DIR_NAME};
use crate::error::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for msa-starter.
#[derive(Parser, Debug)]
#[command(author, version, about = "Create a new project", long_about = None)]
pub struct Args {
    /// Create a project with all default values
    #[arg(long, alias = "useDefault")]
    pub use_default: bool,

    /// Directory holding the `webmvc` and `webflux` templates
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates: PathBuf,

    /// Directory where the generated project will be created [default: ~/.msa-starter]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON or YAML file with answers applied over the defaults
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Output directory, falling back to `~/.msa-starter`.
    pub fn output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(OUTPUT_DIR_NAME))
                .ok_or_else(|| {
                    Error::ConfigError("cannot determine home directory, use --output-dir".to_string())
                }),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
