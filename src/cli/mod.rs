use crate::constants::{APP_DESCRIPTION, APP_NAME};
use clap::Parser;
use std::path::PathBuf;

/// A weekly CARE journal for your terminal
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Directory holding the journal storage (overrides CARE_DIR)
    #[clap(short = 'd', long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log output format: text or json (overrides CARE_LOG_FORMAT)
    #[clap(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
