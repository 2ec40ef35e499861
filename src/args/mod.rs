//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

use crate::app::RunOptions;
use crate::state::FacetMode;

/// Default issue statistics file.
pub const DEFAULT_DATA_PATH: &str = "demos/files_facet.json";

/// issue-facets - browse issue statistics per file and build a file filter
#[derive(Parser, Debug)]
#[command(name = "issue-facets")]
#[command(version)]
#[command(about = "Browse issue statistics per file and build a file filter", long_about = None)]
pub struct Args {
    /// Issue statistics JSON file
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Statistic unit of the facets (count, effort)
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<FacetMode>,

    /// Locale to use (e.g. de-DE); overrides settings.conf
    #[arg(long)]
    pub locale: Option<String>,

    /// Start with the facets collapsed
    #[arg(long)]
    pub collapsed: bool,

    /// Start in the loading state
    #[arg(long)]
    pub loading: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_mode(s: &str) -> Result<FacetMode, String> {
    FacetMode::from_config_key(s).ok_or_else(|| format!("unknown mode '{s}' (expected count or effort)"))
}

impl Args {
    /// Effective log filter; `--verbose` wins over `--log-level`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        if self.verbose { "debug" } else { &self.log_level }
    }

    /// What: Convert the parsed flags into runtime options.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            data_path: self.data.clone(),
            mode: self.mode,
            locale: self.locale.clone(),
            collapsed: self.collapsed,
            loading: self.loading,
        }
    }
}
