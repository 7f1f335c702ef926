//! Command-line arguments for the `sic-spell` binary.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Copy stdin to stdout, appending " [sic]" after every word that is not in
/// the dictionary.
#[derive(Parser, Debug, Clone)]
#[command(name = "sic-spell", version, about)]
pub struct Args {
    /// Dictionary file, one word per line.
    #[arg(value_name = "DICTIONARY", allow_hyphen_values = true)]
    pub dictionary: PathBuf,

    /// Number of hash table buckets.
    #[arg(long, env = "SIC_SPELL_BUCKETS", default_value = "2255")]
    pub buckets: NonZeroUsize,

    /// More diagnostics on stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only errors on stderr.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
