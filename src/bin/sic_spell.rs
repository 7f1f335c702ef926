//! sic-spell: flag words of stdin that are missing from a dictionary.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use sic_spell::cli::Args;
use sic_spell::{Corrector, Dictionary};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors are reported but still exit successfully.
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    colog::default_builder()
        .filter_level(args.log_level())
        .init();

    info!("Creating hashtable with {} buckets", args.buckets);
    info!("Loading dictionary {}", args.dictionary.display());
    let dict = match Dictionary::load(&args.dictionary, args.buckets) {
        Ok(dict) => dict,
        Err(e) => {
            error!("{e}");
            return ExitCode::SUCCESS;
        }
    };
    info!("Dictionary loaded ({} words)", dict.len());

    info!("Processing stdin");
    match Corrector::new(&dict).run(io::stdin().lock(), io::stdout().lock()) {
        Ok(stats) => {
            info!(
                "Checked {} words, flagged {}",
                stats.words, stats.flagged
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
