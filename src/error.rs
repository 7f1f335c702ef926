//! Error types for dictionary loading and stream checking.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library.
///
/// A word missing from the dictionary is never an error; it is reported
/// inline in the checked output. Stream I/O failures while checking are
/// plain `io::Error`s from `Corrector::run`.
#[derive(Error, Debug)]
pub enum Error {
    /// The dictionary file could not be opened.
    #[error("cannot open dictionary {}: {source}", path.display())]
    OpenDictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary file was opened but reading it failed.
    #[error("cannot read dictionary {}: {source}", path.display())]
    ReadDictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
