//! Dictionary: a word-per-line file loaded into a self-keyed `ChainedTable`.
//!
//! Each line becomes one entry whose key and value share a single `Rc<[u8]>`
//! allocation. Words are stored byte-for-byte: no case folding, no
//! trimming, no deduplication, and empty lines become empty words.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::NonZeroUsize;
use std::path::Path;
use std::rc::Rc;

use crate::chained_table::ChainedTable;
use crate::error::{Error, Result};
use crate::key_ops::StringOps;

/// Bucket count used when the caller does not pick one.
pub const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(2255) {
    Some(n) => n,
    None => unreachable!(),
};

pub type Word = Rc<[u8]>;

pub struct Dictionary {
    table: ChainedTable<Word, Word, StringOps>,
}

impl Dictionary {
    pub fn new(bucket_count: NonZeroUsize) -> Self {
        Self {
            table: ChainedTable::with_buckets(bucket_count, StringOps),
        }
    }

    /// Open `path` and load one word per `\n`-terminated line.
    pub fn load(path: impl AsRef<Path>, bucket_count: NonZeroUsize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::OpenDictionary {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_reader(BufReader::new(file), bucket_count).map_err(|source| {
            Error::ReadDictionary {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::debug!(
            "loaded {} words from {} (load factor {:.2})",
            dict.len(),
            path.display(),
            dict.table.load_factor()
        );
        Ok(dict)
    }

    /// Load from any buffered reader. The last line need not end in `\n`.
    pub fn from_reader<R: BufRead>(reader: R, bucket_count: NonZeroUsize) -> io::Result<Self> {
        let mut dict = Self::new(bucket_count);
        for line in reader.split(b'\n') {
            dict.insert(&line?);
        }
        Ok(dict)
    }

    pub fn from_words<I, W>(words: I, bucket_count: NonZeroUsize) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut dict = Self::new(bucket_count);
        for w in words {
            dict.insert(w.as_ref());
        }
        dict
    }

    /// Insert `word` self-keyed.
    pub fn insert(&mut self, word: &[u8]) {
        let w: Word = Rc::from(word);
        self.table.insert(Rc::clone(&w), w);
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, word: &[u8]) -> bool {
        self.table.contains(word)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn table(&self) -> &ChainedTable<Word, Word, StringOps> {
        &self.table
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.len())
            .field("buckets", &self.table.bucket_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(text: &str) -> Dictionary {
        Dictionary::from_reader(Cursor::new(text.as_bytes()), DEFAULT_BUCKETS).unwrap()
    }

    #[test]
    fn one_word_per_line() {
        let d = load("cat\ndog\nbird\n");
        assert_eq!(d.len(), 3);
        assert!(d.contains(b"cat"));
        assert!(d.contains(b"dog"));
        assert!(d.contains(b"bird"));
        assert!(!d.contains(b"fish"));
    }

    #[test]
    fn final_newline_is_optional() {
        let d = load("cat\ndog");
        assert_eq!(d.len(), 2);
        assert!(d.contains(b"dog"));
    }

    #[test]
    fn empty_lines_become_empty_words() {
        let d = load("cat\n\ndog\n");
        assert_eq!(d.len(), 3);
        assert!(d.contains(b""));
    }

    #[test]
    fn empty_input_loads_nothing() {
        let d = load("");
        assert!(d.is_empty());
        assert!(!d.contains(b""));
    }

    #[test]
    fn words_are_stored_verbatim() {
        let d = load("Hello\nworld \nCR\r\n");
        assert!(d.contains(b"Hello"));
        assert!(!d.contains(b"hello"));
        assert!(d.contains(b"world "));
        assert!(!d.contains(b"world"));
        assert!(d.contains(b"CR\r"));
    }

    #[test]
    fn duplicates_are_kept() {
        let d = load("a\na\na\n");
        assert_eq!(d.len(), 3);
        assert_eq!(d.table().find_all(&b"a"[..]).count(), 3);
    }

    /// Invariant: key and value of each entry are the same allocation.
    #[test]
    fn entries_are_self_keyed() {
        let d = Dictionary::from_words(["alpha", "beta"], DEFAULT_BUCKETS);
        for (k, v) in d.table().iter() {
            assert!(Rc::ptr_eq(k, v));
        }
    }

    #[test]
    fn long_lines_are_not_truncated() {
        let word = "q".repeat(5000);
        let d = load(&format!("{word}\nshort\n"));
        assert!(d.contains(word.as_bytes()));
        assert!(!d.contains(&word.as_bytes()[..4999]));
    }

    #[test]
    fn non_utf8_bytes_are_accepted() {
        let d = Dictionary::from_reader(Cursor::new(&b"caf\xe9\nok\n"[..]), DEFAULT_BUCKETS)
            .unwrap();
        assert!(d.contains(b"caf\xe9"));
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = Dictionary::load("/definitely/not/a/dictionary", DEFAULT_BUCKETS).unwrap_err();
        assert!(matches!(err, Error::OpenDictionary { .. }));
        assert!(err.to_string().contains("/definitely/not/a/dictionary"));
    }
}
