//! Corrector: checks each word of a stream against a `Dictionary` and marks
//! unmatched words with ` [sic]`.
//!
//! A word matches when any of three spellings is in the dictionary, tried
//! in order:
//! 1. the word as written,
//! 2. the word entirely lowercased,
//! 3. the word with its first letter kept and the rest lowercased.
//!
//! Output reproduces the input byte for byte; the only change is the
//! marker inserted right after each unmatched word.

use std::io::{self, BufReader, BufWriter, Read, Write};

use crate::dictionary::Dictionary;
use crate::tokenizer::{Token, Tokenizer};

/// Appended after a word none of whose spellings are known.
pub const SIC_MARKER: &[u8] = b" [sic]";

/// Which spelling matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Lowercase,
    Capitalized,
}

/// Counters for one pass over a stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckStats {
    pub words: usize,
    pub flagged: usize,
    pub literals: usize,
}

pub struct Corrector<'d> {
    dict: &'d Dictionary,
}

impl<'d> Corrector<'d> {
    pub fn new(dict: &'d Dictionary) -> Self {
        Self { dict }
    }

    /// Look `word` up under the three spellings; `None` means unmatched.
    pub fn check(&self, word: &[u8]) -> Option<MatchKind> {
        if self.dict.contains(word) {
            return Some(MatchKind::Exact);
        }
        let mut folded = word.to_ascii_lowercase();
        if self.dict.contains(&folded) {
            return Some(MatchKind::Lowercase);
        }
        if let (Some(first), Some(slot)) = (word.first(), folded.first_mut()) {
            *slot = *first;
        }
        if self.dict.contains(&folded) {
            return Some(MatchKind::Capitalized);
        }
        None
    }

    /// Copy `input` to `output`, marking unmatched words.
    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> io::Result<CheckStats> {
        let mut out = BufWriter::new(output);
        let mut stats = CheckStats::default();
        for token in Tokenizer::new(BufReader::new(input)) {
            match token? {
                Token::Literal(b) => {
                    stats.literals += 1;
                    out.write_all(&[b])?;
                }
                Token::Word(word) => {
                    stats.words += 1;
                    out.write_all(&word)?;
                    if self.check(&word).is_none() {
                        stats.flagged += 1;
                        out.write_all(SIC_MARKER)?;
                    }
                }
            }
        }
        out.flush()?;
        Ok(stats)
    }
}
