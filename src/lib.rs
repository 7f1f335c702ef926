//! sic-spell: a streaming spell-checker over a fixed-size, separately
//! chained hash table.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: mark every word of a byte stream that is missing from a
//!   dictionary, changing nothing else about the stream.
//! - Layers:
//!   - ChainedTable<K, V, O>: fixed bucket count, chains threaded through a
//!     generational arena, head-of-chain inserts, duplicates kept.
//!   - KeyOps: the hash/equality capability bound into a table when it is
//!     created (`StringOps`, caller-supplied `FnOps`, or `Hashed<S>`).
//!   - Dictionary: word-per-line file loaded self-keyed into one table.
//!   - Tokenizer + Corrector: split the stream into ASCII-letter words and
//!     pass-through bytes, then look each word up under three spellings.
//!
//! Constraints
//! - Single-threaded. The dictionary is built once and then only borrowed.
//! - No resizing: the load factor is fixed by the bucket count the caller
//!   picks (2255 by default).
//! - Case folding is ASCII only; any other byte is a word boundary.
//!
//! Lookup semantics
//! - `find` compares the query with each entry's stored key through
//!   `KeyOps::equals` and returns the newest match's value.
//! - Only the query's bucket is scanned; every entry in it goes through
//!   `equals`, with no hash pre-filter.
//!
//! Notes and non-goals
//! - No removal, no iteration order guarantees beyond bucket order.
//! - No suggestions: a word is either known or marked ` [sic]`.

pub mod chained_table;
mod chained_table_proptest;
pub mod cli;
pub mod corrector;
pub mod dictionary;
pub mod error;
pub mod key_ops;
pub mod tokenizer;

// Public surface
pub use chained_table::ChainedTable;
pub use corrector::{CheckStats, Corrector, MatchKind, SIC_MARKER};
pub use dictionary::{Dictionary, DEFAULT_BUCKETS};
pub use error::{Error, Result};
pub use key_ops::{FnOps, Hashed, KeyOps, StringOps};
pub use tokenizer::{Token, Tokenizer};
