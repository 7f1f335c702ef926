use std::num::NonZeroUsize;

use proptest::prelude::*;
use sic_spell::key_ops::string_hash;
use sic_spell::{ChainedTable, FnOps, StringOps};

fn buckets(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn default_sized_table_round_trip() {
    let mut t: ChainedTable<String, usize> =
        ChainedTable::with_buckets(sic_spell::DEFAULT_BUCKETS, StringOps);
    for i in 0..1000 {
        t.insert(format!("word{i}"), i);
    }
    assert_eq!(t.len(), 1000);
    for i in 0..1000 {
        assert_eq!(t.find(format!("word{i}").as_str()), Some(&i));
    }
    assert!(t.find("word1000").is_none());
}

#[test]
fn newest_duplicate_wins() {
    let mut t: ChainedTable<String, &str> = ChainedTable::with_buckets(buckets(3), StringOps);
    t.insert("k".to_string(), "old");
    t.insert("other".to_string(), "x");
    t.insert("k".to_string(), "new");
    assert_eq!(t.find("k"), Some(&"new"));
    assert_eq!(t.find_all("k").copied().collect::<Vec<_>>(), vec!["new", "old"]);
}

/// Caller-supplied functions decide both placement and equality.
#[test]
fn fn_ops_control_bucketing() {
    fn by_len(s: &String) -> u64 {
        s.len() as u64
    }
    fn same(a: &String, b: &String) -> bool {
        a == b
    }
    let mut t = ChainedTable::with_buckets(buckets(4), FnOps::new(by_len, same));
    for w in ["a", "bb", "cc", "ddd", "eeee"] {
        t.insert(w.to_string(), ());
    }
    assert_eq!(t.chain_len(0), 1); // "eeee"
    assert_eq!(t.chain_len(1), 1); // "a"
    assert_eq!(t.chain_len(2), 2); // "bb", "cc"
    assert_eq!(t.chain_len(3), 1); // "ddd"
    let two: Vec<&String> = t.chain(2).map(|(k, _)| k).collect();
    assert_eq!(two, vec!["cc", "bb"]);
}

proptest! {
    // find after insert returns a value equal to the one inserted.
    #[test]
    fn prop_insert_then_find(words in proptest::collection::vec("[a-z]{0,12}", 1..50), n in 1usize..64) {
        let mut t: ChainedTable<String, String> = ChainedTable::with_buckets(buckets(n), StringOps);
        for w in &words {
            t.insert(w.clone(), w.clone());
        }
        for w in &words {
            prop_assert_eq!(t.find(w.as_str()), Some(w));
            let b = t.bucket_of(w.as_str());
            prop_assert!(b < n);
            prop_assert_eq!(b, string_hash(w.as_bytes()) as usize % n);
        }
    }
}
