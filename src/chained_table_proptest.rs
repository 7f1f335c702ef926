#![cfg(test)]

// Property tests for ChainedTable kept inside the crate so they can reach
// the chain accessors directly.

use crate::chained_table::ChainedTable;
use crate::key_ops::{string_hash, FnOps, StringOps};
use core::num::NonZeroUsize;
use proptest::prelude::*;
use std::collections::BTreeMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, the pool shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Find(usize),
    Probe(String),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=17, proptest::collection::vec("[a-zA-Z]{0,6}", 1..=8)).prop_flat_map(
        |(buckets, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
                idx.clone().prop_map(OpI::Find),
                "[a-zA-Z]{0,6}".prop_map(OpI::Probe),
                Just(OpI::Iterate),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (buckets, pool.clone(), ops))
        },
    )
}

// Property: equivalence against a model that keeps every inserted value per
// key, newest last.
// Invariants exercised across random operation sequences:
// - `find` returns the newest value inserted under an equal key, or nothing.
// - `find_all` yields every value for the key, newest first.
// - Each entry sits in bucket `string_hash(key) mod bucket_count`.
// - `len` counts duplicates; chain lengths sum to `len`.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_model_equivalence((bucket_count, pool, ops) in arb_scenario()) {
        let n = NonZeroUsize::new(bucket_count).unwrap();
        let mut sut: ChainedTable<String, i32> = ChainedTable::with_buckets(n, StringOps);
        let mut model: BTreeMap<String, Vec<i32>> = BTreeMap::new();
        let mut inserted = 0usize;

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = pool[i].clone();
                    sut.insert(k.clone(), v);
                    model.entry(k).or_default().push(v);
                    inserted += 1;
                }
                OpI::Find(i) => {
                    let k = pool[i].as_str();
                    let expected = model.get(k).and_then(|vs| vs.last());
                    prop_assert_eq!(sut.find(k), expected);
                    let all: Vec<i32> = sut.find_all(k).copied().collect();
                    let mut want: Vec<i32> = model.get(k).cloned().unwrap_or_default();
                    want.reverse();
                    prop_assert_eq!(all, want);
                }
                OpI::Probe(k) => {
                    prop_assert_eq!(sut.contains(k.as_str()), model.contains_key(&k));
                }
                OpI::Iterate => {
                    for b in 0..sut.bucket_count() {
                        for (k, _) in sut.chain(b) {
                            let want = string_hash(k.as_bytes()) as usize % bucket_count;
                            prop_assert_eq!(b, want);
                        }
                    }
                    prop_assert_eq!(sut.iter().count(), inserted);
                }
            }
            prop_assert_eq!(sut.len(), inserted);
            prop_assert_eq!(sut.is_empty(), inserted == 0);
        }

        let chained: usize = (0..sut.bucket_count()).map(|b| sut.chain_len(b)).sum();
        prop_assert_eq!(chained, sut.len());
    }
}

// Property: a caller-supplied case-insensitive equality (with a matching
// hash) makes lookups fold ASCII case, and the newest folded match wins.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_fn_ops_case_folding(words in proptest::collection::vec("[a-zA-Z]{1,6}", 1..20)) {
        let ops = FnOps::new(
            |s: &String| u64::from(string_hash(s.to_ascii_lowercase().as_bytes())),
            |a: &String, b: &String| a.eq_ignore_ascii_case(b),
        );
        let mut sut = ChainedTable::with_buckets(NonZeroUsize::new(7).unwrap(), ops);
        let mut model: BTreeMap<String, usize> = BTreeMap::new();
        for (i, w) in words.iter().enumerate() {
            sut.insert(w.clone(), i);
            model.insert(w.to_ascii_lowercase(), i);
        }
        for w in &words {
            let upper = w.to_ascii_uppercase();
            prop_assert_eq!(sut.find(&upper), model.get(&w.to_ascii_lowercase()));
        }
    }
}
