//! Hash and equality capabilities bound into a `ChainedTable` at construction.
//!
//! A table never calls `Hash`/`Eq` on its keys directly; every hash and
//! comparison goes through the `KeyOps` value it was built with. This keeps
//! the "any key type, any hash" flexibility of a function-pointer pair while
//! the key and value types stay concrete.

use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;

/// Hash and equality for keys of type `Q`.
///
/// Implementations must be consistent: `equals(a, b)` implies
/// `hash(a) == hash(b)`. Lookups with a borrowed form `Q` of a stored key
/// `K: Borrow<Q>` must hash identically to the owned key.
pub trait KeyOps<Q: ?Sized> {
    fn hash(&self, key: &Q) -> u64;
    fn equals(&self, query: &Q, stored: &Q) -> bool;
}

/// Polynomial string hash: `h = 31 * h + byte`, wrapping in 32 bits.
#[inline]
pub fn string_hash(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |h, &b| h.wrapping_mul(31).wrapping_add(u32::from(b)))
}

/// Case-sensitive, exact byte equality.
#[inline]
pub fn string_equals(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// `KeyOps` for anything that views as bytes (`str`, `[u8]`, `String`,
/// `Rc<[u8]>`, ...), using [`string_hash`] and [`string_equals`].
#[derive(Copy, Clone, Debug, Default)]
pub struct StringOps;

impl<Q> KeyOps<Q> for StringOps
where
    Q: ?Sized + AsRef<[u8]>,
{
    #[inline]
    fn hash(&self, key: &Q) -> u64 {
        u64::from(string_hash(key.as_ref()))
    }

    #[inline]
    fn equals(&self, query: &Q, stored: &Q) -> bool {
        string_equals(query.as_ref(), stored.as_ref())
    }
}

/// Caller-supplied hash function and equality function.
#[derive(Copy, Clone)]
pub struct FnOps<H, E> {
    hash_fn: H,
    eq_fn: E,
}

impl<H, E> FnOps<H, E> {
    pub fn new(hash_fn: H, eq_fn: E) -> Self {
        Self { hash_fn, eq_fn }
    }
}

impl<Q, H, E> KeyOps<Q> for FnOps<H, E>
where
    Q: ?Sized,
    H: Fn(&Q) -> u64,
    E: Fn(&Q, &Q) -> bool,
{
    #[inline]
    fn hash(&self, key: &Q) -> u64 {
        (self.hash_fn)(key)
    }

    #[inline]
    fn equals(&self, query: &Q, stored: &Q) -> bool {
        (self.eq_fn)(query, stored)
    }
}

/// Adapts a `BuildHasher` and the key's own `Eq`.
#[derive(Clone, Debug, Default)]
pub struct Hashed<S = DefaultHashBuilder> {
    hasher: S,
}

impl<S> Hashed<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self { hasher }
    }
}

impl<Q, S> KeyOps<Q> for Hashed<S>
where
    Q: ?Sized + Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn hash(&self, key: &Q) -> u64 {
        self.hasher.hash_one(key)
    }

    #[inline]
    fn equals(&self, query: &Q, stored: &Q) -> bool {
        query == stored
    }
}
