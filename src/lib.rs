//! This crate provides key-to-value associative containers sharing a single
//! behavioral contract.
//!
//! The contract is split in two traits:
//!  - [`Map`] holds the primitives (lookup, insertion, removal, iteration)
//!    that a storage strategy implements;
//!  - [`MapExt`] holds the compound operations (`get_or_default`,
//!    `put_if_absent`, `compute`, `merge`, ...) and the live views, written
//!    once on top of the primitives for every map.
//!
//! The [`Container`] type combines a storage strategy with a [`Config`]
//! deciding which keys and values are accepted, whether absent-like values
//! are allowed and whether the container is read-only. Three strategies are
//! provided:
//!  - [`HashedMap`], backed by [`std::collections::HashMap`];
//!  - [`OrderedMap`], backed by [`std::collections::BTreeMap`], iterating in
//!    key order;
//!  - [`LinkedMap`], iterating in insertion order and only requiring keys to
//!    implement [`PartialEq`]. Its links are allocated in a [`slab::Slab`]
//!    (feature `std-slab`), but any slab-like container can be used through
//!    [`storage::Linked`].
//!
//! ```
//! use assoc_map::{Map, MapExt, OrderedMap};
//!
//! let mut map = OrderedMap::new();
//! map.put("a", 1).unwrap();
//! assert_eq!(map.compute_if_absent("a", |_| Some(2)).unwrap(), Some(&1));
//! assert_eq!(map.compute_if_absent("b", |_| Some(2)).unwrap(), Some(&2));
//!
//! let keys: Vec<_> = map.key_set().iter().collect();
//! assert_eq!(keys, [&"a", &"b"]);
//! ```
//!
//! Every failure is reported as an [`Error`]. Borrowed iteration cannot
//! observe concurrent modifications; the detached [`Cursor`] detects them at
//! run time and fails with [`Error::ConcurrentStateChanged`]. Maps shared
//! between threads are wrapped in [`Concurrent`], whose compound operations are
//! atomic.
mod concurrent;
mod config;
mod container;
mod cursor;
pub mod entry;
mod error;
mod ext;
mod map;
#[cfg(feature = "serde")]
mod serialize;
pub mod storage;
pub mod view;

pub use concurrent::*;
pub use config::*;
pub use container::*;
pub use cursor::*;
pub use entry::{Entry, EntryMut};
pub use error::*;
pub use ext::*;
pub use map::*;

/// Hash-based container.
pub type HashedMap<K, V> = Container<K, V, std::collections::HashMap<K, storage::Slot<V>>>;

/// Key-ordered container.
pub type OrderedMap<K, V> = Container<K, V, std::collections::BTreeMap<K, storage::Slot<V>>>;

/// Insertion-ordered container based on `Slab`.
#[cfg(feature = "std-slab")]
pub type LinkedMap<K, V> =
	Container<K, V, storage::Linked<K, V, slab::Slab<storage::Link<K, V>>>>;
