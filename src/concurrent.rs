use crate::{Cursor, Map, MapExt, Result};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe wrapper around a map.
///
/// Queries share a read lock, mutations take the write lock. Unlike the
/// [`MapExt`] defaults, every compound operation of this type runs entirely
/// under a single write lock: it is atomic with respect to every other
/// operation on the same `Concurrent`. As a consequence, the closures passed to
/// compound operations must not access the map themselves.
///
/// Since references into the map cannot outlive the lock, values are returned
/// by clone.
///
/// A lock poisoned by a panicking thread is recovered: mutations are applied
/// primitive by primitive, so the map is always left in a consistent state.
///
/// # Example
///
/// ```
/// use assoc_map::{Concurrent, HashedMap};
/// use std::{sync::Arc, thread};
///
/// let counts = Arc::new(Concurrent::new(HashedMap::new()));
/// let handles: Vec<_> = (0..4)
/// 	.map(|_| {
/// 		let counts = counts.clone();
/// 		thread::spawn(move || {
/// 			for _ in 0..100 {
/// 				counts.merge("hits", 1, |a, b| Some(a + b)).unwrap();
/// 			}
/// 		})
/// 	})
/// 	.collect();
///
/// for handle in handles {
/// 	handle.join().unwrap();
/// }
///
/// assert_eq!(counts.get(&"hits"), Some(400));
/// ```
#[derive(Debug, Default)]
pub struct Concurrent<M> {
	inner: RwLock<M>,
}

impl<M: Map> Concurrent<M> {
	#[inline]
	pub fn new(map: M) -> Self {
		Concurrent {
			inner: RwLock::new(map),
		}
	}

	pub fn into_inner(self) -> M {
		self.inner.into_inner().unwrap_or_else(|e| {
			log::warn!("recovering map from poisoned lock");
			e.into_inner()
		})
	}

	/// Shared access to the underlying map.
	pub fn read(&self) -> RwLockReadGuard<'_, M> {
		self.inner.read().unwrap_or_else(|e| {
			log::warn!("recovering map from poisoned lock");
			e.into_inner()
		})
	}

	/// Exclusive access to the underlying map.
	pub fn write(&self) -> RwLockWriteGuard<'_, M> {
		self.inner.write().unwrap_or_else(|e| {
			log::warn!("recovering map from poisoned lock");
			e.into_inner()
		})
	}

	pub fn len(&self) -> usize {
		self.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.read().is_empty()
	}

	pub fn contains_key(&self, key: &M::Key) -> bool {
		self.read().contains_key(key)
	}

	pub fn contains_value(&self, value: &M::Value) -> bool
	where
		M::Value: PartialEq,
	{
		self.read().contains_value(value)
	}

	pub fn lookup(&self, key: &M::Key) -> Option<Option<M::Value>>
	where
		M::Value: Clone,
	{
		let map = self.read();
		let slot = map.lookup(key).map(|value| value.cloned());
		slot
	}

	pub fn get(&self, key: &M::Key) -> Option<M::Value>
	where
		M::Value: Clone,
	{
		let map = self.read();
		let value = map.get(key).cloned();
		value
	}

	pub fn get_or_default(&self, key: &M::Key, default: M::Value) -> Option<M::Value>
	where
		M::Value: Clone,
	{
		let map = self.read();
		let value = map.get_or_default(key, &default).cloned();
		value
	}

	pub fn put(&self, key: M::Key, value: M::Value) -> Result<Option<M::Value>> {
		self.write().put(key, value)
	}

	pub fn put_option(&self, key: M::Key, value: Option<M::Value>) -> Result<Option<M::Value>> {
		self.write().put_option(key, value)
	}

	pub fn remove(&self, key: &M::Key) -> Result<Option<M::Value>> {
		self.write().remove(key)
	}

	pub fn clear(&self) -> Result<()> {
		self.write().clear()
	}

	/// Puts every mapping of `other` under a single write lock.
	pub fn put_all<N>(&self, other: &N) -> Result<()>
	where
		N: Map<Key = M::Key, Value = M::Value> + ?Sized,
		M::Key: Clone,
		M::Value: Clone,
	{
		self.write().put_all(other)
	}

	/// Calls `f` once per mapping under the read lock.
	pub fn for_each<F>(&self, f: F)
	where
		F: FnMut(&M::Key, Option<&M::Value>),
	{
		self.read().for_each(f)
	}

	pub fn replace_all<F>(&self, f: F) -> Result<()>
	where
		F: FnMut(&M::Key, Option<&M::Value>) -> Option<M::Value>,
	{
		self.write().replace_all(f)
	}

	pub fn put_if_absent(&self, key: M::Key, value: M::Value) -> Result<Option<M::Value>>
	where
		M::Value: Clone,
	{
		let mut map = self.write();
		let current = map.put_if_absent(key, value)?.cloned();
		Ok(current)
	}

	pub fn remove_if_eq(&self, key: &M::Key, expected: Option<&M::Value>) -> Result<bool>
	where
		M::Value: PartialEq,
	{
		self.write().remove_if_eq(key, expected)
	}

	pub fn replace_if_eq(
		&self,
		key: M::Key,
		expected: Option<&M::Value>,
		value: M::Value,
	) -> Result<bool>
	where
		M::Value: PartialEq,
	{
		self.write().replace_if_eq(key, expected, value)
	}

	pub fn replace(&self, key: M::Key, value: M::Value) -> Result<Option<M::Value>> {
		self.write().replace(key, value)
	}

	pub fn compute_if_absent<F>(&self, key: M::Key, f: F) -> Result<Option<M::Value>>
	where
		M::Key: Clone,
		M::Value: Clone,
		F: FnOnce(&M::Key) -> Option<M::Value>,
	{
		let mut map = self.write();
		let value = map.compute_if_absent(key, f)?.cloned();
		Ok(value)
	}

	pub fn compute_if_present<F>(&self, key: M::Key, f: F) -> Result<Option<M::Value>>
	where
		M::Key: Clone,
		M::Value: Clone,
		F: FnOnce(&M::Key, &M::Value) -> Option<M::Value>,
	{
		let mut map = self.write();
		let value = map.compute_if_present(key, f)?.cloned();
		Ok(value)
	}

	pub fn compute<F>(&self, key: M::Key, f: F) -> Result<Option<M::Value>>
	where
		M::Key: Clone,
		M::Value: Clone,
		F: FnOnce(&M::Key, Option<&M::Value>) -> Option<M::Value>,
	{
		let mut map = self.write();
		let value = map.compute(key, f)?.cloned();
		Ok(value)
	}

	pub fn merge<F>(&self, key: M::Key, value: M::Value, f: F) -> Result<Option<M::Value>>
	where
		M::Key: Clone,
		M::Value: Clone,
		F: FnOnce(&M::Value, M::Value) -> Option<M::Value>,
	{
		let mut map = self.write();
		let value = map.merge(key, value, f)?.cloned();
		Ok(value)
	}

	/// Fail-fast cursor over the current keys.
	///
	/// Steps of the cursor are given the map through [`read`](Concurrent::read)
	/// or [`write`](Concurrent::write), and fail if another thread structurally
	/// modified the map in between.
	pub fn cursor(&self) -> Cursor<M::Key>
	where
		M::Key: Clone,
	{
		self.read().cursor()
	}
}
