use crate::{
	entry::pair_hash,
	map::{Iter, IterMut},
	storage::Storage,
	Config, EntryMut, Map, Result,
};
use std::{
	fmt,
	hash::{Hash, Hasher},
	iter::FromIterator,
	ops::Index,
};

/// A map built from a storage strategy `S` and a [`Config`].
///
/// The container validates every mutation against its configuration, then
/// forwards it to the storage. It also counts structural modifications so that
/// [`Cursor`](crate::Cursor)s can detect them.
///
/// # Basic usage
///
/// ```
/// use assoc_map::{HashedMap, Map, MapExt};
///
/// let mut stock = HashedMap::new();
/// stock.put("apples", 3).unwrap();
/// stock.put("pears", 0).unwrap();
///
/// stock.merge("apples", 2, |old, new| Some(old + new)).unwrap();
/// assert_eq!(stock.get(&"apples"), Some(&5));
///
/// // drop everything out of stock.
/// stock.values_mut().retain(|count| count.map_or(false, |c| *c > 0)).unwrap();
/// assert!(!stock.contains_key(&"pears"));
/// ```
///
/// # Read-only containers
///
/// A container built with [`Config::read_only`], or frozen with
/// [`Container::freeze`], rejects every mutation with
/// [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation).
///
/// ```
/// use assoc_map::{Error, Map, OrderedMap};
///
/// let map: OrderedMap<_, _> = vec![(1, "a"), (2, "b")].into_iter().collect();
/// let mut map = map.freeze();
/// assert_eq!(map.remove(&1), Err(Error::UnsupportedOperation("remove")));
/// assert_eq!(map.len(), 2);
/// ```
pub struct Container<K, V, S> {
	storage: S,

	config: Config<K, V>,

	/// Number of structural modifications.
	modifications: usize,
}

impl<K, V, S> Container<K, V, S> {
	/// Create a new empty container with the default configuration.
	#[inline]
	pub fn new() -> Self
	where
		S: Default,
	{
		Self::with_config(Config::new())
	}

	/// Create a new empty container with the given configuration.
	#[inline]
	pub fn with_config(config: Config<K, V>) -> Self
	where
		S: Default,
	{
		Container {
			storage: S::default(),
			config,
			modifications: 0,
		}
	}

	#[inline]
	pub fn config(&self) -> &Config<K, V> {
		&self.config
	}

	/// Turns this container into a read-only one holding the same mappings.
	pub fn freeze(mut self) -> Self
	where
		S: Storage<K, V>,
	{
		log::debug!("container frozen with {} mappings", self.storage.len());
		self.config = self.config.read_only();
		self
	}

	#[inline]
	pub fn storage(&self) -> &S {
		&self.storage
	}

	#[inline]
	pub fn into_storage(self) -> S {
		self.storage
	}
}

impl<K, V, S: Clone> Clone for Container<K, V, S> {
	fn clone(&self) -> Self {
		Container {
			storage: self.storage.clone(),
			config: self.config.clone(),
			modifications: self.modifications,
		}
	}
}

impl<K, V, S: Default> Default for Container<K, V, S> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V, S: Storage<K, V>> Map for Container<K, V, S> {
	type Key = K;
	type Value = V;

	#[inline]
	fn len(&self) -> usize {
		self.storage.len()
	}

	#[inline]
	fn lookup(&self, key: &K) -> Option<Option<&V>> {
		self.storage.slot(key).map(Option::as_ref)
	}

	fn put_option(&mut self, key: K, value: Option<V>) -> Result<Option<V>> {
		self.config.check_mutable("put")?;
		self.config.validate_key(&key)?;
		self.config.validate_value(value.as_ref())?;

		if self.storage.slot(&key).is_none() {
			self.config.check_growth(self.storage.len())?;
			self.modifications = self.modifications.wrapping_add(1);
		}

		Ok(self.storage.insert(key, value).flatten())
	}

	fn remove(&mut self, key: &K) -> Result<Option<V>> {
		self.config.check_mutable("remove")?;
		match self.storage.remove(key) {
			Some(slot) => {
				self.modifications = self.modifications.wrapping_add(1);
				Ok(slot)
			}
			None => Ok(None),
		}
	}

	fn clear(&mut self) -> Result<()> {
		self.config.check_mutable("clear")?;
		if self.storage.len() > 0 {
			self.modifications = self.modifications.wrapping_add(1);
			self.storage.clear()
		}

		Ok(())
	}

	fn iter(&self) -> Iter<'_, K, V> {
		Box::new(self.storage.slots().map(|(k, slot)| (k, slot.as_ref())))
	}

	fn iter_mut(&mut self) -> IterMut<'_, K, V> {
		let config = &self.config;
		Box::new(
			self.storage
				.slots_mut()
				.map(move |(k, slot)| EntryMut::new(k, slot, config)),
		)
	}

	fn retain(&mut self, f: &mut dyn FnMut(&K, Option<&V>) -> bool) -> Result<()> {
		self.config.check_mutable("retain")?;
		let len = self.storage.len();
		self.storage.retain(&mut |k, slot| f(k, slot.as_ref()));
		if self.storage.len() != len {
			self.modifications = self.modifications.wrapping_add(1);
		}

		Ok(())
	}

	#[inline]
	fn modifications(&self) -> usize {
		self.modifications
	}
}

impl<'a, K, V, S: Storage<K, V>> IntoIterator for &'a Container<K, V, S> {
	type IntoIter = Iter<'a, K, V>;
	type Item = (&'a K, Option<&'a V>);

	#[inline]
	fn into_iter(self) -> Iter<'a, K, V> {
		self.iter()
	}
}

/// Collects mappings into a container with the default configuration.
///
/// The default configuration accepts every key and present value, so no
/// mapping can be rejected.
impl<K, V, S: Storage<K, V> + Default> FromIterator<(K, V)> for Container<K, V, S> {
	fn from_iter<T>(iter: T) -> Self
	where
		T: IntoIterator<Item = (K, V)>,
	{
		let mut map = Self::new();
		for (key, value) in iter {
			if map.storage.insert(key, Some(value)).is_none() {
				map.modifications = map.modifications.wrapping_add(1);
			}
		}

		map
	}
}

impl<K, V, S: Storage<K, V>> Index<&K> for Container<K, V, S> {
	type Output = V;

	/// Returns a reference to the value corresponding to the supplied key.
	///
	/// # Panics
	///
	/// Panics if the key is unmapped or mapped to an absent-like value.
	#[inline]
	fn index(&self, key: &K) -> &V {
		self.get(key).expect("no value found for key")
	}
}

/// Two containers are equal when they hold the same mappings, whatever their
/// storage strategies and iteration orders.
impl<K, V: PartialEq, S: Storage<K, V>, T: Storage<K, V>> PartialEq<Container<K, V, T>>
	for Container<K, V, S>
{
	fn eq(&self, other: &Container<K, V, T>) -> bool {
		self.len() == other.len()
			&& self
				.iter()
				.all(|(k, v)| other.lookup(k).map_or(false, |w| v == w))
	}
}

impl<K, V: Eq, S: Storage<K, V>> Eq for Container<K, V, S> {}

/// The hash of a container is the sum of the hashes of its entries, so that
/// equal containers have equal hashes.
impl<K: Hash, V: Hash, S: Storage<K, V>> Hash for Container<K, V, S> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		let sum = self
			.iter()
			.fold(0u64, |sum, (k, v)| sum.wrapping_add(pair_hash(k, v)));
		state.write_u64(sum)
	}
}

impl<K: fmt::Debug, V: fmt::Debug, S: Storage<K, V>> fmt::Debug for Container<K, V, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cursor, Error, Map, OrderedMap};

	#[test]
	fn modification_count_wraps() {
		let mut map = OrderedMap::new();
		map.put(1, "one").unwrap();
		map.modifications = usize::MAX;

		let mut cursor = Cursor::new(&map);
		map.put(2, "two").unwrap();
		assert_eq!(map.modifications(), 0);
		assert_eq!(cursor.next(&map), Err(Error::ConcurrentStateChanged));

		map.remove(&2).unwrap();
		map.clear().unwrap();
		assert_eq!(map.modifications(), 2);
	}
}
