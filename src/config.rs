//! Container configuration.
//!
//! A [`Config`] fixes, for the lifetime of a container, which keys and values
//! it accepts and whether it can be mutated at all.
use crate::{Error, Result};
use std::{fmt, sync::Arc};

/// Whether a container may store absent-like values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NullPolicy {
	/// Storing an absent-like value fails with [`Error::RejectedNull`].
	Forbid,

	/// Absent-like values are stored like any other value.
	Permit,
}

impl Default for NullPolicy {
	fn default() -> Self {
		NullPolicy::Forbid
	}
}

/// Key or value validator.
pub type Check<T> = Arc<dyn Fn(&T) -> Result<()> + Send + Sync>;

/// Container configuration.
///
/// # Example
///
/// ```
/// use assoc_map::{Config, Error, HashedMap, Map};
///
/// let config = Config::new()
/// 	.capacity(2)
/// 	.check_key(|k: &&str| {
/// 		if k.is_empty() {
/// 			Err(Error::illegal_argument("empty key"))
/// 		} else {
/// 			Ok(())
/// 		}
/// 	});
///
/// let mut map: HashedMap<&str, i32> = HashedMap::with_config(config);
/// assert_eq!(map.put("", 1), Err(Error::illegal_argument("empty key")));
/// map.put("a", 1).unwrap();
/// map.put("b", 2).unwrap();
/// assert!(matches!(map.put("c", 3), Err(Error::IllegalArgument(_))));
/// ```
pub struct Config<K, V> {
	nulls: NullPolicy,

	/// Maximum number of mappings.
	capacity: Option<usize>,

	read_only: bool,

	key_check: Option<Check<K>>,

	value_check: Option<Check<V>>,
}

impl<K, V> Config<K, V> {
	/// Default configuration: absent-like values forbidden, unbounded, mutable,
	/// no validators.
	pub fn new() -> Self {
		Config {
			nulls: NullPolicy::Forbid,
			capacity: None,
			read_only: false,
			key_check: None,
			value_check: None,
		}
	}

	pub fn null_policy(mut self, policy: NullPolicy) -> Self {
		self.nulls = policy;
		self
	}

	/// Allow absent-like values.
	pub fn permit_nulls(self) -> Self {
		self.null_policy(NullPolicy::Permit)
	}

	/// Bound the number of mappings.
	///
	/// Inserting a new key into a full container fails with
	/// [`Error::IllegalArgument`]. Overwriting an existing key is always allowed.
	pub fn capacity(mut self, capacity: usize) -> Self {
		self.capacity = Some(capacity);
		self
	}

	/// Reject every mutating operation with [`Error::UnsupportedOperation`].
	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self
	}

	/// Install a key validator, run before every insertion.
	pub fn check_key<F>(mut self, f: F) -> Self
	where
		F: Fn(&K) -> Result<()> + Send + Sync + 'static,
	{
		self.key_check = Some(Arc::new(f));
		self
	}

	/// Install a value validator, run before every present value is stored.
	pub fn check_value<F>(mut self, f: F) -> Self
	where
		F: Fn(&V) -> Result<()> + Send + Sync + 'static,
	{
		self.value_check = Some(Arc::new(f));
		self
	}

	#[inline]
	pub fn nulls(&self) -> NullPolicy {
		self.nulls
	}

	#[inline]
	pub fn max_len(&self) -> Option<usize> {
		self.capacity
	}

	#[inline]
	pub fn is_read_only(&self) -> bool {
		self.read_only
	}

	pub(crate) fn check_mutable(&self, op: &'static str) -> Result<()> {
		if self.read_only {
			log::trace!("rejected `{}` on read-only container", op);
			Err(Error::UnsupportedOperation(op))
		} else {
			Ok(())
		}
	}

	pub(crate) fn validate_key(&self, key: &K) -> Result<()> {
		match &self.key_check {
			Some(check) => check(key).map_err(|e| {
				log::trace!("key rejected: {}", e);
				e
			}),
			None => Ok(()),
		}
	}

	pub(crate) fn validate_value(&self, value: Option<&V>) -> Result<()> {
		match value {
			Some(value) => match &self.value_check {
				Some(check) => check(value).map_err(|e| {
					log::trace!("value rejected: {}", e);
					e
				}),
				None => Ok(()),
			},
			None => match self.nulls {
				NullPolicy::Permit => Ok(()),
				NullPolicy::Forbid => {
					log::trace!("absent-like value rejected");
					Err(Error::RejectedNull)
				}
			},
		}
	}

	/// Checks that one more mapping fits in a container currently holding `len`.
	pub(crate) fn check_growth(&self, len: usize) -> Result<()> {
		match self.capacity {
			Some(capacity) if len >= capacity => {
				log::trace!("capacity of {} mappings reached", capacity);
				Err(Error::illegal_argument(format!(
					"capacity of {} mappings exceeded",
					capacity
				)))
			}
			_ => Ok(()),
		}
	}
}

impl<K, V> Default for Config<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V> Clone for Config<K, V> {
	fn clone(&self) -> Self {
		Config {
			nulls: self.nulls,
			capacity: self.capacity,
			read_only: self.read_only,
			key_check: self.key_check.clone(),
			value_check: self.value_check.clone(),
		}
	}
}

impl<K, V> fmt::Debug for Config<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("nulls", &self.nulls)
			.field("capacity", &self.capacity)
			.field("read_only", &self.read_only)
			.field("key_check", &self.key_check.is_some())
			.field("value_check", &self.value_check.is_some())
			.finish()
	}
}
