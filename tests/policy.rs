use assoc_map::{Config, Error, HashedMap, LinkedMap, Map, MapExt, NullPolicy, OrderedMap};

#[test]
pub fn nulls_forbidden_by_default() {
	let mut map: HashedMap<&str, i32> = HashedMap::new();
	assert_eq!(map.config().nulls(), NullPolicy::Forbid);
	assert_eq!(map.put_option("a", None), Err(Error::RejectedNull));
	assert!(map.is_empty());

	map.put("a", 1).unwrap();
	let result = map.replace_all(|_, _| None);
	assert_eq!(result, Err(Error::RejectedNull));
	assert_eq!(map.get(&"a"), Some(&1));
}

#[test]
pub fn nulls_permitted() {
	let mut map: OrderedMap<&str, i32> = OrderedMap::with_config(Config::new().permit_nulls());

	assert_eq!(map.put_option("a", None), Ok(None));
	assert_eq!(map.len(), 1);
	assert!(map.contains_key(&"a"));
	assert_eq!(map.get(&"a"), None);
	assert_eq!(map.lookup(&"a"), Some(None));
	assert_eq!(map.lookup(&"b"), None);

	// a key mapped to an absent-like value does not get the default.
	assert_eq!(map.get_or_default(&"a", &7), None);
	assert_eq!(map.get_or_default(&"b", &7), Some(&7));

	assert_eq!(map.values().iter().collect::<Vec<_>>(), [None]);
	assert!(map.entry_set().contains(&"a", None));
}

#[test]
pub fn absent_like_counts_as_absent() {
	let mut map: LinkedMap<&str, i32> = LinkedMap::with_config(Config::new().permit_nulls());
	map.put_option("a", None).unwrap();
	map.put_option("b", None).unwrap();
	map.put_option("c", None).unwrap();
	map.put_option("d", None).unwrap();

	assert_eq!(map.put_if_absent("a", 1), Ok(None));
	assert_eq!(map.get(&"a"), Some(&1));

	assert_eq!(map.compute_if_absent("b", |_| Some(2)), Ok(Some(&2)));

	// the mapping is kept when no value is computed.
	assert_eq!(map.compute_if_absent("c", |_| None), Ok(None));
	assert_eq!(map.lookup(&"c"), Some(None));

	assert_eq!(map.compute_if_present("c", |_, _| Some(0)), Ok(None));
	assert_eq!(map.lookup(&"c"), Some(None));

	assert_eq!(map.merge("d", 4, |_, _| None), Ok(Some(&4)));
	assert_eq!(map.len(), 4);

	assert_eq!(map.compute("c", |_, old| {
		assert_eq!(old, None);
		None
	}), Ok(None));
	assert!(!map.contains_key(&"c"));
}

#[test]
pub fn remove_if_eq_absent_like() {
	let mut map: HashedMap<&str, i32> = HashedMap::with_config(Config::new().permit_nulls());
	map.put_option("a", None).unwrap();

	assert_eq!(map.remove_if_eq(&"a", Some(&1)), Ok(false));
	assert_eq!(map.remove_if_eq(&"b", None), Ok(false));
	assert_eq!(map.remove_if_eq(&"a", None), Ok(true));
	assert!(map.is_empty());
}

#[test]
pub fn read_only() {
	let mut map: OrderedMap<_, _> = vec![("a", 1), ("b", 2)].into_iter().collect();
	map = map.freeze();
	assert!(map.config().is_read_only());

	assert_eq!(map.put("c", 3), Err(Error::UnsupportedOperation("put")));
	assert_eq!(map.remove(&"a"), Err(Error::UnsupportedOperation("remove")));
	assert_eq!(map.clear(), Err(Error::UnsupportedOperation("clear")));

	// no-op mutations are rejected as well.
	assert_eq!(map.remove(&"z"), Err(Error::UnsupportedOperation("remove")));
	assert!(matches!(
		map.key_set_mut().retain(|_| true),
		Err(Error::UnsupportedOperation(_))
	));

	assert!(matches!(
		map.merge("a", 1, |a, b| Some(a + b)),
		Err(Error::UnsupportedOperation(_))
	));

	for mut entry in map.iter_mut() {
		assert_eq!(entry.set_value(0), Err(Error::UnsupportedOperation("set_value")));
	}

	// queries still work.
	assert_eq!(map.len(), 2);
	assert_eq!(map.get(&"a"), Some(&1));
	assert_eq!(map.get_or_default(&"z", &0), Some(&0));
	assert_eq!(map.put_if_absent("a", 5), Ok(Some(&1)));
}

#[test]
pub fn read_only_config() {
	let mut map: HashedMap<i32, i32> = HashedMap::with_config(Config::new().read_only());
	assert_eq!(map.put(1, 1), Err(Error::UnsupportedOperation("put")));
	assert_eq!(map.replace(1, 1), Ok(None));
}

#[test]
pub fn invalid_argument_type() {
	#[derive(Debug, PartialEq)]
	enum Key {
		Name(String),
		Index(usize),
	}

	let config = Config::new().check_key(|k: &Key| match k {
		Key::Name(_) => Ok(()),
		Key::Index(_) => Err(Error::invalid_type("keys must be names")),
	});

	let mut map = LinkedMap::with_config(config);
	assert!(matches!(
		map.put(Key::Index(0), 1),
		Err(Error::InvalidArgumentType(_))
	));
	assert!(map.is_empty());

	map.put(Key::Name("a".to_string()), 1).unwrap();
	assert_eq!(map.get(&Key::Name("a".to_string())), Some(&1));

	// lookups are not validated.
	assert_eq!(map.get(&Key::Index(0)), None);
}

#[test]
pub fn value_validator() {
	let config = Config::new().check_value(|v: &String| {
		if v.is_empty() {
			Err(Error::illegal_argument("empty value"))
		} else {
			Ok(())
		}
	});

	let mut map = HashedMap::with_config(config);
	assert_eq!(map.put(1, String::new()), Err(Error::illegal_argument("empty value")));
	assert_eq!(map.put(1, "one".to_string()), Ok(None));
	assert!(matches!(
		map.replace(1, String::new()),
		Err(Error::IllegalArgument(_))
	));
	assert_eq!(map.get(&1).map(String::as_str), Some("one"));
}

#[test]
pub fn check_order() {
	let config = Config::new()
		.read_only()
		.check_key(|_: &i32| Err(Error::illegal_argument("key")));
	let mut map: OrderedMap<i32, i32> = OrderedMap::with_config(config);
	assert_eq!(map.put(1, 1), Err(Error::UnsupportedOperation("put")));

	let config = Config::new()
		.check_key(|_: &i32| Err(Error::illegal_argument("key")))
		.check_value(|_: &i32| Err(Error::illegal_argument("value")));
	let mut map: OrderedMap<i32, i32> = OrderedMap::with_config(config);
	assert_eq!(map.put(1, 1), Err(Error::illegal_argument("key")));

	let config = Config::new()
		.capacity(0)
		.check_value(|_: &i32| Err(Error::illegal_argument("value")));
	let mut map: OrderedMap<i32, i32> = OrderedMap::with_config(config);
	assert_eq!(map.put(1, 1), Err(Error::illegal_argument("value")));
	assert_eq!(map.put_option(1, None), Err(Error::RejectedNull));
}

#[test]
pub fn capacity() {
	let mut map: LinkedMap<i32, i32> = LinkedMap::with_config(Config::new().capacity(2));
	assert_eq!(map.config().max_len(), Some(2));

	map.put(1, 1).unwrap();
	map.put(2, 2).unwrap();
	assert!(matches!(map.put(3, 3), Err(Error::IllegalArgument(_))));

	// overwriting never grows the map.
	assert_eq!(map.put(2, 20), Ok(Some(2)));

	map.remove(&1).unwrap();
	assert_eq!(map.put(3, 3), Ok(None));
	assert_eq!(map.len(), 2);
}

#[test]
pub fn error_display() {
	assert_eq!(
		Error::UnsupportedOperation("put").to_string(),
		"unsupported operation `put`"
	);
	assert_eq!(
		Error::illegal_argument("capacity of 2 mappings exceeded").to_string(),
		"illegal argument: capacity of 2 mappings exceeded"
	);
}
