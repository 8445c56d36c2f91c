use crate::{storage::Storage, Container, Map};
use serde::{
	de::{self, MapAccess, Visitor},
	ser::SerializeMap,
	Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, marker::PhantomData};

/// Serialized as a map, in iteration order. Absent-like values are serialized
/// as `None`. The configuration is not serialized.
impl<K: Serialize, V: Serialize, S: Storage<K, V>> Serialize for Container<K, V, S> {
	fn serialize<Z>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error>
	where
		Z: Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (key, value) in self.iter() {
			map.serialize_entry(key, &value)?;
		}

		map.end()
	}
}

struct ContainerVisitor<K, V, S> {
	k: PhantomData<K>,
	v: PhantomData<V>,
	s: PhantomData<S>,
}

impl<'de, K, V, S> Visitor<'de> for ContainerVisitor<K, V, S>
where
	K: Deserialize<'de>,
	V: Deserialize<'de>,
	S: Storage<K, V> + Default,
{
	type Value = Container<K, V, S>;

	fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
		formatter.write_str("a map")
	}

	fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut map = Container::new();
		while let Some((key, value)) = access.next_entry::<K, Option<V>>()? {
			map.put_option(key, value).map_err(de::Error::custom)?;
		}

		Ok(map)
	}
}

/// Deserialized into a container with the default configuration: absent-like
/// values are rejected.
impl<'de, K, V, S> Deserialize<'de> for Container<K, V, S>
where
	K: Deserialize<'de>,
	V: Deserialize<'de>,
	S: Storage<K, V> + Default,
{
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_map(ContainerVisitor {
			k: PhantomData,
			v: PhantomData,
			s: PhantomData,
		})
	}
}
