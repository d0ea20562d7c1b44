//! Serde with-module: encode a map keyed by string-convertible values as a
//! plain JSON object.
//!
//! serde_json refuses maps whose keys are not strings. This module bridges
//! that gap for any key type with the [`Stringify`] capability: member names
//! are the keys' text forms, written in the mapping's own iteration order.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use std::collections::BTreeMap;
//! use std::net::Ipv4Addr;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Leases {
//!     #[serde(with = "serde_stringify::key_map")]
//!     by_addr: BTreeMap<Ipv4Addr, String>,
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serializer};

use crate::convert::Stringify;

/// Emit a JSON object whose member names are the keys' text forms, in the
/// mapping's iteration order.
pub fn serialize<'a, M, K, V, S>(map: &'a M, serializer: S) -> Result<S::Ok, S::Error>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Stringify + 'a,
    V: serde::Serialize + 'a,
    S: Serializer,
{
    let mut out = serializer.serialize_map(None)?;
    for (key, value) in map {
        out.serialize_entry(&key.to_text(), value)?;
    }
    out.end()
}

/// Rebuild a mapping from a JSON object, reconstructing each key from its
/// member name in document order. A key the constructor rejects fails the
/// whole read.
pub fn deserialize<'de, M, K, V, D>(deserializer: D) -> Result<M, D::Error>
where
    M: FromIterator<(K, V)>,
    K: Stringify,
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(KeyMapVisitor(PhantomData))
}

struct KeyMapVisitor<M, K, V>(PhantomData<(M, K, V)>);

impl<'de, M, K, V> Visitor<'de> for KeyMapVisitor<M, K, V>
where
    M: FromIterator<(K, V)>,
    K: Stringify,
    V: Deserialize<'de>,
{
    type Value = M;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with string-convertible member names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<M, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(name) = access.next_key::<String>()? {
            let key = K::from_text(&name).map_err(de::Error::custom)?;
            let value = access.next_value::<V>()?;
            entries.push((key, value));
        }
        Ok(entries.into_iter().collect())
    }
}
