//! Serde with-module: encode a field through its text form as a JSON string.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use std::net::Ipv4Addr;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Host {
//!     #[serde(with = "serde_stringify::as_string")]
//!     addr: Ipv4Addr,
//! }
//!
//! let host = Host { addr: Ipv4Addr::LOCALHOST };
//! assert_eq!(serde_json::to_string(&host).unwrap(), r#"{"addr":"127.0.0.1"}"#);
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::{de, Deserializer, Serializer};

use crate::convert::Stringify;

/// Emit `value.to_text()` as a single JSON string token.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Stringify,
    S: Serializer,
{
    serializer.serialize_str(&value.to_text())
}

/// Decode a JSON string token and invoke the type's string constructor.
///
/// Any token other than a string is rejected with the deserializer's own
/// type-mismatch error; no coercion from numbers, booleans, or structured
/// values is attempted.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Stringify,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(TextVisitor(PhantomData))
}

struct TextVisitor<T>(PhantomData<T>);

impl<'de, T: Stringify> de::Visitor<'de> for TextVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a string convertible to {}",
            std::any::type_name::<T>()
        )
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<T, E> {
        T::from_text(text).map_err(E::custom)
    }
}
