//! `Stringified<T>`: a transparent adapter that carries the string encoding
//! through serde's own type dispatch.
//!
//! Wrapping a value opts it into the string encoding without per-field
//! attributes, and makes it usable as a map key: serde_json serializes object
//! member names through the same string path, so `HashMap<Stringified<K>, V>`
//! becomes a plain JSON object.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::as_string;
use crate::convert::Stringify;
use crate::errors::StringifyError;

/// Adapter binding the string encoding to exactly one inner type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Stringified<T>(pub T);

impl<T> Stringified<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Unwrap the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Stringified<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Stringified<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Stringified<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> AsRef<T> for Stringified<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: Stringify> fmt::Display for Stringified<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_text())
    }
}

impl<T: Stringify> FromStr for Stringified<T> {
    type Err = StringifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        T::from_text(s).map(Self)
    }
}

impl<T: Stringify> Serialize for Stringified<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        as_string::serialize(&self.0, serializer)
    }
}

impl<'de, T: Stringify> Deserialize<'de> for Stringified<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        as_string::deserialize(deserializer).map(Self)
    }
}
