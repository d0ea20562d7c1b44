//! serde-stringify: serialize string-convertible types as JSON strings.
//!
//! Any type with the conventional `FromStr` + `Display` pair (or a manual
//! [`Stringify`] impl) can be encoded as a single JSON string instead of a
//! structured value, and used as a JSON object key. See [`as_string`] and
//! [`key_map`] for `#[serde(with = ...)]` usage, [`Stringified`] for the
//! wrapper form, and [`value`] for working with in-memory JSON trees.

pub mod as_string;
pub mod convert;
pub mod errors;
pub mod key_map;
pub mod value;
pub mod wrapper;

pub use convert::Stringify;
pub use errors::{Result, StringifyError};
pub use wrapper::Stringified;
