use std::fmt::Display;
use std::str::FromStr;

use crate::errors::{Result, StringifyError};

/// Capability for types that convert to and from a plain string.
///
/// Implementing this trait makes a type eligible for the string encoding:
/// it serializes as a single JSON string (and as a JSON object key) instead
/// of as a structured value. Every type with the conventional
/// `FromStr` + `Display` pair gets the capability automatically through the
/// blanket impl below; types without `FromStr` can implement the trait
/// directly.
pub trait Stringify: Sized {
    /// Construct a value from its text form.
    fn from_text(text: &str) -> Result<Self>;

    /// The canonical text form of this value. No normalization is applied;
    /// whatever the type prints is what lands in the JSON document.
    fn to_text(&self) -> String;
}

impl<T> Stringify for T
where
    T: FromStr + Display,
    <T as FromStr>::Err: Display,
{
    fn from_text(text: &str) -> Result<Self> {
        text.parse::<T>().map_err(|e| StringifyError::Parse {
            type_name: std::any::type_name::<T>(),
            text: text.to_string(),
            message: e.to_string(),
        })
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}
