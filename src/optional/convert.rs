//! Conversions between [`OptionalValue`] and the native `Option`.
//!
//! The two types have the same shape but are unrelated, so moving between
//! them is always an explicit call. Serialized forms are identical: absent
//! values are written as `null`, and a missing field reads back as absent.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::OptionalValue;

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => OptionalValue::Present(x),
            None => OptionalValue::Absent,
        }
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    fn from(value: OptionalValue<T>) -> Self {
        match value {
            OptionalValue::Present(x) => Some(x),
            OptionalValue::Absent => None,
        }
    }
}

/// Method-call form of `OptionalValue::from` for native options.
///
/// # Example
///
/// ```rust
/// use coalesce::{IntoOptionalValue, OptionalValue};
///
/// let configured: Option<u8> = Some(3);
/// assert_eq!(configured.into_optional_value(), OptionalValue::present(3));
/// ```
pub trait IntoOptionalValue<T> {
    /// Converts into an [`OptionalValue`].
    fn into_optional_value(self) -> OptionalValue<T>;
}

impl<T> IntoOptionalValue<T> for Option<T> {
    fn into_optional_value(self) -> OptionalValue<T> {
        OptionalValue::from(self)
    }
}

impl<T: Serialize> Serialize for OptionalValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionalValue::Present(value) => serializer.serialize_some(value),
            OptionalValue::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionalValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(OptionalValue::from)
    }
}
