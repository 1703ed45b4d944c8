//! Type-safe snowflake identifiers.
//!
//! The platform transports every identifier as the decimal text of an
//! unsigned 64-bit integer. [`Id::parse`] is strict about that form: no
//! signs, no whitespace, no empty strings and nothing that overflows.

pub mod marker;

use crate::error::FactoryError;
use chrono::{DateTime, Utc};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Unexpected, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

/// Milliseconds between the Unix epoch and the first second of 2015, the
/// epoch snowflake timestamps count from.
pub const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Number of low bits of a snowflake that don't encode the timestamp.
const TIMESTAMP_SHIFT: u32 = 22;

/// Parse the decimal text of a snowflake.
///
/// # Errors
///
/// Returns a [`MalformedIdentifier`] error if the text is empty, contains
/// anything other than ASCII digits, or doesn't fit in a `u64`.
///
/// [`MalformedIdentifier`]: crate::error::FactoryErrorType::MalformedIdentifier
pub fn parse_snowflake(text: &str) -> Result<u64, FactoryError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FactoryError::malformed_identifier(text));
    }

    text.parse()
        .map_err(|_| FactoryError::malformed_identifier(text))
}

/// Format a snowflake as its canonical decimal text.
pub fn format_snowflake(value: u64) -> String {
    value.to_string()
}

/// ID of a resource, such as the ID of a [channel] or [user].
///
/// Markers themselves perform no logical action, and are only used to
/// ensure that IDs of incorrect types aren't used.
///
/// [channel]: marker::ChannelMarker
/// [user]: marker::UserMarker
pub struct Id<T> {
    phantom: PhantomData<fn(T) -> T>,
    value: u64,
}

impl<T> Id<T> {
    /// Create an ID from a raw integer.
    pub const fn new(value: u64) -> Self {
        Self {
            phantom: PhantomData,
            value,
        }
    }

    /// Parse an ID from its decimal wire form.
    ///
    /// # Errors
    ///
    /// See [`parse_snowflake`].
    pub fn parse(text: &str) -> Result<Self, FactoryError> {
        parse_snowflake(text).map(Self::new)
    }

    /// Return the inner primitive value.
    pub const fn get(self) -> u64 {
        self.value
    }

    /// Cast an ID from one type to another.
    pub const fn cast<New>(self) -> Id<New> {
        Id::new(self.value)
    }

    /// Time at which the identified resource was created.
    ///
    /// Returns `None` if the encoded timestamp is out of range.
    pub fn created_at(self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.value >> TIMESTAMP_SHIFT).ok()?;
        DateTime::from_timestamp_millis(millis.checked_add(DISCORD_EPOCH_MS)?)
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Id")?;
        let type_name = std::any::type_name::<T>();

        // `type_name` output is unspecified but is a path ending in the marker.
        if let Some(position) = type_name.rfind("::") {
            if let Some(slice) = type_name.get(position + 2..) {
                f.write_str("<")?;
                f.write_str(slice)?;
                f.write_str(">")?;
            }
        }

        f.write_str("(")?;
        Display::fmt(&self.value, f)?;
        f.write_str(")")
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)
    }
}

impl<T> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for u64 {
    fn from(id: Id<T>) -> Self {
        id.get()
    }
}

impl<T> FromStr for Id<T> {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> PartialEq<u64> for Id<T> {
    fn eq(&self, other: &u64) -> bool {
        self.value == *other
    }
}

impl<T> Hash for Id<T> {
    fn hash<U: Hasher>(&self, state: &mut U) {
        state.write_u64(self.value);
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor<T> {
            phantom: PhantomData<T>,
        }

        impl<T> Visitor<'_> for IdVisitor<T> {
            type Value = Id<T>;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("a snowflake as a decimal string or integer")
            }

            fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Id::new(value))
            }

            fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
                u64::try_from(value)
                    .map(Id::new)
                    .map_err(|_| DeError::invalid_value(Unexpected::Signed(value), &self))
            }

            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                Id::parse(value).map_err(|_| DeError::invalid_value(Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(IdVisitor {
            phantom: PhantomData,
        })
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        format_snowflake, marker::{ChannelMarker, GuildMarker, UserMarker}, parse_snowflake, Id,
    };
    use crate::error::FactoryErrorType;
    use serde_test::Token;
    use static_assertions::assert_impl_all;
    use std::{fmt::Debug, hash::Hash};

    assert_impl_all!(Id<GuildMarker>: Clone, Copy, Debug, Eq, Hash, Ord, Send, Sync);

    #[test]
    fn parse_accepts_canonical_decimal() {
        assert_eq!(parse_snowflake("0").unwrap(), 0);
        assert_eq!(parse_snowflake("115590097100865541").unwrap(), 115_590_097_100_865_541);
        assert_eq!(parse_snowflake("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn parse_rejects_non_canonical_text() {
        for text in ["", "+1", "-1", " 1", "1 ", "12a", "1.0", "18446744073709551616"] {
            let error = parse_snowflake(text).unwrap_err();
            assert_eq!(
                error.kind(),
                &FactoryErrorType::MalformedIdentifier {
                    value: text.to_owned()
                },
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn format_is_plain_decimal() {
        assert_eq!(format_snowflake(0), "0");
        assert_eq!(format_snowflake(u64::MAX), "18446744073709551615");
        assert_eq!(Id::<UserMarker>::new(42).to_string(), "42");
    }

    #[test]
    fn debug_names_the_marker() {
        assert_eq!(
            format!("{:?}", Id::<ChannelMarker>::new(7)),
            "Id<ChannelMarker>(7)"
        );
    }

    #[test]
    fn created_at_uses_platform_epoch() {
        let id = Id::<UserMarker>::new(175_928_847_299_117_063);
        let created = id.created_at().unwrap();
        assert_eq!(created.timestamp_millis(), 1_462_015_105_796);
    }

    #[test]
    fn serde_accepts_string_and_integer() {
        let id = Id::<GuildMarker>::new(114_941_315_417_899_012);

        serde_test::assert_tokens(&id, &[Token::Str("114941315417899012")]);
        serde_test::assert_de_tokens(&id, &[Token::U64(114_941_315_417_899_012)]);
    }
}
