//! Tri-state payload fields.

/// A field that distinguishes "not sent" from "sent as null".
///
/// Partial entities (update events, presence users) use this so a consumer
/// can tell "unchanged" ([`Absent`]) apart from "cleared" ([`Null`]).
///
/// [`Absent`]: Self::Absent
/// [`Null`]: Self::Null
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Field<T> {
    /// The key wasn't present in the payload.
    #[default]
    Absent,
    /// The key was present with an explicit `null`.
    Null,
    /// The key was present with a value.
    Value(T),
}

impl<T> Field<T> {
    /// Whether the key was missing.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the key was explicitly null.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the key carried a value.
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrow the inner value.
    pub const fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(value) => Field::Value(value),
        }
    }

    /// The value if there is one, collapsing absent and null.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// `None` if absent, otherwise whether the key was set to null or a value.
    pub fn into_nullable(self) -> Option<Option<T>> {
        match self {
            Self::Absent => None,
            Self::Null => Some(None),
            Self::Value(value) => Some(Some(value)),
        }
    }

    /// Map the inner value, keeping absent and null as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(value) => Field::Value(f(value)),
        }
    }

    /// Map the inner value with a fallible conversion.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `f`.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Field<U>, E> {
        Ok(match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(value) => Field::Value(f(value)?),
        })
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

#[cfg(test)]
mod tests {
    use super::Field;

    #[test]
    fn absent_null_and_value_stay_distinct() {
        assert_ne!(Field::<u8>::Absent, Field::Null);
        assert_eq!(Field::<u8>::default(), Field::Absent);
        assert_eq!(Field::Value(3).into_nullable(), Some(Some(3)));
        assert_eq!(Field::<u8>::Null.into_nullable(), Some(None));
        assert_eq!(Field::<u8>::Absent.into_nullable(), None);
    }

    #[test]
    fn try_map_only_touches_values() {
        let parsed: Result<Field<u32>, std::num::ParseIntError> =
            Field::Value("12").try_map(str::parse);
        assert_eq!(parsed.unwrap(), Field::Value(12));

        let untouched: Result<Field<u32>, std::num::ParseIntError> =
            Field::<&str>::Null.try_map(str::parse);
        assert_eq!(untouched.unwrap(), Field::Null);
    }
}
