//! Error returned when a payload can't be converted into an entity.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Reason that a payload couldn't be converted.
///
/// Unknown enumeration values and unknown flag bits are never errors; they
/// are preserved on the resulting entity instead.
#[derive(Debug)]
pub struct FactoryError {
    /// Type of error that occurred.
    kind: FactoryErrorType,
    /// Payload key being read when the error occurred, if known.
    field: Option<&'static str>,
    /// Source of the error, if there is any.
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl FactoryError {
    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &FactoryErrorType {
        &self.kind
    }

    /// Payload key being read when the error occurred.
    #[must_use = "retrieving the field has no effect if left unused"]
    pub const fn field(&self) -> Option<&'static str> {
        self.field
    }

    /// Consume the error, returning the source error if there is any.
    #[must_use = "consuming the error and retrieving the source has no effect if left unused"]
    pub fn into_source(self) -> Option<Box<dyn Error + Send + Sync>> {
        self.source
    }

    /// Consume the error, returning the owned error type and the source error.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (FactoryErrorType, Option<Box<dyn Error + Send + Sync>>) {
        (self.kind, self.source)
    }

    /// Identifier text that isn't a canonical base-10 unsigned 64-bit integer.
    pub(crate) fn malformed_identifier(value: impl Into<String>) -> Self {
        Self {
            kind: FactoryErrorType::MalformedIdentifier {
                value: value.into(),
            },
            field: None,
            source: None,
        }
    }

    /// A required key is missing from the payload.
    pub(crate) fn missing(field: &'static str) -> Self {
        Self {
            kind: FactoryErrorType::SchemaViolation,
            field: Some(field),
            source: None,
        }
    }

    /// A value has the wrong shape, with the error that reported it.
    pub(crate) fn schema(field: &'static str, source: impl Error + Send + Sync + 'static) -> Self {
        Self {
            kind: FactoryErrorType::SchemaViolation,
            field: Some(field),
            source: Some(Box::new(source)),
        }
    }

    /// A value has the wrong shape, described by a message.
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        let message: String = message.into();

        Self {
            kind: FactoryErrorType::SchemaViolation,
            field: Some(field),
            source: Some(message.into()),
        }
    }

    /// A value is unusable, before the key it was read from is known.
    ///
    /// The caller attaches the key with [`in_field`](Self::in_field).
    pub(crate) fn invalid_value(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            kind: FactoryErrorType::SchemaViolation,
            field: None,
            source: Some(source.into()),
        }
    }

    /// Attach the payload key unless a more specific one is already known.
    pub(crate) fn in_field(mut self, field: &'static str) -> Self {
        self.field.get_or_insert(field);
        self
    }
}

impl Display for FactoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            FactoryErrorType::MalformedIdentifier { value } => {
                write!(f, "malformed identifier {value:?}")?;
            }
            FactoryErrorType::SchemaViolation => f.write_str("payload violates the entity schema")?,
        }

        if let Some(field) = self.field {
            write!(f, " at `{field}`")?;
        }

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl Error for FactoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

/// Type of [`FactoryError`] that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FactoryErrorType {
    /// An identifier wasn't a base-10 unsigned 64-bit integer.
    MalformedIdentifier {
        /// Offending text.
        value: String,
    },
    /// A required key was missing, or a value had the wrong shape.
    SchemaViolation,
}

#[cfg(test)]
mod tests {
    use super::{FactoryError, FactoryErrorType};
    use static_assertions::assert_impl_all;
    use std::{error::Error, fmt::Debug};

    assert_impl_all!(FactoryErrorType: Debug, Send, Sync);
    assert_impl_all!(FactoryError: Error, Send, Sync);

    #[test]
    fn display_includes_field_and_source() {
        let error = FactoryError::invalid("type", "unsupported channel type 13");
        assert_eq!(
            error.to_string(),
            "payload violates the entity schema at `type`: unsupported channel type 13"
        );
    }

    #[test]
    fn value_errors_take_the_caller_field() {
        let error = FactoryError::invalid_value("out of range").in_field("joined_at");
        assert_eq!(error.field(), Some("joined_at"));
        assert_eq!(
            error.to_string(),
            "payload violates the entity schema at `joined_at`: out of range"
        );
    }

    #[test]
    fn first_field_context_wins() {
        let error = FactoryError::malformed_identifier("12a")
            .in_field("id")
            .in_field("guild");
        assert_eq!(error.field(), Some("id"));
        assert_eq!(
            error.kind(),
            &FactoryErrorType::MalformedIdentifier {
                value: "12a".to_owned()
            }
        );
    }
}
