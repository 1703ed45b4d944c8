//! Typed access to raw JSON payloads.
//!
//! Every entity deserializer reads its payload through [`PayloadExt`], which
//! applies one of three optional-field policies per key:
//!
//! - *required*: a missing key or `null` is a schema violation;
//! - *nullable*: a missing key and `null` both become `None`;
//! - *tri-state*: a missing key, `null` and a value stay distinct as a
//!   [`Field`].

use super::{datetime, Field};
use crate::{error::FactoryError, types::id::Id};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A raw JSON object as received from the platform.
pub type Payload = Map<String, Value>;

/// Deserialize a value with serde, reporting failures against `key`.
pub(crate) fn decode<T: DeserializeOwned>(
    key: &'static str,
    value: &Value,
) -> Result<T, FactoryError> {
    T::deserialize(value).map_err(|source| FactoryError::schema(key, source))
}

/// View a value as a JSON object.
pub(crate) fn as_payload<'a>(
    key: &'static str,
    value: &'a Value,
) -> Result<&'a Payload, FactoryError> {
    value
        .as_object()
        .ok_or_else(|| FactoryError::invalid(key, format!("expected an object, got {value}")))
}

/// Decode an identifier from its decimal string form.
pub(crate) fn decode_id<M>(key: &'static str, value: &Value) -> Result<Id<M>, FactoryError> {
    match value {
        Value::String(text) => Id::parse(text).map_err(|error| error.in_field(key)),
        Value::Number(number) => number
            .as_u64()
            .map(Id::new)
            .ok_or_else(|| FactoryError::malformed_identifier(number.to_string()).in_field(key)),
        other => Err(FactoryError::invalid(
            key,
            format!("expected a snowflake string, got {other}"),
        )),
    }
}

/// Decode an ISO 8601 timestamp.
pub(crate) fn decode_timestamp(
    key: &'static str,
    value: &Value,
) -> Result<DateTime<Utc>, FactoryError> {
    let text = value.as_str().ok_or_else(|| {
        FactoryError::invalid(key, format!("expected a timestamp string, got {value}"))
    })?;

    datetime::parse_iso8601(text).map_err(|error| error.in_field(key))
}

/// Decode an unsigned integer sent either as a number or as decimal text.
pub(crate) fn decode_string_int(key: &'static str, value: &Value) -> Result<u64, FactoryError> {
    match value {
        Value::Number(number) => number.as_u64().ok_or_else(|| {
            FactoryError::invalid(key, format!("expected an unsigned integer, got {number}"))
        }),
        Value::String(text) => text
            .parse()
            .map_err(|source| FactoryError::schema(key, source)),
        other => Err(FactoryError::invalid(
            key,
            format!("expected an integer or integer string, got {other}"),
        )),
    }
}

/// Field accessors for [`Payload`].
pub(crate) trait PayloadExt {
    /// Look a key up without applying any policy.
    fn raw(&self, key: &'static str) -> Field<&Value>;

    /// Apply the *required* policy and convert with `f`.
    fn require_with<'a, T>(
        &'a self,
        key: &'static str,
        f: impl FnOnce(&'static str, &'a Value) -> Result<T, FactoryError>,
    ) -> Result<T, FactoryError> {
        match self.raw(key) {
            Field::Value(value) => f(key, value),
            Field::Absent | Field::Null => Err(FactoryError::missing(key)),
        }
    }

    /// Apply the *nullable* policy and convert with `f`.
    fn nullable_with<'a, T>(
        &'a self,
        key: &'static str,
        f: impl FnOnce(&'static str, &'a Value) -> Result<T, FactoryError>,
    ) -> Result<Option<T>, FactoryError> {
        self.raw(key).value().map(|value| f(key, value)).transpose()
    }

    /// Apply the *tri-state* policy and convert with `f`.
    fn tristate_with<'a, T>(
        &'a self,
        key: &'static str,
        f: impl FnOnce(&'static str, &'a Value) -> Result<T, FactoryError>,
    ) -> Result<Field<T>, FactoryError> {
        self.raw(key).try_map(|value| f(key, value))
    }

    fn required<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, FactoryError> {
        self.require_with(key, decode)
    }

    fn nullable<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, FactoryError> {
        self.nullable_with(key, decode)
    }

    fn tristate<T: DeserializeOwned>(&self, key: &'static str) -> Result<Field<T>, FactoryError> {
        self.tristate_with(key, decode)
    }

    /// A value that falls back to its default when missing or null.
    fn or_default<T: DeserializeOwned + Default>(
        &self,
        key: &'static str,
    ) -> Result<T, FactoryError> {
        Ok(self.nullable(key)?.unwrap_or_default())
    }

    fn id<M>(&self, key: &'static str) -> Result<Id<M>, FactoryError> {
        self.require_with(key, decode_id)
    }

    fn nullable_id<M>(&self, key: &'static str) -> Result<Option<Id<M>>, FactoryError> {
        self.nullable_with(key, decode_id)
    }

    fn tristate_id<M>(&self, key: &'static str) -> Result<Field<Id<M>>, FactoryError> {
        self.tristate_with(key, decode_id)
    }

    /// An array of identifiers collected into a set; missing or null is empty.
    fn id_set<M>(&self, key: &'static str) -> Result<HashSet<Id<M>>, FactoryError> {
        Ok(self.nullable_with(key, decode_id_set)?.unwrap_or_default())
    }

    fn object(&self, key: &'static str) -> Result<&Payload, FactoryError> {
        self.require_with(key, as_payload)
    }

    fn nullable_object(&self, key: &'static str) -> Result<Option<&Payload>, FactoryError> {
        self.nullable_with(key, as_payload)
    }

    fn tristate_object(&self, key: &'static str) -> Result<Field<&Payload>, FactoryError> {
        self.tristate_with(key, as_payload)
    }

    /// An array of objects; missing or null is empty.
    fn objects(&self, key: &'static str) -> Result<Vec<&Payload>, FactoryError> {
        Ok(self.nullable_with(key, as_payloads)?.unwrap_or_default())
    }

    fn tristate_objects(&self, key: &'static str) -> Result<Field<Vec<&Payload>>, FactoryError> {
        self.tristate_with(key, as_payloads)
    }

    fn timestamp(&self, key: &'static str) -> Result<DateTime<Utc>, FactoryError> {
        self.require_with(key, decode_timestamp)
    }

    fn nullable_timestamp(&self, key: &'static str) -> Result<Option<DateTime<Utc>>, FactoryError> {
        self.nullable_with(key, decode_timestamp)
    }

    fn tristate_timestamp(&self, key: &'static str) -> Result<Field<DateTime<Utc>>, FactoryError> {
        self.tristate_with(key, decode_timestamp)
    }

    fn string_int(&self, key: &'static str) -> Result<u64, FactoryError> {
        self.require_with(key, decode_string_int)
    }
}

impl PayloadExt for Payload {
    fn raw(&self, key: &'static str) -> Field<&Value> {
        match self.get(key) {
            None => Field::Absent,
            Some(Value::Null) => Field::Null,
            Some(value) => Field::Value(value),
        }
    }
}

fn as_array<'a>(key: &'static str, value: &'a Value) -> Result<&'a Vec<Value>, FactoryError> {
    value
        .as_array()
        .ok_or_else(|| FactoryError::invalid(key, format!("expected an array, got {value}")))
}

/// View a value as an array of JSON objects.
pub(crate) fn as_payloads<'a>(
    key: &'static str,
    value: &'a Value,
) -> Result<Vec<&'a Payload>, FactoryError> {
    as_array(key, value)?
        .iter()
        .map(|item| as_payload(key, item))
        .collect()
}

pub(crate) fn decode_id_set<M>(
    key: &'static str,
    value: &Value,
) -> Result<HashSet<Id<M>>, FactoryError> {
    as_array(key, value)?
        .iter()
        .map(|item| decode_id(key, item))
        .collect()
}
