//! Utilities for reading payloads and representing their primitive values.

pub mod color;
pub mod datetime;
pub(crate) mod enums;
pub mod field;
pub mod id_map;
pub(crate) mod payload;
pub mod sentinel;

pub use self::{
    color::Color,
    field::Field,
    id_map::{to_id_map, IdMap, Unique},
    payload::Payload,
};

pub(crate) use self::{
    enums::{int_enum, str_enum},
    id_map::impl_unique,
};

// ---------------------------------------------------------------------------
// serde helpers
// ---------------------------------------------------------------------------

/// Extension trait on [`serde_json::Value`] providing `.deserialize_into()`
/// for leaf structures whose wire shape matches their model one to one.
pub(crate) trait ValueExt {
    /// Attempt to deserialize this value into `T`.
    fn deserialize_into<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error>;
}

impl ValueExt for serde_json::Value {
    fn deserialize_into<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(self)
    }
}

impl ValueExt for Payload {
    fn deserialize_into<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(serde_json::Value::Object(self.clone()))
    }
}
