//! Conversion of raw payloads into typed entities.
//!
//! [`EntityFactory`] carries the application handle every entity is stamped
//! with, plus its [`FactoryConfig`]. It holds no other state, so one factory
//! can be shared freely between threads.
//!
//! Each entity family lives in its own submodule as an `impl EntityFactory`
//! block. Every `deserialize_*` method reads a [`Payload`] and returns
//! `Result<_, FactoryError>`; nothing here panics on malformed input.
//!
//! [`Payload`]: crate::types::util::Payload
//! [`FactoryError`]: crate::error::FactoryError

mod audit_log;
mod channel;
mod embed;
mod emoji;
mod gateway;
mod guild;
mod invite;
mod message;
mod oauth;
mod presence;
mod user;
mod voice;
mod webhook;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::embed::SerializedEmbed;

use crate::{
    app::App,
    config::FactoryConfig,
    error::FactoryError,
    types::{
        guild::Permissions,
        util::{payload::decode_string_int, to_id_map, IdMap, Payload, Unique},
    },
};
use serde_json::Value;

/// Builds entities from payloads, attaching the application handle.
#[derive(Clone, Debug)]
pub struct EntityFactory {
    app: App,
    config: FactoryConfig,
}

impl EntityFactory {
    /// Create a factory with the default configuration.
    pub fn new(app: App) -> Self {
        Self::with_config(app, FactoryConfig::default())
    }

    pub fn with_config(app: App, config: FactoryConfig) -> Self {
        Self { app, config }
    }

    /// Handle attached to every entity this factory builds.
    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }
}

/// Permission bits, sent as an integer or as decimal text.
pub(crate) fn decode_permissions(
    key: &'static str,
    value: &Value,
) -> Result<Permissions, FactoryError> {
    decode_string_int(key, value).map(Permissions::from_bits_retain)
}

/// Deserialize each payload with `f` and key the results by id.
pub(crate) fn collect_id_map<'a, E: Unique>(
    payloads: impl IntoIterator<Item = &'a Payload>,
    f: impl FnMut(&'a Payload) -> Result<E, FactoryError>,
) -> Result<IdMap<E::Marker, E>, FactoryError> {
    let entities = payloads.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;
    Ok(to_id_map(entities))
}
