#![recursion_limit = "256"]

//! Typed entities and events from raw chat-platform payloads.
//!
//! The [`EntityFactory`] turns JSON objects received over REST or the gateway
//! into strongly typed entities, and turns outgoing embeds back into a wire
//! payload plus the binary files that must be uploaded with it. Gateway
//! dispatches are turned into [`Event`]s by name.
//!
//! ```
//! use discord_entity_factory::{App, AppContext, EntityFactory};
//! use serde_json::json;
//!
//! #[derive(Debug)]
//! struct Bot;
//!
//! impl AppContext for Bot {}
//!
//! let factory = EntityFactory::new(App::new(Bot));
//! let payload = json!({
//!     "id": "80351110224678912",
//!     "username": "Nelly",
//!     "discriminator": "1337",
//! });
//! let user = factory.deserialize_user(payload.as_object().unwrap()).unwrap();
//! assert_eq!(user.id, 80351110224678912);
//! ```
//!
//! The crate does no I/O and holds no caches; it only converts data.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod factory;
pub mod types;

pub use self::{
    app::{App, AppContext, Shard, ShardContext},
    config::FactoryConfig,
    error::{FactoryError, FactoryErrorType},
    events::Event,
    factory::{EntityFactory, SerializedEmbed},
};
