//! Session lifecycle events.

use crate::{
    app::{App, Shard},
    error::FactoryError,
    factory::{collect_id_map, EntityFactory},
    types::{
        guild::UnavailableGuild,
        id::marker::GuildMarker,
        user::OwnUser,
        util::{payload::PayloadExt, IdMap, Payload},
    },
};

/// The shard finished identifying with the gateway.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReadyEvent {
    pub app: App,
    /// Shard the session was opened on.
    pub shard: Shard,
    pub gateway_version: u64,
    pub my_user: OwnUser,
    /// Guilds the user is in; their full data follows in guild create events.
    pub unavailable_guilds: IdMap<GuildMarker, UnavailableGuild>,
    /// Used to resume the session after a disconnect.
    pub session_id: String,
    pub shard_id: Option<u64>,
    pub shard_count: Option<u64>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnUserUpdateEvent {
    pub my_user: OwnUser,
}

impl EntityFactory {
    /// Parse the session details sent once a shard is ready.
    ///
    /// `shard` is attached to the event as given.
    pub fn deserialize_ready_event(
        &self,
        shard: &Shard,
        payload: &Payload,
    ) -> Result<ReadyEvent, FactoryError> {
        let shard_info = payload.nullable::<[u64; 2]>("shard")?;

        Ok(ReadyEvent {
            app: self.app().clone(),
            shard: shard.clone(),
            gateway_version: payload.required("v")?,
            my_user: self.deserialize_my_user(payload.object("user")?)?,
            unavailable_guilds: collect_id_map(payload.objects("guilds")?, |guild| {
                self.deserialize_unavailable_guild(guild)
            })?,
            session_id: payload.required("session_id")?,
            shard_id: shard_info.map(|[id, _]| id),
            shard_count: shard_info.map(|[_, count]| count),
        })
    }

    pub fn deserialize_own_user_update_event(
        &self,
        payload: &Payload,
    ) -> Result<OwnUserUpdateEvent, FactoryError> {
        Ok(OwnUserUpdateEvent {
            my_user: self.deserialize_my_user(payload)?,
        })
    }
}
