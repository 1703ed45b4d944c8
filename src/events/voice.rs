//! Voice connection events.

use crate::{
    app::App,
    error::FactoryError,
    factory::EntityFactory,
    types::{
        id::{marker::GuildMarker, Id},
        util::{payload::PayloadExt, Payload},
        voice::VoiceState,
    },
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoiceStateUpdateEvent {
    pub state: VoiceState,
}

/// Connection details for the voice server of a guild.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoiceServerUpdateEvent {
    pub app: App,
    pub token: String,
    pub guild_id: Id<GuildMarker>,
    pub endpoint: String,
}

impl EntityFactory {
    pub fn deserialize_voice_state_update_event(
        &self,
        payload: &Payload,
    ) -> Result<VoiceStateUpdateEvent, FactoryError> {
        Ok(VoiceStateUpdateEvent {
            state: self.deserialize_voice_state(payload)?,
        })
    }

    pub fn deserialize_voice_server_update_event(
        &self,
        payload: &Payload,
    ) -> Result<VoiceServerUpdateEvent, FactoryError> {
        Ok(VoiceServerUpdateEvent {
            app: self.app().clone(),
            token: payload.required("token")?,
            guild_id: payload.id("guild_id")?,
            endpoint: payload.required("endpoint")?,
        })
    }
}
