use super::EntityFactory;
use crate::{
    error::FactoryError,
    types::{
        util::{payload::PayloadExt, Payload, ValueExt},
        voice::{VoiceRegion, VoiceState},
    },
};

impl EntityFactory {
    pub fn deserialize_voice_state(&self, payload: &Payload) -> Result<VoiceState, FactoryError> {
        let member = payload
            .nullable_object("member")?
            .map(|member| self.deserialize_member(member, None))
            .transpose()?;

        Ok(VoiceState {
            app: self.app.clone(),
            guild_id: payload.nullable_id("guild_id")?,
            channel_id: payload.nullable_id("channel_id")?,
            user_id: payload.id("user_id")?,
            member,
            session_id: payload.required("session_id")?,
            is_guild_deafened: payload.required("deaf")?,
            is_guild_muted: payload.required("mute")?,
            is_self_deafened: payload.required("self_deaf")?,
            is_self_muted: payload.required("self_mute")?,
            is_streaming: payload.or_default("self_stream")?,
            is_video_enabled: payload.required("self_video")?,
            is_suppressed: payload.required("suppress")?,
        })
    }

    pub fn deserialize_voice_region(&self, payload: &Payload) -> Result<VoiceRegion, FactoryError> {
        payload
            .deserialize_into()
            .map_err(|source| FactoryError::schema("voice_region", source))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::FactoryErrorType,
        factory::fixtures::{self, payload},
        types::id::Id,
    };
    use serde_json::json;

    #[test]
    fn voice_state() {
        let (factory, app) = fixtures::factory();
        let state = factory.deserialize_voice_state(&fixtures::voice_state()).unwrap();

        assert_eq!(state.app, app);
        assert_eq!(state.guild_id, Some(Id::new(929_292_929_292_992)));
        assert_eq!(state.channel_id, Some(Id::new(157_733_188_964_188_161)));
        assert_eq!(state.user_id, 80_351_110_224_678_912);
        assert_eq!(
            state.member,
            Some(factory.deserialize_member(&fixtures::member(), None).unwrap())
        );
        assert_eq!(state.session_id, "90326bd25d71d39b9ef95b299e3872ff");
        assert!(state.is_guild_deafened);
        assert!(state.is_guild_muted);
        assert!(!state.is_self_deafened);
        assert!(state.is_self_muted);
        assert!(state.is_streaming);
        assert!(state.is_video_enabled);
        assert!(!state.is_suppressed);
    }

    #[test]
    fn voice_state_with_null_and_unset_fields() {
        let (factory, _) = fixtures::factory();
        let state = factory
            .deserialize_voice_state(&payload(json!({
                "channel_id": null,
                "user_id": "80351110224678912",
                "session_id": "90326bd25d71d39b9ef95b299e3872ff",
                "deaf": true,
                "mute": true,
                "self_deaf": false,
                "self_mute": true,
                "self_video": false,
                "suppress": false,
            })))
            .unwrap();

        assert_eq!(state.guild_id, None);
        assert_eq!(state.channel_id, None);
        assert_eq!(state.member, None);
        assert!(!state.is_streaming);
    }

    #[test]
    fn voice_region() {
        let (factory, _) = fixtures::factory();
        let region = factory
            .deserialize_voice_region(&payload(json!({
                "id": "london",
                "name": "LONDON",
                "vip": true,
                "optimal": false,
                "deprecated": true,
                "custom": false,
            })))
            .unwrap();

        assert_eq!(region.id, "london");
        assert_eq!(region.name, "LONDON");
        assert!(region.is_vip);
        assert!(!region.is_optimal_location);
        assert!(region.is_deprecated);
        assert!(!region.is_custom);
    }

    #[test]
    fn voice_region_missing_a_key() {
        let (factory, _) = fixtures::factory();
        let error = factory
            .deserialize_voice_region(&payload(json!({ "id": "london", "name": "LONDON" })))
            .unwrap_err();

        assert_eq!(error.kind(), &FactoryErrorType::SchemaViolation);
    }
}
