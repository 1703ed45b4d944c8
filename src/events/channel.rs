//! Channel, typing, webhook and invite events.

use crate::{
    app::App,
    error::FactoryError,
    factory::EntityFactory,
    types::{
        channel::{Channel, InviteWithMetadata},
        guild::Member,
        id::{
            marker::{ChannelMarker, GuildMarker, UserMarker},
            Id,
        },
        util::{datetime, payload::PayloadExt, Payload},
    },
};
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChannelCreateEvent {
    pub channel: Channel,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChannelUpdateEvent {
    pub channel: Channel,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChannelDeleteEvent {
    pub channel: Channel,
}

/// A message was pinned or unpinned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChannelPinsUpdateEvent {
    pub app: App,
    pub guild_id: Option<Id<GuildMarker>>,
    pub channel_id: Id<ChannelMarker>,
    /// `None` once the last pin is removed.
    pub last_pin_timestamp: Option<DateTime<Utc>>,
}

/// A webhook of the channel was created, updated or deleted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WebhookUpdateEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
    pub channel_id: Id<ChannelMarker>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypingStartEvent {
    pub app: App,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub user_id: Id<UserMarker>,
    pub timestamp: DateTime<Utc>,
    /// Only sent for guild channels.
    pub member: Option<Member>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InviteCreateEvent {
    pub invite: InviteWithMetadata,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InviteDeleteEvent {
    pub app: App,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub code: String,
}

impl EntityFactory {
    pub fn deserialize_channel_create_event(
        &self,
        payload: &Payload,
    ) -> Result<ChannelCreateEvent, FactoryError> {
        Ok(ChannelCreateEvent {
            channel: self.deserialize_channel(payload)?,
        })
    }

    pub fn deserialize_channel_update_event(
        &self,
        payload: &Payload,
    ) -> Result<ChannelUpdateEvent, FactoryError> {
        Ok(ChannelUpdateEvent {
            channel: self.deserialize_channel(payload)?,
        })
    }

    pub fn deserialize_channel_delete_event(
        &self,
        payload: &Payload,
    ) -> Result<ChannelDeleteEvent, FactoryError> {
        Ok(ChannelDeleteEvent {
            channel: self.deserialize_channel(payload)?,
        })
    }

    pub fn deserialize_channel_pins_update_event(
        &self,
        payload: &Payload,
    ) -> Result<ChannelPinsUpdateEvent, FactoryError> {
        Ok(ChannelPinsUpdateEvent {
            app: self.app().clone(),
            guild_id: payload.nullable_id("guild_id")?,
            channel_id: payload.id("channel_id")?,
            last_pin_timestamp: payload.nullable_timestamp("last_pin_timestamp")?,
        })
    }

    pub fn deserialize_webhook_update_event(
        &self,
        payload: &Payload,
    ) -> Result<WebhookUpdateEvent, FactoryError> {
        Ok(WebhookUpdateEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
            channel_id: payload.id("channel_id")?,
        })
    }

    /// Parse a typing indicator; its `timestamp` is in Unix seconds.
    pub fn deserialize_typing_start_event(
        &self,
        payload: &Payload,
    ) -> Result<TypingStartEvent, FactoryError> {
        let member = payload
            .nullable_object("member")?
            .map(|member| self.deserialize_member(member, None))
            .transpose()?;
        let timestamp = datetime::unix_seconds(payload.required("timestamp")?)
            .map_err(|error| error.in_field("timestamp"))?;

        Ok(TypingStartEvent {
            app: self.app().clone(),
            channel_id: payload.id("channel_id")?,
            guild_id: payload.nullable_id("guild_id")?,
            user_id: payload.id("user_id")?,
            timestamp,
            member,
        })
    }

    pub fn deserialize_invite_create_event(
        &self,
        payload: &Payload,
    ) -> Result<InviteCreateEvent, FactoryError> {
        Ok(InviteCreateEvent {
            invite: self.deserialize_invite_with_metadata(payload)?,
        })
    }

    pub fn deserialize_invite_delete_event(
        &self,
        payload: &Payload,
    ) -> Result<InviteDeleteEvent, FactoryError> {
        Ok(InviteDeleteEvent {
            app: self.app().clone(),
            channel_id: payload.id("channel_id")?,
            guild_id: payload.nullable_id("guild_id")?,
            code: payload.required("code")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        factory::fixtures::{self, payload},
        types::{channel::Channel, id::Id},
    };
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn channel_create_update_and_delete() {
        let (factory, _) = fixtures::factory();

        for channel in [
            fixtures::guild_text_channel(),
            fixtures::guild_voice_channel(),
            fixtures::dm_channel(),
        ] {
            let expected = factory.deserialize_channel(&channel).unwrap();
            assert_eq!(
                factory.deserialize_channel_create_event(&channel).unwrap().channel,
                expected
            );
            assert_eq!(
                factory.deserialize_channel_update_event(&channel).unwrap().channel,
                expected
            );
            assert_eq!(
                factory.deserialize_channel_delete_event(&channel).unwrap().channel,
                expected
            );
        }

        let event = factory
            .deserialize_channel_create_event(&fixtures::guild_text_channel())
            .unwrap();
        assert_eq!(
            event.channel,
            Channel::GuildText(
                factory
                    .deserialize_guild_text_channel(&fixtures::guild_text_channel())
                    .unwrap()
            )
        );
    }

    #[test]
    fn channel_pins_update() {
        let (factory, app) = fixtures::factory();
        let event = factory
            .deserialize_channel_pins_update_event(&payload(json!({
                "channel_id": "123123",
                "guild_id": "9439494",
                "last_pin_timestamp": "2020-05-27T15:58:51.545252+00:00",
            })))
            .unwrap();

        assert_eq!(event.app, app);
        assert_eq!(event.channel_id, 123_123);
        assert_eq!(event.guild_id, Some(Id::new(9_439_494)));
        assert_eq!(
            event.last_pin_timestamp,
            Some("2020-05-27T15:58:51.545252Z".parse::<DateTime<Utc>>().unwrap())
        );
    }

    #[test]
    fn channel_pins_update_with_unset_fields() {
        let (factory, _) = fixtures::factory();
        let event = factory
            .deserialize_channel_pins_update_event(&payload(json!({ "channel_id": "123123" })))
            .unwrap();

        assert_eq!(event.guild_id, None);
        assert_eq!(event.last_pin_timestamp, None);
    }

    #[test]
    fn webhook_update() {
        let (factory, app) = fixtures::factory();
        let event = factory
            .deserialize_webhook_update_event(&payload(json!({
                "guild_id": "123123123",
                "channel_id": "93493939",
            })))
            .unwrap();

        assert_eq!(event.app, app);
        assert_eq!(event.guild_id, 123_123_123);
        assert_eq!(event.channel_id, 93_493_939);
    }

    #[test]
    fn typing_start() {
        let (factory, app) = fixtures::factory();
        let event = factory
            .deserialize_typing_start_event(&payload(json!({
                "channel_id": "123123",
                "guild_id": "4542242",
                "user_id": "29292929",
                "timestamp": 1_591_122_971,
                "member": serde_json::Value::Object(fixtures::member()),
            })))
            .unwrap();

        assert_eq!(event.app, app);
        assert_eq!(event.channel_id, 123_123);
        assert_eq!(event.guild_id, Some(Id::new(4_542_242)));
        assert_eq!(event.user_id, 29_292_929);
        assert_eq!(
            event.timestamp,
            Utc.with_ymd_and_hms(2020, 6, 2, 18, 36, 11).unwrap()
        );
        assert_eq!(
            event.member,
            Some(factory.deserialize_member(&fixtures::member(), None).unwrap())
        );
    }

    #[test]
    fn typing_start_with_unset_fields() {
        let (factory, _) = fixtures::factory();
        let event = factory
            .deserialize_typing_start_event(&payload(json!({
                "channel_id": "123123",
                "user_id": "4444",
                "timestamp": 1_591_122_971,
            })))
            .unwrap();

        assert_eq!(event.guild_id, None);
        assert_eq!(event.member, None);
    }

    #[test]
    fn invite_create() {
        let (factory, _) = fixtures::factory();
        let event = factory
            .deserialize_invite_create_event(&fixtures::invite_with_metadata())
            .unwrap();

        assert_eq!(
            event.invite,
            factory
                .deserialize_invite_with_metadata(&fixtures::invite_with_metadata())
                .unwrap()
        );
    }

    #[test]
    fn invite_delete() {
        let (factory, app) = fixtures::factory();
        let event = factory
            .deserialize_invite_delete_event(&payload(json!({
                "channel_id": "123123",
                "guild_id": "93939393",
                "code": "Heck",
            })))
            .unwrap();

        assert_eq!(event.app, app);
        assert_eq!(event.code, "Heck");
        assert_eq!(event.channel_id, 123_123);
        assert_eq!(event.guild_id, Some(Id::new(93_939_393)));

        let event = factory
            .deserialize_invite_delete_event(&payload(json!({ "code": "OK", "channel_id": "123" })))
            .unwrap();
        assert_eq!(event.guild_id, None);
    }
}
