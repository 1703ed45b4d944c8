//! Message and reaction events.

use crate::{
    app::App,
    error::FactoryError,
    factory::EntityFactory,
    types::{
        channel::message::{Message, UpdatedMessageFields},
        guild::{Emoji, Member},
        id::{
            marker::{ChannelMarker, GuildMarker, MessageMarker, UserMarker},
            Id,
        },
        util::{payload::PayloadExt, Payload},
    },
};
use std::collections::HashSet;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageCreateEvent {
    pub message: Message,
}

/// A message was edited; only the changed fields are sent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageUpdateEvent {
    pub message: UpdatedMessageFields,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageDeleteEvent {
    pub app: App,
    pub message_id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageDeleteBulkEvent {
    pub app: App,
    pub message_ids: HashSet<Id<MessageMarker>>,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageReactionAddEvent {
    pub app: App,
    pub user_id: Id<UserMarker>,
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
    /// Only sent for reactions in guilds.
    pub member: Option<Member>,
    pub emoji: Emoji,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageReactionRemoveEvent {
    pub app: App,
    pub user_id: Id<UserMarker>,
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub emoji: Emoji,
}

/// Every reaction was removed from a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageReactionRemoveAllEvent {
    pub app: App,
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
}

/// Every reaction of one emoji was removed from a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageReactionRemoveEmojiEvent {
    pub app: App,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub message_id: Id<MessageMarker>,
    pub emoji: Emoji,
}

impl EntityFactory {
    pub fn deserialize_message_create_event(
        &self,
        payload: &Payload,
    ) -> Result<MessageCreateEvent, FactoryError> {
        Ok(MessageCreateEvent {
            message: self.deserialize_message(payload)?,
        })
    }

    pub fn deserialize_message_update_event(
        &self,
        payload: &Payload,
    ) -> Result<MessageUpdateEvent, FactoryError> {
        Ok(MessageUpdateEvent {
            message: self.deserialize_updated_message_fields(payload)?,
        })
    }

    pub fn deserialize_message_delete_event(
        &self,
        payload: &Payload,
    ) -> Result<MessageDeleteEvent, FactoryError> {
        Ok(MessageDeleteEvent {
            app: self.app().clone(),
            message_id: payload.id("id")?,
            channel_id: payload.id("channel_id")?,
            guild_id: payload.nullable_id("guild_id")?,
        })
    }

    pub fn deserialize_message_delete_bulk_event(
        &self,
        payload: &Payload,
    ) -> Result<MessageDeleteBulkEvent, FactoryError> {
        Ok(MessageDeleteBulkEvent {
            app: self.app().clone(),
            message_ids: payload.id_set("ids")?,
            channel_id: payload.id("channel_id")?,
            guild_id: payload.nullable_id("guild_id")?,
        })
    }

    pub fn deserialize_message_reaction_add_event(
        &self,
        payload: &Payload,
    ) -> Result<MessageReactionAddEvent, FactoryError> {
        let member = payload
            .nullable_object("member")?
            .map(|member| self.deserialize_member(member, None))
            .transpose()?;

        Ok(MessageReactionAddEvent {
            app: self.app().clone(),
            user_id: payload.id("user_id")?,
            channel_id: payload.id("channel_id")?,
            message_id: payload.id("message_id")?,
            guild_id: payload.nullable_id("guild_id")?,
            member,
            emoji: self.deserialize_emoji(payload.object("emoji")?)?,
        })
    }

    pub fn deserialize_message_reaction_remove_event(
        &self,
        payload: &Payload,
    ) -> Result<MessageReactionRemoveEvent, FactoryError> {
        Ok(MessageReactionRemoveEvent {
            app: self.app().clone(),
            user_id: payload.id("user_id")?,
            channel_id: payload.id("channel_id")?,
            message_id: payload.id("message_id")?,
            guild_id: payload.nullable_id("guild_id")?,
            emoji: self.deserialize_emoji(payload.object("emoji")?)?,
        })
    }

    pub fn deserialize_message_reaction_remove_all_event(
        &self,
        payload: &Payload,
    ) -> Result<MessageReactionRemoveAllEvent, FactoryError> {
        Ok(MessageReactionRemoveAllEvent {
            app: self.app().clone(),
            channel_id: payload.id("channel_id")?,
            message_id: payload.id("message_id")?,
            guild_id: payload.nullable_id("guild_id")?,
        })
    }

    pub fn deserialize_message_reaction_remove_emoji_event(
        &self,
        payload: &Payload,
    ) -> Result<MessageReactionRemoveEmojiEvent, FactoryError> {
        Ok(MessageReactionRemoveEmojiEvent {
            app: self.app().clone(),
            channel_id: payload.id("channel_id")?,
            guild_id: payload.nullable_id("guild_id")?,
            message_id: payload.id("message_id")?,
            emoji: self.deserialize_emoji(payload.object("emoji")?)?,
        })
    }
}
