//! Messages and the partial form sent when a message is edited.

use super::Embed;
use crate::{
    app::App,
    types::{
        guild::{Emoji, Member},
        id::{
            marker::{
                AttachmentMarker, ChannelMarker, GuildMarker, MessageMarker, RoleMarker,
                UserMarker, WebhookMarker,
            },
            Id,
        },
        oauth::Application,
        user::User,
        util::{impl_unique, int_enum, Field},
    },
};
use bitflags::bitflags;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

int_enum! {
    /// Kind of a message; everything but `Default` is a system message.
    pub enum MessageType: u64 {
        Default = 0,
        RecipientAdd = 1,
        RecipientRemove = 2,
        Call = 3,
        ChannelNameChange = 4,
        ChannelIconChange = 5,
        ChannelPinnedMessage = 6,
        GuildMemberJoin = 7,
        UserPremiumGuildSubscription = 8,
        UserPremiumGuildSubscriptionTier1 = 9,
        UserPremiumGuildSubscriptionTier2 = 10,
        UserPremiumGuildSubscriptionTier3 = 11,
        ChannelFollowAdd = 12,
        GuildDiscoveryDisqualified = 14,
        GuildDiscoveryRequalified = 15,
    }
}

int_enum! {
    /// Kind of rich-presence activity a message invites to.
    pub enum MessageActivityType: u64 {
        None = 0,
        Join = 1,
        Spectate = 2,
        Listen = 3,
        JoinRequest = 5,
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// Published to following channels.
        const CROSSPOSTED = 1 << 0;
        /// Copied from a followed channel.
        const IS_CROSSPOST = 1 << 1;
        const SUPPRESS_EMBEDS = 1 << 2;
        const SOURCE_MESSAGE_DELETED = 1 << 3;
        const URGENT = 1 << 4;
    }
}

/// A file attached to a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attachment {
    pub id: Id<AttachmentMarker>,
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    pub url: String,
    pub proxy_url: String,
    /// Only set for images.
    pub height: Option<u64>,
    pub width: Option<u64>,
}

/// Reactions of one emoji on a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reaction {
    pub count: u64,
    pub emoji: Emoji,
    /// Whether the current user is one of the reactors.
    pub is_reacted_by_me: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageActivity {
    pub kind: MessageActivityType,
    pub party_id: Option<String>,
}

/// Origin of a message copied from a followed channel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageCrosspost {
    pub app: App,
    /// `None` when the original message is unavailable.
    pub id: Option<Id<MessageMarker>>,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
}

/// A message sent in a channel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    pub app: App,
    pub id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub author: User,
    /// Only sent for messages in guilds; its user is [`Message::author`].
    pub member: Option<Member>,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub edited_timestamp: Option<DateTime<Utc>>,
    pub is_tts: bool,
    pub is_mentioning_everyone: bool,
    pub user_mentions: HashSet<Id<UserMarker>>,
    pub role_mentions: HashSet<Id<RoleMarker>>,
    pub channel_mentions: HashSet<Id<ChannelMarker>>,
    pub attachments: Vec<Attachment>,
    pub embeds: Vec<Embed>,
    pub reactions: Vec<Reaction>,
    pub is_pinned: bool,
    pub webhook_id: Option<Id<WebhookMarker>>,
    pub kind: MessageType,
    pub activity: Option<MessageActivity>,
    pub application: Option<Application>,
    pub message_reference: Option<MessageCrosspost>,
    pub flags: Option<MessageFlags>,
    /// Client-chosen value used to confirm delivery.
    pub nonce: Option<String>,
}

/// The fields sent when a message is edited.
///
/// Only the message and channel ids are guaranteed; anything else that
/// wasn't sent is [`Field::Absent`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdatedMessageFields {
    pub app: App,
    pub id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Field<Id<GuildMarker>>,
    pub author: Field<User>,
    pub member: Field<Member>,
    pub content: Field<String>,
    pub timestamp: Field<DateTime<Utc>>,
    pub edited_timestamp: Field<DateTime<Utc>>,
    pub is_tts: Field<bool>,
    pub is_mentioning_everyone: Field<bool>,
    pub user_mentions: Field<HashSet<Id<UserMarker>>>,
    pub role_mentions: Field<HashSet<Id<RoleMarker>>>,
    pub channel_mentions: Field<HashSet<Id<ChannelMarker>>>,
    pub attachments: Field<Vec<Attachment>>,
    pub embeds: Field<Vec<Embed>>,
    pub reactions: Field<Vec<Reaction>>,
    pub is_pinned: Field<bool>,
    pub webhook_id: Field<Id<WebhookMarker>>,
    pub kind: Field<MessageType>,
    pub activity: Field<MessageActivity>,
    pub application: Field<Application>,
    pub message_reference: Field<MessageCrosspost>,
    pub flags: Field<MessageFlags>,
    pub nonce: Field<String>,
}

impl_unique! {
    Attachment => AttachmentMarker, |attachment| attachment.id;
    Message => MessageMarker, |message| message.id;
    UpdatedMessageFields => MessageMarker, |message| message.id;
}
