//! Channels, messages, embeds, invites and webhooks.

pub mod embed;
pub mod invite;
pub mod message;
pub mod permission_overwrite;
pub mod webhook;

pub use self::{
    embed::Embed,
    invite::{Invite, InviteWithMetadata, VanityUrl},
    message::Message,
    permission_overwrite::{PermissionOverwrite, PermissionOverwriteType},
    webhook::Webhook,
};

use crate::{
    app::App,
    types::{
        id::{
            marker::{
                ApplicationMarker, ChannelMarker, GenericMarker, GuildMarker, MessageMarker,
                UserMarker,
            },
            Id,
        },
        user::User,
        util::{impl_unique, int_enum, IdMap},
    },
};
use chrono::{DateTime, Utc};
use std::{collections::HashMap, time::Duration};

int_enum! {
    /// Kind of a channel, selecting its concrete type.
    pub enum ChannelType: u64 {
        GuildText = 0,
        Dm = 1,
        GuildVoice = 2,
        GroupDm = 3,
        GuildCategory = 4,
        GuildNews = 5,
        GuildStore = 6,
    }
}

/// A channel known only by id, name and type, as sent with invites.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartialChannel {
    pub app: App,
    pub id: Id<ChannelMarker>,
    pub name: Option<String>,
    pub kind: ChannelType,
}

/// A direct message channel with a single user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DmChannel {
    pub app: App,
    pub id: Id<ChannelMarker>,
    pub last_message_id: Option<Id<MessageMarker>>,
    pub recipients: IdMap<UserMarker, User>,
}

/// A direct message channel with several users.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupDmChannel {
    pub app: App,
    pub id: Id<ChannelMarker>,
    pub name: Option<String>,
    pub icon_hash: Option<String>,
    pub owner_id: Id<UserMarker>,
    /// Application that created the group, if a bot did.
    pub application_id: Option<Id<ApplicationMarker>>,
    /// Per-recipient nicknames, only visible to the application that owns the group.
    pub nicknames: HashMap<Id<UserMarker>, String>,
    pub last_message_id: Option<Id<MessageMarker>>,
    pub recipients: IdMap<UserMarker, User>,
}

/// A category grouping other guild channels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildCategory {
    pub app: App,
    pub id: Id<ChannelMarker>,
    pub name: String,
    /// Only absent on channels sent inside their guild without the id.
    pub guild_id: Option<Id<GuildMarker>>,
    pub position: i64,
    pub permission_overwrites: IdMap<GenericMarker, PermissionOverwrite>,
    pub is_nsfw: Option<bool>,
    pub parent_id: Option<Id<ChannelMarker>>,
}

/// A text channel in a guild.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildTextChannel {
    pub app: App,
    pub id: Id<ChannelMarker>,
    pub name: String,
    pub guild_id: Option<Id<GuildMarker>>,
    pub position: i64,
    pub permission_overwrites: IdMap<GenericMarker, PermissionOverwrite>,
    pub is_nsfw: Option<bool>,
    pub parent_id: Option<Id<ChannelMarker>>,
    pub topic: Option<String>,
    pub last_message_id: Option<Id<MessageMarker>>,
    /// Slow-mode delay; zero when disabled.
    pub rate_limit_per_user: Duration,
    pub last_pin_timestamp: Option<DateTime<Utc>>,
}

/// An announcement channel in a guild.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildNewsChannel {
    pub app: App,
    pub id: Id<ChannelMarker>,
    pub name: String,
    pub guild_id: Option<Id<GuildMarker>>,
    pub position: i64,
    pub permission_overwrites: IdMap<GenericMarker, PermissionOverwrite>,
    pub is_nsfw: Option<bool>,
    pub parent_id: Option<Id<ChannelMarker>>,
    pub topic: Option<String>,
    pub last_message_id: Option<Id<MessageMarker>>,
    pub last_pin_timestamp: Option<DateTime<Utc>>,
}

/// A store channel in a guild.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildStoreChannel {
    pub app: App,
    pub id: Id<ChannelMarker>,
    pub name: String,
    pub guild_id: Option<Id<GuildMarker>>,
    pub position: i64,
    pub permission_overwrites: IdMap<GenericMarker, PermissionOverwrite>,
    pub is_nsfw: Option<bool>,
    pub parent_id: Option<Id<ChannelMarker>>,
}

/// A voice channel in a guild.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildVoiceChannel {
    pub app: App,
    pub id: Id<ChannelMarker>,
    pub name: String,
    pub guild_id: Option<Id<GuildMarker>>,
    pub position: i64,
    pub permission_overwrites: IdMap<GenericMarker, PermissionOverwrite>,
    pub is_nsfw: Option<bool>,
    pub parent_id: Option<Id<ChannelMarker>>,
    /// Bits per second.
    pub bitrate: u64,
    /// Zero means no limit.
    pub user_limit: u64,
}

/// Any channel, selected by its wire `type`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Channel {
    GuildText(GuildTextChannel),
    Dm(DmChannel),
    GuildVoice(GuildVoiceChannel),
    GroupDm(GroupDmChannel),
    GuildCategory(GuildCategory),
    GuildNews(GuildNewsChannel),
    GuildStore(GuildStoreChannel),
}

impl Channel {
    pub const fn id(&self) -> Id<ChannelMarker> {
        match self {
            Self::GuildText(channel) => channel.id,
            Self::Dm(channel) => channel.id,
            Self::GuildVoice(channel) => channel.id,
            Self::GroupDm(channel) => channel.id,
            Self::GuildCategory(channel) => channel.id,
            Self::GuildNews(channel) => channel.id,
            Self::GuildStore(channel) => channel.id,
        }
    }

    pub const fn kind(&self) -> ChannelType {
        match self {
            Self::GuildText(_) => ChannelType::GuildText,
            Self::Dm(_) => ChannelType::Dm,
            Self::GuildVoice(_) => ChannelType::GuildVoice,
            Self::GroupDm(_) => ChannelType::GroupDm,
            Self::GuildCategory(_) => ChannelType::GuildCategory,
            Self::GuildNews(_) => ChannelType::GuildNews,
            Self::GuildStore(_) => ChannelType::GuildStore,
        }
    }

    /// Guild the channel belongs to; `None` for private channels.
    pub const fn guild_id(&self) -> Option<Id<GuildMarker>> {
        match self {
            Self::GuildText(channel) => channel.guild_id,
            Self::GuildVoice(channel) => channel.guild_id,
            Self::GuildCategory(channel) => channel.guild_id,
            Self::GuildNews(channel) => channel.guild_id,
            Self::GuildStore(channel) => channel.guild_id,
            Self::Dm(_) | Self::GroupDm(_) => None,
        }
    }

    /// Fill in the guild id of a guild channel sent without one.
    pub(crate) fn inherit_guild_id(&mut self, guild_id: Id<GuildMarker>) {
        let slot = match self {
            Self::GuildText(channel) => &mut channel.guild_id,
            Self::GuildVoice(channel) => &mut channel.guild_id,
            Self::GuildCategory(channel) => &mut channel.guild_id,
            Self::GuildNews(channel) => &mut channel.guild_id,
            Self::GuildStore(channel) => &mut channel.guild_id,
            Self::Dm(_) | Self::GroupDm(_) => return,
        };

        slot.get_or_insert(guild_id);
    }
}

impl_unique! {
    PartialChannel => ChannelMarker, |channel| channel.id;
    DmChannel => ChannelMarker, |channel| channel.id;
    GroupDmChannel => ChannelMarker, |channel| channel.id;
    GuildCategory => ChannelMarker, |channel| channel.id;
    GuildTextChannel => ChannelMarker, |channel| channel.id;
    GuildNewsChannel => ChannelMarker, |channel| channel.id;
    GuildStoreChannel => ChannelMarker, |channel| channel.id;
    GuildVoiceChannel => ChannelMarker, |channel| channel.id;
    Channel => ChannelMarker, |channel| channel.id();
}
