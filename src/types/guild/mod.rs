//! Guilds and the entities that live inside them.

pub mod audit_log;
pub mod emoji;
pub mod feature;
pub mod integration;
pub mod member;
pub mod permissions;
pub mod role;

pub use self::{
    emoji::{CustomEmoji, Emoji, KnownCustomEmoji, UnicodeEmoji},
    feature::GuildFeature,
    integration::{Integration, IntegrationAccount, IntegrationExpireBehaviour, PartialIntegration},
    member::{GuildMemberBan, Member},
    permissions::Permissions,
    role::{PartialRole, Role},
};

use crate::{
    app::App,
    types::{
        channel::Channel,
        gateway::presence::MemberPresence,
        id::{
            marker::{
                ApplicationMarker, ChannelMarker, EmojiMarker, GuildMarker, RoleMarker, UserMarker,
            },
            Id,
        },
        util::{impl_unique, int_enum, IdMap},
        voice::VoiceState,
    },
};
use bitflags::bitflags;
use chrono::{DateTime, Utc};
use std::{collections::HashSet, time::Duration};

int_enum! {
    /// Requirements a member must meet before they can talk.
    pub enum GuildVerificationLevel: u64 {
        None = 0,
        Low = 1,
        Medium = 2,
        High = 3,
        VeryHigh = 4,
    }
}

int_enum! {
    /// Which messages notify members by default.
    pub enum GuildMessageNotificationsLevel: u64 {
        AllMessages = 0,
        OnlyMentions = 1,
    }
}

int_enum! {
    /// Whose messages are scanned for explicit content.
    pub enum GuildExplicitContentFilterLevel: u64 {
        Disabled = 0,
        MembersWithoutRoles = 1,
        AllMembers = 2,
    }
}

int_enum! {
    /// Whether moderators need two-factor authentication.
    pub enum GuildMfaLevel: u64 {
        None = 0,
        Elevated = 1,
    }
}

int_enum! {
    /// Boost level reached by a guild.
    pub enum GuildPremiumTier: u64 {
        None = 0,
        Tier1 = 1,
        Tier2 = 2,
        Tier3 = 3,
    }
}

bitflags! {
    /// Messages suppressed in a guild's system channel.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct GuildSystemChannelFlags: u64 {
        const SUPPRESS_USER_JOIN = 1 << 0;
        const SUPPRESS_PREMIUM_SUBSCRIPTION = 1 << 1;
    }
}

/// A guild's embeddable widget settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildWidget {
    pub app: App,
    /// Channel invites from the widget lead to.
    pub channel_id: Option<Id<ChannelMarker>>,
    pub is_enabled: bool,
}

/// A guild that is not available right now.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnavailableGuild {
    pub app: App,
    pub id: Id<GuildMarker>,
    pub is_unavailable: bool,
}

/// Public preview of a discoverable guild.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildPreview {
    pub app: App,
    pub id: Id<GuildMarker>,
    pub name: String,
    pub icon_hash: Option<String>,
    pub features: HashSet<GuildFeature>,
    pub splash_hash: Option<String>,
    pub discovery_splash_hash: Option<String>,
    pub emojis: IdMap<EmojiMarker, KnownCustomEmoji>,
    pub approximate_member_count: u64,
    pub approximate_presence_count: u64,
    pub description: Option<String>,
}

/// A guild with everything the platform sent about it.
///
/// `members`, `channels`, `presences` and `voice_states` are only sent on
/// guild create and are empty otherwise.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Guild {
    pub app: App,
    pub id: Id<GuildMarker>,
    pub name: String,
    pub icon_hash: Option<String>,
    pub features: HashSet<GuildFeature>,
    pub splash_hash: Option<String>,
    pub discovery_splash_hash: Option<String>,
    pub banner_hash: Option<String>,
    pub description: Option<String>,
    pub owner_id: Id<UserMarker>,
    /// Permissions of the current user, only sent when listing own guilds.
    pub my_permissions: Option<Permissions>,
    pub region: String,
    pub afk_channel_id: Option<Id<ChannelMarker>>,
    pub afk_timeout: Duration,
    /// Defaults to `false` when not sent.
    pub is_embed_enabled: bool,
    pub embed_channel_id: Option<Id<ChannelMarker>>,
    pub verification_level: GuildVerificationLevel,
    pub default_message_notifications: GuildMessageNotificationsLevel,
    pub explicit_content_filter: GuildExplicitContentFilterLevel,
    pub roles: IdMap<RoleMarker, Role>,
    pub emojis: IdMap<EmojiMarker, KnownCustomEmoji>,
    pub mfa_level: GuildMfaLevel,
    /// Application that created the guild, if a bot did.
    pub application_id: Option<Id<ApplicationMarker>>,
    pub is_unavailable: Option<bool>,
    pub is_widget_enabled: Option<bool>,
    pub widget_channel_id: Option<Id<ChannelMarker>>,
    pub system_channel_id: Option<Id<ChannelMarker>>,
    pub system_channel_flags: GuildSystemChannelFlags,
    pub rules_channel_id: Option<Id<ChannelMarker>>,
    pub joined_at: Option<DateTime<Utc>>,
    pub is_large: Option<bool>,
    pub member_count: Option<u64>,
    pub members: IdMap<UserMarker, Member>,
    pub channels: IdMap<ChannelMarker, Channel>,
    pub presences: IdMap<UserMarker, MemberPresence>,
    pub voice_states: IdMap<UserMarker, VoiceState>,
    pub max_presences: Option<u64>,
    pub max_members: Option<u64>,
    pub max_video_channel_users: Option<u64>,
    pub vanity_url_code: Option<String>,
    pub premium_tier: GuildPremiumTier,
    pub premium_subscription_count: Option<u64>,
    pub preferred_locale: String,
    pub public_updates_channel_id: Option<Id<ChannelMarker>>,
    pub approximate_member_count: Option<u64>,
    pub approximate_active_member_count: Option<u64>,
}

impl_unique! {
    UnavailableGuild => GuildMarker, |guild| guild.id;
    GuildPreview => GuildMarker, |guild| guild.id;
    Guild => GuildMarker, |guild| guild.id;
}
