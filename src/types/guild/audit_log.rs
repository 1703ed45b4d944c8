//! Audit logs: who changed what in a guild.

use super::{PartialIntegration, PartialRole, Permissions};
use crate::{
    app::App,
    types::{
        channel::{permission_overwrite::PermissionOverwriteType, PermissionOverwrite, Webhook},
        id::{
            marker::{
                AuditLogEntryMarker, ChannelMarker, GenericMarker, IntegrationMarker,
                MessageMarker, RoleMarker, UserMarker, WebhookMarker,
            },
            Id,
        },
        user::User,
        util::{impl_unique, int_enum, str_enum, Color, IdMap, Payload},
    },
};
use serde_json::Value;
use std::time::Duration;

int_enum! {
    /// Kind of action an audit log entry records.
    pub enum AuditLogEventType: u64 {
        GuildUpdate = 1,
        ChannelCreate = 10,
        ChannelUpdate = 11,
        ChannelDelete = 12,
        ChannelOverwriteCreate = 13,
        ChannelOverwriteUpdate = 14,
        ChannelOverwriteDelete = 15,
        MemberKick = 20,
        MemberPrune = 21,
        MemberBanAdd = 22,
        MemberBanRemove = 23,
        MemberUpdate = 24,
        MemberRoleUpdate = 25,
        MemberMove = 26,
        MemberDisconnect = 27,
        BotAdd = 28,
        RoleCreate = 30,
        RoleUpdate = 31,
        RoleDelete = 32,
        InviteCreate = 40,
        InviteUpdate = 41,
        InviteDelete = 42,
        WebhookCreate = 50,
        WebhookUpdate = 51,
        WebhookDelete = 52,
        EmojiCreate = 60,
        EmojiUpdate = 61,
        EmojiDelete = 62,
        MessageDelete = 72,
        MessageBulkDelete = 73,
        MessagePin = 74,
        MessageUnpin = 75,
        IntegrationCreate = 80,
        IntegrationUpdate = 81,
        IntegrationDelete = 82,
    }
}

str_enum! {
    /// Property an audit log change applies to.
    pub enum AuditLogChangeKey {
        Name = "name",
        IconHash = "icon_hash",
        SplashHash = "splash_hash",
        OwnerId = "owner_id",
        Region = "region",
        AfkChannelId = "afk_channel_id",
        AfkTimeout = "afk_timeout",
        MfaLevel = "mfa_level",
        VerificationLevel = "verification_level",
        ExplicitContentFilter = "explicit_content_filter",
        DefaultMessageNotifications = "default_message_notifications",
        VanityUrlCode = "vanity_url_code",
        AddRoleToMember = "$add",
        RemoveRoleFromMember = "$remove",
        PruneDeleteDays = "prune_delete_days",
        WidgetEnabled = "widget_enabled",
        WidgetChannelId = "widget_channel_id",
        SystemChannelId = "system_channel_id",
        Position = "position",
        Topic = "topic",
        Bitrate = "bitrate",
        PermissionOverwrites = "permission_overwrites",
        Nsfw = "nsfw",
        ApplicationId = "application_id",
        RateLimitPerUser = "rate_limit_per_user",
        Permissions = "permissions",
        Color = "color",
        Hoist = "hoist",
        Mentionable = "mentionable",
        Allow = "allow",
        Deny = "deny",
        Code = "code",
        ChannelId = "channel_id",
        InviterId = "inviter_id",
        MaxUses = "max_uses",
        Uses = "uses",
        MaxAge = "max_age",
        Temporary = "temporary",
        Deaf = "deaf",
        Mute = "mute",
        Nick = "nick",
        AvatarHash = "avatar_hash",
        Id = "id",
        Type = "type",
        EnableEmoticons = "enable_emoticons",
        ExpireBehavior = "expire_behavior",
        ExpireGracePeriod = "expire_grace_period",
    }
}

/// Old or new value of an audit log change, typed by its key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuditLogChangeValue {
    /// Roles added to or removed from a member.
    Roles(IdMap<RoleMarker, PartialRole>),
    Overwrites(IdMap<GenericMarker, PermissionOverwrite>),
    Permissions(Permissions),
    Color(Color),
    Id(Id<GenericMarker>),
    Duration(Duration),
    /// Any key without a dedicated conversion, kept as sent.
    Raw(Value),
}

/// A single property change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditLogChange {
    pub key: AuditLogChangeKey,
    pub new_value: Option<AuditLogChangeValue>,
    pub old_value: Option<AuditLogChangeValue>,
}

/// Extra detail attached to some kinds of entries, chosen by
/// [`AuditLogEntry::action_type`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuditLogEntryInfo {
    ChannelOverwrite {
        id: Id<GenericMarker>,
        kind: PermissionOverwriteType,
        /// Only sent for role overwrites.
        role_name: Option<String>,
    },
    MessagePin {
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    },
    MemberPrune {
        delete_member_days: Duration,
        members_removed: u64,
    },
    MessageBulkDelete {
        count: u64,
    },
    MessageDelete {
        count: u64,
        channel_id: Id<ChannelMarker>,
    },
    MemberDisconnect {
        count: u64,
    },
    MemberMove {
        count: u64,
        channel_id: Id<ChannelMarker>,
    },
    /// Options for an action type without a dedicated shape, kept as sent.
    Unrecognised(Payload),
}

/// One action recorded in a guild's audit log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditLogEntry {
    pub app: App,
    pub id: Id<AuditLogEntryMarker>,
    /// Affected entity; its kind depends on the action.
    pub target_id: Option<Id<GenericMarker>>,
    pub changes: Vec<AuditLogChange>,
    /// User that performed the action.
    pub user_id: Option<Id<UserMarker>>,
    pub action_type: AuditLogEventType,
    pub options: Option<AuditLogEntryInfo>,
    pub reason: Option<String>,
}

/// A page of a guild's audit log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditLog {
    pub entries: IdMap<AuditLogEntryMarker, AuditLogEntry>,
    pub integrations: IdMap<IntegrationMarker, PartialIntegration>,
    pub users: IdMap<UserMarker, User>,
    pub webhooks: IdMap<WebhookMarker, Webhook>,
}

impl_unique! {
    AuditLogEntry => AuditLogEntryMarker, |entry| entry.id;
}
