//! The typed entity model.
//!
//! Layout follows the platform's own resource grouping: channels (with
//! messages, embeds, invites and webhooks), guilds (with members, roles,
//! emojis, integrations and audit logs), gateway data, oauth applications,
//! users and voice.

// ===========================================================================
// Sub-modules
// ===========================================================================

/// Channels, messages, embeds, invites and webhooks.
pub mod channel;

/// Gateway connection info and presences.
pub mod gateway;

/// Guilds, members, roles, emojis, permissions and audit logs.
pub mod guild;

/// Type-safe IDs with marker types.
pub mod id;

/// Applications, teams, connections and own guilds.
pub mod oauth;

/// Users.
pub mod user;

/// Payload access, time conversions, colours and id maps.
pub mod util;

/// Voice states and regions.
pub mod voice;

// ===========================================================================
// Convenience re-exports
// ===========================================================================

// ---- IDs ------------------------------------------------------------------
pub use self::id::marker::{
    ApplicationMarker, AttachmentMarker, AuditLogEntryMarker, ChannelMarker, EmojiMarker,
    GenericMarker, GuildMarker, IntegrationMarker, MessageMarker, RoleMarker, SkuMarker,
    TeamMarker, UserMarker, WebhookMarker,
};
pub use self::id::Id;

// ---- Users ----------------------------------------------------------------
pub use self::user::{OwnUser, PartialUser, User, UserFlags};

// ---- Channels / messages --------------------------------------------------
pub use self::channel::{
    embed::{Embed, EmbedBuilder, Resource},
    message::{Message, MessageFlags, UpdatedMessageFields},
    Channel, ChannelType, DmChannel, GroupDmChannel, GuildCategory, GuildNewsChannel,
    GuildStoreChannel, GuildTextChannel, GuildVoiceChannel, Invite, InviteWithMetadata,
    PartialChannel, PermissionOverwrite, VanityUrl, Webhook,
};

// ---- Guilds ---------------------------------------------------------------
pub use self::guild::{
    audit_log::AuditLog, CustomEmoji, Emoji, Guild, GuildFeature, GuildPreview, GuildWidget,
    Integration, KnownCustomEmoji, Member, PartialIntegration, PartialRole, Permissions, Role,
    UnavailableGuild, UnicodeEmoji,
};

// ---- Gateway / presences --------------------------------------------------
pub use self::gateway::{
    presence::{MemberPresence, RichActivity, Status},
    GatewayBot,
};

// ---- OAuth ----------------------------------------------------------------
pub use self::oauth::{Application, OwnConnection, OwnGuild, Team};

// ---- Voice ----------------------------------------------------------------
pub use self::voice::{VoiceRegion, VoiceState};

// ---- Utilities ------------------------------------------------------------
pub use self::util::{to_id_map, Color, Field, IdMap, Payload, Unique};
