//! Typed gateway events.
//!
//! [`EntityFactory::deserialize_event`] turns a dispatch payload and its
//! event name into an [`Event`], so consumers can pattern-match on typed
//! data instead of raw `(name, payload)` pairs. Each family of events also
//! has its own `deserialize_*_event` method.

pub mod channel;
pub mod guild;
pub mod message;
pub mod other;
pub mod voice;

pub use self::{
    channel::{
        ChannelCreateEvent, ChannelDeleteEvent, ChannelPinsUpdateEvent, ChannelUpdateEvent,
        InviteCreateEvent, InviteDeleteEvent, TypingStartEvent, WebhookUpdateEvent,
    },
    guild::{
        GuildBanAddEvent, GuildBanRemoveEvent, GuildCreateEvent, GuildEmojisUpdateEvent,
        GuildIntegrationsUpdateEvent, GuildLeaveEvent, GuildMemberAddEvent,
        GuildMemberRemoveEvent, GuildMemberUpdateEvent, GuildRoleCreateEvent,
        GuildRoleDeleteEvent, GuildRoleUpdateEvent, GuildUnavailableEvent, GuildUpdateEvent,
        PresenceUpdateEvent,
    },
    message::{
        MessageCreateEvent, MessageDeleteBulkEvent, MessageDeleteEvent, MessageReactionAddEvent,
        MessageReactionRemoveAllEvent, MessageReactionRemoveEmojiEvent, MessageReactionRemoveEvent,
        MessageUpdateEvent,
    },
    other::{OwnUserUpdateEvent, ReadyEvent},
    voice::{VoiceServerUpdateEvent, VoiceStateUpdateEvent},
};

use crate::{
    app::Shard,
    error::FactoryError,
    factory::EntityFactory,
    types::util::{payload::PayloadExt, Payload},
};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// The top-level event enum
// ---------------------------------------------------------------------------

/// A fully parsed gateway dispatch event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    ChannelCreate(ChannelCreateEvent),
    ChannelUpdate(ChannelUpdateEvent),
    ChannelDelete(ChannelDeleteEvent),
    ChannelPinsUpdate(ChannelPinsUpdateEvent),
    WebhookUpdate(WebhookUpdateEvent),
    TypingStart(TypingStartEvent),
    InviteCreate(InviteCreateEvent),
    InviteDelete(InviteDeleteEvent),

    GuildCreate(GuildCreateEvent),
    GuildUpdate(GuildUpdateEvent),
    /// `GUILD_DELETE` for a guild the current user left or was removed from.
    GuildLeave(GuildLeaveEvent),
    /// `GUILD_DELETE` for a guild affected by an outage.
    GuildUnavailable(GuildUnavailableEvent),
    GuildBanAdd(GuildBanAddEvent),
    GuildBanRemove(GuildBanRemoveEvent),
    GuildEmojisUpdate(GuildEmojisUpdateEvent),
    GuildIntegrationsUpdate(GuildIntegrationsUpdateEvent),
    GuildMemberAdd(GuildMemberAddEvent),
    GuildMemberUpdate(GuildMemberUpdateEvent),
    GuildMemberRemove(GuildMemberRemoveEvent),
    GuildRoleCreate(GuildRoleCreateEvent),
    GuildRoleUpdate(GuildRoleUpdateEvent),
    GuildRoleDelete(GuildRoleDeleteEvent),
    PresenceUpdate(PresenceUpdateEvent),

    MessageCreate(MessageCreateEvent),
    MessageUpdate(MessageUpdateEvent),
    MessageDelete(MessageDeleteEvent),
    MessageDeleteBulk(MessageDeleteBulkEvent),
    MessageReactionAdd(MessageReactionAddEvent),
    MessageReactionRemove(MessageReactionRemoveEvent),
    MessageReactionRemoveAll(MessageReactionRemoveAllEvent),
    MessageReactionRemoveEmoji(MessageReactionRemoveEmojiEvent),

    Ready(ReadyEvent),
    OwnUserUpdate(OwnUserUpdateEvent),

    VoiceStateUpdate(VoiceStateUpdateEvent),
    VoiceServerUpdate(VoiceServerUpdateEvent),

    /// An event without a typed variant, kept with its raw payload.
    Unknown { name: String, payload: Payload },
}

impl Event {
    /// Gateway name of the event, such as `MESSAGE_CREATE`.
    pub fn name(&self) -> &str {
        match self {
            Self::ChannelCreate(_) => "CHANNEL_CREATE",
            Self::ChannelUpdate(_) => "CHANNEL_UPDATE",
            Self::ChannelDelete(_) => "CHANNEL_DELETE",
            Self::ChannelPinsUpdate(_) => "CHANNEL_PINS_UPDATE",
            Self::WebhookUpdate(_) => "WEBHOOKS_UPDATE",
            Self::TypingStart(_) => "TYPING_START",
            Self::InviteCreate(_) => "INVITE_CREATE",
            Self::InviteDelete(_) => "INVITE_DELETE",
            Self::GuildCreate(_) => "GUILD_CREATE",
            Self::GuildUpdate(_) => "GUILD_UPDATE",
            Self::GuildLeave(_) | Self::GuildUnavailable(_) => "GUILD_DELETE",
            Self::GuildBanAdd(_) => "GUILD_BAN_ADD",
            Self::GuildBanRemove(_) => "GUILD_BAN_REMOVE",
            Self::GuildEmojisUpdate(_) => "GUILD_EMOJIS_UPDATE",
            Self::GuildIntegrationsUpdate(_) => "GUILD_INTEGRATIONS_UPDATE",
            Self::GuildMemberAdd(_) => "GUILD_MEMBER_ADD",
            Self::GuildMemberUpdate(_) => "GUILD_MEMBER_UPDATE",
            Self::GuildMemberRemove(_) => "GUILD_MEMBER_REMOVE",
            Self::GuildRoleCreate(_) => "GUILD_ROLE_CREATE",
            Self::GuildRoleUpdate(_) => "GUILD_ROLE_UPDATE",
            Self::GuildRoleDelete(_) => "GUILD_ROLE_DELETE",
            Self::PresenceUpdate(_) => "PRESENCE_UPDATE",
            Self::MessageCreate(_) => "MESSAGE_CREATE",
            Self::MessageUpdate(_) => "MESSAGE_UPDATE",
            Self::MessageDelete(_) => "MESSAGE_DELETE",
            Self::MessageDeleteBulk(_) => "MESSAGE_DELETE_BULK",
            Self::MessageReactionAdd(_) => "MESSAGE_REACTION_ADD",
            Self::MessageReactionRemove(_) => "MESSAGE_REACTION_REMOVE",
            Self::MessageReactionRemoveAll(_) => "MESSAGE_REACTION_REMOVE_ALL",
            Self::MessageReactionRemoveEmoji(_) => "MESSAGE_REACTION_REMOVE_EMOJI",
            Self::Ready(_) => "READY",
            Self::OwnUserUpdate(_) => "USER_UPDATE",
            Self::VoiceStateUpdate(_) => "VOICE_STATE_UPDATE",
            Self::VoiceServerUpdate(_) => "VOICE_SERVER_UPDATE",
            Self::Unknown { name, .. } => name,
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch by event name
// ---------------------------------------------------------------------------

impl EntityFactory {
    /// Parse a dispatch payload by its gateway event name.
    ///
    /// Unrecognised names become [`Event::Unknown`] rather than an error.
    /// `GUILD_DELETE` becomes [`Event::GuildUnavailable`] when the payload
    /// is flagged `unavailable`, otherwise [`Event::GuildLeave`].
    ///
    /// # Errors
    ///
    /// Returns the error of the event's deserializer when a recognised event
    /// carries a malformed payload.
    pub fn deserialize_event(
        &self,
        shard: &Shard,
        name: &str,
        payload: &Payload,
    ) -> Result<Event, FactoryError> {
        let event = match name {
            "CHANNEL_CREATE" => {
                self.deserialize_channel_create_event(payload).map(Event::ChannelCreate)
            }
            "CHANNEL_UPDATE" => {
                self.deserialize_channel_update_event(payload).map(Event::ChannelUpdate)
            }
            "CHANNEL_DELETE" => {
                self.deserialize_channel_delete_event(payload).map(Event::ChannelDelete)
            }
            "CHANNEL_PINS_UPDATE" => self
                .deserialize_channel_pins_update_event(payload)
                .map(Event::ChannelPinsUpdate),
            "WEBHOOKS_UPDATE" => {
                self.deserialize_webhook_update_event(payload).map(Event::WebhookUpdate)
            }
            "TYPING_START" => self.deserialize_typing_start_event(payload).map(Event::TypingStart),
            "INVITE_CREATE" => {
                self.deserialize_invite_create_event(payload).map(Event::InviteCreate)
            }
            "INVITE_DELETE" => {
                self.deserialize_invite_delete_event(payload).map(Event::InviteDelete)
            }

            "GUILD_CREATE" => self.deserialize_guild_create_event(payload).map(Event::GuildCreate),
            "GUILD_UPDATE" => self.deserialize_guild_update_event(payload).map(Event::GuildUpdate),
            "GUILD_DELETE" => match payload.or_default::<bool>("unavailable") {
                Ok(true) => self
                    .deserialize_guild_unavailable_event(payload)
                    .map(Event::GuildUnavailable),
                Ok(false) => self.deserialize_guild_leave_event(payload).map(Event::GuildLeave),
                Err(error) => Err(error),
            },
            "GUILD_BAN_ADD" => {
                self.deserialize_guild_ban_add_event(payload).map(Event::GuildBanAdd)
            }
            "GUILD_BAN_REMOVE" => self
                .deserialize_guild_ban_remove_event(payload)
                .map(Event::GuildBanRemove),
            "GUILD_EMOJIS_UPDATE" => self
                .deserialize_guild_emojis_update_event(payload)
                .map(Event::GuildEmojisUpdate),
            "GUILD_INTEGRATIONS_UPDATE" => self
                .deserialize_guild_integrations_update_event(payload)
                .map(Event::GuildIntegrationsUpdate),
            "GUILD_MEMBER_ADD" => self
                .deserialize_guild_member_add_event(payload)
                .map(Event::GuildMemberAdd),
            "GUILD_MEMBER_UPDATE" => self
                .deserialize_guild_member_update_event(payload)
                .map(Event::GuildMemberUpdate),
            "GUILD_MEMBER_REMOVE" => self
                .deserialize_guild_member_remove_event(payload)
                .map(Event::GuildMemberRemove),
            "GUILD_ROLE_CREATE" => self
                .deserialize_guild_role_create_event(payload)
                .map(Event::GuildRoleCreate),
            "GUILD_ROLE_UPDATE" => self
                .deserialize_guild_role_update_event(payload)
                .map(Event::GuildRoleUpdate),
            "GUILD_ROLE_DELETE" => self
                .deserialize_guild_role_delete_event(payload)
                .map(Event::GuildRoleDelete),
            "PRESENCE_UPDATE" => {
                self.deserialize_presence_update_event(payload).map(Event::PresenceUpdate)
            }

            "MESSAGE_CREATE" => {
                self.deserialize_message_create_event(payload).map(Event::MessageCreate)
            }
            "MESSAGE_UPDATE" => {
                self.deserialize_message_update_event(payload).map(Event::MessageUpdate)
            }
            "MESSAGE_DELETE" => {
                self.deserialize_message_delete_event(payload).map(Event::MessageDelete)
            }
            "MESSAGE_DELETE_BULK" => self
                .deserialize_message_delete_bulk_event(payload)
                .map(Event::MessageDeleteBulk),
            "MESSAGE_REACTION_ADD" => self
                .deserialize_message_reaction_add_event(payload)
                .map(Event::MessageReactionAdd),
            "MESSAGE_REACTION_REMOVE" => self
                .deserialize_message_reaction_remove_event(payload)
                .map(Event::MessageReactionRemove),
            "MESSAGE_REACTION_REMOVE_ALL" => self
                .deserialize_message_reaction_remove_all_event(payload)
                .map(Event::MessageReactionRemoveAll),
            "MESSAGE_REACTION_REMOVE_EMOJI" => self
                .deserialize_message_reaction_remove_emoji_event(payload)
                .map(Event::MessageReactionRemoveEmoji),

            "READY" => self.deserialize_ready_event(shard, payload).map(Event::Ready),
            "USER_UPDATE" => {
                self.deserialize_own_user_update_event(payload).map(Event::OwnUserUpdate)
            }

            "VOICE_STATE_UPDATE" => self
                .deserialize_voice_state_update_event(payload)
                .map(Event::VoiceStateUpdate),
            "VOICE_SERVER_UPDATE" => self
                .deserialize_voice_server_update_event(payload)
                .map(Event::VoiceServerUpdate),

            _ => {
                debug!(event = name, "no typed variant for event");
                return Ok(Event::Unknown {
                    name: name.to_owned(),
                    payload: payload.clone(),
                });
            }
        };

        event.map_err(|error| {
            warn!(event = name, error = %error, "failed to deserialize event payload");
            error
        })
    }
}
