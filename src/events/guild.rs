//! Guild, membership, role and presence events.

use crate::{
    app::App,
    error::FactoryError,
    factory::EntityFactory,
    types::{
        gateway::presence::MemberPresence,
        guild::{Guild, KnownCustomEmoji, Member, Role},
        id::{
            marker::{EmojiMarker, GuildMarker, RoleMarker},
            Id,
        },
        user::User,
        util::{payload::PayloadExt, to_id_map, IdMap, Payload},
    },
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildCreateEvent {
    pub guild: Guild,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildUpdateEvent {
    pub guild: Guild,
}

/// The current user left the guild or was removed from it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildLeaveEvent {
    pub app: App,
    pub id: Id<GuildMarker>,
}

/// The guild became unavailable because of an outage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildUnavailableEvent {
    pub app: App,
    pub id: Id<GuildMarker>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildBanAddEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
    pub user: User,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildBanRemoveEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
    pub user: User,
}

/// The guild's full emoji list after a change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildEmojisUpdateEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
    pub emojis: IdMap<EmojiMarker, KnownCustomEmoji>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildIntegrationsUpdateEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildMemberAddEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
    pub member: Member,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildMemberUpdateEvent {
    pub member: Member,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildMemberRemoveEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
    pub user: User,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildRoleCreateEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
    pub role: Role,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildRoleUpdateEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
    pub role: Role,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildRoleDeleteEvent {
    pub app: App,
    pub guild_id: Id<GuildMarker>,
    pub role_id: Id<RoleMarker>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresenceUpdateEvent {
    pub presence: MemberPresence,
}

impl EntityFactory {
    pub fn deserialize_guild_create_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildCreateEvent, FactoryError> {
        Ok(GuildCreateEvent {
            guild: self.deserialize_guild(payload)?,
        })
    }

    pub fn deserialize_guild_update_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildUpdateEvent, FactoryError> {
        Ok(GuildUpdateEvent {
            guild: self.deserialize_guild(payload)?,
        })
    }

    pub fn deserialize_guild_leave_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildLeaveEvent, FactoryError> {
        Ok(GuildLeaveEvent {
            app: self.app().clone(),
            id: payload.id("id")?,
        })
    }

    pub fn deserialize_guild_unavailable_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildUnavailableEvent, FactoryError> {
        Ok(GuildUnavailableEvent {
            app: self.app().clone(),
            id: payload.id("id")?,
        })
    }

    pub fn deserialize_guild_ban_add_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildBanAddEvent, FactoryError> {
        Ok(GuildBanAddEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
            user: self.deserialize_user(payload.object("user")?)?,
        })
    }

    pub fn deserialize_guild_ban_remove_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildBanRemoveEvent, FactoryError> {
        Ok(GuildBanRemoveEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
            user: self.deserialize_user(payload.object("user")?)?,
        })
    }

    pub fn deserialize_guild_emojis_update_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildEmojisUpdateEvent, FactoryError> {
        let mut emojis = Vec::new();
        for emoji in payload.objects("emojis")? {
            emojis.push(self.deserialize_known_custom_emoji(emoji)?);
        }

        Ok(GuildEmojisUpdateEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
            emojis: to_id_map(emojis),
        })
    }

    pub fn deserialize_guild_integrations_update_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildIntegrationsUpdateEvent, FactoryError> {
        Ok(GuildIntegrationsUpdateEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
        })
    }

    /// Parse a member joining; the payload is the member plus `guild_id`.
    pub fn deserialize_guild_member_add_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildMemberAddEvent, FactoryError> {
        Ok(GuildMemberAddEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
            member: self.deserialize_member(payload, None)?,
        })
    }

    pub fn deserialize_guild_member_update_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildMemberUpdateEvent, FactoryError> {
        Ok(GuildMemberUpdateEvent {
            member: self.deserialize_member(payload, None)?,
        })
    }

    pub fn deserialize_guild_member_remove_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildMemberRemoveEvent, FactoryError> {
        Ok(GuildMemberRemoveEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
            user: self.deserialize_user(payload.object("user")?)?,
        })
    }

    pub fn deserialize_guild_role_create_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildRoleCreateEvent, FactoryError> {
        Ok(GuildRoleCreateEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
            role: self.deserialize_role(payload.object("role")?)?,
        })
    }

    pub fn deserialize_guild_role_update_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildRoleUpdateEvent, FactoryError> {
        Ok(GuildRoleUpdateEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
            role: self.deserialize_role(payload.object("role")?)?,
        })
    }

    pub fn deserialize_guild_role_delete_event(
        &self,
        payload: &Payload,
    ) -> Result<GuildRoleDeleteEvent, FactoryError> {
        Ok(GuildRoleDeleteEvent {
            app: self.app().clone(),
            guild_id: payload.id("guild_id")?,
            role_id: payload.id("role_id")?,
        })
    }

    pub fn deserialize_presence_update_event(
        &self,
        payload: &Payload,
    ) -> Result<PresenceUpdateEvent, FactoryError> {
        Ok(PresenceUpdateEvent {
            presence: self.deserialize_member_presence(payload)?,
        })
    }
}
