use super::{collect_id_map, decode_permissions, EntityFactory};
use crate::{
    error::FactoryError,
    types::{
        channel::ChannelType,
        guild::{
            Guild, GuildMemberBan, GuildPreview, GuildSystemChannelFlags, GuildWidget, Integration,
            IntegrationAccount, Member, PartialIntegration, PartialRole, Role, UnavailableGuild,
        },
        user::User,
        util::{datetime, payload::PayloadExt, to_id_map, Payload},
    },
};
use tracing::debug;

impl EntityFactory {
    pub fn deserialize_guild_widget(&self, payload: &Payload) -> Result<GuildWidget, FactoryError> {
        Ok(GuildWidget {
            app: self.app.clone(),
            channel_id: payload.nullable_id("channel_id")?,
            is_enabled: payload.required("enabled")?,
        })
    }

    /// Parse a guild member.
    ///
    /// Payloads nested in a message or an event that already carries the
    /// user omit `user`; pass that user in instead. When `user` is given the
    /// payload's own `user` key is ignored.
    ///
    /// A missing key and an explicit `null` stay distinct for every optional
    /// field, including `joined_at`.
    pub fn deserialize_member(
        &self,
        payload: &Payload,
        user: Option<User>,
    ) -> Result<Member, FactoryError> {
        let user = match user {
            Some(user) => user,
            None => self.deserialize_user(payload.object("user")?)?,
        };

        Ok(Member {
            app: self.app.clone(),
            user,
            nickname: payload.tristate("nick")?,
            role_ids: payload.id_set("roles")?,
            joined_at: payload.tristate_timestamp("joined_at")?,
            premium_since: payload.tristate_timestamp("premium_since")?,
            is_deaf: payload.tristate("deaf")?,
            is_mute: payload.tristate("mute")?,
        })
    }

    pub fn deserialize_role(&self, payload: &Payload) -> Result<Role, FactoryError> {
        Ok(Role {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            color: payload.required("color")?,
            is_hoisted: payload.required("hoist")?,
            position: payload.required("position")?,
            permissions: payload.require_with("permissions", decode_permissions)?,
            is_managed: payload.required("managed")?,
            is_mentionable: payload.required("mentionable")?,
        })
    }

    /// Parse the id and name of a role, as sent in audit log changes.
    pub fn deserialize_partial_role(&self, payload: &Payload) -> Result<PartialRole, FactoryError> {
        Ok(PartialRole {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
        })
    }

    pub fn deserialize_partial_integration(
        &self,
        payload: &Payload,
    ) -> Result<PartialIntegration, FactoryError> {
        Ok(PartialIntegration {
            id: payload.id("id")?,
            name: payload.required("name")?,
            kind: payload.required("type")?,
            account: integration_account(payload)?,
        })
    }

    pub fn deserialize_integration(&self, payload: &Payload) -> Result<Integration, FactoryError> {
        Ok(Integration {
            id: payload.id("id")?,
            name: payload.required("name")?,
            kind: payload.required("type")?,
            account: integration_account(payload)?,
            is_enabled: payload.required("enabled")?,
            is_syncing: payload.required("syncing")?,
            role_id: payload.id("role_id")?,
            is_emojis_enabled: payload.nullable("enable_emoticons")?,
            expire_behavior: payload.required("expire_behavior")?,
            expire_grace_period: datetime::days(payload.string_int("expire_grace_period")?),
            user: self.deserialize_user(payload.object("user")?)?,
            last_synced_at: payload.nullable_timestamp("synced_at")?,
        })
    }

    pub fn deserialize_guild_member_ban(
        &self,
        payload: &Payload,
    ) -> Result<GuildMemberBan, FactoryError> {
        Ok(GuildMemberBan {
            reason: payload.nullable("reason")?,
            user: self.deserialize_user(payload.object("user")?)?,
        })
    }

    pub fn deserialize_unavailable_guild(
        &self,
        payload: &Payload,
    ) -> Result<UnavailableGuild, FactoryError> {
        Ok(UnavailableGuild {
            app: self.app.clone(),
            id: payload.id("id")?,
            is_unavailable: payload.or_default("unavailable")?,
        })
    }

    pub fn deserialize_guild_preview(
        &self,
        payload: &Payload,
    ) -> Result<GuildPreview, FactoryError> {
        Ok(GuildPreview {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            icon_hash: payload.nullable("icon")?,
            features: payload.required("features")?,
            splash_hash: payload.nullable("splash")?,
            discovery_splash_hash: payload.nullable("discovery_splash")?,
            emojis: collect_id_map(payload.objects("emojis")?, |emoji| {
                self.deserialize_known_custom_emoji(emoji)
            })?,
            approximate_member_count: payload.required("approximate_member_count")?,
            approximate_presence_count: payload.required("approximate_presence_count")?,
            description: payload.nullable("description")?,
        })
    }

    /// Parse a full guild with everything nested in it.
    ///
    /// Channels, presences and voice states sent inside a guild may omit
    /// `guild_id`; they take the guild's own id in that case. Channels of a
    /// type this crate doesn't model are skipped when
    /// [`FactoryConfig::skip_unknown_guild_channels`] is set and fail the
    /// guild otherwise.
    ///
    /// [`FactoryConfig::skip_unknown_guild_channels`]:
    ///     crate::config::FactoryConfig::skip_unknown_guild_channels
    pub fn deserialize_guild(&self, payload: &Payload) -> Result<Guild, FactoryError> {
        let id = payload.id("id")?;

        let mut channels = Vec::new();
        for channel in payload.objects("channels")? {
            if let ChannelType::Unknown(kind) = channel.required("type")? {
                if self.config.skip_unknown_guild_channels {
                    debug!(guild_id = %id, kind, "skipping channel of unsupported type");
                    continue;
                }
            }

            let mut channel = self.deserialize_channel(channel)?;
            channel.inherit_guild_id(id);
            channels.push(channel);
        }

        let presences = collect_id_map(payload.objects("presences")?, |presence| {
            let mut presence = self.deserialize_member_presence(presence)?;
            presence.guild_id.get_or_insert(id);
            Ok(presence)
        })?;

        let voice_states = collect_id_map(payload.objects("voice_states")?, |state| {
            let mut state = self.deserialize_voice_state(state)?;
            state.guild_id.get_or_insert(id);
            Ok(state)
        })?;

        Ok(Guild {
            app: self.app.clone(),
            id,
            name: payload.required("name")?,
            icon_hash: payload.nullable("icon")?,
            features: payload.required("features")?,
            splash_hash: payload.nullable("splash")?,
            discovery_splash_hash: payload.nullable("discovery_splash")?,
            banner_hash: payload.nullable("banner")?,
            description: payload.nullable("description")?,
            owner_id: payload.id("owner_id")?,
            my_permissions: payload.nullable_with("permissions", decode_permissions)?,
            region: payload.required("region")?,
            afk_channel_id: payload.nullable_id("afk_channel_id")?,
            afk_timeout: datetime::seconds(payload.required("afk_timeout")?),
            is_embed_enabled: payload.or_default("embed_enabled")?,
            embed_channel_id: payload.nullable_id("embed_channel_id")?,
            verification_level: payload.required("verification_level")?,
            default_message_notifications: payload.required("default_message_notifications")?,
            explicit_content_filter: payload.required("explicit_content_filter")?,
            roles: collect_id_map(payload.objects("roles")?, |role| self.deserialize_role(role))?,
            emojis: collect_id_map(payload.objects("emojis")?, |emoji| {
                self.deserialize_known_custom_emoji(emoji)
            })?,
            mfa_level: payload.required("mfa_level")?,
            application_id: payload.nullable_id("application_id")?,
            is_unavailable: payload.nullable("unavailable")?,
            is_widget_enabled: payload.nullable("widget_enabled")?,
            widget_channel_id: payload.nullable_id("widget_channel_id")?,
            system_channel_id: payload.nullable_id("system_channel_id")?,
            system_channel_flags: GuildSystemChannelFlags::from_bits_retain(
                payload.required("system_channel_flags")?,
            ),
            rules_channel_id: payload.nullable_id("rules_channel_id")?,
            joined_at: payload.nullable_timestamp("joined_at")?,
            is_large: payload.nullable("large")?,
            member_count: payload.nullable("member_count")?,
            members: collect_id_map(payload.objects("members")?, |member| {
                self.deserialize_member(member, None)
            })?,
            channels: to_id_map(channels),
            presences,
            voice_states,
            max_presences: payload.nullable("max_presences")?,
            max_members: payload.nullable("max_members")?,
            max_video_channel_users: payload.nullable("max_video_channel_users")?,
            vanity_url_code: payload.nullable("vanity_url_code")?,
            premium_tier: payload.required("premium_tier")?,
            premium_subscription_count: payload.nullable("premium_subscription_count")?,
            preferred_locale: payload.required("preferred_locale")?,
            public_updates_channel_id: payload.nullable_id("public_updates_channel_id")?,
            approximate_member_count: payload.nullable("approximate_member_count")?,
            approximate_active_member_count: payload.nullable("approximate_presence_count")?,
        })
    }
}

fn integration_account(payload: &Payload) -> Result<IntegrationAccount, FactoryError> {
    let account = payload.object("account")?;

    Ok(IntegrationAccount {
        id: account.required("id")?,
        name: account.required("name")?,
    })
}
