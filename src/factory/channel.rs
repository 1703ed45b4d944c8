use super::{collect_id_map, decode_permissions, EntityFactory};
use crate::{
    error::FactoryError,
    types::{
        channel::{
            Channel, ChannelType, DmChannel, GroupDmChannel, GuildCategory, GuildNewsChannel,
            GuildStoreChannel, GuildTextChannel, GuildVoiceChannel, PartialChannel,
            PermissionOverwrite,
        },
        id::marker::GenericMarker,
        util::{datetime, payload::PayloadExt, IdMap, Payload},
    },
};
use std::collections::HashMap;

impl EntityFactory {
    pub fn deserialize_permission_overwrite(
        &self,
        payload: &Payload,
    ) -> Result<PermissionOverwrite, FactoryError> {
        Ok(PermissionOverwrite {
            id: payload.id("id")?,
            kind: payload.required("type")?,
            allow: payload.require_with("allow", decode_permissions)?,
            deny: payload.require_with("deny", decode_permissions)?,
        })
    }

    /// Build the wire form of an overwrite, as sent when editing a channel.
    pub fn serialize_permission_overwrite(&self, overwrite: &PermissionOverwrite) -> Payload {
        let mut payload = Payload::new();
        payload.insert("id".to_owned(), overwrite.id.to_string().into());
        payload.insert("type".to_owned(), overwrite.kind.as_str().into());
        payload.insert("allow".to_owned(), overwrite.allow.bits().into());
        payload.insert("deny".to_owned(), overwrite.deny.bits().into());
        payload
    }

    pub fn deserialize_partial_channel(
        &self,
        payload: &Payload,
    ) -> Result<PartialChannel, FactoryError> {
        Ok(PartialChannel {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.nullable("name")?,
            kind: payload.required("type")?,
        })
    }

    pub fn deserialize_dm_channel(&self, payload: &Payload) -> Result<DmChannel, FactoryError> {
        Ok(DmChannel {
            app: self.app.clone(),
            id: payload.id("id")?,
            last_message_id: payload.nullable_id("last_message_id")?,
            recipients: collect_id_map(payload.objects("recipients")?, |user| {
                self.deserialize_user(user)
            })?,
        })
    }

    pub fn deserialize_group_dm_channel(
        &self,
        payload: &Payload,
    ) -> Result<GroupDmChannel, FactoryError> {
        let mut nicknames = HashMap::new();
        for nick in payload.objects("nicks")? {
            nicknames.insert(nick.id("id")?, nick.required("nick")?);
        }

        Ok(GroupDmChannel {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.nullable("name")?,
            icon_hash: payload.nullable("icon")?,
            owner_id: payload.id("owner_id")?,
            application_id: payload.nullable_id("application_id")?,
            nicknames,
            last_message_id: payload.nullable_id("last_message_id")?,
            recipients: collect_id_map(payload.objects("recipients")?, |user| {
                self.deserialize_user(user)
            })?,
        })
    }

    pub fn deserialize_guild_category(
        &self,
        payload: &Payload,
    ) -> Result<GuildCategory, FactoryError> {
        Ok(GuildCategory {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            guild_id: payload.nullable_id("guild_id")?,
            position: payload.required("position")?,
            permission_overwrites: self.permission_overwrites(payload)?,
            is_nsfw: payload.nullable("nsfw")?,
            parent_id: payload.nullable_id("parent_id")?,
        })
    }

    /// Parse a guild text channel.
    ///
    /// `rate_limit_per_user` is sent in seconds and defaults to zero.
    pub fn deserialize_guild_text_channel(
        &self,
        payload: &Payload,
    ) -> Result<GuildTextChannel, FactoryError> {
        Ok(GuildTextChannel {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            guild_id: payload.nullable_id("guild_id")?,
            position: payload.required("position")?,
            permission_overwrites: self.permission_overwrites(payload)?,
            is_nsfw: payload.nullable("nsfw")?,
            parent_id: payload.nullable_id("parent_id")?,
            topic: payload.nullable("topic")?,
            last_message_id: payload.nullable_id("last_message_id")?,
            rate_limit_per_user: datetime::seconds(payload.or_default("rate_limit_per_user")?),
            last_pin_timestamp: payload.nullable_timestamp("last_pin_timestamp")?,
        })
    }

    pub fn deserialize_guild_news_channel(
        &self,
        payload: &Payload,
    ) -> Result<GuildNewsChannel, FactoryError> {
        Ok(GuildNewsChannel {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            guild_id: payload.nullable_id("guild_id")?,
            position: payload.required("position")?,
            permission_overwrites: self.permission_overwrites(payload)?,
            is_nsfw: payload.nullable("nsfw")?,
            parent_id: payload.nullable_id("parent_id")?,
            topic: payload.nullable("topic")?,
            last_message_id: payload.nullable_id("last_message_id")?,
            last_pin_timestamp: payload.nullable_timestamp("last_pin_timestamp")?,
        })
    }

    pub fn deserialize_guild_store_channel(
        &self,
        payload: &Payload,
    ) -> Result<GuildStoreChannel, FactoryError> {
        Ok(GuildStoreChannel {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            guild_id: payload.nullable_id("guild_id")?,
            position: payload.required("position")?,
            permission_overwrites: self.permission_overwrites(payload)?,
            is_nsfw: payload.nullable("nsfw")?,
            parent_id: payload.nullable_id("parent_id")?,
        })
    }

    pub fn deserialize_guild_voice_channel(
        &self,
        payload: &Payload,
    ) -> Result<GuildVoiceChannel, FactoryError> {
        Ok(GuildVoiceChannel {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            guild_id: payload.nullable_id("guild_id")?,
            position: payload.required("position")?,
            permission_overwrites: self.permission_overwrites(payload)?,
            is_nsfw: payload.nullable("nsfw")?,
            parent_id: payload.nullable_id("parent_id")?,
            bitrate: payload.required("bitrate")?,
            user_limit: payload.required("user_limit")?,
        })
    }

    /// Parse any channel, selecting the concrete type from `type`.
    ///
    /// A type this crate doesn't model is a schema violation on `type`.
    pub fn deserialize_channel(&self, payload: &Payload) -> Result<Channel, FactoryError> {
        let channel = match payload.required("type")? {
            ChannelType::GuildText => {
                Channel::GuildText(self.deserialize_guild_text_channel(payload)?)
            }
            ChannelType::Dm => Channel::Dm(self.deserialize_dm_channel(payload)?),
            ChannelType::GuildVoice => {
                Channel::GuildVoice(self.deserialize_guild_voice_channel(payload)?)
            }
            ChannelType::GroupDm => Channel::GroupDm(self.deserialize_group_dm_channel(payload)?),
            ChannelType::GuildCategory => {
                Channel::GuildCategory(self.deserialize_guild_category(payload)?)
            }
            ChannelType::GuildNews => {
                Channel::GuildNews(self.deserialize_guild_news_channel(payload)?)
            }
            ChannelType::GuildStore => {
                Channel::GuildStore(self.deserialize_guild_store_channel(payload)?)
            }
            ChannelType::Unknown(kind) => {
                return Err(FactoryError::invalid(
                    "type",
                    format!("unsupported channel type {kind}"),
                ))
            }
        };

        Ok(channel)
    }

    fn permission_overwrites(
        &self,
        payload: &Payload,
    ) -> Result<IdMap<GenericMarker, PermissionOverwrite>, FactoryError> {
        collect_id_map(payload.objects("permission_overwrites")?, |overwrite| {
            self.deserialize_permission_overwrite(overwrite)
        })
    }
}
