use super::EntityFactory;
use crate::{
    error::FactoryError,
    types::{
        channel::{
            invite::{InviteGuild, TargetUserType},
            Invite, InviteWithMetadata, VanityUrl,
        },
        util::{payload::PayloadExt, sentinel, Payload},
    },
};

impl EntityFactory {
    pub fn deserialize_vanity_url(&self, payload: &Payload) -> Result<VanityUrl, FactoryError> {
        Ok(VanityUrl {
            app: self.app.clone(),
            code: payload.required("code")?,
            uses: payload.required("uses")?,
        })
    }

    pub fn deserialize_invite_guild(&self, payload: &Payload) -> Result<InviteGuild, FactoryError> {
        Ok(InviteGuild {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            icon_hash: payload.nullable("icon")?,
            features: payload.or_default("features")?,
            splash_hash: payload.nullable("splash")?,
            banner_hash: payload.nullable("banner")?,
            description: payload.nullable("description")?,
            verification_level: payload.required("verification_level")?,
            vanity_url_code: payload.nullable("vanity_url_code")?,
        })
    }

    /// Parse an invite.
    ///
    /// The guild and channel ids fall back to the nested objects when only
    /// those were sent.
    pub fn deserialize_invite(&self, payload: &Payload) -> Result<Invite, FactoryError> {
        let guild = payload
            .nullable_object("guild")?
            .map(|guild| self.deserialize_invite_guild(guild))
            .transpose()?;
        let channel = payload
            .nullable_object("channel")?
            .map(|channel| self.deserialize_partial_channel(channel))
            .transpose()?;

        let guild_id = match payload.nullable_id("guild_id")? {
            Some(id) => Some(id),
            None => guild.as_ref().map(|guild| guild.id),
        };
        let channel_id = match (payload.nullable_id("channel_id")?, &channel) {
            (Some(id), _) => id,
            (None, Some(channel)) => channel.id,
            (None, None) => return Err(FactoryError::missing("channel_id")),
        };

        let inviter = payload
            .nullable_object("inviter")?
            .map(|user| self.deserialize_user(user))
            .transpose()?;
        let target_user = payload
            .nullable_object("target_user")?
            .map(|user| self.deserialize_user(user))
            .transpose()?;

        Ok(Invite {
            app: self.app.clone(),
            code: payload.required("code")?,
            guild,
            guild_id,
            channel,
            channel_id,
            inviter,
            target_user,
            target_user_type: payload.nullable::<TargetUserType>("target_user_type")?,
            approximate_presence_count: payload.nullable("approximate_presence_count")?,
            approximate_member_count: payload.nullable("approximate_member_count")?,
        })
    }

    /// Parse an invite with its usage details.
    ///
    /// A `max_uses` or `max_age` of zero means no limit.
    pub fn deserialize_invite_with_metadata(
        &self,
        payload: &Payload,
    ) -> Result<InviteWithMetadata, FactoryError> {
        Ok(InviteWithMetadata {
            invite: self.deserialize_invite(payload)?,
            uses: payload.required("uses")?,
            max_uses: sentinel::max_uses(payload.required("max_uses")?),
            max_age: sentinel::max_age(payload.required("max_age")?),
            is_temporary: payload.required("temporary")?,
            created_at: payload.timestamp("created_at")?,
        })
    }
}
