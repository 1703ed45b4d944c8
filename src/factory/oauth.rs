use super::{collect_id_map, decode_permissions, EntityFactory};
use crate::{
    error::FactoryError,
    types::{
        oauth::{Application, OwnConnection, OwnGuild, Team, TeamMember},
        util::{payload::PayloadExt, Payload},
    },
};

impl EntityFactory {
    /// Parse a third-party account linked to the current user.
    pub fn deserialize_own_connection(
        &self,
        payload: &Payload,
    ) -> Result<OwnConnection, FactoryError> {
        let integrations = payload
            .objects("integrations")?
            .into_iter()
            .map(|integration| self.deserialize_partial_integration(integration))
            .collect::<Result<_, _>>()?;

        Ok(OwnConnection {
            id: payload.required("id")?,
            name: payload.required("name")?,
            kind: payload.required("type")?,
            is_revoked: payload.required("revoked")?,
            integrations,
            is_verified: payload.required("verified")?,
            is_friend_sync_enabled: payload.required("friend_sync")?,
            is_activity_visible: payload.required("show_activity")?,
            visibility: payload.required("visibility")?,
        })
    }

    pub fn deserialize_own_guild(&self, payload: &Payload) -> Result<OwnGuild, FactoryError> {
        Ok(OwnGuild {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            icon_hash: payload.nullable("icon")?,
            features: payload.required("features")?,
            is_owner: payload.required("owner")?,
            my_permissions: payload.require_with("permissions", decode_permissions)?,
        })
    }

    /// Parse an application with its team, as returned for the current bot.
    ///
    /// `verify_key` is kept as the bytes of its hex text, not decoded.
    pub fn deserialize_application(&self, payload: &Payload) -> Result<Application, FactoryError> {
        let owner = payload
            .nullable_object("owner")?
            .map(|owner| self.deserialize_user(owner))
            .transpose()?;

        let team = payload
            .nullable_object("team")?
            .map(|team| self.deserialize_team(team))
            .transpose()?;

        Ok(Application {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.required("name")?,
            description: payload.required("description")?,
            is_bot_public: payload.nullable("bot_public")?,
            is_bot_code_grant_required: payload.nullable("bot_require_code_grant")?,
            owner,
            rpc_origins: payload.nullable("rpc_origins")?,
            summary: payload.or_default("summary")?,
            verify_key: payload
                .nullable::<String>("verify_key")?
                .map(String::into_bytes),
            icon_hash: payload.nullable("icon")?,
            team,
            guild_id: payload.nullable_id("guild_id")?,
            primary_sku_id: payload.nullable_id("primary_sku_id")?,
            slug: payload.nullable("slug")?,
            cover_image_hash: payload.nullable("cover_image")?,
        })
    }

    fn deserialize_team(&self, payload: &Payload) -> Result<Team, FactoryError> {
        let members = collect_id_map(payload.objects("members")?, |member| {
            Ok(TeamMember {
                app: self.app.clone(),
                membership_state: member.required("membership_state")?,
                permissions: member.required("permissions")?,
                team_id: member.id("team_id")?,
                user: self.deserialize_user(member.object("user")?)?,
            })
        })?;

        Ok(Team {
            app: self.app.clone(),
            id: payload.id("id")?,
            icon_hash: payload.nullable("icon")?,
            members,
            owner_user_id: payload.id("owner_user_id")?,
        })
    }
}
