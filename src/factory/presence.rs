use super::EntityFactory;
use crate::{
    error::FactoryError,
    types::{
        gateway::presence::{
            ActivityFlags, ActivityParty, ActivityTimestamps, MemberPresence, RichActivity,
        },
        util::{
            datetime,
            payload::{decode, decode_id_set, PayloadExt},
            Payload, ValueExt,
        },
    },
};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

impl EntityFactory {
    /// Parse a member's presence in a guild.
    ///
    /// The user is partial: presence updates only guarantee its id.
    pub fn deserialize_member_presence(
        &self,
        payload: &Payload,
    ) -> Result<MemberPresence, FactoryError> {
        let mut activities = Vec::new();
        for activity in payload.objects("activities")? {
            activities.push(self.deserialize_rich_activity(activity)?);
        }

        Ok(MemberPresence {
            app: self.app.clone(),
            user: self.deserialize_partial_user(payload.object("user")?)?,
            role_ids: payload.nullable_with("roles", decode_id_set)?,
            guild_id: payload.nullable_id("guild_id")?,
            visible_status: payload.required("status")?,
            activities,
            client_status: payload.or_default("client_status")?,
            premium_since: payload.nullable_timestamp("premium_since")?,
            nickname: payload.nullable("nick")?,
        })
    }

    /// Parse one activity of a presence.
    ///
    /// Activity times are Unix milliseconds rather than ISO 8601 text.
    pub fn deserialize_rich_activity(
        &self,
        payload: &Payload,
    ) -> Result<RichActivity, FactoryError> {
        let timestamps = match payload.nullable_object("timestamps")? {
            Some(timestamps) => Some(ActivityTimestamps {
                start: timestamps.nullable_with("start", decode_unix_millis)?,
                end: timestamps.nullable_with("end", decode_unix_millis)?,
            }),
            None => None,
        };

        let party = match payload.nullable_object("party")? {
            Some(party) => {
                let size = party.nullable::<[u64; 2]>("size")?;
                Some(ActivityParty {
                    id: party.nullable("id")?,
                    current_size: size.map(|[current, _]| current),
                    max_size: size.map(|[_, max]| max),
                })
            }
            None => None,
        };

        let emoji = payload
            .nullable_object("emoji")?
            .map(|emoji| self.deserialize_emoji(emoji))
            .transpose()?;

        Ok(RichActivity {
            name: payload.required("name")?,
            kind: payload.required("type")?,
            url: payload.nullable("url")?,
            created_at: payload.require_with("created_at", decode_unix_millis)?,
            timestamps,
            application_id: payload.nullable_id("application_id")?,
            details: payload.nullable("details")?,
            state: payload.nullable("state")?,
            emoji,
            party,
            assets: nested(payload, "assets")?,
            secrets: nested(payload, "secrets")?,
            is_instance: payload.nullable("instance")?,
            flags: payload
                .nullable("flags")?
                .map(ActivityFlags::from_bits_retain),
        })
    }
}

fn decode_unix_millis(key: &'static str, value: &Value) -> Result<DateTime<Utc>, FactoryError> {
    datetime::unix_millis(decode(key, value)?).map_err(|error| error.in_field(key))
}

/// Read an object whose wire shape matches its model one to one.
fn nested<T: DeserializeOwned>(
    payload: &Payload,
    key: &'static str,
) -> Result<Option<T>, FactoryError> {
    payload
        .nullable_object(key)?
        .map(|object| {
            object
                .deserialize_into()
                .map_err(|source| FactoryError::schema(key, source))
        })
        .transpose()
}
