use super::EntityFactory;
use crate::{
    error::FactoryError,
    types::{
        guild::{CustomEmoji, Emoji, KnownCustomEmoji, UnicodeEmoji},
        util::{payload::PayloadExt, Field, Payload},
    },
};

impl EntityFactory {
    pub fn deserialize_unicode_emoji(
        &self,
        payload: &Payload,
    ) -> Result<UnicodeEmoji, FactoryError> {
        Ok(UnicodeEmoji {
            name: payload.required("name")?,
        })
    }

    /// Parse a custom emoji as referenced from reactions and activities.
    ///
    /// The name is null when the emoji was deleted.
    pub fn deserialize_custom_emoji(&self, payload: &Payload) -> Result<CustomEmoji, FactoryError> {
        Ok(CustomEmoji {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.nullable("name")?,
            is_animated: payload.or_default("animated")?,
        })
    }

    /// Parse a custom emoji with the guild-level details.
    pub fn deserialize_known_custom_emoji(
        &self,
        payload: &Payload,
    ) -> Result<KnownCustomEmoji, FactoryError> {
        let user = payload
            .nullable_object("user")?
            .map(|user| self.deserialize_user(user))
            .transpose()?;

        Ok(KnownCustomEmoji {
            app: self.app.clone(),
            id: payload.id("id")?,
            name: payload.nullable("name")?,
            is_animated: payload.or_default("animated")?,
            role_ids: payload.id_set("roles")?,
            user,
            is_colons_required: payload.required("require_colons")?,
            is_managed: payload.required("managed")?,
            is_available: payload.required("available")?,
        })
    }

    /// Parse either kind of emoji; it is custom when it carries an `id`.
    pub fn deserialize_emoji(&self, payload: &Payload) -> Result<Emoji, FactoryError> {
        match payload.raw("id") {
            Field::Value(_) => self.deserialize_custom_emoji(payload).map(Emoji::Custom),
            Field::Absent | Field::Null => {
                self.deserialize_unicode_emoji(payload).map(Emoji::Unicode)
            }
        }
    }
}
