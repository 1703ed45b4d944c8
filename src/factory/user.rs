use super::EntityFactory;
use crate::{
    error::FactoryError,
    types::{
        user::{OwnUser, PartialUser, PremiumType, User, UserFlags},
        util::{payload::PayloadExt, Payload},
    },
};

impl EntityFactory {
    /// Parse a user.
    ///
    /// `bot` and `system` are only sent when true; flags come from
    /// `public_flags`.
    pub fn deserialize_user(&self, payload: &Payload) -> Result<User, FactoryError> {
        Ok(User {
            app: self.app.clone(),
            id: payload.id("id")?,
            discriminator: payload.required("discriminator")?,
            username: payload.required("username")?,
            avatar_hash: payload.nullable("avatar")?,
            is_bot: payload.or_default("bot")?,
            is_system: payload.or_default("system")?,
            flags: UserFlags::from_bits_retain(payload.or_default("public_flags")?),
        })
    }

    /// Parse the user the application is logged in as.
    ///
    /// Unlike [`deserialize_user`], flags come from the private `flags` key.
    ///
    /// [`deserialize_user`]: Self::deserialize_user
    pub fn deserialize_my_user(&self, payload: &Payload) -> Result<OwnUser, FactoryError> {
        Ok(OwnUser {
            app: self.app.clone(),
            id: payload.id("id")?,
            discriminator: payload.required("discriminator")?,
            username: payload.required("username")?,
            avatar_hash: payload.nullable("avatar")?,
            is_bot: payload.or_default("bot")?,
            is_system: payload.or_default("system")?,
            is_mfa_enabled: payload.required("mfa_enabled")?,
            locale: payload.nullable("locale")?,
            is_verified: payload.nullable("verified")?,
            email: payload.nullable("email")?,
            flags: UserFlags::from_bits_retain(payload.required("flags")?),
            premium_type: payload.nullable::<PremiumType>("premium_type")?,
        })
    }

    /// Parse a user where only the id is guaranteed, as sent in presences.
    pub fn deserialize_partial_user(&self, payload: &Payload) -> Result<PartialUser, FactoryError> {
        Ok(PartialUser {
            app: self.app.clone(),
            id: payload.id("id")?,
            discriminator: payload.tristate("discriminator")?,
            username: payload.tristate("username")?,
            avatar_hash: payload.tristate("avatar")?,
            is_bot: payload.tristate("bot")?,
            is_system: payload.tristate("system")?,
            flags: payload
                .tristate("public_flags")?
                .map(UserFlags::from_bits_retain),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        factory::fixtures::{self, payload},
        types::{
            user::{PremiumType, UserFlags},
            util::Field,
        },
    };
    use serde_json::json;

    #[test]
    fn user() {
        let (factory, app) = fixtures::factory();
        let user = factory.deserialize_user(&fixtures::user()).unwrap();

        assert_eq!(user.app, app);
        assert_eq!(user.id, 115_590_097_100_865_541);
        assert_eq!(user.username, "nyaa");
        assert_eq!(user.avatar_hash.as_deref(), Some("b3b24c6d7cbcdec129d5d537067061a8"));
        assert_eq!(user.discriminator, "6127");
        assert!(user.is_bot);
        assert!(user.is_system);
        assert_eq!(user.flags, UserFlags::VERIFIED_BOT_DEVELOPER);
    }

    #[test]
    fn user_with_unset_fields() {
        let (factory, _) = fixtures::factory();
        let user = factory
            .deserialize_user(&payload(json!({
                "id": "115590097100865541",
                "username": "nyaa",
                "avatar": "b3b24c6d7cbcdec129d5d537067061a8",
                "discriminator": "6127",
            })))
            .unwrap();

        assert!(!user.is_bot);
        assert!(!user.is_system);
        assert!(user.flags.is_empty());
    }

    #[test]
    fn unknown_flag_bits_are_kept() {
        let (factory, _) = fixtures::factory();
        let payload = fixtures::with(fixtures::user(), json!({ "public_flags": (1u64 << 40) | 1 }));
        let user = factory.deserialize_user(&payload).unwrap();

        assert_eq!(user.flags.bits(), (1 << 40) | 1);
        assert!(user.flags.contains(UserFlags::DISCORD_EMPLOYEE));
    }

    #[test]
    fn my_user() {
        let (factory, app) = fixtures::factory();
        let me = factory.deserialize_my_user(&fixtures::my_user()).unwrap();

        assert_eq!(me.app, app);
        assert_eq!(me.id, 379_953_393_319_542_784);
        assert_eq!(me.username, "qt pi");
        assert!(me.is_mfa_enabled);
        assert_eq!(me.locale.as_deref(), Some("en-US"));
        assert_eq!(me.is_verified, Some(true));
        assert_eq!(me.email.as_deref(), Some("blahblah@blah.blah"));
        assert_eq!(me.flags, UserFlags::DISCORD_PARTNER | UserFlags::DISCORD_EMPLOYEE);
        assert_eq!(me.premium_type, Some(PremiumType::NitroClassic));
        assert_eq!(me.to_user().flags, me.flags);
    }

    #[test]
    fn my_user_with_unset_fields() {
        let (factory, _) = fixtures::factory();
        let payload = fixtures::without(
            fixtures::my_user(),
            &["bot", "system", "verified", "email"],
        );
        let me = factory.deserialize_my_user(&payload).unwrap();

        assert!(!me.is_bot);
        assert!(!me.is_system);
        assert_eq!(me.is_verified, None);
        assert_eq!(me.email, None);
    }

    #[test]
    fn partial_user_keeps_absent_apart_from_null() {
        let (factory, _) = fixtures::factory();
        let user = factory
            .deserialize_partial_user(&payload(json!({ "id": "42", "avatar": null })))
            .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.avatar_hash, Field::Null);
        assert_eq!(user.username, Field::Absent);
        assert_eq!(user.discriminator, Field::Absent);
        assert_eq!(user.is_bot, Field::Absent);
        assert_eq!(user.is_system, Field::Absent);
        assert_eq!(user.flags, Field::Absent);
    }

    #[test]
    fn partial_user_with_every_field() {
        let (factory, _) = fixtures::factory();
        let user = factory.deserialize_partial_user(&fixtures::user()).unwrap();

        assert_eq!(user.username, Field::Value("nyaa".to_owned()));
        assert_eq!(user.is_bot, Field::Value(true));
        assert_eq!(user.flags, Field::Value(UserFlags::VERIFIED_BOT_DEVELOPER));
    }

    #[test]
    fn missing_id_is_a_schema_violation() {
        let (factory, _) = fixtures::factory();
        let error = factory
            .deserialize_user(&fixtures::without(fixtures::user(), &["id"]))
            .unwrap_err();

        assert_eq!(error.field(), Some("id"));
    }
}
