use super::EntityFactory;
use crate::{
    error::FactoryError,
    types::{
        channel::Webhook,
        util::{payload::PayloadExt, Payload},
    },
};

impl EntityFactory {
    /// Parse a webhook; its creator is sent under `user`.
    pub fn deserialize_webhook(&self, payload: &Payload) -> Result<Webhook, FactoryError> {
        let author = payload
            .nullable_object("user")?
            .map(|user| self.deserialize_user(user))
            .transpose()?;

        Ok(Webhook {
            app: self.app.clone(),
            id: payload.id("id")?,
            kind: payload.required("type")?,
            guild_id: payload.nullable_id("guild_id")?,
            channel_id: payload.id("channel_id")?,
            author,
            name: payload.nullable("name")?,
            avatar_hash: payload.nullable("avatar")?,
            token: payload.nullable("token")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        factory::fixtures::{self, payload},
        types::{channel::webhook::WebhookType, id::Id},
    };
    use serde_json::{json, Value};

    #[test]
    fn webhook() {
        let (factory, app) = fixtures::factory();
        let webhook = factory
            .deserialize_webhook(&payload(json!({
                "id": "1234",
                "type": 1,
                "guild_id": "123",
                "channel_id": "456",
                "user": Value::Object(fixtures::user()),
                "name": "release webhook",
                "avatar": "bb71f469c158984e265093a81b3397fb",
                "token": "ueoqrialsdfaKJLKfajslkdf",
            })))
            .unwrap();

        assert_eq!(webhook.app, app);
        assert_eq!(webhook.id, 1234);
        assert_eq!(webhook.kind, WebhookType::Incoming);
        assert_eq!(webhook.guild_id, Some(Id::new(123)));
        assert_eq!(webhook.channel_id, 456);
        assert_eq!(
            webhook.author,
            Some(factory.deserialize_user(&fixtures::user()).unwrap())
        );
        assert_eq!(webhook.name.as_deref(), Some("release webhook"));
        assert_eq!(webhook.avatar_hash.as_deref(), Some("bb71f469c158984e265093a81b3397fb"));
        assert_eq!(webhook.token.as_deref(), Some("ueoqrialsdfaKJLKfajslkdf"));
    }

    #[test]
    fn webhook_with_null_and_unset_fields() {
        let (factory, _) = fixtures::factory();
        let webhook = factory
            .deserialize_webhook(&payload(json!({
                "id": "1234",
                "type": 1,
                "channel_id": "456",
                "name": null,
                "avatar": null,
            })))
            .unwrap();

        assert_eq!(webhook.guild_id, None);
        assert_eq!(webhook.author, None);
        assert_eq!(webhook.name, None);
        assert_eq!(webhook.avatar_hash, None);
        assert_eq!(webhook.token, None);
    }
}
