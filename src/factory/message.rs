use super::EntityFactory;
use crate::{
    error::FactoryError,
    types::{
        channel::{
            message::{
                Attachment, Message, MessageActivity, MessageCrosspost, MessageFlags, Reaction,
                UpdatedMessageFields,
            },
            Embed,
        },
        id::Id,
        util::{
            payload::{decode_id_set, PayloadExt},
            Payload,
        },
    },
};
use serde_json::Value;
use std::collections::HashSet;

impl EntityFactory {
    /// Parse a message.
    ///
    /// Mentioned users and channels are reduced to their ids. The member, if
    /// any, is built around the message author.
    pub fn deserialize_message(&self, payload: &Payload) -> Result<Message, FactoryError> {
        let author = self.deserialize_user(payload.object("author")?)?;
        let member = payload
            .nullable_object("member")?
            .map(|member| self.deserialize_member(member, Some(author.clone())))
            .transpose()?;

        let application = payload
            .nullable_object("application")?
            .map(|application| self.deserialize_application(application))
            .transpose()?;
        let message_reference = payload
            .nullable_object("message_reference")?
            .map(|reference| self.deserialize_crosspost(reference))
            .transpose()?;

        Ok(Message {
            app: self.app.clone(),
            id: payload.id("id")?,
            channel_id: payload.id("channel_id")?,
            guild_id: payload.nullable_id("guild_id")?,
            author,
            member,
            content: payload.required("content")?,
            timestamp: payload.timestamp("timestamp")?,
            edited_timestamp: payload.nullable_timestamp("edited_timestamp")?,
            is_tts: payload.required("tts")?,
            is_mentioning_everyone: payload.required("mention_everyone")?,
            user_mentions: mentioned_ids(payload.objects("mentions")?)?,
            role_mentions: payload.id_set("mention_roles")?,
            channel_mentions: mentioned_ids(payload.objects("mention_channels")?)?,
            attachments: attachments(payload.objects("attachments")?)?,
            embeds: self.embeds(payload.objects("embeds")?)?,
            reactions: self.reactions(payload.objects("reactions")?)?,
            is_pinned: payload.required("pinned")?,
            webhook_id: payload.nullable_id("webhook_id")?,
            kind: payload.required("type")?,
            activity: payload
                .nullable_object("activity")?
                .map(message_activity)
                .transpose()?,
            application,
            message_reference,
            flags: payload
                .nullable("flags")?
                .map(MessageFlags::from_bits_retain),
            nonce: payload.nullable_with("nonce", decode_nonce)?,
        })
    }

    /// Parse the fields sent when a message is edited.
    ///
    /// Everything except the message and channel ids may be missing.
    pub fn deserialize_updated_message_fields(
        &self,
        payload: &Payload,
    ) -> Result<UpdatedMessageFields, FactoryError> {
        let author = payload
            .tristate_object("author")?
            .try_map(|user| self.deserialize_user(user))?;
        let member = payload.tristate_object("member")?.try_map(|member| {
            let user = author.as_ref().value().cloned();
            self.deserialize_member(member, user)
        })?;

        Ok(UpdatedMessageFields {
            app: self.app.clone(),
            id: payload.id("id")?,
            channel_id: payload.id("channel_id")?,
            guild_id: payload.tristate_id("guild_id")?,
            author,
            member,
            content: payload.tristate("content")?,
            timestamp: payload.tristate_timestamp("timestamp")?,
            edited_timestamp: payload.tristate_timestamp("edited_timestamp")?,
            is_tts: payload.tristate("tts")?,
            is_mentioning_everyone: payload.tristate("mention_everyone")?,
            user_mentions: payload.tristate_objects("mentions")?.try_map(mentioned_ids)?,
            role_mentions: payload.tristate_with("mention_roles", decode_id_set)?,
            channel_mentions: payload
                .tristate_objects("mention_channels")?
                .try_map(mentioned_ids)?,
            attachments: payload.tristate_objects("attachments")?.try_map(attachments)?,
            embeds: payload
                .tristate_objects("embeds")?
                .try_map(|embeds| self.embeds(embeds))?,
            reactions: payload
                .tristate_objects("reactions")?
                .try_map(|reactions| self.reactions(reactions))?,
            is_pinned: payload.tristate("pinned")?,
            webhook_id: payload.tristate_id("webhook_id")?,
            kind: payload.tristate("type")?,
            activity: payload.tristate_object("activity")?.try_map(message_activity)?,
            application: payload
                .tristate_object("application")?
                .try_map(|application| self.deserialize_application(application))?,
            message_reference: payload
                .tristate_object("message_reference")?
                .try_map(|reference| self.deserialize_crosspost(reference))?,
            flags: payload
                .tristate("flags")?
                .map(MessageFlags::from_bits_retain),
            nonce: payload.tristate_with("nonce", decode_nonce)?,
        })
    }

    fn deserialize_crosspost(&self, payload: &Payload) -> Result<MessageCrosspost, FactoryError> {
        Ok(MessageCrosspost {
            app: self.app.clone(),
            id: payload.nullable_id("message_id")?,
            channel_id: payload.id("channel_id")?,
            guild_id: payload.nullable_id("guild_id")?,
        })
    }

    fn embeds(&self, payloads: Vec<&Payload>) -> Result<Vec<Embed>, FactoryError> {
        payloads
            .into_iter()
            .map(|embed| self.deserialize_embed(embed))
            .collect()
    }

    fn reactions(&self, payloads: Vec<&Payload>) -> Result<Vec<Reaction>, FactoryError> {
        payloads
            .into_iter()
            .map(|reaction| self.deserialize_reaction(reaction))
            .collect()
    }

    fn deserialize_reaction(&self, payload: &Payload) -> Result<Reaction, FactoryError> {
        Ok(Reaction {
            count: payload.required("count")?,
            emoji: self.deserialize_emoji(payload.object("emoji")?)?,
            is_reacted_by_me: payload.required("me")?,
        })
    }
}

/// Ids of mentioned users or channels, sent as objects.
fn mentioned_ids<M>(payloads: Vec<&Payload>) -> Result<HashSet<Id<M>>, FactoryError> {
    payloads.into_iter().map(|mention| mention.id("id")).collect()
}

fn attachments(payloads: Vec<&Payload>) -> Result<Vec<Attachment>, FactoryError> {
    payloads.into_iter().map(attachment).collect()
}

fn attachment(payload: &Payload) -> Result<Attachment, FactoryError> {
    Ok(Attachment {
        id: payload.id("id")?,
        filename: payload.required("filename")?,
        size: payload.required("size")?,
        url: payload.required("url")?,
        proxy_url: payload.required("proxy_url")?,
        height: payload.nullable("height")?,
        width: payload.nullable("width")?,
    })
}

fn message_activity(payload: &Payload) -> Result<MessageActivity, FactoryError> {
    Ok(MessageActivity {
        kind: payload.required("type")?,
        party_id: payload.nullable("party_id")?,
    })
}

/// Nonces are kept as text even when sent as a number.
fn decode_nonce(key: &'static str, value: &Value) -> Result<String, FactoryError> {
    match value {
        Value::String(nonce) => Ok(nonce.clone()),
        Value::Number(nonce) => Ok(nonce.to_string()),
        other => Err(FactoryError::invalid(
            key,
            format!("expected a string or an integer, got {other}"),
        )),
    }
}
