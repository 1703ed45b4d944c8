use super::EntityFactory;
use crate::{
    error::FactoryError,
    types::{
        channel::embed::{
            BinaryResource, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedProvider,
            EmbedResource, EmbedVideo, Resource,
        },
        util::{datetime, payload::PayloadExt, Payload},
    },
};
use serde_json::Value;

/// An embed in wire form, with the binary resources it references.
///
/// `resources` holds every binary resource in the order its attachment URL
/// appears in `payload`: footer icon, thumbnail, image, then author icon.
#[derive(Clone, Debug, PartialEq)]
pub struct SerializedEmbed {
    pub payload: Payload,
    pub resources: Vec<BinaryResource>,
}

impl EntityFactory {
    /// Parse an embed received on a message.
    ///
    /// Images, thumbnails and videos without a `url` are dropped. Footers,
    /// authors and providers that carry no field at all are dropped too.
    pub fn deserialize_embed(&self, payload: &Payload) -> Result<Embed, FactoryError> {
        let footer = match payload.nullable_object("footer")? {
            Some(footer) => {
                let text = footer.nullable("text")?;
                let icon = embed_resource(footer, "icon_url", "proxy_icon_url")?;
                (text.is_some() || icon.is_some()).then_some(EmbedFooter { text, icon })
            }
            None => None,
        };

        let author = match payload.nullable_object("author")? {
            Some(author) => {
                let name = author.nullable("name")?;
                let url = author.nullable("url")?;
                let icon = embed_resource(author, "icon_url", "proxy_icon_url")?;
                (name.is_some() || url.is_some() || icon.is_some())
                    .then_some(EmbedAuthor { name, url, icon })
            }
            None => None,
        };

        let provider = match payload.nullable_object("provider")? {
            Some(provider) => {
                let name = provider.nullable("name")?;
                let url = provider.nullable("url")?;
                (name.is_some() || url.is_some()).then_some(EmbedProvider { name, url })
            }
            None => None,
        };

        let video = match payload.nullable_object("video")? {
            Some(video) => match video.nullable::<String>("url")? {
                Some(url) => Some(EmbedVideo {
                    resource: Resource::Url(url),
                    height: video.nullable("height")?,
                    width: video.nullable("width")?,
                }),
                None => None,
            },
            None => None,
        };

        let mut fields = Vec::new();
        for field in payload.objects("fields")? {
            fields.push(EmbedField {
                name: field.required("name")?,
                value: field.required("value")?,
                is_inline: field.or_default("inline")?,
            });
        }

        Ok(Embed {
            title: payload.nullable("title")?,
            description: payload.nullable("description")?,
            url: payload.nullable("url")?,
            timestamp: payload.nullable_timestamp("timestamp")?,
            color: payload.nullable("color")?,
            footer,
            image: embed_image(payload, "image")?,
            thumbnail: embed_image(payload, "thumbnail")?,
            video,
            provider,
            author,
            fields,
        })
    }

    /// Build the wire form of an embed for sending.
    ///
    /// URL resources are written as they are. Binary resources are written
    /// as an attachment URL and returned alongside the payload so they can be
    /// uploaded with it. Videos and providers are never sent, and parts with
    /// nothing set are left out entirely.
    pub fn serialize_embed(&self, embed: &Embed) -> SerializedEmbed {
        let mut payload = Payload::new();
        let mut resources = Vec::new();

        insert_opt(&mut payload, "title", embed.title.clone());
        insert_opt(&mut payload, "description", embed.description.clone());
        insert_opt(&mut payload, "url", embed.url.clone());
        insert_opt(
            &mut payload,
            "timestamp",
            embed.timestamp.as_ref().map(datetime::format_iso8601),
        );
        insert_opt(&mut payload, "color", embed.color.map(|color| color.get()));

        if let Some(footer) = &embed.footer {
            let mut object = Payload::new();
            insert_opt(&mut object, "text", footer.text.clone());
            if let Some(icon) = &footer.icon {
                let url = self.resource_url(&icon.resource, &mut resources);
                object.insert("icon_url".to_owned(), url.into());
            }
            insert_object(&mut payload, "footer", object);
        }

        if let Some(thumbnail) = &embed.thumbnail {
            let url = self.resource_url(&thumbnail.resource.resource, &mut resources);
            insert_object(&mut payload, "thumbnail", url_object(url));
        }

        if let Some(image) = &embed.image {
            let url = self.resource_url(&image.resource.resource, &mut resources);
            insert_object(&mut payload, "image", url_object(url));
        }

        if let Some(author) = &embed.author {
            let mut object = Payload::new();
            insert_opt(&mut object, "name", author.name.clone());
            insert_opt(&mut object, "url", author.url.clone());
            if let Some(icon) = &author.icon {
                let url = self.resource_url(&icon.resource, &mut resources);
                object.insert("icon_url".to_owned(), url.into());
            }
            insert_object(&mut payload, "author", object);
        }

        if !embed.fields.is_empty() {
            let fields = embed
                .fields
                .iter()
                .map(|field| {
                    let mut object = Payload::new();
                    object.insert("name".to_owned(), field.name.clone().into());
                    object.insert("value".to_owned(), field.value.clone().into());
                    object.insert("inline".to_owned(), field.is_inline.into());
                    Value::Object(object)
                })
                .collect::<Vec<_>>();
            payload.insert("fields".to_owned(), Value::Array(fields));
        }

        SerializedEmbed { payload, resources }
    }

    fn resource_url(&self, resource: &Resource, resources: &mut Vec<BinaryResource>) -> String {
        match resource {
            Resource::Url(url) => url.clone(),
            Resource::Binary(binary) => {
                resources.push(binary.clone());
                self.config.attachment_url(&binary.filename)
            }
        }
    }
}

fn embed_resource(
    payload: &Payload,
    key: &'static str,
    proxy_key: &'static str,
) -> Result<Option<EmbedResource>, FactoryError> {
    let Some(url) = payload.nullable::<String>(key)? else {
        return Ok(None);
    };

    Ok(Some(EmbedResource {
        resource: Resource::Url(url),
        proxy_resource: payload.nullable::<String>(proxy_key)?.map(Resource::Url),
    }))
}

fn embed_image(payload: &Payload, key: &'static str) -> Result<Option<EmbedImage>, FactoryError> {
    let Some(image) = payload.nullable_object(key)? else {
        return Ok(None);
    };
    let Some(resource) = embed_resource(image, "url", "proxy_url")? else {
        return Ok(None);
    };

    Ok(Some(EmbedImage {
        resource,
        height: image.nullable("height")?,
        width: image.nullable("width")?,
    }))
}

fn insert_opt(payload: &mut Payload, key: &str, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        payload.insert(key.to_owned(), value.into());
    }
}

fn insert_object(payload: &mut Payload, key: &str, object: Payload) {
    if !object.is_empty() {
        payload.insert(key.to_owned(), Value::Object(object));
    }
}

fn url_object(url: String) -> Payload {
    let mut object = Payload::new();
    object.insert("url".to_owned(), url.into());
    object
}

#[cfg(test)]
mod tests {
    use crate::{
        factory::fixtures::{self, payload},
        types::{
            channel::embed::{BinaryData, Embed, EmbedBuilder, Resource},
            util::Color,
        },
    };
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    #[test]
    fn embed() {
        let (factory, _) = fixtures::factory();
        let embed = factory.deserialize_embed(&fixtures::embed()).unwrap();

        assert_eq!(embed.title.as_deref(), Some("embed title"));
        assert_eq!(embed.description.as_deref(), Some("embed description"));
        assert_eq!(embed.url.as_deref(), Some("https://somewhere.com"));
        assert_eq!(
            embed.timestamp,
            Some(Utc.timestamp_millis_opt(1_584_895_239_218).unwrap())
        );
        assert_eq!(embed.color, Some(Color(14_014_915)));

        let footer = embed.footer.unwrap();
        assert_eq!(footer.text.as_deref(), Some("footer text"));
        let icon = footer.icon.unwrap();
        assert_eq!(icon.resource, Resource::url("https://somewhere.com/footer.png"));
        assert_eq!(
            icon.proxy_resource,
            Some(Resource::url("https://media.somewhere.com/footer.png"))
        );

        let image = embed.image.unwrap();
        assert_eq!(image.resource.resource.as_url(), Some("https://somewhere.com/image.png"));
        assert_eq!(
            image.resource.proxy_resource.as_ref().and_then(Resource::as_url),
            Some("https://media.somewhere.com/image.png")
        );
        assert_eq!(image.height, Some(122));
        assert_eq!(image.width, Some(133));

        let thumbnail = embed.thumbnail.unwrap();
        assert_eq!(
            thumbnail.resource.resource.as_url(),
            Some("https://somewhere.com/thumbnail.png")
        );
        assert_eq!(thumbnail.height, Some(123));
        assert_eq!(thumbnail.width, Some(456));

        let video = embed.video.unwrap();
        assert_eq!(video.resource.as_url(), Some("https://somewhere.com/video.mp4"));
        assert_eq!(video.height, Some(1234));
        assert_eq!(video.width, Some(4567));

        let provider = embed.provider.unwrap();
        assert_eq!(provider.name.as_deref(), Some("some name"));
        assert_eq!(provider.url.as_deref(), Some("https://somewhere.com/provider"));

        let author = embed.author.unwrap();
        assert_eq!(author.name.as_deref(), Some("some name"));
        assert_eq!(author.url.as_deref(), Some("https://somewhere.com/author-url"));
        assert_eq!(
            author.icon.unwrap().proxy_resource.as_ref().and_then(Resource::as_url),
            Some("https://media.somewhere.com/author.png")
        );

        assert_eq!(embed.fields.len(), 1);
        assert_eq!(embed.fields[0].name, "title");
        assert_eq!(embed.fields[0].value, "some value");
        assert!(embed.fields[0].is_inline);
    }

    #[test]
    fn embed_with_empty_parts() {
        let (factory, _) = fixtures::factory();
        let embed = factory
            .deserialize_embed(&payload(json!({
                "footer": { "text": "footer text" },
                "image": {},
                "thumbnail": {},
                "video": {},
                "provider": {},
                "author": {},
                "fields": [{ "name": "title", "value": "some value" }],
            })))
            .unwrap();

        let footer = embed.footer.unwrap();
        assert_eq!(footer.text.as_deref(), Some("footer text"));
        assert_eq!(footer.icon, None);
        assert_eq!(embed.image, None);
        assert_eq!(embed.thumbnail, None);
        assert_eq!(embed.video, None);
        assert_eq!(embed.provider, None);
        assert_eq!(embed.author, None);
        assert!(!embed.fields[0].is_inline);
    }

    #[test]
    fn embed_with_nothing_set() {
        let (factory, _) = fixtures::factory();
        let embed = factory.deserialize_embed(&payload(json!({}))).unwrap();

        assert_eq!(embed, Embed::default());
    }

    #[test]
    fn serialize_url_embed() {
        let (factory, _) = fixtures::factory();
        let embed = EmbedBuilder::new()
            .title("Hello")
            .description("there")
            .url("https://somewhere.com")
            .timestamp(Utc.timestamp_millis_opt(1_584_895_239_218).unwrap())
            .color(0x123456)
            .footer("footer")
            .footer_icon(Resource::url("https://somewhere.com/footer.png"))
            .image(Resource::url("https://somewhere.com/image.png"))
            .author("someone")
            .field("name", "value", true)
            .build();

        let serialized = factory.serialize_embed(&embed);

        assert!(serialized.resources.is_empty());
        assert_eq!(
            Value::Object(serialized.payload),
            json!({
                "title": "Hello",
                "description": "there",
                "url": "https://somewhere.com",
                "timestamp": "2020-03-22T16:40:39.218000+00:00",
                "color": 0x123456,
                "footer": { "text": "footer", "icon_url": "https://somewhere.com/footer.png" },
                "image": { "url": "https://somewhere.com/image.png" },
                "author": { "name": "someone" },
                "fields": [{ "name": "name", "value": "value", "inline": true }],
            })
        );
    }

    #[test]
    fn serialize_empty_embed() {
        let (factory, _) = fixtures::factory();
        let serialized = factory.serialize_embed(&Embed::default());

        assert!(serialized.payload.is_empty());
        assert!(serialized.resources.is_empty());
    }

    #[test]
    fn serialize_leaves_out_empty_parts() {
        let (factory, _) = fixtures::factory();
        let mut embed = EmbedBuilder::new().footer("x").author("y").build();
        embed.footer.as_mut().unwrap().text = None;
        embed.author.as_mut().unwrap().name = None;

        assert!(factory.serialize_embed(&embed).payload.is_empty());
    }

    #[test]
    fn binary_resources_come_out_in_field_order() {
        let (factory, _) = fixtures::factory();
        let embed = EmbedBuilder::new()
            .author("someone")
            .author_icon(Resource::bytes("author.png", vec![4u8]))
            .image(Resource::bytes("image.png", vec![3u8]))
            .thumbnail(Resource::bytes("thumbnail.png", vec![2u8]))
            .footer_icon(Resource::bytes("footer.png", vec![1u8]))
            .build();

        let serialized = factory.serialize_embed(&embed);
        let filenames: Vec<&str> = serialized
            .resources
            .iter()
            .map(|resource| resource.filename.as_str())
            .collect();

        assert_eq!(filenames, ["footer.png", "thumbnail.png", "image.png", "author.png"]);
        assert_eq!(serialized.resources[0].data, BinaryData::Bytes(vec![1]));
        assert_eq!(serialized.payload["footer"]["icon_url"], "attachment://footer.png");
        assert_eq!(serialized.payload["thumbnail"]["url"], "attachment://thumbnail.png");
        assert_eq!(serialized.payload["image"]["url"], "attachment://image.png");
        assert_eq!(serialized.payload["author"]["icon_url"], "attachment://author.png");
        assert_eq!(factory.serialize_embed(&embed), serialized);
    }

    #[test]
    fn url_embed_survives_a_round_trip() {
        let (factory, _) = fixtures::factory();
        let embed = factory.deserialize_embed(&fixtures::embed()).unwrap();

        let first = factory.serialize_embed(&embed);
        let reparsed = factory.deserialize_embed(&first.payload).unwrap();
        let second = factory.serialize_embed(&reparsed);

        assert_eq!(first, second);
        assert!(first.payload.get("video").is_none());
        assert!(first.payload.get("provider").is_none());
    }
}
