//! Rich embeds attached to messages.
//!
//! Images in an embed are either plain URLs or binary data that is uploaded
//! alongside the message and referenced through a synthetic attachment URL.

use crate::types::util::Color;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Where the bytes of a binary resource come from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BinaryData {
    /// Data held in memory.
    Bytes(Vec<u8>),
    /// Data read from disk by whoever performs the upload.
    File(PathBuf),
}

/// A resource that must be uploaded with the payload referencing it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryResource {
    pub filename: String,
    pub data: BinaryData,
}

/// An image or icon referenced by an embed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Resource {
    /// Hosted elsewhere; referenced by URL.
    Url(String),
    /// Uploaded with the message.
    Binary(BinaryResource),
}

impl Resource {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn bytes(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Binary(BinaryResource {
            filename: filename.into(),
            data: BinaryData::Bytes(data.into()),
        })
    }

    /// A file on disk, uploaded under its own file name.
    ///
    /// Returns `None` if the path has no UTF-8 file name.
    pub fn file(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let filename = path.file_name()?.to_str()?.to_owned();

        Some(Self::Binary(BinaryResource {
            filename,
            data: BinaryData::File(path.to_owned()),
        }))
    }

    /// The URL for URL resources.
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Binary(_) => None,
        }
    }
}

/// A resource together with the platform's cached copy of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmbedResource {
    pub resource: Resource,
    /// Only known on embeds received from the platform.
    pub proxy_resource: Option<Resource>,
}

impl From<Resource> for EmbedResource {
    fn from(resource: Resource) -> Self {
        Self {
            resource,
            proxy_resource: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Embed parts
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmbedFooter {
    pub text: Option<String>,
    pub icon: Option<EmbedResource>,
}

/// An image or thumbnail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmbedImage {
    pub resource: EmbedResource,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

/// A video; only ever set by the platform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmbedVideo {
    pub resource: Resource,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

/// The site an embed was generated from; only ever set by the platform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmbedProvider {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmbedAuthor {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<EmbedResource>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    /// Defaults to `false` when not sent.
    pub is_inline: bool,
}

/// A rich embed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub color: Option<Color>,
    pub footer: Option<EmbedFooter>,
    pub image: Option<EmbedImage>,
    pub thumbnail: Option<EmbedImage>,
    pub video: Option<EmbedVideo>,
    pub provider: Option<EmbedProvider>,
    pub author: Option<EmbedAuthor>,
    pub fields: Vec<EmbedField>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for outgoing embeds.
///
/// ```
/// use discord_entity_factory::types::channel::embed::{EmbedBuilder, Resource};
///
/// let embed = EmbedBuilder::new()
///     .title("Hello")
///     .color(0x00FF00)
///     .image(Resource::bytes("cat.png", vec![0x89, 0x50]))
///     .build();
/// assert_eq!(embed.title.as_deref(), Some("Hello"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EmbedBuilder {
    inner: Embed,
}

impl EmbedBuilder {
    /// Create a new empty embed builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.inner.url = Some(url.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.inner.timestamp = Some(timestamp);
        self
    }

    /// Set the colour (as a 24-bit RGB integer, e.g. `0xFF6600`).
    pub fn color(mut self, color: u32) -> Self {
        self.inner.color = Some(Color(color));
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer_mut().text = Some(text.into());
        self
    }

    pub fn footer_icon(mut self, icon: Resource) -> Self {
        self.footer_mut().icon = Some(icon.into());
        self
    }

    pub fn image(mut self, image: Resource) -> Self {
        self.inner.image = Some(EmbedImage {
            resource: image.into(),
            height: None,
            width: None,
        });
        self
    }

    pub fn thumbnail(mut self, thumbnail: Resource) -> Self {
        self.inner.thumbnail = Some(EmbedImage {
            resource: thumbnail.into(),
            height: None,
            width: None,
        });
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author_mut().name = Some(name.into());
        self
    }

    pub fn author_url(mut self, url: impl Into<String>) -> Self {
        self.author_mut().url = Some(url.into());
        self
    }

    pub fn author_icon(mut self, icon: Resource) -> Self {
        self.author_mut().icon = Some(icon.into());
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.inner.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            is_inline: inline,
        });
        self
    }

    pub fn build(self) -> Embed {
        self.inner
    }

    fn footer_mut(&mut self) -> &mut EmbedFooter {
        self.inner.footer.get_or_insert(EmbedFooter {
            text: None,
            icon: None,
        })
    }

    fn author_mut(&mut self) -> &mut EmbedAuthor {
        self.inner.author.get_or_insert(EmbedAuthor {
            name: None,
            url: None,
            icon: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryData, EmbedBuilder, Resource};

    #[test]
    fn builder_collects_parts() {
        let embed = EmbedBuilder::new()
            .title("Test Title")
            .footer("Footer text")
            .footer_icon(Resource::url("https://example.com/icon.png"))
            .field("Name1", "Value1", true)
            .field("Name2", "Value2", false)
            .build();

        let footer = embed.footer.unwrap();
        assert_eq!(footer.text.as_deref(), Some("Footer text"));
        assert_eq!(
            footer.icon.unwrap().resource.as_url(),
            Some("https://example.com/icon.png")
        );
        assert_eq!(embed.fields.len(), 2);
        assert!(embed.fields[0].is_inline);
        assert!(!embed.fields[1].is_inline);
    }

    #[test]
    fn file_resource_uses_file_name() {
        let Some(Resource::Binary(binary)) = Resource::file("/tmp/images/cat.png") else {
            panic!("expected a binary resource");
        };

        assert_eq!(binary.filename, "cat.png");
        assert_eq!(binary.data, BinaryData::File("/tmp/images/cat.png".into()));
        assert!(Resource::file("/").is_none());
    }
}
