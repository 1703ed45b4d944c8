//! Standard and custom emojis.

use crate::{
    app::App,
    types::{
        id::{
            marker::{EmojiMarker, RoleMarker},
            Id,
        },
        user::User,
        util::impl_unique,
    },
};
use std::collections::HashSet;

/// A standard emoji, identified by its Unicode text.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UnicodeEmoji {
    pub name: String,
}

/// A custom emoji, as referenced from reactions and activities.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustomEmoji {
    pub app: App,
    pub id: Id<EmojiMarker>,
    /// `None` if the emoji was deleted.
    pub name: Option<String>,
    /// Defaults to `false` when not sent.
    pub is_animated: bool,
}

/// A custom emoji as listed on the guild that owns it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KnownCustomEmoji {
    pub app: App,
    pub id: Id<EmojiMarker>,
    pub name: Option<String>,
    pub is_animated: bool,
    /// Roles allowed to use the emoji; empty means everyone.
    pub role_ids: HashSet<Id<RoleMarker>>,
    /// Uploader, only sent with the right permissions.
    pub user: Option<User>,
    pub is_colons_required: bool,
    pub is_managed: bool,
    pub is_available: bool,
}

/// Either kind of emoji.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Emoji {
    Unicode(UnicodeEmoji),
    Custom(CustomEmoji),
}

impl Emoji {
    /// Name of the emoji, the Unicode text for standard emojis.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unicode(emoji) => Some(&emoji.name),
            Self::Custom(emoji) => emoji.name.as_deref(),
        }
    }
}

impl KnownCustomEmoji {
    /// The reference form of this emoji.
    pub fn to_custom(&self) -> CustomEmoji {
        CustomEmoji {
            app: self.app.clone(),
            id: self.id,
            name: self.name.clone(),
            is_animated: self.is_animated,
        }
    }
}

impl_unique! {
    CustomEmoji => EmojiMarker, |emoji| emoji.id;
    KnownCustomEmoji => EmojiMarker, |emoji| emoji.id;
}
