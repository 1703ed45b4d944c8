//! Member presences and rich activities.

use crate::{
    app::App,
    types::{
        guild::Emoji,
        id::{
            marker::{ApplicationMarker, GuildMarker, RoleMarker, UserMarker},
            Id,
        },
        user::PartialUser,
        util::{int_enum, str_enum, Unique},
    },
};
use bitflags::bitflags;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;

str_enum! {
    /// Online status of a user.
    pub enum Status {
        Online = "online",
        Idle = "idle",
        DoNotDisturb = "dnd",
        Offline = "offline",
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Offline
    }
}

int_enum! {
    pub enum ActivityType: u64 {
        Playing = 0,
        Streaming = 1,
        Listening = 2,
        Watching = 3,
        Custom = 4,
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ActivityFlags: u64 {
        const INSTANCE = 1 << 0;
        const JOIN = 1 << 1;
        const SPECTATE = 1 << 2;
        const JOIN_REQUEST = 1 << 3;
        const SYNC = 1 << 4;
        const PLAY = 1 << 5;
    }
}

/// Start and end of an activity, sent as Unix milliseconds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ActivityTimestamps {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ActivityParty {
    pub id: Option<String>,
    pub current_size: Option<u64>,
    pub max_size: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
pub struct ActivityAssets {
    pub large_image: Option<String>,
    pub large_text: Option<String>,
    pub small_image: Option<String>,
    pub small_text: Option<String>,
}

/// Secrets for joining or spectating an activity.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
pub struct ActivitySecret {
    pub join: Option<String>,
    pub spectate: Option<String>,
    #[serde(rename = "match")]
    pub match_: Option<String>,
}

/// An activity with all rich presence details.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RichActivity {
    pub name: String,
    pub kind: ActivityType,
    /// Stream URL, only for streaming activities.
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub timestamps: Option<ActivityTimestamps>,
    pub application_id: Option<Id<ApplicationMarker>>,
    pub details: Option<String>,
    pub state: Option<String>,
    pub emoji: Option<Emoji>,
    pub party: Option<ActivityParty>,
    pub assets: Option<ActivityAssets>,
    pub secrets: Option<ActivitySecret>,
    pub is_instance: Option<bool>,
    pub flags: Option<ActivityFlags>,
}

/// Status of a user on each platform; offline where not sent.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(default)]
pub struct ClientStatus {
    pub desktop: Status,
    pub mobile: Status,
    pub web: Status,
}

/// A member's presence in one guild.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberPresence {
    pub app: App,
    pub user: PartialUser,
    pub role_ids: Option<HashSet<Id<RoleMarker>>>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub visible_status: Status,
    pub activities: Vec<RichActivity>,
    pub client_status: ClientStatus,
    pub premium_since: Option<DateTime<Utc>>,
    pub nickname: Option<String>,
}

impl Unique for MemberPresence {
    type Marker = UserMarker;

    fn key(&self) -> Id<UserMarker> {
        self.user.id
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientStatus, Status};
    use crate::types::util::ValueExt;
    use serde_json::json;

    #[test]
    fn client_status_defaults_to_offline() {
        let status: ClientStatus = json!({ "web": "idle" }).deserialize_into().unwrap();

        assert_eq!(status.desktop, Status::Offline);
        assert_eq!(status.mobile, Status::Offline);
        assert_eq!(status.web, Status::Idle);
    }

    #[test]
    fn unknown_status_is_kept() {
        let status: ClientStatus = json!({ "desktop": "invisible" }).deserialize_into().unwrap();
        assert_eq!(status.desktop, Status::Unknown("invisible".to_owned()));
    }
}
