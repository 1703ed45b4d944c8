//! Voice connection state and voice server regions.

use crate::{
    app::App,
    types::{
        guild::Member,
        id::{
            marker::{ChannelMarker, GuildMarker, UserMarker},
            Id,
        },
        util::Unique,
    },
};
use serde::Deserialize;

/// A user's connection to a voice channel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoiceState {
    pub app: App,
    pub guild_id: Option<Id<GuildMarker>>,
    /// `None` once the user disconnected.
    pub channel_id: Option<Id<ChannelMarker>>,
    pub user_id: Id<UserMarker>,
    pub member: Option<Member>,
    pub session_id: String,
    pub is_guild_deafened: bool,
    pub is_guild_muted: bool,
    pub is_self_deafened: bool,
    pub is_self_muted: bool,
    /// Defaults to `false` when not sent.
    pub is_streaming: bool,
    pub is_video_enabled: bool,
    pub is_suppressed: bool,
}

/// A region voice servers can be hosted in.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq)]
pub struct VoiceRegion {
    pub id: String,
    pub name: String,
    #[serde(rename = "vip")]
    pub is_vip: bool,
    /// Whether this is the closest region to the current user.
    #[serde(rename = "optimal")]
    pub is_optimal_location: bool,
    #[serde(rename = "deprecated")]
    pub is_deprecated: bool,
    #[serde(rename = "custom")]
    pub is_custom: bool,
}

impl Unique for VoiceState {
    type Marker = UserMarker;

    fn key(&self) -> Id<UserMarker> {
        self.user_id
    }
}
