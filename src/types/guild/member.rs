use crate::{
    app::App,
    types::{
        id::{marker::{RoleMarker, UserMarker}, Id},
        user::User,
        util::{Field, Unique},
    },
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// A user's membership in a guild.
///
/// Member payloads are sent in several reduced forms, so the fields that
/// may be left out are tri-state rather than defaulted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub app: App,
    pub user: User,
    pub nickname: Field<String>,
    pub role_ids: HashSet<Id<RoleMarker>>,
    pub joined_at: Field<DateTime<Utc>>,
    /// When the member started boosting the guild.
    pub premium_since: Field<DateTime<Utc>>,
    pub is_deaf: Field<bool>,
    pub is_mute: Field<bool>,
}

/// A ban, with the banned user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildMemberBan {
    pub reason: Option<String>,
    pub user: User,
}

impl Unique for Member {
    type Marker = UserMarker;

    fn key(&self) -> Id<UserMarker> {
        self.user.id
    }
}
