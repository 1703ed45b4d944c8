//! Applications, teams, and the current user's connections and guilds.

use crate::{
    app::App,
    types::{
        guild::{GuildFeature, PartialIntegration, Permissions},
        id::{
            marker::{ApplicationMarker, GuildMarker, SkuMarker, TeamMarker, UserMarker},
            Id,
        },
        user::User,
        util::{impl_unique, int_enum, IdMap, Unique},
    },
};
use std::collections::HashSet;

int_enum! {
    /// Who can see a third-party connection.
    pub enum ConnectionVisibility: u64 {
        None = 0,
        Everyone = 1,
    }
}

int_enum! {
    pub enum TeamMembershipState: u64 {
        Invited = 1,
        Accepted = 2,
    }
}

/// A third-party account linked to the current user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnConnection {
    /// Account id on the third-party service; not a snowflake.
    pub id: String,
    pub name: String,
    pub kind: String,
    pub is_revoked: bool,
    pub integrations: Vec<PartialIntegration>,
    pub is_verified: bool,
    pub is_friend_sync_enabled: bool,
    pub is_activity_visible: bool,
    pub visibility: ConnectionVisibility,
}

/// A guild the current user is in, as listed for that user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnGuild {
    pub app: App,
    pub id: Id<GuildMarker>,
    pub name: String,
    pub icon_hash: Option<String>,
    pub features: HashSet<GuildFeature>,
    pub is_owner: bool,
    pub my_permissions: Permissions,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TeamMember {
    pub app: App,
    pub membership_state: TeamMembershipState,
    pub permissions: HashSet<String>,
    pub team_id: Id<TeamMarker>,
    pub user: User,
}

/// A group of developers sharing ownership of applications.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Team {
    pub app: App,
    pub id: Id<TeamMarker>,
    pub icon_hash: Option<String>,
    pub members: IdMap<UserMarker, TeamMember>,
    pub owner_user_id: Id<UserMarker>,
}

/// An application, as sent with its bot or with messages it posted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Application {
    pub app: App,
    pub id: Id<ApplicationMarker>,
    pub name: String,
    pub description: String,
    pub is_bot_public: Option<bool>,
    pub is_bot_code_grant_required: Option<bool>,
    pub owner: Option<User>,
    pub rpc_origins: Option<HashSet<String>>,
    pub summary: String,
    /// Key for verifying interaction signatures, as the raw bytes of its hex text.
    pub verify_key: Option<Vec<u8>>,
    pub icon_hash: Option<String>,
    pub team: Option<Team>,
    /// Guild the application is sold in, for games.
    pub guild_id: Option<Id<GuildMarker>>,
    pub primary_sku_id: Option<Id<SkuMarker>>,
    pub slug: Option<String>,
    pub cover_image_hash: Option<String>,
}

impl Unique for TeamMember {
    type Marker = UserMarker;

    fn key(&self) -> Id<UserMarker> {
        self.user.id
    }
}

impl_unique! {
    OwnGuild => GuildMarker, |guild| guild.id;
    Team => TeamMarker, |team| team.id;
    Application => ApplicationMarker, |application| application.id;
}
