use super::PartialChannel;
use crate::{
    app::App,
    types::{
        guild::{GuildFeature, GuildVerificationLevel},
        id::{
            marker::{ChannelMarker, GuildMarker},
            Id,
        },
        user::User,
        util::int_enum,
    },
};
use chrono::{DateTime, Utc};
use std::{collections::HashSet, time::Duration};

int_enum! {
    /// What an invite targeting a user leads to.
    pub enum TargetUserType: u64 {
        Stream = 1,
    }
}

/// A guild's custom invite code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VanityUrl {
    pub app: App,
    pub code: String,
    pub uses: u64,
}

/// The public view of the guild an invite leads to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InviteGuild {
    pub app: App,
    pub id: Id<GuildMarker>,
    pub name: String,
    pub icon_hash: Option<String>,
    pub features: HashSet<GuildFeature>,
    pub splash_hash: Option<String>,
    pub banner_hash: Option<String>,
    pub description: Option<String>,
    pub verification_level: GuildVerificationLevel,
    pub vanity_url_code: Option<String>,
}

/// An invite code and where it leads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invite {
    pub app: App,
    pub code: String,
    pub guild: Option<InviteGuild>,
    /// Taken from `guild` when the payload only carries the nested object.
    pub guild_id: Option<Id<GuildMarker>>,
    pub channel: Option<PartialChannel>,
    /// Taken from `channel` when the payload only carries the nested object.
    pub channel_id: Id<ChannelMarker>,
    pub inviter: Option<User>,
    pub target_user: Option<User>,
    pub target_user_type: Option<TargetUserType>,
    pub approximate_presence_count: Option<u64>,
    pub approximate_member_count: Option<u64>,
}

/// An invite with the usage details visible to guild managers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InviteWithMetadata {
    pub invite: Invite,
    pub uses: u64,
    /// `None` means unlimited.
    pub max_uses: Option<u64>,
    /// `None` means the invite never expires.
    pub max_age: Option<Duration>,
    /// Whether members joining through it are kicked when they disconnect.
    pub is_temporary: bool,
    pub created_at: DateTime<Utc>,
}

impl InviteWithMetadata {
    /// When the invite stops working, if it expires.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let max_age = chrono::Duration::from_std(self.max_age?).ok()?;
        self.created_at.checked_add_signed(max_age)
    }
}

#[cfg(test)]
mod tests {
    use super::{Invite, InviteWithMetadata};
    use crate::{app::App, types::id::Id};
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    #[derive(Debug)]
    struct Host;

    impl crate::app::AppContext for Host {}

    fn invite(max_age: Option<Duration>) -> InviteWithMetadata {
        InviteWithMetadata {
            invite: Invite {
                app: App::new(Host),
                code: "aCode".to_owned(),
                guild: None,
                guild_id: None,
                channel: None,
                channel_id: Id::new(1),
                inviter: None,
                target_user: None,
                target_user_type: None,
                approximate_presence_count: None,
                approximate_member_count: None,
            },
            uses: 0,
            max_uses: None,
            max_age,
            is_temporary: false,
            created_at: Utc.with_ymd_and_hms(2015, 4, 26, 6, 26, 56).unwrap(),
        }
    }

    #[test]
    fn expiry_follows_max_age() {
        assert_eq!(invite(None).expires_at(), None);
        assert_eq!(
            invite(Some(Duration::from_secs(60))).expires_at(),
            Some(Utc.with_ymd_and_hms(2015, 4, 26, 6, 27, 56).unwrap())
        );
    }
}
