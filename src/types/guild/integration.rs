use crate::types::{
    id::{marker::{IntegrationMarker, RoleMarker}, Id},
    user::User,
    util::{impl_unique, int_enum},
};
use chrono::{DateTime, Utc};
use std::time::Duration;

int_enum! {
    /// What happens to a subscriber when their subscription lapses.
    pub enum IntegrationExpireBehaviour: u64 {
        RemoveRole = 0,
        Kick = 1,
    }
}

/// The third-party account behind an integration.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IntegrationAccount {
    /// Account id on the third-party service; not a snowflake.
    pub id: String,
    pub name: String,
}

/// An integration as referenced from a connection or audit log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartialIntegration {
    pub id: Id<IntegrationMarker>,
    pub name: String,
    /// Service name, such as `twitch` or `youtube`.
    pub kind: String,
    pub account: IntegrationAccount,
}

/// An integration attached to a guild.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Integration {
    pub id: Id<IntegrationMarker>,
    pub name: String,
    pub kind: String,
    pub account: IntegrationAccount,
    pub is_enabled: bool,
    pub is_syncing: bool,
    /// Role given to subscribers.
    pub role_id: Id<RoleMarker>,
    pub is_emojis_enabled: Option<bool>,
    pub expire_behavior: IntegrationExpireBehaviour,
    pub expire_grace_period: Duration,
    pub user: User,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl Integration {
    /// The reference form of this integration.
    pub fn to_partial(&self) -> PartialIntegration {
        PartialIntegration {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind.clone(),
            account: self.account.clone(),
        }
    }
}

impl_unique! {
    PartialIntegration => IntegrationMarker, |integration| integration.id;
    Integration => IntegrationMarker, |integration| integration.id;
}
