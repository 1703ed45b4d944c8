use super::Permissions;
use crate::{
    app::App,
    types::{
        id::{marker::RoleMarker, Id},
        util::{impl_unique, Color},
    },
};

/// A role, as listed on its guild.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Role {
    pub app: App,
    pub id: Id<RoleMarker>,
    pub name: String,
    pub color: Color,
    /// Whether members with this role are listed separately.
    pub is_hoisted: bool,
    pub position: i64,
    pub permissions: Permissions,
    /// Whether an integration manages this role.
    pub is_managed: bool,
    pub is_mentionable: bool,
}

/// A role known only by id and name, as sent in audit log changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartialRole {
    pub app: App,
    pub id: Id<RoleMarker>,
    pub name: String,
}

impl_unique! {
    Role => RoleMarker, |role| role.id;
    PartialRole => RoleMarker, |role| role.id;
}
