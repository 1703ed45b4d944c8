use crate::types::{
    guild::Permissions,
    id::{marker::GenericMarker, Id},
    util::{impl_unique, str_enum},
};

str_enum! {
    /// Whether an overwrite targets a member or a role.
    pub enum PermissionOverwriteType {
        Member = "member",
        Role = "role",
    }
}

/// Channel-specific permission changes for a member or role.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermissionOverwrite {
    /// Id of the member or role, depending on `kind`.
    pub id: Id<GenericMarker>,
    pub kind: PermissionOverwriteType,
    pub allow: Permissions,
    pub deny: Permissions,
}

impl PermissionOverwrite {
    /// Permissions neither allowed nor denied by this overwrite.
    pub fn unset(&self) -> Permissions {
        !(self.allow | self.deny)
    }
}

impl_unique! {
    PermissionOverwrite => GenericMarker, |overwrite| overwrite.id;
}
