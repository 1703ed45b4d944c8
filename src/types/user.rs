//! Users, the current user, and partially known users.

use crate::{
    app::App,
    types::{
        id::{marker::UserMarker, Id},
        util::{impl_unique, int_enum, Field},
    },
};
use bitflags::bitflags;

bitflags! {
    /// Badges and account properties of a user.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct UserFlags: u64 {
        const DISCORD_EMPLOYEE = 1 << 0;
        const DISCORD_PARTNER = 1 << 1;
        const HYPESQUAD_EVENTS = 1 << 2;
        const BUG_HUNTER_LEVEL_1 = 1 << 3;
        const HOUSE_BRAVERY = 1 << 6;
        const HOUSE_BRILLIANCE = 1 << 7;
        const HOUSE_BALANCE = 1 << 8;
        const EARLY_SUPPORTER = 1 << 9;
        const TEAM_USER = 1 << 10;
        const SYSTEM = 1 << 12;
        const BUG_HUNTER_LEVEL_2 = 1 << 14;
        const VERIFIED_BOT = 1 << 16;
        const VERIFIED_BOT_DEVELOPER = 1 << 17;
    }
}

int_enum! {
    /// Type of premium subscription a user has.
    pub enum PremiumType: u64 {
        None = 0,
        NitroClassic = 1,
        Nitro = 2,
    }
}

/// A user account.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub app: App,
    pub id: Id<UserMarker>,
    pub discriminator: String,
    pub username: String,
    pub avatar_hash: Option<String>,
    /// Defaults to `false` when not sent.
    pub is_bot: bool,
    /// Defaults to `false` when not sent.
    pub is_system: bool,
    /// Public badges; empty when not sent.
    pub flags: UserFlags,
}

/// The account the application is logged in as.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnUser {
    pub app: App,
    pub id: Id<UserMarker>,
    pub discriminator: String,
    pub username: String,
    pub avatar_hash: Option<String>,
    pub is_bot: bool,
    pub is_system: bool,
    pub is_mfa_enabled: bool,
    pub locale: Option<String>,
    pub is_verified: Option<bool>,
    pub email: Option<String>,
    /// All flags, including private ones.
    pub flags: UserFlags,
    pub premium_type: Option<PremiumType>,
}

/// A user where only the id is guaranteed, as sent with presence updates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartialUser {
    pub app: App,
    pub id: Id<UserMarker>,
    pub discriminator: Field<String>,
    pub username: Field<String>,
    pub avatar_hash: Field<String>,
    pub is_bot: Field<bool>,
    pub is_system: Field<bool>,
    pub flags: Field<UserFlags>,
}

impl OwnUser {
    /// The public view of this user.
    pub fn to_user(&self) -> User {
        User {
            app: self.app.clone(),
            id: self.id,
            discriminator: self.discriminator.clone(),
            username: self.username.clone(),
            avatar_hash: self.avatar_hash.clone(),
            is_bot: self.is_bot,
            is_system: self.is_system,
            flags: self.flags,
        }
    }
}

impl_unique! {
    User => UserMarker, |user| user.id;
    OwnUser => UserMarker, |user| user.id;
    PartialUser => UserMarker, |user| user.id;
}
