use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::EnumString;
use thiserror::Error;

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

pub type RolePrimitive = i16;

/// The single authority for authorization decisions.
///
/// Any "is admin" convenience is derived from this value and
/// never stored independently.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[default]
    User  = 0,
    Admin = 1,
}

impl Role {
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().expect("Role primitive")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id              : Id,
    pub email           : EmailAddress,
    pub email_confirmed : bool,
    pub password        : Password,
    pub role            : Role,
    pub name            : String,
    pub bio             : String,
    pub photo_url       : Option<String>,
    pub created_at      : Timestamp,
}

impl User {
    /// Whether the one-time "complete your profile" prompt may be skipped.
    pub fn profile_complete(&self) -> bool {
        !self.bio.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_str() {
        assert_eq!(Role::Admin, "admin".parse().unwrap());
        assert_eq!(Role::Admin, "Admin".parse().unwrap());
        assert_eq!(Role::User, "user".parse().unwrap());
        assert!("scout".parse::<Role>().is_err());
    }

    #[test]
    fn role_primitive_round_trip() {
        assert_eq!(Role::User, Role::try_from(0).unwrap());
        assert_eq!(Role::Admin, Role::try_from(1).unwrap());
        assert!(Role::try_from(2).is_err());
        assert_eq!(1i16, Role::Admin.into());
    }

    #[test]
    fn default_role_is_not_admin() {
        assert!(!Role::default().is_admin());
    }
}
