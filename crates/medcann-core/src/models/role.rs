//! User role models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical user role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Receives care; the safe default for anything unrecognized
    #[default]
    Patient,
    /// Clinician working across the clinical, teaching and research axes
    Professional,
    /// Enrolled in teaching content
    Student,
    /// Platform administrator, may view the platform as another role
    Admin,
    /// Registered but not yet approved
    Unconfirmed,
}

impl Role {
    /// All canonical roles.
    pub const ALL: [Role; 5] = [
        Role::Patient,
        Role::Professional,
        Role::Student,
        Role::Admin,
        Role::Unconfirmed,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Professional => "professional",
            Role::Student => "student",
            Role::Admin => "admin",
            Role::Unconfirmed => "unconfirmed",
        }
    }

    /// Parse an exact canonical name. Synonyms are handled by
    /// [`crate::resolver::RoleNormalizer`].
    pub fn from_canonical(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == s)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role an administrator can view the platform as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpersonationTarget {
    Patient,
    Professional,
    Student,
}

impl ImpersonationTarget {
    pub fn role(&self) -> Role {
        match self {
            ImpersonationTarget::Patient => Role::Patient,
            ImpersonationTarget::Professional => Role::Professional,
            ImpersonationTarget::Student => Role::Student,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.role().as_str()
    }
}

impl From<ImpersonationTarget> for Role {
    fn from(target: ImpersonationTarget) -> Self {
        target.role()
    }
}

impl TryFrom<Role> for ImpersonationTarget {
    type Error = Role;

    /// Admin and unconfirmed are not valid "view as" targets; the rejected
    /// role is returned as the error.
    fn try_from(role: Role) -> Result<Self, Self::Error> {
        match role {
            Role::Patient => Ok(ImpersonationTarget::Patient),
            Role::Professional => Ok(ImpersonationTarget::Professional),
            Role::Student => Ok(ImpersonationTarget::Student),
            Role::Admin | Role::Unconfirmed => Err(role),
        }
    }
}

impl fmt::Display for ImpersonationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
