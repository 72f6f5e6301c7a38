//! Authenticated user models.

use serde::{Deserialize, Serialize};

/// User record as supplied by the session provider.
///
/// `role` is untrusted and must go through
/// [`crate::resolver::RoleNormalizer`] before any business logic reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    pub id: String,
    /// Raw stored role, possibly a legacy synonym
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl AuthenticatedUser {
    /// Create a user with the required fields.
    pub fn new(id: String, role: String) -> Self {
        Self {
            id,
            role,
            name: String::new(),
            email: String::new(),
        }
    }
}
