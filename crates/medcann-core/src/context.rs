//! Admin "view as" context.
//!
//! The override is session-local UI state with a single owner (the
//! dashboard shell). It is never persisted and is cleared on logout.

use thiserror::Error;
use tracing::debug;

use crate::models::{ImpersonationTarget, Role};

/// View context errors.
#[derive(Error, Debug, PartialEq)]
pub enum ViewError {
    #[error("Only administrators can view the platform as another role (current role: {0})")]
    NotAdmin(Role),

    #[error("Cannot view the platform as role: {0}")]
    NotImpersonable(Role),
}

pub type ViewResult<T> = Result<T, ViewError>;

/// Holder of the impersonation override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContext {
    override_target: Option<ImpersonationTarget>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override to honor for a user whose canonical role is `stored_role`.
    ///
    /// Always `None` for non-admins, even if one is held.
    pub fn get(&self, stored_role: Role) -> Option<ImpersonationTarget> {
        self.override_target.filter(|_| stored_role.is_admin())
    }

    /// Handle a "view as" selection made by `actor`.
    ///
    /// Selecting `admin` drops back to the admin's own view.
    pub fn select(&mut self, actor: Role, view_as: Role) -> ViewResult<()> {
        if !actor.is_admin() {
            return Err(ViewError::NotAdmin(actor));
        }
        if view_as.is_admin() {
            self.clear();
            return Ok(());
        }
        let target = ImpersonationTarget::try_from(view_as).map_err(ViewError::NotImpersonable)?;
        self.set(actor, target)
    }

    /// Set the override directly.
    pub fn set(&mut self, actor: Role, target: ImpersonationTarget) -> ViewResult<()> {
        if !actor.is_admin() {
            return Err(ViewError::NotAdmin(actor));
        }
        debug!(view_as = %target, "view override set");
        self.override_target = Some(target);
        Ok(())
    }

    /// Return to the admin's own view.
    pub fn clear(&mut self) {
        if let Some(previous) = self.override_target.take() {
            debug!(previous = %previous, "view override cleared");
        }
    }

    /// Session ended (logout).
    pub fn reset(&mut self) {
        debug!("view context reset");
        self.override_target = None;
    }
}
