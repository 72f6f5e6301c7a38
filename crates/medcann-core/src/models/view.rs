//! Resolved view state for one render.

use serde::Serialize;

use super::axis::Axis;
use super::role::{ImpersonationTarget, Role};
use super::section::{SectionId, SectionOption};

/// Everything the dashboard shell needs to pick a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedView {
    /// Canonical stored role of the signed-in user
    pub stored_role: Role,
    /// Override actually honored (always `None` unless `stored_role` is admin)
    pub override_target: Option<ImpersonationTarget>,
    /// Role driving section selection
    pub effective_role: Role,
    /// Axis inferred from the path, if any
    pub axis: Option<Axis>,
    /// Sections available for (effective role, axis)
    pub catalog: Vec<SectionOption>,
    /// Section to render
    pub section: SectionId,
}

impl ResolvedView {
    /// An admin is viewing the platform as another role.
    pub fn is_impersonating(&self) -> bool {
        self.stored_role.is_admin() && self.override_target.is_some()
    }

    /// Catalog entry for the resolved section.
    pub fn section_option(&self) -> Option<&SectionOption> {
        self.catalog.iter().find(|option| option.id == self.section)
    }
}
