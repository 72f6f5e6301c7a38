//! Role and axis resolver.
//!
//! Pipeline: Role Normalization → Effective Role → Axis Inference → Section Catalog

mod catalog;
mod normalizer;

pub use catalog::*;
pub use normalizer::*;

use tracing::{debug, trace, warn};

use crate::config::NavigationConfig;
use crate::models::{AuthenticatedUser, Axis, ImpersonationTarget, Location, ResolvedView, Role};
use crate::navigation::resolve_section;

/// Role used for rendering, honoring an override only for admins.
pub fn resolve_effective_role(stored_role: Role, override_target: Option<ImpersonationTarget>) -> Role {
    match (stored_role, override_target) {
        (Role::Admin, Some(target)) => target.role(),
        (_, Some(target)) => {
            warn!(
                stored_role = %stored_role,
                override_target = %target,
                "ignoring view override held for non-admin user"
            );
            stored_role
        }
        (_, None) => stored_role,
    }
}

/// Axis of a URL path, checked in priority order clinical, teaching, research.
pub fn infer_axis(path: &str) -> Option<Axis> {
    Axis::PRIORITY
        .into_iter()
        .find(|axis| path.contains(axis.segment_marker()))
}

/// Main resolver that coordinates the full pipeline.
#[derive(Debug, Clone)]
pub struct RoleResolver {
    normalizer: RoleNormalizer,
    section_param: String,
}

impl Default for RoleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleResolver {
    /// Create a resolver with built-in synonyms and default config.
    pub fn new() -> Self {
        Self::with_config(&NavigationConfig::default())
    }

    /// Create a resolver that also knows the config's extra synonyms.
    pub fn with_config(config: &NavigationConfig) -> Self {
        let mut normalizer = RoleNormalizer::new();
        for (synonym, role) in &config.role_synonyms {
            normalizer.add_synonym(synonym, *role);
        }
        debug!(
            synonyms = normalizer.synonym_count(),
            section_param = %config.section_param,
            "role resolver configured"
        );
        Self {
            normalizer,
            section_param: config.section_param.clone(),
        }
    }

    /// Canonical stored role of a signed-in user.
    pub fn stored_role(&self, user: &AuthenticatedUser) -> Role {
        self.normalizer.normalize(&user.role)
    }

    /// Resolve the view for a raw stored role at `location`.
    pub fn resolve(
        &self,
        raw_role: &str,
        override_target: Option<ImpersonationTarget>,
        location: &Location,
    ) -> ResolvedView {
        // Step 1: Normalize the untrusted stored role
        let stored_role = self.normalizer.normalize(raw_role);
        self.resolve_role(stored_role, override_target, location)
    }

    /// Resolve the view for an already normalized stored role.
    pub fn resolve_role(
        &self,
        stored_role: Role,
        override_target: Option<ImpersonationTarget>,
        location: &Location,
    ) -> ResolvedView {
        // Step 2: Apply the override (admins only)
        let effective_role = resolve_effective_role(stored_role, override_target);
        let override_target = override_target.filter(|_| stored_role.is_admin());

        // Step 3: Axis from the path, defaulted for catalog lookup only
        let axis = infer_axis(&location.path);
        let catalog = get_section_catalog(effective_role, axis.unwrap_or_default());

        // Step 4: Section from the URL, with fallbacks
        let section = resolve_section(
            location.query_param(&self.section_param),
            effective_role,
            axis,
            &catalog,
        );

        trace!(
            stored_role = %stored_role,
            effective_role = %effective_role,
            axis = ?axis,
            section = %section,
            "resolved view"
        );

        ResolvedView {
            stored_role,
            override_target,
            effective_role,
            axis,
            catalog,
            section,
        }
    }

    /// Get the normalizer for direct access.
    pub fn normalizer(&self) -> &RoleNormalizer {
        &self.normalizer
    }

    /// Query key holding the section.
    pub fn section_param(&self) -> &str {
        &self.section_param
    }
}
