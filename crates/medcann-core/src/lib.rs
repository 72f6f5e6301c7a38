//! MedCannLab View Core
//!
//! Decides which dashboard section a signed-in user sees, and keeps the
//! browser URL in step with that decision.
//!
//! # Architecture
//!
//! ```text
//!   User record ─┐
//!                │
//!   View as ─────┼──► RoleResolver ──────► ResolvedView
//!   (admins)     │    normalize role       effective role
//!                │    effective role       axis
//!   URL ─────────┘    axis, catalog        catalog, section
//!                                               │
//!                                               ▼
//!                                      NavigationStateSync
//!                                      ┌─────────────────────┐
//!                                      │ push role route     │
//!                                      │ replace ?section=   │
//!                                      └──────────┬──────────┘
//!                                                 │
//!                                                 ▼
//!                                            Host router
//! ```
//!
//! # Core Principle
//!
//! **The URL is the source of truth for the section.** Every render
//! recomputes the view from the URL; nothing else stores it.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Role, Axis, SectionId, ResolvedView, etc.)
//! - [`resolver`]: Role normalization, axis inference and section catalogs
//! - [`navigation`]: Section resolution and URL reconciliation
//! - [`context`]: Admin "view as" override
//! - [`config`]: Route and synonym configuration

pub mod config;
pub mod context;
pub mod models;
pub mod navigation;
pub mod resolver;

// Re-export commonly used types
pub use config::NavigationConfig;
pub use context::ViewContext;
pub use models::{
    AuthenticatedUser, Axis, HistoryMode, ImpersonationTarget, Location, NavigationRequest,
    ResolvedView, Role, SectionId, SectionOption,
};
pub use navigation::{NavigationStateSync, RouteTable};
pub use resolver::{RoleNormalizer, RoleResolver};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MedCannError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("View error: {0}")]
    ViewError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("State error: {0}")]
    StateError(String),
}

impl From<config::ConfigError> for MedCannError {
    fn from(e: config::ConfigError) -> Self {
        MedCannError::ConfigError(e.to_string())
    }
}

impl From<context::ViewError> for MedCannError {
    fn from(e: context::ViewError) -> Self {
        MedCannError::ViewError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for MedCannError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        MedCannError::StateError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Free Functions (exported to FFI)
// =========================================================================

/// Canonical name for a raw stored role.
#[uniffi::export]
pub fn normalize_role(raw: String) -> String {
    resolver::normalize_role(&raw).as_str().to_string()
}

/// Axis of a URL path, if any.
#[uniffi::export]
pub fn infer_axis(path: String) -> Option<String> {
    resolver::infer_axis(&path).map(|axis| axis.as_str().to_string())
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create a view core with default configuration.
#[uniffi::export]
pub fn create_view_core() -> Arc<MedCannViewCore> {
    Arc::new(MedCannViewCore::new(NavigationConfig::default()))
}

/// Create a view core from a JSON configuration document.
#[uniffi::export]
pub fn create_view_core_with_config(json: String) -> Result<Arc<MedCannViewCore>, MedCannError> {
    let config = NavigationConfig::from_json(&json)?;
    Ok(Arc::new(MedCannViewCore::new(config)))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Mutable state owned by the dashboard shell.
#[derive(Debug)]
struct ShellState {
    context: ViewContext,
    sync: NavigationStateSync,
}

/// Thread-safe view core for FFI. The single owner of the "view as"
/// override and of the URL reconciler.
#[derive(uniffi::Object)]
pub struct MedCannViewCore {
    resolver: RoleResolver,
    state: Arc<Mutex<ShellState>>,
}

impl MedCannViewCore {
    fn new(config: NavigationConfig) -> Self {
        Self {
            resolver: RoleResolver::with_config(&config),
            state: Arc::new(Mutex::new(ShellState {
                context: ViewContext::new(),
                sync: NavigationStateSync::new(&config),
            })),
        }
    }

    fn stored_role(&self, user: FfiUser) -> Role {
        self.resolver.stored_role(&user.into())
    }
}

#[uniffi::export]
impl MedCannViewCore {
    // =========================================================================
    // View Context Operations
    // =========================================================================

    /// Handle a "view as" selection. Selecting "admin" returns to the
    /// admin's own view.
    pub fn select_view(&self, user: FfiUser, view_as: String) -> Result<(), MedCannError> {
        let actor = self.stored_role(user);
        let target = self
            .resolver
            .normalizer()
            .lookup(&view_as)
            .ok_or_else(|| MedCannError::InvalidInput(format!("Unknown role: {}", view_as)))?;

        let mut state = self.state.lock()?;
        state.context.select(actor, target)?;
        Ok(())
    }

    /// Override honored for `user`, if any.
    pub fn current_override(&self, user: FfiUser) -> Result<Option<String>, MedCannError> {
        let stored_role = self.stored_role(user);
        let state = self.state.lock()?;
        Ok(state
            .context
            .get(stored_role)
            .map(|target| target.as_str().to_string()))
    }

    /// Drop the override.
    pub fn clear_override(&self) -> Result<(), MedCannError> {
        let mut state = self.state.lock()?;
        state.context.clear();
        Ok(())
    }

    /// Session ended: drop the override and reconciler memory.
    pub fn reset_session(&self) -> Result<(), MedCannError> {
        let mut state = self.state.lock()?;
        state.context.reset();
        state.sync.reset();
        Ok(())
    }

    // =========================================================================
    // Resolution Operations
    // =========================================================================

    /// Resolve the view for `user` at `href` without touching the URL.
    pub fn resolve(&self, user: FfiUser, href: String) -> Result<FfiResolvedView, MedCannError> {
        let location = Location::parse(&href);
        let stored_role = self.stored_role(user);
        let state = self.state.lock()?;
        let view = self
            .resolver
            .resolve_role(stored_role, state.context.get(stored_role), &location);
        Ok(view.into())
    }

    /// Resolve and reconcile one render. Returns the navigation the host
    /// router must perform, if any.
    pub fn reconcile(
        &self,
        user: FfiUser,
        href: String,
    ) -> Result<Option<FfiNavigationRequest>, MedCannError> {
        let location = Location::parse(&href);
        let stored_role = self.stored_role(user);
        let mut state = self.state.lock()?;
        let view = self
            .resolver
            .resolve_role(stored_role, state.context.get(stored_role), &location);
        let request = state.sync.reconcile(&view, &location);
        Ok(request.map(|r| r.into()))
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe user record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUser {
    pub id: String,
    pub role: String,
    pub name: String,
    pub email: String,
}

impl From<FfiUser> for AuthenticatedUser {
    fn from(user: FfiUser) -> Self {
        AuthenticatedUser {
            id: user.id,
            role: user.role,
            name: user.name,
            email: user.email,
        }
    }
}

/// FFI-safe section catalog entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSectionOption {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: String,
}

impl From<SectionOption> for FfiSectionOption {
    fn from(option: SectionOption) -> Self {
        Self {
            id: option.id.as_str().to_string(),
            label: option.label.to_string(),
            description: option.description.to_string(),
            icon: option.icon.to_string(),
        }
    }
}

/// FFI-safe resolved view.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiResolvedView {
    pub stored_role: String,
    pub effective_role: String,
    pub override_target: Option<String>,
    pub axis: Option<String>,
    pub section: String,
    pub catalog: Vec<FfiSectionOption>,
}

impl From<ResolvedView> for FfiResolvedView {
    fn from(view: ResolvedView) -> Self {
        Self {
            stored_role: view.stored_role.as_str().to_string(),
            effective_role: view.effective_role.as_str().to_string(),
            override_target: view.override_target.map(|t| t.as_str().to_string()),
            axis: view.axis.map(|a| a.as_str().to_string()),
            section: view.section.as_str().to_string(),
            catalog: view.catalog.into_iter().map(|o| o.into()).collect(),
        }
    }
}

/// FFI-safe navigation request.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiNavigationRequest {
    pub href: String,
    /// true: replace the current history entry; false: push a new one
    pub replace: bool,
}

impl From<NavigationRequest> for FfiNavigationRequest {
    fn from(request: NavigationRequest) -> Self {
        Self {
            href: request.href,
            replace: request.mode == HistoryMode::Replace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> FfiUser {
        FfiUser {
            id: "u-1".into(),
            role: role.into(),
            name: "Test User".into(),
            email: "test@example.com".into(),
        }
    }

    #[test]
    fn test_ffi_normalize_and_axis() {
        assert_eq!(normalize_role(" Aluno ".into()), "student");
        assert_eq!(infer_axis("/app/research/x/y".into()), Some("research".into()));
        assert_eq!(infer_axis("/app/admin-dashboard".into()), None);
    }

    #[test]
    fn test_select_view_round_trip() {
        let core = create_view_core();
        let admin = user("admin");

        core.select_view(admin.clone(), "Professional".into()).unwrap();
        assert_eq!(
            core.current_override(admin.clone()).unwrap(),
            Some("professional".into())
        );

        core.select_view(admin.clone(), "admin".into()).unwrap();
        assert_eq!(core.current_override(admin).unwrap(), None);
    }

    #[test]
    fn test_select_view_errors() {
        let core = create_view_core();

        let err = core.select_view(user("student"), "patient".into()).unwrap_err();
        assert!(matches!(err, MedCannError::ViewError(_)));

        let err = core.select_view(user("admin"), "superuser".into()).unwrap_err();
        assert!(matches!(err, MedCannError::InvalidInput(_)));
        assert_eq!(core.current_override(user("admin")).unwrap(), None);
    }

    #[test]
    fn test_select_view_accepts_legacy_names() {
        let core = create_view_core();
        let admin = user("administrador");

        core.select_view(admin.clone(), " Aluno ".into()).unwrap();
        assert_eq!(core.current_override(admin.clone()).unwrap(), Some("student".into()));

        core.select_view(admin.clone(), "administrador".into()).unwrap();
        assert_eq!(core.current_override(admin).unwrap(), None);
    }

    #[test]
    fn test_reconcile_impersonation_then_section() {
        let core = create_view_core();
        let admin = user("admin");
        core.select_view(admin.clone(), "patient".into()).unwrap();

        let request = core
            .reconcile(admin.clone(), "/app/clinical/professional/dashboard".into())
            .unwrap()
            .unwrap();
        assert_eq!(request.href, "/app/clinical/patient/dashboard");
        assert!(!request.replace);

        let request = core
            .reconcile(admin, "/app/clinical/patient/dashboard".into())
            .unwrap()
            .unwrap();
        assert_eq!(request.href, "/app/clinical/patient/dashboard?section=my-health");
        assert!(request.replace);
    }

    #[test]
    fn test_resolve_exposes_catalog() {
        let core = create_view_core();

        let view = core
            .resolve(user("aluno"), "/app/teaching/student/dashboard".into())
            .unwrap();

        assert_eq!(view.stored_role, "student");
        assert_eq!(view.axis.as_deref(), Some("teaching"));
        assert_eq!(view.section, "lessons");
        assert!(view.catalog.iter().any(|o| o.id == "library"));
    }

    #[test]
    fn test_reset_session_clears_override() {
        let core = create_view_core();
        let admin = user("admin");
        core.select_view(admin.clone(), "student".into()).unwrap();

        core.reset_session().unwrap();

        assert_eq!(core.current_override(admin).unwrap(), None);
    }

    #[test]
    fn test_config_from_json() {
        let core = create_view_core_with_config(
            r#"{"base_path": "/portal", "role_synonyms": {"residente": "professional"}}"#.into(),
        )
        .unwrap();

        let view = core
            .resolve(user("residente"), "/portal/research/professional/dashboard".into())
            .unwrap();
        assert_eq!(view.effective_role, "professional");
        assert_eq!(view.section, "evaluation");

        assert!(matches!(
            create_view_core_with_config("{not json".into()),
            Err(MedCannError::ConfigError(_))
        ));
    }
}
