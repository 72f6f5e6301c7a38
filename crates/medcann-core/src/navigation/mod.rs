//! Keeps the resolved section and route in step with the browser URL.
//!
//! Rules:
//! - Section corrections replace the current history entry
//! - Role switches from "view as" push a new entry
//! - One reconcile pass issues at most one navigation

mod routes;
mod sync;

pub use routes::*;
pub use sync::*;

use crate::models::{Axis, NavigationRequest, ResolvedView, Role, SectionId, SectionOption};

/// Used when no section can be taken from the catalog.
pub const FALLBACK_SECTION: SectionId = SectionId::Service;

/// Receiver of navigation requests (the host router).
pub trait Navigator {
    fn navigate(&mut self, request: NavigationRequest);
}

/// Records requests in order; handy as a history log.
impl Navigator for Vec<NavigationRequest> {
    fn navigate(&mut self, request: NavigationRequest) {
        self.push(request);
    }
}

/// Preferred section when the URL names none: keyed by admin, else by axis.
pub fn preferred_section(effective_role: Role, axis: Option<Axis>) -> SectionId {
    if effective_role.is_admin() {
        return SectionId::Service;
    }
    match axis.unwrap_or_default() {
        Axis::Clinical => SectionId::Service,
        Axis::Teaching => SectionId::Lessons,
        Axis::Research => SectionId::Evaluation,
    }
}

/// Section to render.
///
/// Precedence: URL param in catalog, preferred default in catalog, first
/// catalog entry, [`FALLBACK_SECTION`].
pub fn resolve_section(
    url_param: Option<&str>,
    effective_role: Role,
    axis: Option<Axis>,
    catalog: &[SectionOption],
) -> SectionId {
    let in_catalog = |id: SectionId| catalog.iter().any(|option| option.id == id);

    if let Some(id) = url_param.and_then(SectionId::parse) {
        if in_catalog(id) {
            return id;
        }
    }

    let preferred = preferred_section(effective_role, axis);
    if in_catalog(preferred) {
        return preferred;
    }

    catalog
        .first()
        .map(|option| option.id)
        .unwrap_or(FALLBACK_SECTION)
}

/// Call `set_url_param` when the URL does not already show `resolved`.
///
/// Returns whether the setter was called.
pub fn sync_url_to_section<F>(resolved: SectionId, current_param: Option<&str>, set_url_param: F) -> bool
where
    F: FnOnce(SectionId),
{
    if current_param == Some(resolved.as_str()) {
        return false;
    }
    set_url_param(resolved);
    true
}

/// Call `navigate` with the dashboard route of the impersonated role when
/// the current path differs from it.
///
/// No-op unless an admin is viewing as another role. Returns whether
/// `navigate` was called.
pub fn sync_impersonation_to_route<F>(
    view: &ResolvedView,
    current_path: &str,
    routes: &RouteTable,
    navigate: F,
) -> bool
where
    F: FnOnce(String),
{
    if !view.is_impersonating() {
        return false;
    }
    match routes.dashboard_route(view.effective_role, view.axis) {
        Some(target) if target != current_path => {
            navigate(target);
            true
        }
        _ => false,
    }
}
