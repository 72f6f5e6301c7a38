//! Reconciler between resolved view state and the browser URL.

use tracing::{debug, trace};

use crate::config::NavigationConfig;
use crate::models::{Axis, ImpersonationTarget, Location, NavigationRequest, ResolvedView, SectionId};

use super::{sync_impersonation_to_route, sync_url_to_section, Navigator, RouteTable};

/// Reconciler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Reconciling,
}

/// Inputs that trigger a route check when they change.
type RouteKey = (Option<ImpersonationTarget>, Option<Axis>);

/// Path, resolved section and URL param of the last requested correction.
type PendingSection = (String, SectionId, Option<String>);

/// Keeps the URL in step with the resolved view, one render at a time.
#[derive(Debug, Clone)]
pub struct NavigationStateSync {
    routes: RouteTable,
    section_param: String,
    state: SyncState,
    /// Override and axis seen by the last route check
    last_route_key: Option<RouteKey>,
    /// Section replace already requested, with the path and param it corrected
    pending_section: Option<PendingSection>,
}

impl Default for NavigationStateSync {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl NavigationStateSync {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            routes: RouteTable::new(config),
            section_param: config.section_param.clone(),
            state: SyncState::Idle,
            last_route_key: None,
            pending_section: None,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Compare `view` with `location` and return the navigation needed, if any.
    ///
    /// A role switch (push) takes precedence over a section correction
    /// (replace); the correction happens on the next pass.
    pub fn reconcile(&mut self, view: &ResolvedView, location: &Location) -> Option<NavigationRequest> {
        self.state = SyncState::Reconciling;
        trace!(path = %location.path, section = %view.section, "reconciling");

        let request = self
            .reconcile_route(view, location)
            .or_else(|| self.reconcile_section(view, location));

        if let Some(request) = &request {
            debug!(href = %request.href, mode = ?request.mode, "navigation requested");
        }

        self.state = SyncState::Idle;
        request
    }

    /// Like [`Self::reconcile`], handing the request to `navigator`.
    ///
    /// Returns whether a navigation was issued.
    pub fn reconcile_with<N: Navigator>(
        &mut self,
        view: &ResolvedView,
        location: &Location,
        navigator: &mut N,
    ) -> bool {
        match self.reconcile(view, location) {
            Some(request) => {
                navigator.navigate(request);
                true
            }
            None => false,
        }
    }

    /// Forget everything observed (logout).
    pub fn reset(&mut self) {
        self.last_route_key = None;
        self.pending_section = None;
        self.state = SyncState::Idle;
    }

    fn reconcile_route(&mut self, view: &ResolvedView, location: &Location) -> Option<NavigationRequest> {
        let key = (view.override_target, view.axis);
        if self.last_route_key == Some(key) {
            return None;
        }
        self.last_route_key = Some(key);

        let mut request = None;
        sync_impersonation_to_route(view, &location.path, &self.routes, |href| {
            request = Some(NavigationRequest::push(href));
        });
        request
    }

    fn reconcile_section(&mut self, view: &ResolvedView, location: &Location) -> Option<NavigationRequest> {
        let current = location.query_param(&self.section_param);
        let observed = (location.path.clone(), view.section, current.map(String::from));

        // Already asked the router for this exact correction
        if self.pending_section.as_ref() == Some(&observed) {
            return None;
        }

        let mut request = None;
        let param = &self.section_param;
        let issued = sync_url_to_section(view.section, current, |section| {
            request = Some(NavigationRequest::replace(
                location.with_query_param(param, section.as_str()),
            ));
        });

        self.pending_section = if issued { Some(observed) } else { None };
        request
    }
}
