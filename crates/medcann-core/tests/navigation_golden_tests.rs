//! Golden tests for view resolution and URL reconciliation.
//!
//! Each case runs one render pass: resolve the view, then reconcile it
//! against the URL.

use medcann_core::models::{
    Axis, HistoryMode, ImpersonationTarget, Location, NavigationRequest, Role, SectionId,
};
use medcann_core::navigation::{sync_impersonation_to_route, NavigationStateSync, RouteTable};
use medcann_core::resolver::RoleResolver;

/// Test case for a single render pass.
struct GoldenCase {
    id: &'static str,
    stored_role: &'static str,
    view_as: Option<ImpersonationTarget>,
    href: &'static str,
    expected_role: Role,
    expected_axis: Option<Axis>,
    expected_section: SectionId,
    expected_navigation: Option<(&'static str, HistoryMode)>,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "legacy-student-teaching",
            stored_role: "aluno",
            view_as: None,
            href: "/app/teaching/student/dashboard",
            expected_role: Role::Student,
            expected_axis: Some(Axis::Teaching),
            expected_section: SectionId::Lessons,
            expected_navigation: Some((
                "/app/teaching/student/dashboard?section=lessons",
                HistoryMode::Replace,
            )),
        },
        GoldenCase {
            id: "admin-views-as-patient",
            stored_role: "admin",
            view_as: Some(ImpersonationTarget::Patient),
            href: "/app/clinical/professional/dashboard",
            expected_role: Role::Patient,
            expected_axis: Some(Axis::Clinical),
            expected_section: SectionId::MyHealth,
            expected_navigation: Some(("/app/clinical/patient/dashboard", HistoryMode::Push)),
        },
        GoldenCase {
            id: "admin-own-dashboard",
            stored_role: "admin",
            view_as: None,
            href: "/app/admin-dashboard?section=users",
            expected_role: Role::Admin,
            expected_axis: None,
            expected_section: SectionId::Users,
            expected_navigation: None,
        },
        GoldenCase {
            id: "admin-views-as-professional-research",
            stored_role: "Admin",
            view_as: Some(ImpersonationTarget::Professional),
            href: "/app/research/professional/dashboard?section=studies",
            expected_role: Role::Professional,
            expected_axis: Some(Axis::Research),
            expected_section: SectionId::Studies,
            expected_navigation: None,
        },
        GoldenCase {
            id: "admin-views-as-student-from-research",
            stored_role: "admin",
            view_as: Some(ImpersonationTarget::Student),
            href: "/app/research/professional/dashboard",
            expected_role: Role::Student,
            expected_axis: Some(Axis::Research),
            expected_section: SectionId::Lessons,
            expected_navigation: Some(("/app/research/student/dashboard", HistoryMode::Push)),
        },
        GoldenCase {
            id: "professional-stale-override-ignored",
            stored_role: "professional",
            view_as: Some(ImpersonationTarget::Patient),
            href: "/app/clinical/professional/dashboard?section=agenda",
            expected_role: Role::Professional,
            expected_axis: Some(Axis::Clinical),
            expected_section: SectionId::Agenda,
            expected_navigation: None,
        },
        GoldenCase {
            id: "professional-bookmark-not-in-axis",
            stored_role: "profissional",
            view_as: None,
            href: "/app/research/professional/dashboard?section=agenda&tab=2",
            expected_role: Role::Professional,
            expected_axis: Some(Axis::Research),
            expected_section: SectionId::Evaluation,
            expected_navigation: Some((
                "/app/research/professional/dashboard?section=evaluation&tab=2",
                HistoryMode::Replace,
            )),
        },
        GoldenCase {
            id: "unknown-role-defaults-to-patient",
            stored_role: "superuser",
            view_as: None,
            href: "/app/clinical/patient/dashboard?section=reports",
            expected_role: Role::Patient,
            expected_axis: Some(Axis::Clinical),
            expected_section: SectionId::Reports,
            expected_navigation: None,
        },
        GoldenCase {
            id: "unconfirmed-pending-approval",
            stored_role: "unconfirmed",
            view_as: None,
            href: "/app/pending",
            expected_role: Role::Unconfirmed,
            expected_axis: None,
            expected_section: SectionId::PendingApproval,
            expected_navigation: Some(("/app/pending?section=pending-approval", HistoryMode::Replace)),
        },
        GoldenCase {
            id: "admin-axis-tie-break",
            stored_role: "admin",
            view_as: None,
            href: "/app/clinical/teaching/x",
            expected_role: Role::Admin,
            expected_axis: Some(Axis::Clinical),
            expected_section: SectionId::Service,
            expected_navigation: Some(("/app/clinical/teaching/x?section=service", HistoryMode::Replace)),
        },
    ]
}

#[test]
fn test_golden_cases() {
    let resolver = RoleResolver::new();

    for case in get_golden_cases() {
        let mut sync = NavigationStateSync::default();
        let location = Location::parse(case.href);

        let view = resolver.resolve(case.stored_role, case.view_as, &location);

        assert_eq!(view.effective_role, case.expected_role, "Case {}: effective role", case.id);
        assert_eq!(view.axis, case.expected_axis, "Case {}: axis", case.id);
        assert_eq!(view.section, case.expected_section, "Case {}: section", case.id);

        let request = sync.reconcile(&view, &location);
        let actual = request.as_ref().map(|r| (r.href.as_str(), r.mode));
        assert_eq!(actual, case.expected_navigation, "Case {}: navigation", case.id);
    }
}

#[test]
fn test_admin_patient_override_pushes_patient_dashboard() {
    let resolver = RoleResolver::new();
    let routes = RouteTable::default();
    let location = Location::parse("/app/clinical/professional/dashboard");

    let view = resolver.resolve("admin", Some(ImpersonationTarget::Patient), &location);
    assert_eq!(view.effective_role, Role::Patient);

    let mut pushed = None;
    let navigated = sync_impersonation_to_route(&view, &location.path, &routes, |href| {
        pushed = Some(href);
    });

    assert!(navigated);
    assert_eq!(pushed.as_deref(), Some("/app/clinical/patient/dashboard"));
}

#[test]
fn test_admin_without_override_is_noop() {
    let resolver = RoleResolver::new();
    let routes = RouteTable::default();
    let location = Location::parse("/app/admin-dashboard");

    let view = resolver.resolve("admin", None, &location);

    let mut called = false;
    let navigated = sync_impersonation_to_route(&view, &location.path, &routes, |_| called = true);

    assert!(!navigated);
    assert!(!called);
}

#[test]
fn test_full_session_flow() {
    let resolver = RoleResolver::new();
    let mut sync = NavigationStateSync::default();
    let mut href = String::from("/app/admin-dashboard");
    let mut history: Vec<NavigationRequest> = Vec::new();

    // Render until the URL settles, following each navigation
    let mut settle = |view_as: Option<ImpersonationTarget>, href: &mut String, history: &mut Vec<NavigationRequest>| {
        for _ in 0..4 {
            let location = Location::parse(href);
            let view = resolver.resolve("admin", view_as, &location);
            match sync.reconcile(&view, &location) {
                Some(request) => {
                    *href = request.href.clone();
                    history.push(request);
                }
                None => return view,
            }
        }
        panic!("URL did not settle: {}", href);
    };

    let view = settle(None, &mut href, &mut history);
    assert_eq!(view.section, SectionId::Service);
    assert_eq!(href, "/app/admin-dashboard?section=service");

    let view = settle(Some(ImpersonationTarget::Professional), &mut href, &mut history);
    assert_eq!(view.effective_role, Role::Professional);
    assert_eq!(href, "/app/clinical/professional/dashboard?section=service");

    let view = settle(Some(ImpersonationTarget::Student), &mut href, &mut history);
    assert_eq!(view.effective_role, Role::Student);
    assert_eq!(href, "/app/teaching/student/dashboard?section=lessons");

    let modes: Vec<HistoryMode> = history.iter().map(|r| r.mode).collect();
    assert_eq!(
        modes,
        vec![
            HistoryMode::Replace,
            HistoryMode::Push,
            HistoryMode::Replace,
            HistoryMode::Push,
            HistoryMode::Replace,
        ]
    );
}
