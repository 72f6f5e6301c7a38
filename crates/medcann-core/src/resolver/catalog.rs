//! Static section catalogs keyed by (effective role, axis).

use crate::models::{Axis, Role, SectionId, SectionOption};

/// Administrator-only sections, listed ahead of every axis catalog.
pub const ADMIN_SECTIONS: &[SectionOption] = &[
    SectionOption::new(
        SectionId::Users,
        "User management",
        "Approve, edit and deactivate accounts",
        "users",
    ),
    SectionOption::new(
        SectionId::SharedDocuments,
        "Shared documents",
        "Upload documents visible to every team",
        "upload",
    ),
    SectionOption::new(
        SectionId::RenalFunction,
        "Renal function",
        "Monitor eGFR trends across the patient base",
        "activity",
    ),
];

pub const CLINICAL_SECTIONS: &[SectionOption] = &[
    SectionOption::new(
        SectionId::Service,
        "Service",
        "Start or continue a clinical assessment",
        "stethoscope",
    ),
    SectionOption::new(
        SectionId::Agenda,
        "Agenda",
        "Upcoming appointments and availability",
        "calendar",
    ),
    SectionOption::new(
        SectionId::Patients,
        "Patients",
        "Patient list and clinical records",
        "user-round",
    ),
    SectionOption::new(
        SectionId::Prescriptions,
        "Prescriptions",
        "Prescription templates and history",
        "file-text",
    ),
    SectionOption::new(
        SectionId::Reports,
        "Reports",
        "Clinical reports shared with patients",
        "clipboard",
    ),
    SectionOption::new(
        SectionId::RenalFunction,
        "Renal function",
        "Follow kidney function of your patients",
        "activity",
    ),
    SectionOption::new(
        SectionId::Chat,
        "Messages",
        "Clinical messaging with patients and peers",
        "message-circle",
    ),
];

pub const TEACHING_SECTIONS: &[SectionOption] = &[
    SectionOption::new(
        SectionId::Lessons,
        "Lessons",
        "Prepare and deliver lessons",
        "presentation",
    ),
    SectionOption::new(
        SectionId::Courses,
        "Courses",
        "Manage courses and enrollments",
        "graduation-cap",
    ),
    SectionOption::new(
        SectionId::Library,
        "Library",
        "Educational materials and references",
        "book-open",
    ),
    SectionOption::new(
        SectionId::Mentoring,
        "Mentoring",
        "Supervise students and residents",
        "users-round",
    ),
    SectionOption::new(
        SectionId::Chat,
        "Messages",
        "Conversations with students",
        "message-circle",
    ),
];

pub const RESEARCH_SECTIONS: &[SectionOption] = &[
    SectionOption::new(
        SectionId::Evaluation,
        "Evaluation",
        "Review collected assessments",
        "bar-chart",
    ),
    SectionOption::new(
        SectionId::Studies,
        "Studies",
        "Research protocols and cohorts",
        "flask-conical",
    ),
    SectionOption::new(
        SectionId::Forum,
        "Forum",
        "Case discussions with the research group",
        "messages-square",
    ),
    SectionOption::new(
        SectionId::Library,
        "Library",
        "Papers and datasets",
        "book-open",
    ),
];

/// Flat patient catalog, independent of axis.
pub const PATIENT_SECTIONS: &[SectionOption] = &[
    SectionOption::new(
        SectionId::MyHealth,
        "My health",
        "Summary of your treatment and assessments",
        "heart-pulse",
    ),
    SectionOption::new(
        SectionId::Appointments,
        "Appointments",
        "Book and review appointments",
        "calendar",
    ),
    SectionOption::new(
        SectionId::Reports,
        "Reports",
        "Reports shared by your care team",
        "clipboard",
    ),
    SectionOption::new(
        SectionId::Chat,
        "Messages",
        "Talk to your care team",
        "message-circle",
    ),
    SectionOption::new(
        SectionId::Library,
        "Library",
        "Educational content for patients",
        "book-open",
    ),
];

/// Flat student catalog, independent of axis.
pub const STUDENT_SECTIONS: &[SectionOption] = &[
    SectionOption::new(
        SectionId::Lessons,
        "Lessons",
        "Your lessons and schedule",
        "presentation",
    ),
    SectionOption::new(
        SectionId::Courses,
        "Courses",
        "Courses you are enrolled in",
        "graduation-cap",
    ),
    SectionOption::new(
        SectionId::Library,
        "Library",
        "Study materials",
        "book-open",
    ),
    SectionOption::new(
        SectionId::Forum,
        "Forum",
        "Discuss cases with classmates",
        "messages-square",
    ),
];

/// Catalog for roles without a dedicated table.
pub const DEFAULT_SECTIONS: &[SectionOption] = &[SectionOption::new(
    SectionId::PendingApproval,
    "Pending approval",
    "Your account is awaiting confirmation",
    "hourglass",
)];

/// Per-axis section list used by professionals and admins.
pub fn axis_sections(axis: Axis) -> &'static [SectionOption] {
    match axis {
        Axis::Clinical => CLINICAL_SECTIONS,
        Axis::Teaching => TEACHING_SECTIONS,
        Axis::Research => RESEARCH_SECTIONS,
    }
}

/// Ordered sections available to `effective_role` on `axis`.
///
/// Never empty.
pub fn get_section_catalog(effective_role: Role, axis: Axis) -> Vec<SectionOption> {
    match effective_role {
        Role::Admin => merge_unique(&[ADMIN_SECTIONS, axis_sections(axis)]),
        Role::Professional => axis_sections(axis).to_vec(),
        Role::Patient => PATIENT_SECTIONS.to_vec(),
        Role::Student => STUDENT_SECTIONS.to_vec(),
        Role::Unconfirmed => DEFAULT_SECTIONS.to_vec(),
    }
}

/// Concatenate lists, keeping the first occurrence of each id.
fn merge_unique(lists: &[&[SectionOption]]) -> Vec<SectionOption> {
    let mut merged: Vec<SectionOption> = Vec::new();
    for option in lists.iter().flat_map(|list| list.iter()) {
        if !merged.iter().any(|existing| existing.id == option.id) {
            merged.push(*option);
        }
    }
    merged
}
