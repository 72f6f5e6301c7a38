//! Dashboard section models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a dashboard section.
///
/// The string form is what appears in the `section` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    // Administration
    Users,
    SharedDocuments,
    RenalFunction,

    // Clinical
    Service,
    Agenda,
    Patients,
    Prescriptions,
    Reports,
    Chat,

    // Teaching
    Lessons,
    Library,
    Courses,
    Mentoring,

    // Research
    Evaluation,
    Studies,
    Forum,

    // Patient
    MyHealth,
    Appointments,

    // Unconfirmed accounts
    PendingApproval,
}

impl SectionId {
    pub const ALL: [SectionId; 19] = [
        SectionId::Users,
        SectionId::SharedDocuments,
        SectionId::RenalFunction,
        SectionId::Service,
        SectionId::Agenda,
        SectionId::Patients,
        SectionId::Prescriptions,
        SectionId::Reports,
        SectionId::Chat,
        SectionId::Lessons,
        SectionId::Library,
        SectionId::Courses,
        SectionId::Mentoring,
        SectionId::Evaluation,
        SectionId::Studies,
        SectionId::Forum,
        SectionId::MyHealth,
        SectionId::Appointments,
        SectionId::PendingApproval,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Users => "users",
            SectionId::SharedDocuments => "shared-documents",
            SectionId::RenalFunction => "renal-function",
            SectionId::Service => "service",
            SectionId::Agenda => "agenda",
            SectionId::Patients => "patients",
            SectionId::Prescriptions => "prescriptions",
            SectionId::Reports => "reports",
            SectionId::Chat => "chat",
            SectionId::Lessons => "lessons",
            SectionId::Library => "library",
            SectionId::Courses => "courses",
            SectionId::Mentoring => "mentoring",
            SectionId::Evaluation => "evaluation",
            SectionId::Studies => "studies",
            SectionId::Forum => "forum",
            SectionId::MyHealth => "my-health",
            SectionId::Appointments => "appointments",
            SectionId::PendingApproval => "pending-approval",
        }
    }

    /// Parse a query parameter value. Matching is exact; URL values are
    /// produced by this crate and never need normalizing.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry describing one section of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionOption {
    /// Section identifier, unique within its catalog
    pub id: SectionId,
    /// Display label
    pub label: &'static str,
    /// Short description shown under the label
    pub description: &'static str,
    /// Icon reference understood by the shell
    pub icon: &'static str,
}

impl SectionOption {
    pub const fn new(
        id: SectionId,
        label: &'static str,
        description: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            description,
            icon,
        }
    }
}
