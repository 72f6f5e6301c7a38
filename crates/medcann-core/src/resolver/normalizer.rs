//! Stored role normalizer.
//!
//! Handles:
//! - Case and whitespace cleanup (" Admin " → admin)
//! - Legacy synonym expansion (aluno → student, paciente → patient)
//! - Safe fallback to patient for anything unrecognized

use std::collections::HashMap;

use tracing::debug;

use crate::models::Role;

/// Normalizer for raw role strings.
#[derive(Debug, Clone)]
pub struct RoleNormalizer {
    /// Synonym map: legacy/localized name → canonical role
    synonyms: HashMap<String, Role>,
}

impl Default for RoleNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleNormalizer {
    /// Create a new normalizer with the built-in synonym table.
    pub fn new() -> Self {
        Self {
            synonyms: Self::default_synonyms(),
        }
    }

    /// Normalize a raw role string. Total and idempotent.
    pub fn normalize(&self, raw: &str) -> Role {
        self.lookup(raw).unwrap_or_else(|| {
            debug!(raw_role = %raw, "unrecognized role, defaulting to patient");
            Role::Patient
        })
    }

    /// Canonical role for a known name or synonym, `None` for anything else.
    pub fn lookup(&self, raw: &str) -> Option<Role> {
        let key = raw.trim().to_lowercase();

        // Canonical names win over any synonym entry
        Role::from_canonical(&key).or_else(|| self.synonyms.get(&key).copied())
    }

    /// Add a custom synonym mapping.
    pub fn add_synonym(&mut self, synonym: &str, role: Role) {
        self.synonyms.insert(synonym.trim().to_lowercase(), role);
    }

    /// Number of synonym entries (built-in plus custom).
    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }

    /// Default legacy synonyms.
    fn default_synonyms() -> HashMap<String, Role> {
        let mut map = HashMap::new();

        // Student
        map.insert("aluno".into(), Role::Student);
        map.insert("aluna".into(), Role::Student);
        map.insert("estudante".into(), Role::Student);

        // Patient
        map.insert("paciente".into(), Role::Patient);

        // Professional
        map.insert("profissional".into(), Role::Professional);
        map.insert("medico".into(), Role::Professional);
        map.insert("médico".into(), Role::Professional);
        map.insert("doctor".into(), Role::Professional);

        // Admin
        map.insert("administrador".into(), Role::Admin);
        map.insert("administrator".into(), Role::Admin);

        // Unconfirmed
        map.insert("pending".into(), Role::Unconfirmed);
        map.insert("pendente".into(), Role::Unconfirmed);

        map
    }
}

/// Normalize with the built-in synonym table.
pub fn normalize_role(raw: &str) -> Role {
    RoleNormalizer::new().normalize(raw)
}
