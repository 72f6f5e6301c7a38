//! Navigation configuration.
//!
//! Defaults are built in; the shell may supply a JSON document to override
//! any subset of fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Role;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base path: {0:?} (must be empty or start with '/')")]
    InvalidBasePath(String),

    #[error("Invalid section parameter: {0:?}")]
    InvalidSectionParam(String),

    #[error("Invalid role synonym {synonym:?}: {reason}")]
    InvalidSynonym { synonym: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Routing and normalization settings for the view core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Prefix for every dashboard route (e.g. "/app")
    pub base_path: String,
    /// Query key that carries the section
    pub section_param: String,
    /// Admin dashboard route, relative to `base_path`
    pub admin_dashboard_path: String,
    /// Extra synonym → role entries, merged over the built-in table
    pub role_synonyms: HashMap<String, Role>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            base_path: "/app".into(),
            section_param: "section".into(),
            admin_dashboard_path: "/admin-dashboard".into(),
            role_synonyms: HashMap::new(),
        }
    }
}

impl NavigationConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: NavigationConfig = serde_json::from_str(json)?;
        config.validated()
    }

    /// Check field constraints and trim a trailing `/` from paths.
    pub fn validated(mut self) -> ConfigResult<Self> {
        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            return Err(ConfigError::InvalidBasePath(self.base_path));
        }
        self.base_path = self.base_path.trim_end_matches('/').to_string();

        if !self.admin_dashboard_path.starts_with('/') {
            self.admin_dashboard_path = format!("/{}", self.admin_dashboard_path);
        }

        if self.section_param.is_empty()
            || self
                .section_param
                .contains(|c: char| matches!(c, '&' | '=' | '?' | '#') || c.is_whitespace())
        {
            return Err(ConfigError::InvalidSectionParam(self.section_param));
        }

        for synonym in self.role_synonyms.keys() {
            if synonym.trim().is_empty() {
                return Err(ConfigError::InvalidSynonym {
                    synonym: synonym.clone(),
                    reason: "synonym is blank".into(),
                });
            }
        }

        Ok(self)
    }
}
