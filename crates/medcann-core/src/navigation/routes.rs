//! Dashboard route table.

use crate::config::NavigationConfig;
use crate::models::{Axis, Role};

/// Builds dashboard routes under the configured base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    base_path: String,
    admin_dashboard_path: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl RouteTable {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            base_path: config.base_path.trim_end_matches('/').to_string(),
            admin_dashboard_path: config.admin_dashboard_path.clone(),
        }
    }

    /// Dashboard route for `role`.
    ///
    /// - patient: always clinical
    /// - professional: the active axis, clinical when absent
    /// - student: research when active, teaching otherwise
    /// - admin: the admin dashboard
    /// - unconfirmed: no dashboard
    pub fn dashboard_route(&self, role: Role, axis: Option<Axis>) -> Option<String> {
        let route = match role {
            Role::Patient => self.axis_dashboard(Axis::Clinical, "patient"),
            Role::Professional => self.axis_dashboard(axis.unwrap_or_default(), "professional"),
            Role::Student => {
                let axis = match axis {
                    Some(Axis::Research) => Axis::Research,
                    _ => Axis::Teaching,
                };
                self.axis_dashboard(axis, "student")
            }
            Role::Admin => self.admin_dashboard(),
            Role::Unconfirmed => return None,
        };
        Some(route)
    }

    pub fn admin_dashboard(&self) -> String {
        format!("{}{}", self.base_path, self.admin_dashboard_path)
    }

    fn axis_dashboard(&self, axis: Axis, role_segment: &str) -> String {
        format!("{}/{}/{}/dashboard", self.base_path, axis.as_str(), role_segment)
    }
}
