//! Platform axis models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level platform context that scopes the available sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Clinical,
    Teaching,
    Research,
}

impl Axis {
    /// All axes in inference priority order.
    pub const PRIORITY: [Axis; 3] = [Axis::Clinical, Axis::Teaching, Axis::Research];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Clinical => "clinical",
            Axis::Teaching => "teaching",
            Axis::Research => "research",
        }
    }

    /// Path marker identifying this axis in a URL (e.g. `/clinical/`).
    pub fn segment_marker(&self) -> &'static str {
        match self {
            Axis::Clinical => "/clinical/",
            Axis::Teaching => "/teaching/",
            Axis::Research => "/research/",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
