//! `[shell.analytics]`: Google Analytics beacon.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enable: bool,
    /// GA4 measurement ID, e.g. `G-8ESDRSPCJF`.
    pub measurement_id: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            measurement_id: "G-8ESDRSPCJF".into(),
        }
    }
}

impl AnalyticsConfig {
    /// Validate analytics configuration.
    ///
    /// The ID is interpolated into an inline script, so only
    /// ASCII alphanumerics and `-` are accepted.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        let field = FieldPath::new("shell.analytics.measurement_id");
        if self.measurement_id.is_empty() {
            diag.error_with_hint(
                field,
                "analytics is enabled but no measurement ID is set",
                "set the ID or disable with `enable = false`",
            );
        } else if !self
            .measurement_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            diag.error(
                field,
                format!("`{}` is not a measurement ID", self.measurement_id),
            );
        }
    }
}
