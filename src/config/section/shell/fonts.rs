//! `[[shell.fonts]]`: web font families exposed as CSS variables.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Family name as the font service knows it, e.g. `Open Sans`.
    pub family: String,
    /// CSS custom property bound to the family, e.g. `--font-open-sans`.
    pub variable: String,
    /// Requested weights; empty requests the family's default weight.
    #[serde(default)]
    pub weights: Vec<u16>,
    #[serde(default = "default_subsets")]
    pub subsets: Vec<String>,
    /// `font-display` strategy.
    #[serde(default = "default_display")]
    pub display: String,
}

fn default_subsets() -> Vec<String> {
    vec!["latin".into()]
}

fn default_display() -> String {
    "swap".into()
}

/// Open Sans and Roboto, the two families the site is set in.
pub fn default_fonts() -> Vec<FontConfig> {
    vec![
        FontConfig {
            family: "Open Sans".into(),
            variable: "--font-open-sans".into(),
            weights: Vec::new(),
            subsets: default_subsets(),
            display: default_display(),
        },
        FontConfig {
            family: "Roboto".into(),
            variable: "--font-roboto".into(),
            weights: vec![400, 500, 700],
            subsets: default_subsets(),
            display: default_display(),
        },
    ]
}

const DISPLAY_VALUES: [&str; 5] = ["auto", "block", "swap", "fallback", "optional"];

impl FontConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("shell.fonts");
        if self.family.trim().is_empty() {
            diag.error(field, "font family must not be empty");
        }
        if !self.variable.starts_with("--") || self.variable.len() <= 2 {
            diag.error_with_hint(
                field,
                format!("`{}` is not a CSS custom property", self.variable),
                "use e.g. \"--font-open-sans\"",
            );
        }
        if !DISPLAY_VALUES.contains(&self.display.as_str()) {
            diag.error_with_hint(
                field,
                format!("unknown font-display `{}`", self.display),
                format!("one of: {}", DISPLAY_VALUES.join(", ")),
            );
        }
    }
}
