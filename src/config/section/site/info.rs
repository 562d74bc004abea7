//! Identity fields of `[site]`: title, authorship and format detection.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the page title in `[site.title] template`.
pub const TITLE_PLACEHOLDER: &str = "%s";

/// `[site.title]`: the home page title plus the template child pages use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Title of the home page, and of any page that sets none.
    pub default: String,
    /// Title of every other page, `%s` standing for the page title.
    pub template: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            default: "Megha Enterprises | Premier Electrical, Solar & Fabrication Solutions".into(),
            template: "%s | Megha Enterprises".into(),
        }
    }
}

impl TitleConfig {
    /// Resolve the document title for a page.
    ///
    /// `None` or a blank title falls back to the default title.
    pub fn resolve(&self, page_title: Option<&str>) -> String {
        match page_title.map(str::trim) {
            Some(title) if !title.is_empty() => self.template.replacen(TITLE_PLACEHOLDER, title, 1),
            _ => self.default.clone(),
        }
    }
}

/// An entry of `[[site.authors]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `[site.format_detection]`: whether mobile browsers may auto-link these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatDetectionConfig {
    pub email: bool,
    pub address: bool,
    pub telephone: bool,
}

impl FormatDetectionConfig {
    /// Content of `<meta name="format-detection">`, listing disabled kinds.
    ///
    /// Returns `None` when nothing is disabled.
    pub fn meta_content(&self) -> Option<String> {
        let disabled: Vec<String> = [
            ("email", self.email),
            ("address", self.address),
            ("telephone", self.telephone),
        ]
        .into_iter()
        .filter(|(_, enabled)| !enabled)
        .map(|(kind, _)| format!("{kind}=no"))
        .collect();

        (!disabled.is_empty()).then(|| disabled.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_title_is_default() {
        let title = TitleConfig::default();
        assert_eq!(
            title.resolve(None),
            "Megha Enterprises | Premier Electrical, Solar & Fabrication Solutions"
        );
        assert_eq!(title.resolve(Some("   ")), title.default);
    }

    #[test]
    fn test_page_title_uses_template() {
        let title = TitleConfig::default();
        assert_eq!(title.resolve(Some("Products")), "Products | Megha Enterprises");
        assert_eq!(
            title.resolve(Some(" Solar EPC ")),
            "Solar EPC | Megha Enterprises"
        );
    }

    #[test]
    fn test_placeholder_in_page_title_is_not_expanded() {
        let title = TitleConfig::default();
        assert_eq!(title.resolve(Some("100%s")), "100%s | Megha Enterprises");
    }

    #[test]
    fn test_format_detection_disables_all_by_default() {
        assert_eq!(
            FormatDetectionConfig::default().meta_content().as_deref(),
            Some("email=no, address=no, telephone=no")
        );
        let all_on = FormatDetectionConfig {
            email: true,
            address: true,
            telephone: true,
        };
        assert_eq!(all_on.meta_content(), None);
    }
}
