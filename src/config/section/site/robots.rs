//! `[site.robots]` and `[site.verification]`: crawler directives.

use serde::{Deserialize, Serialize};

/// `max-image-preview` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePreview {
    None,
    Standard,
    #[default]
    Large,
}

impl ImagePreview {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Standard => "standard",
            Self::Large => "large",
        }
    }
}

/// `[site.robots.google_bot]`: directives for Google's crawler only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleBotConfig {
    pub index: bool,
    pub follow: bool,
    /// Seconds of video preview, `-1` for no limit.
    pub max_video_preview: i32,
    pub max_image_preview: ImagePreview,
    /// Characters of text snippet, `-1` for no limit.
    pub max_snippet: i32,
}

impl Default for GoogleBotConfig {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            max_video_preview: -1,
            max_image_preview: ImagePreview::Large,
            max_snippet: -1,
        }
    }
}

impl GoogleBotConfig {
    /// Content of `<meta name="googlebot">`.
    pub fn directives(&self) -> String {
        format!(
            "{}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            index_follow(self.index, self.follow),
            self.max_video_preview,
            self.max_image_preview.as_str(),
            self.max_snippet
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBotConfig,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            google_bot: GoogleBotConfig::default(),
        }
    }
}

impl RobotsConfig {
    /// Content of `<meta name="robots">`.
    pub fn directives(&self) -> String {
        index_follow(self.index, self.follow)
    }
}

fn index_follow(index: bool, follow: bool) -> String {
    format!(
        "{}, {}",
        if index { "index" } else { "noindex" },
        if follow { "follow" } else { "nofollow" }
    )
}

/// `[site.verification]`: search console ownership tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub google: Option<String>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            google: Some("google-site-verification-code".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        let robots = RobotsConfig::default();
        assert_eq!(robots.directives(), "index, follow");
        assert_eq!(
            robots.google_bot.directives(),
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        );
    }

    #[test]
    fn test_noindex_nofollow() {
        let robots: RobotsConfig = toml::from_str(
            "index = false\nfollow = false\n[google_bot]\nindex = false\nmax_image_preview = \"none\"\nmax_snippet = 50\n",
        )
        .unwrap();
        assert_eq!(robots.directives(), "noindex, nofollow");
        assert_eq!(
            robots.google_bot.directives(),
            "noindex, follow, max-video-preview:-1, max-image-preview:none, max-snippet:50"
        );
    }
}
