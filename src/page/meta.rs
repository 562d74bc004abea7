//! Page metadata from front matter.

use serde::{Deserialize, Serialize};

/// Front matter of a content file.
///
/// | Field         | Description                                   |
/// |---------------|-----------------------------------------------|
/// | `title`       | Page title, fed through the title template    |
/// | `description` | Replaces the site description for this page   |
/// | `image`       | Site-relative preview image for og/twitter    |
/// | `draft`       | Skip the page when building                   |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub draft: bool,
}

/// Front matter block found at the top of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub raw: &'a str,
    pub is_toml: bool,
}

impl PageMeta {
    /// Parse a front matter block.
    pub fn parse(front: FrontMatter<'_>) -> Result<Self, toml::de::Error> {
        if front.is_toml {
            toml::from_str(front.raw)
        } else {
            Ok(Self::parse_yaml_like(front.raw))
        }
    }

    /// Parse simple YAML-like front matter (`key: value` per line).
    fn parse_yaml_like(content: &str) -> Self {
        let mut meta = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once(':') {
                let value = unquote(value.trim()).to_string();
                match key.trim().to_lowercase().as_str() {
                    "title" => meta.title = Some(value),
                    "description" => meta.description = Some(value),
                    "image" => meta.image = Some(value),
                    "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                    _ => {}
                }
            }
        }

        meta
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Split `content` into front matter and body.
///
/// `+++` delimits TOML, `---` delimits YAML-like `key: value` lines. The
/// opening fence must be directly followed by a key line, so a markdown
/// thematic break at the top of a page stays in the body.
pub fn split_front_matter(content: &str) -> (Option<FrontMatter<'_>>, &str) {
    let trimmed = content.trim_start();

    for (fence, is_toml) in [("+++", true), ("---", false)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))
            && starts_with_key(rest, is_toml)
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            let raw = rest[..end].trim();
            let body = rest[end + 1 + fence.len()..].trim_start_matches(['\r', '\n']);
            return (Some(FrontMatter { raw, is_toml }), body);
        }
    }

    (None, content)
}

/// Whether the first line of `rest` reads as a front matter entry.
fn starts_with_key(rest: &str, is_toml: bool) -> bool {
    let line = rest.lines().next().unwrap_or_default().trim();
    let separator = if is_toml { '=' } else { ':' };
    match line.split_once(separator) {
        Some((key, _)) => {
            let key = key.trim();
            !key.is_empty() && !key.contains(char::is_whitespace)
        }
        // `[table]` headers open TOML front matter too
        None => is_toml && line.starts_with('['),
    }
}
