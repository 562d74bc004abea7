//! Web font wiring.
//!
//! Each configured family becomes a [`FontBinding`]: a class that defines
//! the family's CSS variable, applied on `<body>`. The families are loaded
//! from the Google Fonts css2 API with a single stylesheet request.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::FontConfig;
use crate::shell::html::{Element, Node};

const FONTS_ORIGIN: &str = "https://fonts.googleapis.com";
const FONTS_STATIC_ORIGIN: &str = "https://fonts.gstatic.com";

/// CSS variable binding of one font family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontBinding {
    pub family: String,
    /// `--font-open-sans`
    pub variable: String,
    /// `font-open-sans`, set on `<body>`
    pub class_name: String,
}

impl FontBinding {
    pub fn from_config(font: &FontConfig) -> Self {
        Self {
            family: font.family.clone(),
            variable: font.variable.clone(),
            class_name: font.variable.trim_start_matches('-').to_string(),
        }
    }

    /// `.font-open-sans{--font-open-sans:'Open Sans', sans-serif}`
    fn css_rule(&self) -> String {
        format!(
            ".{}{{{}:'{}', sans-serif}}",
            self.class_name,
            self.variable,
            self.family.replace('\'', "")
        )
    }
}

/// Fonts of the shell: bindings plus the stylesheet that loads them.
#[derive(Debug, Clone)]
pub struct Fonts {
    bindings: Vec<FontBinding>,
    stylesheet: Option<String>,
}

impl Fonts {
    pub fn new(fonts: &[FontConfig]) -> Self {
        Self {
            bindings: fonts.iter().map(FontBinding::from_config).collect(),
            stylesheet: stylesheet_url(fonts),
        }
    }

    /// Space-separated variable classes for `<body>`.
    pub fn class_names(&self) -> String {
        self.bindings
            .iter()
            .map(|b| b.class_name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Preconnect hints, the stylesheet link and the variable rules.
    pub fn head_elements(&self) -> Vec<Element> {
        let Some(href) = &self.stylesheet else {
            return Vec::new();
        };

        let rules: String = self.bindings.iter().map(FontBinding::css_rule).collect();
        vec![
            Element::new("link")
                .attr("rel", "preconnect")
                .attr("href", FONTS_ORIGIN),
            Element::new("link")
                .attr("rel", "preconnect")
                .attr("href", FONTS_STATIC_ORIGIN)
                .attr("crossorigin", ""),
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", href.clone()),
            Element::new("style").child(Node::Raw(rules)),
        ]
    }
}

/// css2 API URL requesting every family, or `None` without fonts.
///
/// `display` and `subset` are taken from the first family; the API applies
/// them to the whole request.
pub fn stylesheet_url(fonts: &[FontConfig]) -> Option<String> {
    let first = fonts.first()?;

    let mut url = format!("{FONTS_ORIGIN}/css2?");
    for font in fonts {
        url.push_str("family=");
        url.push_str(&encode_family(&font.family));
        if !font.weights.is_empty() {
            let mut weights = font.weights.clone();
            weights.sort_unstable();
            weights.dedup();
            let weights: Vec<String> = weights.iter().map(u16::to_string).collect();
            url.push_str(":wght@");
            url.push_str(&weights.join(";"));
        }
        url.push('&');
    }
    url.push_str("display=");
    url.push_str(&first.display);
    if !first.subsets.is_empty() {
        url.push_str("&subset=");
        url.push_str(&first.subsets.join(","));
    }
    Some(url)
}

/// `Open Sans` -> `Open+Sans`
fn encode_family(family: &str) -> String {
    utf8_percent_encode(family.trim(), NON_ALPHANUMERIC)
        .to_string()
        .replace("%20", "+")
}
