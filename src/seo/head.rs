//! `<head>` tag generation.
//!
//! Tag order follows the usual framework output: title, document meta,
//! crawler directives, canonical, verification, Open Graph, Twitter, icons.

use serde::Serialize;
use url::Url;

use super::{PageSeo, absolute_url, og};
use crate::config::PageMetadata;
use crate::shell::html::{Element, Node};

/// Which attribute carries the key of a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// One generated `<head>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum HeadTag {
    Title {
        text: String,
    },
    Meta {
        attr: MetaAttr,
        key: String,
        content: String,
    },
    Link {
        rel: String,
        href: String,
    },
}

impl HeadTag {
    pub fn name(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            attr: MetaAttr::Name,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn property(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            attr: MetaAttr::Property,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// Content of a meta tag with the given key, if this is one.
    pub fn meta_content(&self, wanted: &str) -> Option<&str> {
        match self {
            Self::Meta { key, content, .. } if key == wanted => Some(content.as_str()),
            _ => None,
        }
    }

    pub fn to_element(&self) -> Element {
        match self {
            Self::Title { text } => Element::new("title").child(Node::Text(text.clone())),
            Self::Meta { attr, key, content } => Element::new("meta")
                .attr(attr.as_str(), key.clone())
                .attr("content", content.clone()),
            Self::Link { rel, href } => Element::new("link")
                .attr("rel", rel.clone())
                .attr("href", href.clone()),
        }
    }
}

/// Generate every `<head>` tag of `page`.
pub fn head_tags(meta: &PageMetadata, page: &PageSeo<'_>) -> Vec<HeadTag> {
    let base = Url::parse(&meta.url).ok();
    let mut tags = Vec::with_capacity(48);

    tags.push(HeadTag::Title {
        text: meta.title.resolve(page.title()),
    });

    let description = page.description().unwrap_or(meta.description.as_str());
    if !description.is_empty() {
        tags.push(HeadTag::name("description", description));
    }

    for author in &meta.authors {
        if let Some(url) = &author.url {
            tags.push(HeadTag::link("author", url.as_str()));
        }
        tags.push(HeadTag::name("author", author.name.as_str()));
    }

    if !meta.keywords.is_empty() {
        tags.push(HeadTag::name("keywords", meta.keywords.join(",")));
    }
    if !meta.creator.is_empty() {
        tags.push(HeadTag::name("creator", meta.creator.as_str()));
    }
    if !meta.publisher.is_empty() {
        tags.push(HeadTag::name("publisher", meta.publisher.as_str()));
    }

    tags.push(HeadTag::name("robots", meta.robots.directives()));
    tags.push(HeadTag::name("googlebot", meta.robots.google_bot.directives()));

    tags.push(HeadTag::link(
        "canonical",
        absolute_url(base.as_ref(), page.permalink),
    ));

    if let Some(content) = meta.format_detection.meta_content() {
        tags.push(HeadTag::name("format-detection", content));
    }
    if let Some(token) = &meta.verification.google {
        tags.push(HeadTag::name("google-site-verification", token.as_str()));
    }

    og::open_graph_tags(meta, page, base.as_ref(), &mut tags);
    og::twitter_tags(meta, page, base.as_ref(), &mut tags);

    for (rel, href) in meta.icons.links() {
        if !href.is_empty() {
            tags.push(HeadTag::link(rel, href));
        }
    }

    tags
}
