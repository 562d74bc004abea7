//! Open Graph and Twitter Card tags.
//!
//! Site-level values come from `[site.open_graph]` and `[site.twitter]`.
//! A page's own title, description and image take precedence; without a
//! page image both blocks fall back to the configured images.

use url::Url;

use super::{HeadTag, PageSeo, absolute_url};
use crate::config::{OgImage, PageMetadata};

pub(super) fn open_graph_tags(
    meta: &PageMetadata,
    page: &PageSeo<'_>,
    base: Option<&Url>,
    tags: &mut Vec<HeadTag>,
) {
    let og = &meta.open_graph;

    let title = page.title().unwrap_or(og.title.as_str());
    push_property(tags, "og:title", title);

    let description = page.description().unwrap_or(og.description.as_str());
    push_property(tags, "og:description", description);

    let url = if page.is_home() && !og.url.is_empty() {
        og.url.clone()
    } else {
        absolute_url(base, page.permalink)
    };
    push_property(tags, "og:url", &url);
    push_property(tags, "og:site_name", &og.site_name);
    push_property(tags, "og:locale", &og.locale);

    let page_image;
    let images: &[OgImage] = match page.image() {
        Some(image) => {
            page_image = [OgImage {
                alt: page.title().map(str::to_string),
                ..OgImage::bare(image)
            }];
            &page_image
        }
        None => &og.images,
    };
    for image in images {
        push_property(tags, "og:image", &absolute_url(base, &image.url));
        if let Some(width) = image.width {
            push_property(tags, "og:image:width", &width.to_string());
        }
        if let Some(height) = image.height {
            push_property(tags, "og:image:height", &height.to_string());
        }
        if let Some(alt) = &image.alt {
            push_property(tags, "og:image:alt", alt);
        }
    }

    push_property(tags, "og:type", &og.og_type);
}

pub(super) fn twitter_tags(
    meta: &PageMetadata,
    page: &PageSeo<'_>,
    base: Option<&Url>,
    tags: &mut Vec<HeadTag>,
) {
    let twitter = &meta.twitter;

    tags.push(HeadTag::name("twitter:card", twitter.card.as_str()));

    let title = page.title().unwrap_or(twitter.title.as_str());
    push_name(tags, "twitter:title", title);

    let description = page.description().unwrap_or(twitter.description.as_str());
    push_name(tags, "twitter:description", description);

    match page.image() {
        Some(image) => push_name(tags, "twitter:image", &absolute_url(base, image)),
        None => {
            for image in &twitter.images {
                push_name(tags, "twitter:image", &absolute_url(base, image));
            }
        }
    }
}

fn push_property(tags: &mut Vec<HeadTag>, key: &str, content: &str) {
    if !content.is_empty() {
        tags.push(HeadTag::property(key, content));
    }
}

fn push_name(tags: &mut Vec<HeadTag>, key: &str, content: &str) {
    if !content.is_empty() {
        tags.push(HeadTag::name(key, content));
    }
}
