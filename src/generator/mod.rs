//! Site-wide files generated after pages are rendered.

pub mod sitemap;
