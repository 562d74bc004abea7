//! Configuration section definitions.
//!
//! Each module corresponds to a section in `megha.toml`:
//!
//! | Module  | TOML Section | Purpose                                    |
//! |---------|--------------|--------------------------------------------|
//! | `build` | `[build]`    | Content/output/asset paths, sitemap        |
//! | `shell` | `[shell]`    | Document shell: lang, classes, fonts, gtag |
//! | `site`  | `[site]`     | Page metadata: title, og, twitter, robots  |

pub mod build;
pub mod shell;
pub mod site;

pub use build::BuildConfig;
pub use shell::{FontConfig, ShellConfig};
pub use site::{OgImage, PageMetadata};
