//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/products/  ← cwd
/// /home/user/site/megha.toml         ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Whether `path` is a site-relative asset reference (`/megha_logo.png`).
///
/// Rejects protocol-relative (`//cdn...`) and absolute URLs.
pub fn is_site_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

/// Report `path` unless it is a site-relative asset reference.
pub fn check_site_path(field: FieldPath, path: &str, diag: &mut ConfigDiagnostics) {
    if !is_site_path(path) {
        diag.error_with_hint(
            field,
            format!("`{path}` is not a site-relative asset path"),
            "reference assets from the site root, e.g. \"/megha_logo.png\"",
        );
    }
}

/// Report `value` unless it is an absolute http(s) URL with a host.
pub fn check_http_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://www.meghaenterprises.in",
                );
            } else if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://www.meghaenterprises.in",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://www.meghaenterprises.in",
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================
