//! User-supplied paths: `~` expansion and input file checks.

use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// `~` alone or a `~/` prefix resolves against the home directory.
/// Anything else, including `~user`, is taken literally.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path {
        "~" => Some(""),
        p => p.strip_prefix("~/"),
    };
    if let Some(rest) = rest
        && let Some(home) = dirs::home_dir()
    {
        return if rest.is_empty() { home } else { home.join(rest) };
    }
    PathBuf::from(path)
}

/// Expanded path of a payload file that must already exist.
pub fn input_file(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_file() {
        Ok(p)
    } else {
        Err(AppError::InputNotFound(p.display().to_string()))
    }
}
