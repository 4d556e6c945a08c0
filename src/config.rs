//! Loading of typed JSON configuration with silent fallback to defaults.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

/// Read `path` as JSON into `T`. A missing file, unreadable file or malformed
/// document yields `T::default()` and a warning; it never fails.
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "config unreadable, using defaults");
            return T::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), "config loaded");
            value
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "config malformed, using defaults");
            T::default()
        }
    }
}
