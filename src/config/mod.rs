use crate::routing::URI_GENERATOR_SERVICE;
use crate::view::VIEW_SERVICE;
use serde::Deserialize;
use std::env;

/// Environment variable overriding [`ServiceKeys::uri_generator`].
pub const URI_GENERATOR_ENV: &str = "TRELLIS_URI_GENERATOR_SERVICE";
/// Environment variable overriding [`ServiceKeys::view`].
pub const VIEW_ENV: &str = "TRELLIS_VIEW_SERVICE";

/// Container ids the controller helpers resolve their collaborators under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceKeys {
    pub uri_generator: String,
    pub view: String,
}

impl Default for ServiceKeys {
    fn default() -> Self {
        Self {
            uri_generator: URI_GENERATOR_SERVICE.to_string(),
            view: VIEW_SERVICE.to_string(),
        }
    }
}

impl ServiceKeys {
    /// Defaults, overridden by `TRELLIS_URI_GENERATOR_SERVICE` and
    /// `TRELLIS_VIEW_SERVICE` when set to a non-empty value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(fallback)
        };
        Self {
            uri_generator: pick(URI_GENERATOR_ENV, defaults.uri_generator),
            view: pick(VIEW_ENV, defaults.view),
        }
    }
}
