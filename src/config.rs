//! Runtime settings for the flattening core.

/// Language tag picked first when an alert text carries several translations.
pub const DEFAULT_PREFERRED_LANGUAGE: &str = "he";

/// Env var consulted by the CLI when `--language` is not given.
pub const PREFERRED_LANGUAGE_ENV: &str = "GTFS_RT_PREFERRED_LANGUAGE";

/// Settings threaded through the extractors.
///
/// The core never reads the environment itself; callers build this at the
/// edge (CLI flags, env, a service request) and pass it down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    pub preferred_language: String,
}

impl FlattenConfig {
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            preferred_language: language.into(),
        }
    }
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self::with_language(DEFAULT_PREFERRED_LANGUAGE)
    }
}
