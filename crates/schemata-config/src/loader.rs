//! TOML settings loader.
//!
//! `SettingsLoader` parses a `ValidatorSettings` document from a string or a
//! file and checks the values before handing them out.
//!
//! Loading algorithm:
//!
//! 1. Parse the TOML; unknown keys are rejected so a typo cannot silently
//!    fall back to a default.
//! 2. Check ranges (`max-depth` must lie in `1..=MAX_ALLOWED_DEPTH`).
//! 3. Return the settings; absent keys keep their defaults.

use std::path::Path;

use tracing::{debug, warn};

use schemata_contracts::{
    error::{SchemataError, SchemataResult},
    settings::{ValidatorSettings, MAX_ALLOWED_DEPTH},
};

/// Loads `ValidatorSettings` from TOML.
///
/// ```rust,ignore
/// use schemata_config::SettingsLoader;
///
/// let settings = SettingsLoader::from_file(Path::new("schemata.toml"))?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsLoader;

impl SettingsLoader {
    /// Parse `s` as TOML settings.
    ///
    /// Returns `SchemataError::ConfigError` if the TOML is malformed, names
    /// an unknown key, or holds an out-of-range value.
    pub fn from_toml_str(s: &str) -> SchemataResult<ValidatorSettings> {
        let settings: ValidatorSettings =
            toml::from_str(s).map_err(|e| SchemataError::ConfigError {
                reason: format!("failed to parse settings TOML: {}", e),
            })?;
        Self::check(&settings)?;

        debug!(
            max_depth = settings.max_depth,
            validate_formats = settings.validate_formats,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Read the file at `path` and parse it as TOML settings.
    ///
    /// Returns `SchemataError::ConfigError` if the file cannot be read or its
    /// contents are rejected by `from_toml_str`.
    pub fn from_file(path: &Path) -> SchemataResult<ValidatorSettings> {
        let contents = std::fs::read_to_string(path).map_err(|e| SchemataError::ConfigError {
            reason: format!("failed to read settings file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> SchemataResult<ValidatorSettings> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(ValidatorSettings::default()),
        }
    }

    fn check(settings: &ValidatorSettings) -> SchemataResult<()> {
        if settings.max_depth == 0 {
            warn!("rejecting settings with max-depth = 0");
            return Err(SchemataError::ConfigError {
                reason: "max-depth must be at least 1".to_string(),
            });
        }
        if settings.max_depth > MAX_ALLOWED_DEPTH {
            warn!(max_depth = settings.max_depth, "rejecting out-of-range max-depth");
            return Err(SchemataError::ConfigError {
                reason: format!(
                    "max-depth must be at most {}, got {}",
                    MAX_ALLOWED_DEPTH, settings.max_depth
                ),
            });
        }
        Ok(())
    }
}
