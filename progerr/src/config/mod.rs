//! Resolver configuration.
//!
//! A TOML file selects the built-in families, adds application registries and
//! sets the facade's behavior flags:
//!
//! ```toml
//! raise_errors = false
//! capture_call_site = true
//! families = ["token", "anchor"]
//!
//! [[registry]]
//! family = "Vault"
//! errors = [
//!     { code = 6000, name = "InvalidAuthority", message = "Authority mismatch" },
//! ]
//! ```
//!
//! `PROGERR_*` environment variables override file values, and every
//! overridable value remembers where it came from.

pub mod env;
pub mod source;

pub use env::{EnvError, EnvParser};
pub use source::{ConfigSource, Sourced};

use crate::error::RegistryError;
use crate::registry::{BuiltinFamily, ErrorMetadata, Registry, RegistryAdapter};
use crate::resolver::{ErrorResolver, ErrorResolverBuilder};
use schemars::schema::RootSchema;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// File name looked up under the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown built-in family '{0}' (expected one of: anchor, token)")]
    UnknownFamily(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid environment overrides: {}", join_env_errors(.0))]
    Env(Vec<EnvError>),
}

fn join_env_errors(errors: &[EnvError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One application family declared in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Label used in resolved names (`<family>#<name>`).
    pub family: String,
    #[serde(default)]
    pub errors: Vec<ErrorMetadata>,
}

impl RegistryConfig {
    /// Validate the entries and bind them to the family label.
    pub fn adapter(&self) -> Result<RegistryAdapter, RegistryError> {
        let registry = Registry::from_entries(&self.family, self.errors.iter().cloned())?;
        RegistryAdapter::new(self.family.clone(), Arc::new(registry))
    }
}

/// Settings for building an [`ErrorResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Return resolutions from `check_logs` as errors.
    pub raise_errors: bool,
    /// Record the caller's source location on resolved errors.
    pub capture_call_site: bool,
    /// Built-in families in chain order.
    pub families: Vec<String>,
    /// Application families, consulted before the built-ins.
    #[serde(rename = "registry")]
    pub registries: Vec<RegistryConfig>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            raise_errors: false,
            capture_call_site: true,
            families: BuiltinFamily::DEFAULT_ORDER
                .iter()
                .map(|family| family.key().to_string())
                .collect(),
            registries: Vec::new(),
        }
    }
}

/// A loaded configuration plus the provenance of its overridable values.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ResolverConfig,
    /// File the configuration was read from, if any.
    pub path: Option<PathBuf>,
    pub raise_errors: Sourced<bool>,
    pub capture_call_site: Sourced<bool>,
    pub families: Sourced<Vec<String>>,
}

impl ResolverConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, "<string>")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    fn parse(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    /// `<config dir>/progerr/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("progerr").join(CONFIG_FILE_NAME))
    }

    /// Load from `PROGERR_CONFIG` or the default path, then apply
    /// `PROGERR_RAISE_ERRORS`, `PROGERR_CAPTURE_CALL_SITE` and
    /// `PROGERR_FAMILIES`.
    ///
    /// All invalid environment values are reported together.
    pub fn load() -> Result<LoadedConfig, ConfigError> {
        Self::load_with_default(Self::default_path())
    }

    fn load_with_default(default_path: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
        let mut parser = EnvParser::new();

        let explicit = parser.get_path("CONFIG", true);
        let path = match explicit.value {
            // A missing explicit path is already recorded by the parser; any
            // other unreadable path fails in `from_file`.
            Some(path) => path.exists().then_some(path),
            None => default_path.filter(|path| path.is_file()),
        };

        let mut config = match &path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let from_file = path.is_some();

        let raise_errors = overlay(
            parser.get_bool("RAISE_ERRORS", config.raise_errors),
            from_file,
        );
        let capture_call_site = overlay(
            parser.get_bool("CAPTURE_CALL_SITE", config.capture_call_site),
            from_file,
        );
        let families = overlay(
            parser.get_string_list("FAMILIES", config.families.clone()),
            from_file,
        );

        if parser.has_errors() {
            return Err(ConfigError::Env(parser.take_errors()));
        }

        config.raise_errors = raise_errors.value;
        config.capture_call_site = capture_call_site.value;
        config.families = families.value.clone();
        config.builtin_families()?;

        debug!(
            path = ?path,
            raise_errors = %raise_errors,
            capture_call_site = %capture_call_site,
            families = ?families.value,
            "loaded resolver configuration"
        );

        Ok(LoadedConfig {
            config,
            path,
            raise_errors,
            capture_call_site,
            families,
        })
    }

    /// Parse [`families`](Self::families) into built-in families.
    pub fn builtin_families(&self) -> Result<Vec<BuiltinFamily>, ConfigError> {
        self.families
            .iter()
            .map(|key| {
                BuiltinFamily::from_key(key).ok_or_else(|| ConfigError::UnknownFamily(key.clone()))
            })
            .collect()
    }

    /// Builder preloaded with this configuration, so callers can still add a
    /// custom resolver.
    pub fn to_builder(&self) -> Result<ErrorResolverBuilder, ConfigError> {
        let mut builder = ErrorResolver::builder()
            .builtin_families(self.builtin_families()?)
            .raise_errors(self.raise_errors)
            .capture_call_site(self.capture_call_site);

        let mut seen = HashSet::new();
        for registry in &self.registries {
            if !seen.insert(registry.family.as_str()) {
                warn!(
                    family = %registry.family,
                    "family declared more than once; the first declaration shadows later ones"
                );
            }
            builder = builder.family(registry.adapter()?);
        }
        Ok(builder)
    }

    /// JSON schema of the config file.
    #[must_use]
    pub fn json_schema() -> RootSchema {
        schema_for!(ResolverConfig)
    }
}

/// Values the environment did not set keep the file's or the default's source.
fn overlay<T>(sourced: Sourced<T>, from_file: bool) -> Sourced<T> {
    if sourced.is_from_env() || !from_file {
        sourced
    } else {
        Sourced::from_file(sourced.value)
    }
}

impl ErrorResolver {
    /// Build a resolver from configuration.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigError> {
        Ok(config.to_builder()?.build())
    }
}

#[cfg(test)]
pub(crate) fn env_test_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
