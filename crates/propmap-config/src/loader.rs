//! Settings loader with layered sources.

use crate::PropmapConfig;
use config::{Config, ConfigError, Environment, File};
use parking_lot::RwLock;
use propmap_core::{MapError, MapResult, Mapper};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Variable naming the active environment.
pub const ENVIRONMENT_VAR: &str = "PROPMAP_ENVIRONMENT";

/// Prefix of override variables, e.g. `PROPMAP__MAPPER__CONSTRUCTOR_SELECTION`.
pub const ENV_PREFIX: &str = "PROPMAP";

const DEFAULT_ENVIRONMENT: &str = "development";

/// Settings loader with runtime reload support.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<PropmapConfig>>,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new loader and performs the first load.
    ///
    /// Sources are layered in order, later ones winning:
    /// 1. `{dir}/default.toml`
    /// 2. `{dir}/{PROPMAP_ENVIRONMENT}.toml` (`development` when unset)
    /// 3. `{dir}/local.toml`
    /// 4. Environment variables with the `PROPMAP__` prefix
    ///
    /// Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Configuration`] if a source cannot be parsed or
    /// the merged settings are invalid.
    pub fn new(config_dir: impl Into<PathBuf>) -> MapResult<Self> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir, None)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads settings from the default location (`./config`).
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::new`].
    pub fn from_default_location() -> MapResult<Self> {
        Self::new("./config")
    }

    /// Returns the current settings.
    #[must_use]
    pub fn get(&self) -> PropmapConfig {
        self.config.read().clone()
    }

    /// Returns a mapper built from the current settings.
    #[must_use]
    pub fn mapper(&self) -> Mapper {
        Mapper::new(self.config.read().mapper)
    }

    /// Reloads settings from disk and the environment.
    ///
    /// The previous settings stay in place if loading fails.
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::new`].
    pub fn reload(&self) -> MapResult<()> {
        let new_config = Self::load_config(&self.config_dir, None)?;
        *self.config.write() = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Gets a value by dotted key path, e.g. `mapper.constructor_selection`.
    ///
    /// Returns `None` if the path does not exist or does not deserialize
    /// into `T`.
    pub fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = serde_json::to_value(&*self.config.read()).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }

    /// Merges all sources. `env_source` replaces the process environment
    /// when given.
    fn load_config(
        config_dir: &Path,
        env_source: Option<HashMap<String, String>>,
    ) -> MapResult<PropmapConfig> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = match &env_source {
            Some(vars) => vars.get(ENVIRONMENT_VAR).cloned(),
            None => std::env::var(ENVIRONMENT_VAR).ok(),
        }
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();
        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env_source),
        );

        let config: PropmapConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_map_error)?;

        Self::validate_config(&config)?;

        Ok(config)
    }

    fn validate_config(config: &PropmapConfig) -> MapResult<()> {
        if config.telemetry.enabled && config.telemetry.filter.trim().is_empty() {
            return Err(MapError::configuration(
                "telemetry.filter must not be empty when telemetry is enabled",
            ));
        }

        if !config.mapper.propagate_after_construction {
            warn!("Property propagation after construction is disabled");
        }

        Ok(())
    }
}

fn config_error_to_map_error(err: ConfigError) -> MapError {
    MapError::configuration(err.to_string())
}
