use crate::multipart::{FORM_DATA, TEXT_PLAIN};
use config::{Config, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ENV_PREFIX: &str = "PETSTORE";
pub const DEFAULT_CONFIG_PATH: &str = "petstore";

#[petstore_derive::model_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Model-layer settings shared by every generated model.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub multipart: MultipartConfig,
}

/// Defaults applied to multipart forms built by the model adapters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MultipartConfig {
    /// Fixed boundary; a random one is generated per form when unset.
    pub boundary: Option<String>,
    pub content_type: String,
    pub content_disposition: String,
}

impl Default for MultipartConfig {
    fn default() -> Self {
        Self {
            boundary: None,
            content_type: TEXT_PLAIN.to_owned(),
            content_disposition: FORM_DATA.to_owned(),
        }
    }
}

/// Loads a configuration structure from a file layered with environment overrides.
///
/// 1. **Base File**: `path`, or `petstore` in the working directory when `None`. The format
///    follows the file extension (`petstore.toml`, `petstore.json`, ...).
/// 2. **Environment Overrides**: variables prefixed with `PETSTORE__`, nesting with double
///    underscores (`PETSTORE__MULTIPART__CONTENT_TYPE` maps to `multipart.content_type`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or its content does not match `T`.
///
/// # Example
/// ```rust
/// use petstore_core::config::{ModelConfig, load_config};
///
/// let cfg: ModelConfig = load_config(Some("config/petstore")).unwrap_or_default();
/// assert_eq!(cfg.multipart.content_type, "text/plain");
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
