use std::{path::Path, time::Duration};

use config::{ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::{PROJECT_NAME, get_config_dir};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
  /// Origin of the listings API, e.g. `http://localhost:8080`.
  pub base_url: String,
  pub timeout_secs: u64,
  pub user_agent: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:8080".to_string(),
      timeout_secs: 30,
      user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    }
  }
}

impl Config {
  /// Loads defaults, then any config file in the config directory, then `LISTING_LOADER_*` environment variables.
  pub fn new() -> Result<Self, ConfigError> {
    let config_dir = get_config_dir();
    Self::load(&config_dir, Environment::with_prefix(PROJECT_NAME.as_str()))
  }

  pub fn load(config_dir: &Path, environment: Environment) -> Result<Self, ConfigError> {
    let default = Config::default();
    let mut builder = config::Config::builder()
      .set_default("base_url", default.base_url)?
      .set_default("timeout_secs", default.timeout_secs)?
      .set_default("user_agent", default.user_agent)?;

    let config_files = [
      ("config.json5", FileFormat::Json5),
      ("config.json", FileFormat::Json),
      ("config.yaml", FileFormat::Yaml),
      ("config.toml", FileFormat::Toml),
      ("config.ini", FileFormat::Ini),
    ];
    for (file, format) in &config_files {
      let path = config_dir.join(file);
      if path.exists() {
        debug!("Reading config from {}", path.display());
      }
      builder = builder.add_source(File::from(path).format(*format).required(false));
    }

    builder.add_source(environment.try_parsing(true)).build()?.try_deserialize()
  }

  /// Applies command line overrides on top of the loaded configuration.
  pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
    if let Some(base_url) = base_url {
      self.base_url = base_url;
    }
    if let Some(timeout_secs) = timeout_secs {
      self.timeout_secs = timeout_secs;
    }
    self
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}
