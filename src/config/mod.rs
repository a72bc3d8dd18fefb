use std::path::Path;

use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::model::IdPolicy;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, read_config_at};

mod error;
pub use error::{ConfigError, ConfigResult};

const DEFAULT_BINDTO: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    host: Host,
    app: App,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Host {
    bindto: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    /// Serve swagger ui and the openapi document
    docs: bool,
    id_policy: IdPolicy,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            bindto: String::from(DEFAULT_BINDTO),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            docs: true,
            id_policy: IdPolicy::default(),
        }
    }
}

impl Config {
    /// Loads the process-wide configuration once. A missing config file falls
    /// back to the built-in defaults.
    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> ConfigResult<&'static Config> {
        CONFIG
            .get_or_try_init(|| async {
                let config = Self::load(&find_config_file(use_local));
                if let Err(e) = &config {
                    crate::error::log_error(e);
                }
                config
            })
            .await
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        match read_config_at(path) {
            Ok(bytes) => Ok(toml::from_slice(&bytes)?),
            Err(ConfigError::ConfigNotFound) => {
                tracing::info!("config not found, using defaults.");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn with_id_policy(mut self, policy: IdPolicy) -> Self {
        self.app.id_policy = policy;
        self
    }

    pub fn with_docs(mut self, docs: bool) -> Self {
        self.app.docs = docs;
        self
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }
}

impl Host {
    #[inline]
    pub fn bindto(&self) -> &str {
        &self.bindto
    }
}

impl App {
    #[inline]
    pub fn docs(&self) -> bool {
        self.docs
    }

    #[inline]
    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }
}
