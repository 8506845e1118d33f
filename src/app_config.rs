use config::{Config, ConfigError};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    corpus: Corpus,
    logging: Logging,
}

impl AppConfig {
    /// Reads `config.toml`, then the optional `config_local.toml`, then `GRAPH_MODELS__<SECTION>__<KEY>` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GRAPH_MODELS").prefix_separator("__").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }
}

#[derive(Debug, Deserialize)]
pub struct Corpus {
    directory: String,
    #[serde(default = "default_extension")]
    extension: String,
}

impl Corpus {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

fn default_extension() -> String {
    "json".to_string()
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct Logging {
    #[serde_as(as = "DisplayFromStr")]
    level: tracing::Level,
}

impl Logging {
    pub fn level(&self) -> tracing::Level {
        self.level
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                corpus: Corpus {
                    directory: "payloads".to_string(),
                    extension: default_extension(),
                },
                logging: Logging { level: tracing::Level::INFO },
            },
        }
    }

    pub fn logging_level(mut self, level: tracing::Level) -> Self {
        self.config.logging.level = level;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
