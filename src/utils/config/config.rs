use super::{Config, GeneratorConfig};
use crate::error::RandStrError as Error;
use figment::{Figment, providers::Format};
use log::debug;
use std::path::PathBuf;

impl Config {
    /// Load the Configuration
    ///
    /// A missing file is treated as empty so defaults and environment
    /// variables still apply.
    pub fn load(path: &PathBuf) -> Result<Self, Error> {
        debug!("Loading Configuration: {:?}", path);

        let figment = Figment::new()
            .merge(figment::providers::Yaml::file(path))
            .merge(figment::providers::Env::prefixed("RANDSTR_").split("__"));

        let mut config: Self = figment.extract()?;
        config.generator = GeneratorConfig::figment(&config.generator).extract()?;
        config.path = path.clone();

        debug!("Finished Loading Configuration");
        Ok(config)
    }

    /// Load the Configuration from a String
    pub fn load_str(data: impl Into<String>) -> Result<Self, Error> {
        let data = data.into();
        debug!("Loading Configuration from str");

        let figment = Figment::new()
            .merge(figment::providers::Yaml::string(&data))
            .merge(figment::providers::Env::prefixed("RANDSTR_").split("__"));

        let mut config: Self = figment.extract()?;
        config.generator = GeneratorConfig::figment(&config.generator).extract()?;
        Ok(config)
    }

    /// Save the Configuration
    pub fn save(&self, path: &PathBuf) -> Result<(), Error> {
        debug!("Saving Configuration: {:?}", path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let config = serde_yaml::to_string(self)?;
        std::fs::write(path, config)?;
        Ok(())
    }

    /// Automatically save the Configuration to the path it was loaded from
    pub fn autosave(&self) -> Result<(), Error> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::ConfigParseError(
                "Configuration was not loaded from a file".to_string(),
            ));
        }
        self.save(&self.path)
    }

    /// Path the Configuration was loaded from
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
