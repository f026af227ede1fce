pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use self::toml_config::TomlConfig;

pub const DEFAULT_SAVE_FILE: &str = "pet_data.json";

#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "virtual-pet"))]
#[cfg_attr(feature = "cli", command(about = "Look after a virtual pet from your terminal"))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, help = "Where the pet is saved and loaded from"))]
    pub save_file: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Name for a new pet when no save exists"))]
    pub name: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Optional TOML configuration file"))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Seed for reproducible sessions"))]
    pub seed: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,

    #[cfg_attr(feature = "cli", arg(skip))]
    #[serde(skip)]
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Fills in anything not given on the command line from the TOML file.
    pub fn merge_toml(&mut self, toml: &TomlConfig) {
        if self.save_file.is_none() {
            self.save_file = Some(toml.storage.save_file.clone());
        }
        if self.name.is_none() {
            self.name = toml.pet_name().map(str::to_string);
        }
        if self.log_level.is_none() {
            self.log_level = toml.log_level().map(str::to_string);
        }
        self.json_logs |= toml.json_logs();
    }

    /// Loads and merges `--config` when one was given.
    pub fn resolve(mut self) -> Result<Self> {
        if let Some(path) = self.config.clone() {
            let toml = TomlConfig::from_file(&path)?;
            self.merge_toml(&toml);
        }
        self.validate()?;
        Ok(self)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("save_file", self.save_file())?;
        if let Some(name) = &self.name {
            validate_non_empty_string("name", name)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn save_file(&self) -> &str {
        self.save_file.as_deref().unwrap_or(DEFAULT_SAVE_FILE)
    }

    fn default_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}
