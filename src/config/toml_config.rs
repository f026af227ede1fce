use crate::utils::error::{PetError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: StorageConfig,
    pub pet: Option<PetConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub save_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetConfig {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| PetError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${HOME})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PetError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn pet_name(&self) -> Option<&str> {
        self.pet.as_ref().and_then(|p| p.name.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.save_file", &self.storage.save_file)?;

        if let Some(name) = self.pet_name() {
            validate_non_empty_string("pet.name", name)?;
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(PetError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Expected one of: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[storage]
save_file = "saves/rex.json"

[pet]
name = "Rex"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.storage.save_file, "saves/rex.json");
        assert_eq!(config.pet_name(), Some("Rex"));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VIRTUAL_PET_TEST_DIR", "/tmp/pets");
        let config = TomlConfig::from_toml_str(
            r#"
[storage]
save_file = "${VIRTUAL_PET_TEST_DIR}/pet.json"
"#,
        )
        .unwrap();
        assert_eq!(config.storage.save_file, "/tmp/pets/pet.json");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let config = TomlConfig::from_toml_str(
            r#"
[storage]
save_file = "${VIRTUAL_PET_SURELY_UNSET_VAR}/pet.json"
"#,
        )
        .unwrap();
        assert_eq!(
            config.storage.save_file,
            "${VIRTUAL_PET_SURELY_UNSET_VAR}/pet.json"
        );
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(TomlConfig::from_toml_str("[storage]\nsave_file = \"\"\n").is_err());
        assert!(TomlConfig::from_toml_str(
            "[storage]\nsave_file = \"pet.json\"\n[pet]\nname = \"  \"\n"
        )
        .is_err());
        assert!(TomlConfig::from_toml_str(
            "[storage]\nsave_file = \"pet.json\"\n[logging]\nlevel = \"loud\"\n"
        )
        .is_err());
        assert!(TomlConfig::from_toml_str("[pet]\nname = \"Rex\"\n").is_err());
    }
}
