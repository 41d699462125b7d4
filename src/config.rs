use crate::cli::OutputFormat;
use crate::utils::error::{AppError, AppResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the command-line shell. The rule tables are never configurable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub color: bool,
    pub pager: bool,
    pub validate: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: true,
            pager: true,
            validate: true,
            format: "text".to_string(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_chars: 3,
            max_chars: 5000,
        }
    }
}

impl Config {
    /// Load `config_path` if one was given, otherwise use the defaults
    pub fn load(config_path: Option<&Path>) -> AppResult<Self> {
        match config_path {
            Some(path) => Self::load_custom(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        info!("loading config from {}", config_path.display());

        let content = std::fs::read_to_string(config_path).map_err(|e| {
            AppError::Io(format!("Failed to read {}: {}", config_path.display(), e))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.limits.max_chars == 0 {
            return Err(AppError::Config("max_chars must be greater than zero".to_string()));
        }

        if self.limits.min_chars > self.limits.max_chars {
            return Err(AppError::Config(format!(
                "min_chars ({}) cannot exceed max_chars ({})",
                self.limits.min_chars, self.limits.max_chars
            )));
        }

        self.output_format()?;
        Ok(())
    }

    /// Default output format for `transform`
    pub fn output_format(&self) -> AppResult<OutputFormat> {
        match self.general.format.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!(
                "Unknown output format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }

    pub fn to_toml(&self) -> AppResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.general.validate);
        assert_eq!(config.limits.max_chars, 5000);
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config("[general]\ncolor = false\nformat = \"json\"\n");
        let config = Config::load(Some(file.path())).unwrap();

        assert!(!config.general.color);
        assert!(config.general.pager);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert_eq!(config.limits, LimitsConfig::default());
    }

    #[test]
    fn test_load_rejects_inverted_limits() {
        let file = write_config("[limits]\nmin_chars = 10\nmax_chars = 5\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        let file = write_config("[general]\nformat = \"yaml\"\n");
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let missing = Path::new("/nonexistent/context-transformer.toml");
        let err = Config::load(Some(missing)).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let content = Config::default().to_toml().unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
