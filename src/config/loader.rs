use super::schema::{Config, InputConfig, LanguageSettings};
use crate::languages::SupportedLanguage;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "./.config/swagger-class-generator.yaml";

/// Load configuration from file or return default
pub fn load_config(custom_path: Option<&Path>) -> Result<Config> {
    let config_path = match custom_path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_CONFIG_PATH),
    };

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    } else if custom_path.is_some() {
        // Custom path specified but doesn't exist - error
        anyhow::bail!("Config file not found: {:?}", config_path);
    } else {
        // Default path doesn't exist - use built-in defaults
        Ok(Config::default())
    }
}

/// Merge config with CLI arguments (CLI takes precedence)
///
/// Languages named on the command line replace the configured list; a
/// language already configured keeps its settings. With no languages
/// anywhere, every supported language is generated with defaults.
pub fn merge_with_cli_args(
    mut config: Config,
    spec: Option<PathBuf>,
    output: Option<PathBuf>,
    languages: &[SupportedLanguage],
) -> Config {
    if let Some(spec_path) = spec {
        match &mut config.input {
            Some(input) => input.source = spec_path,
            None => config.input = Some(InputConfig { source: spec_path }),
        }
    }

    if let Some(output_path) = output {
        config.output = Some(output_path);
    }

    if !languages.is_empty() {
        let configured = std::mem::take(&mut config.languages);
        config.languages = languages
            .iter()
            .map(|language| {
                let mut settings = configured
                    .iter()
                    .find(|settings| settings.language == *language)
                    .cloned()
                    .unwrap_or_else(|| LanguageSettings::new(*language));
                settings.enabled = true;
                settings
            })
            .collect();
    } else if config.languages.is_empty() {
        config.languages = SupportedLanguage::ALL
            .iter()
            .copied()
            .map(LanguageSettings::new)
            .collect();
    }

    config
}
