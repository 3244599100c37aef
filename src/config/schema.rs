use crate::languages::SupportedLanguage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub version: String,

    #[serde(default)]
    pub input: Option<InputConfig>,

    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub languages: Vec<LanguageSettings>,

    #[serde(default)]
    pub hooks: HooksConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InputConfig {
    pub source: PathBuf,
}

/// The three kinds of generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Model,
    Database,
    Api,
}

impl ClassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Database => "database",
            Self::Api => "api",
        }
    }
}

/// Where one kind of class goes and what it extends.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassKindSettings {
    pub package: String,

    /// Output directory relative to the output root; may contain `{tag}`.
    pub module: String,

    #[serde(default)]
    pub inherits_from: Option<String>,

    #[serde(default)]
    pub implements_interfaces: Vec<String>,
}

impl ClassKindSettings {
    pub fn new(language: SupportedLanguage, kind: ClassKind) -> Self {
        Self {
            package: kind.as_str().to_string(),
            module: format!("{}/{}", language.as_str(), kind.as_str()),
            inherits_from: None,
            implements_interfaces: Vec::new(),
        }
    }

    /// The output directory for a class carrying `tag`.
    pub fn directory(&self, tag: Option<&str>) -> PathBuf {
        PathBuf::from(self.module.replace("{tag}", tag.unwrap_or("default")))
    }
}

/// Per-language settings, one entry per class kind.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LanguageSettings {
    pub language: SupportedLanguage,

    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub model: Option<ClassKindSettings>,

    #[serde(default)]
    pub database: Option<ClassKindSettings>,

    #[serde(default)]
    pub api: Option<ClassKindSettings>,
}

impl LanguageSettings {
    pub fn new(language: SupportedLanguage) -> Self {
        Self {
            language,
            enabled: true,
            model: None,
            database: None,
            api: None,
        }
    }

    /// Configured settings for `kind`, or the defaults for this language.
    pub fn kind(&self, kind: ClassKind) -> ClassKindSettings {
        let configured = match kind {
            ClassKind::Model => &self.model,
            ClassKind::Database => &self.database,
            ClassKind::Api => &self.api,
        };
        configured
            .clone()
            .unwrap_or_else(|| ClassKindSettings::new(self.language, kind))
    }
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct HooksConfig {
    #[serde(rename = "beforeGenerate", default)]
    pub before_generate: Vec<String>,

    #[serde(rename = "afterGenerate", default)]
    pub after_generate: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            input: None,
            output: Some(PathBuf::from("generated")),
            languages: vec![],
            hooks: HooksConfig::default(),
        }
    }
}
