pub mod yaml_schema;

use crate::error::{GeneratorError, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub use yaml_schema::*;

/// A Swagger 2.0 document that passed the structural preconditions.
#[derive(Debug, Clone)]
pub struct SwaggerDocument {
    pub file: PathBuf,
    pub title: String,
    pub version: String,
    pub base_path: String,
    pub tags: Vec<String>,
    pub paths: Mapping,
    pub definitions: Mapping,
}

impl SwaggerDocument {
    /// File extensions accepted as input; JSON is a subset of YAML.
    pub fn supported_extensions() -> Vec<&'static str> {
        vec!["yaml", "yml", "json"]
    }

    /// Read and validate a document from disk.
    pub fn load(source: &Path) -> Result<Self> {
        if !source.exists() {
            return Err(invalid(source, "file not found"));
        }

        let content = fs::read_to_string(source)?;
        Self::parse(source, &content)
    }

    /// Parse and validate document text; `source` only names the file in diagnostics.
    pub fn parse(source: &Path, content: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(content)?;
        Self::from_value(source, &value)
    }

    pub fn from_value(source: &Path, value: &Value) -> Result<Self> {
        let swagger = value.get("swagger").and_then(|v| match v {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        });
        if swagger.as_deref() != Some("2.0") {
            return Err(invalid(source, "swagger version must be \"2.0\""));
        }

        let info = value
            .get("info")
            .and_then(Value::as_mapping)
            .filter(|info| !info.is_empty())
            .ok_or_else(|| invalid(source, "missing info section"))?;

        let base_path = value
            .get("basePath")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid(source, "missing basePath"))?;

        let tags: Vec<String> = value
            .get("tags")
            .and_then(Value::as_sequence)
            .map(|tags| {
                tags.iter()
                    .filter_map(|tag| tag.get("name").and_then(Value::as_str).or(tag.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        if tags.is_empty() {
            return Err(invalid(source, "tags must be a non-empty list"));
        }

        let paths = non_empty_mapping(value, "paths")
            .ok_or_else(|| invalid(source, "paths must be a non-empty map"))?;
        let definitions = non_empty_mapping(value, "definitions")
            .ok_or_else(|| invalid(source, "definitions must be a non-empty map"))?;

        Ok(Self {
            file: source.to_path_buf(),
            title: info
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            version: info
                .get("version")
                .and_then(scalar_to_string)
                .unwrap_or_default(),
            base_path: base_path.to_string(),
            tags,
            paths: paths.clone(),
            definitions: definitions.clone(),
        })
    }

    pub fn yaml_definitions(&self) -> Vec<YamlDefinition> {
        normalize_definitions(&self.definitions)
    }

    pub fn yaml_paths(&self) -> Vec<YamlPath> {
        normalize_paths(&self.paths)
    }
}

fn non_empty_mapping<'a>(value: &'a Value, key: &str) -> Option<&'a Mapping> {
    value
        .get(key)
        .and_then(Value::as_mapping)
        .filter(|mapping| !mapping.is_empty())
}

fn invalid(source: &Path, reason: &str) -> GeneratorError {
    GeneratorError::InvalidDocument {
        file: source.to_path_buf(),
        reason: reason.to_string(),
    }
}
