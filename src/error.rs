//! Error types for the generator core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The input document failed a structural precondition
    #[error("invalid swagger document {}: {reason}", .file.display())]
    InvalidDocument { file: PathBuf, reason: String },

    /// A property points at a definition that is not in the graph
    #[error("definition {definition} property {property} references unknown definition {target}")]
    DanglingReference {
        definition: String,
        property: String,
        target: String,
    },

    /// A definition was looked up by name but does not exist
    #[error("unknown definition: {0}")]
    UnknownDefinition(String),

    /// A language template failed to render
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// The input could not be parsed as YAML
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The graph dump could not be serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the input failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
