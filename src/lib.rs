//! Turns a Swagger 2.0 document into model, table-schema and API request
//! classes for Java, Kotlin, TypeScript and Python.
//!
//! [`pipeline::run`] is the whole batch: parse, build the definition graph,
//! convert paths, infer relationships, then print one set of files per
//! configured language. Every language is a [`languages::LanguageDefinition`]
//! table, so the parsers and the [`ir`] never branch on the target.

pub mod config;
pub mod error;
pub mod generators;
pub mod ir;
pub mod languages;
pub mod naming;
pub mod operation_processor;
pub mod parsers;
pub mod pipeline;
pub mod schema_processor;

pub use error::{GeneratorError, Result};
pub use generators::GeneratedFile;
pub use languages::SupportedLanguage;
pub use parsers::SwaggerDocument;
