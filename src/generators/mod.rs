//! Class parsers: turn graph nodes and path helpers into [`ClassDefinition`]s,
//! then print them into files.

pub mod api;
pub mod database;
pub mod model;

use crate::config::{ClassKind, ClassKindSettings, LanguageSettings};
use crate::error::Result;
use crate::ir::{print_file, ClassDefinition, Import, Printable, TypeDefinition};
use crate::languages::{LanguageDefinition, NativeType};
use crate::naming::capitalize;
use crate::operation_processor::PathHelper;
use crate::schema_processor::{DefinitionGraph, DefinitionPropertyHelper};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

pub use api::ApiClassParser;
pub use database::DatabaseTableSchemaClassParser;
pub use model::ModelClassParser;

/// Names of the generated storage abstractions the schema classes call into.
pub const DATABASE_TYPE: &str = "Database";
pub const ROW_TYPE: &str = "Row";

/// One output file. The directory is relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub directory: PathBuf,
    pub file_name: String,
    pub definition: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// A parser that produces exactly one class.
pub trait ClassParser {
    /// Name of the class [`ClassParser::parse`] emits.
    fn class_name(&self) -> String;

    fn parse(&self) -> Result<ClassDefinition>;
}

/// Generate every file for one language from a closed, reference-annotated graph.
pub fn generate(
    graph: &DefinitionGraph,
    paths: &[PathHelper],
    settings: &LanguageSettings,
) -> Result<Vec<GeneratedFile>> {
    let language = settings.language.definition();
    let model = settings.kind(ClassKind::Model);
    let database = settings.kind(ClassKind::Database);
    let api = settings.kind(ClassKind::Api);

    let mut files = Vec::new();
    for definition in graph.iter() {
        let tag = definition.tag.as_deref();
        let parser = ModelClassParser::new(definition, language, &model);
        files.push(emit(&parser, language, &model, tag)?);

        if definition.needs_table {
            let parser = DatabaseTableSchemaClassParser::new(definition, graph, language, &database, &model);
            files.push(emit(&parser, language, &database, tag)?);
        }
    }

    if graph.iter().any(|definition| definition.needs_table) {
        files.extend(storage_files(language, &database)?);
    }

    for path in paths {
        let parser = ApiClassParser::new(path, language, &api, &model);
        files.push(emit(&parser, language, &api, path.tag.as_deref())?);
    }

    info!(language = %settings.language, files = files.len(), "generated files");
    Ok(files)
}

fn emit(
    parser: &dyn ClassParser,
    language: &LanguageDefinition,
    settings: &ClassKindSettings,
    tag: Option<&str>,
) -> Result<GeneratedFile> {
    let class = parser.parse()?;
    Ok(GeneratedFile {
        directory: settings.directory(tag),
        file_name: language.file_name(&class.name),
        content: class.print(language)?,
        definition: class.name,
    })
}

/// The `Database` and `Row` declarations the schema classes are written against.
fn storage_files(language: &LanguageDefinition, settings: &ClassKindSettings) -> Result<Vec<GeneratedFile>> {
    let row_import = Import::class(&settings.package, ROW_TYPE);
    let declarations = [
        (DATABASE_TYPE, language.database.database_declaration, Some(row_import)),
        (ROW_TYPE, language.database.row_declaration, None),
    ];

    declarations
        .into_iter()
        .map(|(name, declaration, import)| {
            let mut imports: Vec<String> = language.prelude.iter().map(|line| line.to_string()).collect();
            imports.extend(import.and_then(|import| import.print(language, &settings.package)));
            Ok(GeneratedFile {
                directory: settings.directory(None),
                file_name: language.file_name(name),
                definition: name.to_string(),
                content: print_file(language, &settings.package, imports, &[declaration.to_string()])?,
            })
        })
        .collect()
}

/// Name of the enum hoisted out of `property` of `class`.
pub fn enum_name(class: &str, property: &str) -> String {
    format!("{class}{}", capitalize(property))
}

/// Declared type of a model property; optional properties are nullable.
pub fn property_type(owner: &str, property: &DefinitionPropertyHelper) -> TypeDefinition {
    let element = property.property_type.element();
    let element_type = if property.enum_values().is_some() {
        TypeDefinition::named(&enum_name(owner, &property.name))
    } else {
        match NativeType::from_name(&element.name) {
            Some(native) => TypeDefinition::native(native),
            None => TypeDefinition::named(&element.name),
        }
    };

    let declared = if property.property_type.is_array() {
        TypeDefinition::list(element_type)
    } else {
        element_type
    };
    declared.nullable(!property.required)
}
