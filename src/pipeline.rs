//! The batch run: document in, generated files out.
//!
//! Phases run strictly in order. The graph is mutated while definitions are
//! built, synthesized and linked, then only read by the class parsers.

use crate::config::LanguageSettings;
use crate::error::Result;
use crate::generators::{self, GeneratedFile};
use crate::operation_processor::{self, PathHelper};
use crate::parsers::SwaggerDocument;
use crate::schema_processor::{
    create_definitions_from_properties, prepare_definitions, prepare_references, verify_closure,
    DefinitionGraph,
};
use serde::Serialize;
use tracing::{debug, info};

/// Build the closed, reference-annotated definition graph and the path helpers.
pub fn build_graph(document: &SwaggerDocument) -> Result<(DefinitionGraph, Vec<PathHelper>)> {
    debug!(file = %document.file.display(), "building definition graph");

    let mut graph = prepare_definitions(&document.yaml_definitions());
    let names = graph.names();
    create_definitions_from_properties(&mut graph, names)?;

    let paths = operation_processor::convert(&document.yaml_paths(), &mut graph)?;

    verify_closure(&graph)?;
    prepare_references(&mut graph)?;

    info!(
        definitions = graph.len(),
        tables = graph.iter().filter(|d| d.needs_table).count(),
        paths = paths.len(),
        "definition graph ready"
    );
    Ok((graph, paths))
}

/// Generate the files of every enabled language.
pub fn run(document: &SwaggerDocument, languages: &[LanguageSettings]) -> Result<Vec<GeneratedFile>> {
    let (graph, paths) = build_graph(document)?;

    let mut files = Vec::new();
    for settings in languages.iter().filter(|settings| settings.enabled) {
        debug!(language = %settings.language, "generating");
        files.extend(generators::generate(&graph, &paths, settings)?);
    }
    Ok(files)
}

#[derive(Serialize)]
struct GraphDump<'a> {
    title: &'a str,
    version: &'a str,
    definitions: &'a DefinitionGraph,
    paths: &'a [PathHelper],
}

/// The built graph and path helpers as pretty-printed JSON.
pub fn dump_graph(document: &SwaggerDocument) -> Result<String> {
    let (graph, paths) = build_graph(document)?;
    let dump = GraphDump {
        title: &document.title,
        version: &document.version,
        definitions: &graph,
        paths: &paths,
    };
    Ok(serde_json::to_string_pretty(&dump)?)
}
