use crate::error::{GeneratorError, Result};
use crate::naming::{capitalize, to_pascal_case};
use crate::parsers::{
    HttpMethod, ParameterLocation, YamlPath, YamlPathResponse, YamlProperty, YamlType,
};
use crate::schema_processor::{
    create_definitions_from_properties, DefinitionGraph, DefinitionHelper,
    DefinitionPropertyHelper, DefinitionTypeHelper,
};
use serde::Serialize;
use std::collections::HashSet;
use std::ops::Range;
use tracing::{debug, info, warn};

/// Status codes treated as a successful response.
pub const SUCCESS_STATUS: Range<u16> = 200..300;
/// Status codes strictly above this one are failures; 300 itself is neither.
pub const FAILURE_STATUS_ABOVE: u16 = 300;

const ANONYMOUS_OBJECT: &str = "object";
/// Property name of the synthesized url-parameter group on an API class.
pub const PARAMETERS_PROPERTY: &str = "parameters";
pub const BODY_PROPERTY: &str = "body";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlParameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
}

/// Everything an API class needs to know about one (url, method) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathHelper {
    pub name: String,
    pub url: String,
    pub method: HttpMethod,
    pub tag: Option<String>,
    /// Path and query parameters, in declaration order.
    pub url_parameters: Vec<UrlParameter>,
    /// The single url parameter, or a `parameters` property typed with the
    /// synthesized `<Name>RequestParameters` definition when there are several.
    pub url_parameters_property: Option<DefinitionPropertyHelper>,
    pub body: Option<DefinitionPropertyHelper>,
    pub success_response: Option<DefinitionTypeHelper>,
    pub failure_response: Option<DefinitionTypeHelper>,
}

impl PathHelper {
    /// Expression path from the API object to a url parameter's value.
    pub fn parameter_access(&self, parameter: &str) -> Vec<String> {
        match &self.url_parameters_property {
            Some(property) if property.name == PARAMETERS_PROPERTY && self.url_parameters.len() > 1 => {
                vec![PARAMETERS_PROPERTY.to_string(), parameter.to_string()]
            }
            _ => vec![parameter.to_string()],
        }
    }
}

/// Build a class name out of the verb and the url template.
///
/// Literal segments are PascalCased, parameters only capitalized. The first
/// parameter is prefixed `By` unless it is the very first segment, later ones
/// `And`. A literal segment between two parameters is dropped, since the
/// parameter after it names it.
pub fn get_name_based_on_path(url: &str, method: HttpMethod, suffix: &str) -> String {
    let segments: Vec<&str> = url.split('/').collect();
    let mut name = String::from(method.class_prefix());
    let mut seen_parameter = false;

    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }

        if let Some(parameter) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            let prefix = if seen_parameter {
                "And"
            } else if index > 1 {
                "By"
            } else {
                ""
            };
            name.push_str(prefix);
            name.push_str(&capitalize(parameter));
            seen_parameter = true;
        } else {
            let next_is_parameter = segments
                .get(index + 1)
                .is_some_and(|next| next.starts_with('{'));
            if seen_parameter && next_is_parameter {
                continue;
            }
            name.push_str(&to_pascal_case(segment));
        }
    }

    name.push_str(suffix);
    name
}

/// Convert every (url, method) pair into a [`PathHelper`], adding the
/// request/response definitions it needs to `graph`.
pub fn convert(paths: &[YamlPath], graph: &mut DefinitionGraph) -> Result<Vec<PathHelper>> {
    let mut helpers = Vec::new();
    let mut created = Vec::new();
    let mut used_names = HashSet::new();

    for path in paths {
        let mut name = get_name_based_on_path(&path.url, path.method, "");
        if !used_names.insert(name.clone()) {
            let mut counter = 2;
            while used_names.contains(&format!("{name}{counter}")) {
                counter += 1;
            }
            warn!(url = %path.url, name = %name, "duplicate path name, adding a counter");
            name = format!("{name}{counter}");
            used_names.insert(name.clone());
        }

        helpers.push(convert_path(path, name, graph, &mut created)?);
    }

    // Inline objects nested inside the new bodies still need names.
    create_definitions_from_properties(graph, created)?;

    info!(paths = helpers.len(), "converted paths");
    Ok(helpers)
}

fn convert_path(
    path: &YamlPath,
    name: String,
    graph: &mut DefinitionGraph,
    created: &mut Vec<String>,
) -> Result<PathHelper> {
    debug!(url = %path.url, method = path.method.as_str(), name = %name, "converting path");

    let url_parameters: Vec<UrlParameter> = path
        .parameters
        .iter()
        .filter(|p| p.location.is_url())
        .map(|p| UrlParameter {
            name: p.name.clone(),
            location: p.location,
            required: p.required,
        })
        .collect();

    let url_parameters_property = match url_parameters.as_slice() {
        [] => None,
        [single] => Some(string_property(&single.name, single.required)),
        several => {
            let definition_name = format!("{name}RequestParameters");
            let properties = several
                .iter()
                .map(|p| string_property(&p.name, p.required))
                .collect();
            insert_synthesized(graph, &definition_name, properties, path.tag.as_ref(), created);
            Some(DefinitionPropertyHelper::new(
                PARAMETERS_PROPERTY,
                DefinitionTypeHelper::new(&definition_name, None, false),
                true,
            ))
        }
    };

    let body = match path
        .parameters
        .iter()
        .find(|p| p.location == ParameterLocation::Body)
    {
        Some(parameter) => {
            let body_type = schema_type(
                graph,
                &parameter.parameter_type,
                &parameter.properties,
                &format!("{name}RequestBody"),
                path.tag.as_ref(),
                created,
            )
            .map_err(|target| dangling(&name, BODY_PROPERTY, target))?;
            Some(DefinitionPropertyHelper::new(BODY_PROPERTY, body_type, parameter.required))
        }
        None => None,
    };

    let success = path
        .responses
        .iter()
        .find(|r| SUCCESS_STATUS.contains(&r.status_code));
    let failure = path
        .responses
        .iter()
        .find(|r| r.status_code > FAILURE_STATUS_ABOVE);

    let mut response_type = |response: Option<&YamlPathResponse>, suffix: &str| {
        match response.and_then(|r| r.response_type.as_ref().map(|t| (t, &r.properties))) {
            Some((yaml_type, properties)) => schema_type(
                graph,
                yaml_type,
                properties,
                &format!("{name}{suffix}"),
                path.tag.as_ref(),
                created,
            )
            .map(Some)
            .map_err(|target| dangling(&name, suffix, target)),
            None => Ok(None),
        }
    };
    let success_response = response_type(success, "SuccessResponse")?;
    let failure_response = response_type(failure, "ErrorResponse")?;

    Ok(PathHelper {
        name,
        url: path.url.clone(),
        method: path.method,
        tag: path.tag.clone(),
        url_parameters,
        url_parameters_property,
        body,
        success_response,
        failure_response,
    })
}

/// Resolve a body/response schema to a type in the graph, synthesizing a
/// definition for inline objects. Returns the missing name on a dangling `$ref`.
fn schema_type(
    graph: &mut DefinitionGraph,
    yaml_type: &YamlType,
    properties: &[YamlProperty],
    synthesized_name: &str,
    tag: Option<&String>,
    created: &mut Vec<String>,
) -> std::result::Result<DefinitionTypeHelper, String> {
    let mut resolved = DefinitionTypeHelper::from_yaml(yaml_type);
    let element = resolved.element_mut();

    if element.name == ANONYMOUS_OBJECT {
        let properties = properties.iter().map(DefinitionPropertyHelper::from_yaml).collect();
        insert_synthesized(graph, synthesized_name, properties, tag, created);
        *element = DefinitionTypeHelper::new(synthesized_name, None, false);
    } else if !element.is_native() && !element.is_enum {
        let definition = graph.get_mut(&element.name).ok_or_else(|| element.name.clone())?;
        if definition.tag.is_none() {
            definition.tag = tag.cloned();
        }
    }

    Ok(resolved)
}

fn insert_synthesized(
    graph: &mut DefinitionGraph,
    name: &str,
    properties: Vec<DefinitionPropertyHelper>,
    tag: Option<&String>,
    created: &mut Vec<String>,
) {
    if graph.contains(name) {
        return;
    }
    let mut definition = DefinitionHelper::new(name, properties);
    definition.tag = tag.cloned();
    graph.insert(definition);
    created.push(name.to_string());
}

fn string_property(name: &str, required: bool) -> DefinitionPropertyHelper {
    DefinitionPropertyHelper::new(name, DefinitionTypeHelper::new("string", None, false), required)
}

fn dangling(path: &str, slot: &str, target: String) -> GeneratorError {
    GeneratorError::DanglingReference {
        definition: path.to_string(),
        property: slot.to_string(),
        target,
    }
}
