use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Type names that map straight onto a target-language primitive.
pub const NATIVE_TYPES: [&str; 4] = ["string", "number", "integer", "boolean"];

/// Strip a `$ref` path down to the bare definition name.
///
/// `#/definitions/Pet` becomes `Pet`; names without a `/` come back unchanged,
/// so resolving twice is harmless.
pub fn resolve_reference(name: &str) -> String {
    name.rsplit('/').next().unwrap_or(name).to_string()
}

/// A schema type with `$ref` already resolved to a bare name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YamlType {
    pub name: String,
    pub items: Option<Box<YamlType>>,
    pub is_enum: bool,
}

impl YamlType {
    pub fn new(name: &str, items: Option<YamlType>, is_enum: bool) -> Self {
        Self {
            name: resolve_reference(name),
            items: items.map(Box::new),
            is_enum,
        }
    }

    /// Read the type out of a raw schema object.
    pub fn from_schema(schema: &Value) -> Self {
        if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
            return Self::new(reference, None, false);
        }

        let name = schema
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("object");

        let items = if name == "array" {
            Some(
                schema
                    .get("items")
                    .map(Self::from_schema)
                    .unwrap_or_else(|| Self::new("object", None, false)),
            )
        } else {
            None
        };

        let is_enum = schema.get("enum").is_some_and(Value::is_sequence);

        Self::new(name, items, is_enum)
    }

    pub fn is_native(&self) -> bool {
        NATIVE_TYPES.contains(&self.name.as_str())
    }

    pub fn is_array(&self) -> bool {
        self.name == "array"
    }
}

/// One named field of a schema object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YamlProperty {
    pub name: String,
    pub property_type: YamlType,
    pub required: bool,
    pub default: Option<Value>,
    pub enum_values: Option<Vec<String>>,
    /// Fields of an inline, anonymous object (or of an array's inline items).
    pub properties: Vec<YamlProperty>,
}

impl YamlProperty {
    pub fn from_schema(name: &str, schema: &Value, required: bool) -> Self {
        let property_type = YamlType::from_schema(schema);

        // Arrays carry their enum and inline fields on the item schema.
        let element = if property_type.is_array() {
            schema.get("items").unwrap_or(schema)
        } else {
            schema
        };

        Self {
            name: name.to_string(),
            property_type,
            required,
            default: schema.get("default").cloned(),
            enum_values: enum_values(element),
            properties: object_properties(element),
        }
    }
}

/// One entry of the `definitions` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YamlDefinition {
    pub name: String,
    pub properties: Vec<YamlProperty>,
}

impl YamlDefinition {
    pub fn from_schema(name: &str, schema: &Value) -> Self {
        Self {
            name: name.to_string(),
            properties: object_properties(schema),
        }
    }
}

/// HTTP verbs recognised in the `paths` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            "patch" => Some(Self::Patch),
            "head" => Some(Self::Head),
            "options" => Some(Self::Options),
            _ => None,
        }
    }

    /// The literal verb sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    /// The verb as used in generated class names (`Get`, `Post`, ...).
    pub fn class_prefix(&self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::Post => "Post",
            Self::Put => "Put",
            Self::Delete => "Delete",
            Self::Patch => "Patch",
            Self::Head => "Head",
            Self::Options => "Options",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Body,
    FormData,
}

impl ParameterLocation {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "query" => Some(Self::Query),
            "path" => Some(Self::Path),
            "header" => Some(Self::Header),
            "body" => Some(Self::Body),
            "formData" => Some(Self::FormData),
            _ => None,
        }
    }

    /// Query and path parameters end up in the request url.
    pub fn is_url(&self) -> bool {
        matches!(self, Self::Query | Self::Path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YamlPathParameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub parameter_type: YamlType,
    /// Inline object fields of a body schema.
    pub properties: Vec<YamlProperty>,
}

impl YamlPathParameter {
    fn from_value(value: &Value) -> Option<Self> {
        let name = value.get("name").and_then(Value::as_str)?;
        let location = value
            .get("in")
            .and_then(Value::as_str)
            .and_then(ParameterLocation::from_key)?;
        let required = value.get("required").and_then(Value::as_bool).unwrap_or(false);

        // Body parameters describe their payload under `schema`, the rest inline.
        let schema = if location == ParameterLocation::Body {
            value.get("schema").unwrap_or(value)
        } else {
            value
        };
        let parameter_type = YamlType::from_schema(schema);
        let element = if parameter_type.is_array() {
            schema.get("items").unwrap_or(schema)
        } else {
            schema
        };

        Some(Self {
            name: name.to_string(),
            location,
            required,
            parameter_type,
            properties: object_properties(element),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YamlPathResponse {
    pub status_code: u16,
    /// `None` when the response carries no schema.
    pub response_type: Option<YamlType>,
    pub properties: Vec<YamlProperty>,
}

impl YamlPathResponse {
    fn from_entry(key: &Value, value: &Value) -> Option<Self> {
        let status_code = match key {
            Value::Number(number) => number.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(text) => text.parse().ok(),
            _ => None,
        }?;

        let (response_type, properties) = match value.get("schema") {
            Some(schema) => {
                let response_type = YamlType::from_schema(schema);
                let element = if response_type.is_array() {
                    schema.get("items").unwrap_or(schema)
                } else {
                    schema
                };
                (Some(response_type), object_properties(element))
            }
            None => (None, Vec::new()),
        };

        Some(Self {
            status_code,
            response_type,
            properties,
        })
    }
}

/// One (url, method) operation of the `paths` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YamlPath {
    pub url: String,
    pub method: HttpMethod,
    pub tag: Option<String>,
    pub parameters: Vec<YamlPathParameter>,
    pub responses: Vec<YamlPathResponse>,
}

/// Normalize the `definitions` section, keeping document order.
pub fn normalize_definitions(definitions: &Mapping) -> Vec<YamlDefinition> {
    definitions
        .iter()
        .filter_map(|(name, schema)| {
            let name = name.as_str()?;
            Some(YamlDefinition::from_schema(name, schema))
        })
        .collect()
}

/// Normalize the `paths` section into one entry per (url, method).
pub fn normalize_paths(paths: &Mapping) -> Vec<YamlPath> {
    let mut normalized = Vec::new();

    for (url, item) in paths {
        let Some(url) = url.as_str() else {
            continue;
        };
        let Some(item) = item.as_mapping() else {
            continue;
        };

        let shared = item
            .get("parameters")
            .and_then(Value::as_sequence)
            .map(|params| params.iter().filter_map(YamlPathParameter::from_value).collect())
            .unwrap_or_else(Vec::new);

        for (key, operation) in item {
            let Some(method) = key.as_str().and_then(HttpMethod::from_key) else {
                continue;
            };
            normalized.push(normalize_operation(url, method, operation, &shared));
        }
    }

    normalized
}

fn normalize_operation(
    url: &str,
    method: HttpMethod,
    operation: &Value,
    shared: &[YamlPathParameter],
) -> YamlPath {
    let tag = operation
        .get("tags")
        .and_then(Value::as_sequence)
        .and_then(|tags| tags.first())
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut parameters: Vec<YamlPathParameter> = shared.to_vec();
    for parameter in operation
        .get("parameters")
        .and_then(Value::as_sequence)
        .into_iter()
        .flatten()
    {
        match YamlPathParameter::from_value(parameter) {
            // Operation parameters override path-level ones with the same name and location.
            Some(parameter) => {
                parameters.retain(|p| !(p.name == parameter.name && p.location == parameter.location));
                parameters.push(parameter);
            }
            None => debug!(url, method = method.as_str(), "skipping unsupported parameter"),
        }
    }

    let responses = operation
        .get("responses")
        .and_then(Value::as_mapping)
        .map(|responses| {
            responses
                .iter()
                .filter_map(|(key, value)| YamlPathResponse::from_entry(key, value))
                .collect()
        })
        .unwrap_or_else(Vec::new);

    YamlPath {
        url: url.to_string(),
        method,
        tag,
        parameters,
        responses,
    }
}

fn object_properties(schema: &Value) -> Vec<YamlProperty> {
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_sequence)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    schema
        .get("properties")
        .and_then(Value::as_mapping)
        .map(|properties| {
            properties
                .iter()
                .filter_map(|(name, property)| {
                    let name = name.as_str()?;
                    Some(YamlProperty::from_schema(name, property, required.contains(&name)))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn enum_values(schema: &Value) -> Option<Vec<String>> {
    let values = schema.get("enum")?.as_sequence()?;
    Some(values.iter().filter_map(scalar_to_string).collect())
}

pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "yaml_schema/yaml_schema_tests.rs"]
mod yaml_schema_tests;
