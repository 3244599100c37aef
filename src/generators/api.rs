use super::{property_type, ClassParser};
use crate::config::ClassKindSettings;
use crate::error::Result;
use crate::ir::{
    ClassDefinition, ConstructorDefinition, Import, MethodDefinition, Printable, PropertyDefinition,
    Statement, TypeDefinition,
};
use crate::languages::{fill, LanguageDefinition, NativeType};
use crate::operation_processor::PathHelper;
use crate::parsers::ParameterLocation;
use crate::schema_processor::DefinitionTypeHelper;
use tracing::debug;

const URL: &str = "url";
const QUERY: &str = "query";

/// A piece of a url template such as `/pets/{id}`.
#[derive(Debug, PartialEq, Eq)]
enum UrlPart<'u> {
    Literal(&'u str),
    Parameter(&'u str),
}

fn split_url(url: &str) -> Vec<UrlPart<'_>> {
    let mut parts = Vec::new();
    let mut rest = url;

    while let Some(start) = rest.find('{') {
        let Some(length) = rest[start..].find('}') else {
            break;
        };
        if start > 0 {
            parts.push(UrlPart::Literal(&rest[..start]));
        }
        parts.push(UrlPart::Parameter(&rest[start + 1..start + length]));
        rest = &rest[start + length + 1..];
    }
    if !rest.is_empty() {
        parts.push(UrlPart::Literal(rest));
    }
    parts
}

/// Emits the request wrapper class of one (url, method) pair.
pub struct ApiClassParser<'a> {
    path: &'a PathHelper,
    language: &'a LanguageDefinition,
    settings: &'a ClassKindSettings,
    model_settings: &'a ClassKindSettings,
}

impl<'a> ApiClassParser<'a> {
    pub fn new(
        path: &'a PathHelper,
        language: &'a LanguageDefinition,
        settings: &'a ClassKindSettings,
        model_settings: &'a ClassKindSettings,
    ) -> Self {
        Self {
            path,
            language,
            settings,
            model_settings,
        }
    }

    fn has_supertypes(&self) -> bool {
        self.settings.inherits_from.is_some() || !self.settings.implements_interfaces.is_empty()
    }

    fn accessor(&self, name: &str, return_type: TypeDefinition, body: Vec<Statement>) -> MethodDefinition {
        let method = MethodDefinition::new(name, Vec::new(), return_type).with_body(body);
        if self.has_supertypes() {
            method.override_method()
        } else {
            method
        }
    }

    /// `this.<name>` or `this.parameters.<name>`, depending on how the
    /// parameters are grouped.
    fn parameter_value(&self, parameter: &str) -> String {
        let language = self.language;
        self.path
            .parameter_access(parameter)
            .iter()
            .fold(language.self_reference.to_string(), |object, name| language.member(&object, name))
    }

    fn path_expression(&self) -> String {
        let language = self.language;
        let parts: Vec<String> = split_url(&self.path.url)
            .into_iter()
            .map(|part| match part {
                UrlPart::Literal(text) => language.string_literal(text),
                UrlPart::Parameter(name) => {
                    fill(language.api.to_string, &[("value", &self.parameter_value(name))])
                }
            })
            .collect();

        if parts.is_empty() {
            language.string_literal("")
        } else {
            parts.join(" + ")
        }
    }

    fn get_url(&self) -> MethodDefinition {
        let language = self.language;
        let fragments = &language.api;
        let path = self.path_expression();

        let query: Vec<&str> = self
            .path
            .url_parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Query)
            .map(|p| p.name.as_str())
            .collect();

        let body = if query.is_empty() {
            vec![Statement::line(language.return_statement(&path))]
        } else {
            let mut body = vec![
                Statement::line(language.statement(&fill(
                    fragments.variable_declaration,
                    &[("name", URL), ("value", &path)],
                ))),
                Statement::line(language.statement(&fill(
                    fragments.variable_declaration,
                    &[("name", QUERY), ("value", &language.string_literal(""))],
                ))),
            ];
            for name in query {
                let value = self.parameter_value(name);
                let append = format!(
                    "{QUERY} += {} + {}",
                    language.string_literal(&format!("&{name}=")),
                    fill(fragments.to_string, &[("value", &value)])
                );
                body.push(Statement::block(
                    fill(fragments.if_not_null, &[("value", &value)]),
                    vec![Statement::line(language.statement(&append))],
                ));
            }
            body.push(Statement::line(language.return_statement(&fill(
                fragments.finish_url,
                &[("url", URL), ("query", QUERY)],
            ))));
            body
        };

        self.accessor("getUrl", TypeDefinition::native(NativeType::String), body)
    }

    fn get_method(&self) -> MethodDefinition {
        let language = self.language;
        self.accessor(
            "getMethod",
            TypeDefinition::native(NativeType::String),
            vec![Statement::line(
                language.return_statement(&language.string_literal(self.path.method.as_str())),
            )],
        )
    }

    fn get_body(&self) -> MethodDefinition {
        let language = self.language;
        let value = match &self.path.body {
            Some(body) => language.self_member(&body.name),
            None => language.null_literal.to_string(),
        };
        self.accessor(
            "getBody",
            TypeDefinition::any().nullable(true),
            vec![Statement::line(language.return_statement(&value))],
        )
    }

    /// Returns the printed response type name as a string, or null.
    fn response_type_accessor(&self, name: &str, response: Option<&DefinitionTypeHelper>) -> Result<MethodDefinition> {
        let language = self.language;
        let value = match response {
            Some(response) => language.string_literal(&response_type(response).print(language)?),
            None => language.null_literal.to_string(),
        };
        Ok(self.accessor(
            name,
            TypeDefinition::native(NativeType::String).nullable(true),
            vec![Statement::line(language.return_statement(&value))],
        ))
    }
}

impl ClassParser for ApiClassParser<'_> {
    fn class_name(&self) -> String {
        format!("{}Api", self.path.name)
    }

    fn parse(&self) -> Result<ClassDefinition> {
        let path = self.path;
        let name = self.class_name();
        let mut class = ClassDefinition::new(&name, &self.settings.package);
        class.inherits_from = self.settings.inherits_from.clone();
        class.implements = self.settings.implements_interfaces.clone();

        let fields = path.url_parameters_property.iter().chain(path.body.iter());
        for property in fields {
            let declared = property_type(&name, property);
            for type_name in declared.named_types() {
                class.add_import(Import::class(&self.model_settings.package, type_name));
            }
            class
                .properties
                .push(PropertyDefinition::field(&property.name, declared, None));
        }

        class.constructor = Some(ConstructorDefinition::new(
            &name,
            class.properties.iter().map(PropertyDefinition::to_parameter).collect(),
        ));

        class.methods.push(self.get_url());
        class.methods.push(self.get_method());
        class.methods.push(self.get_body());
        class.methods.push(self.response_type_accessor("getSuccessResponseType", path.success_response.as_ref())?);
        class.methods.push(self.response_type_accessor("getErrorResponseType", path.failure_response.as_ref())?);

        debug!(class = %class.name, url = %path.url, method = path.method.as_str(), "parsed api class");
        Ok(class)
    }
}

fn response_type(response: &DefinitionTypeHelper) -> TypeDefinition {
    let element = response.element();
    let element_type = match NativeType::from_name(&element.name) {
        Some(native) => TypeDefinition::native(native),
        None if element.is_enum => TypeDefinition::native(NativeType::String),
        None => TypeDefinition::named(&element.name),
    };
    if response.is_array() {
        TypeDefinition::list(element_type)
    } else {
        element_type
    }
}

#[cfg(test)]
#[path = "api/api_tests.rs"]
mod api_tests;
