use super::{ParameterDefinition, Printable, Statement, TypeDefinition};
use crate::error::Result;
use crate::languages::{fill, LanguageDefinition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    pub name: String,
    pub parameters: Vec<ParameterDefinition>,
    pub return_type: TypeDefinition,
    pub body: Vec<Statement>,
    pub is_static: bool,
    pub is_override: bool,
}

impl MethodDefinition {
    pub fn new(name: &str, parameters: Vec<ParameterDefinition>, return_type: TypeDefinition) -> Self {
        Self {
            name: name.to_string(),
            parameters,
            return_type,
            body: Vec::new(),
            is_static: false,
            is_override: false,
        }
    }

    pub fn with_body(mut self, body: Vec<Statement>) -> Self {
        self.body = body;
        self
    }

    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn override_method(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Identity of the method for de-duplication: name plus printed
    /// parameter types.
    pub fn signature_key(&self, language: &LanguageDefinition) -> Result<(String, Vec<String>)> {
        let types = self
            .parameters
            .iter()
            .map(|p| p.parameter_type.print(language))
            .collect::<Result<Vec<_>>>()?;
        Ok((self.name.clone(), types))
    }

    pub fn to_statement(&self, language: &LanguageDefinition) -> Result<Statement> {
        let mut parameters = Vec::new();
        if !self.is_static {
            parameters.extend(language.instance_receiver.map(str::to_string));
        }
        for parameter in &self.parameters {
            parameters.push(parameter.print(language)?);
        }

        let template = if self.is_static {
            language.static_method_template
        } else {
            language.method_template
        };
        let override_marker = if self.is_override {
            language.override_marker
        } else {
            ""
        };

        let header = fill(
            template,
            &[
                ("override", override_marker),
                ("name", &self.name),
                ("params", &parameters.join(", ")),
                ("ret", &self.return_type.print(language)?),
            ],
        );
        Ok(Statement::block(header, self.body.clone()))
    }
}

impl Printable for MethodDefinition {
    fn print(&self, language: &LanguageDefinition) -> Result<String> {
        self.to_statement(language)?.print(language)
    }
}

/// A constructor taking one parameter per field, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDefinition {
    pub class_name: String,
    pub parameters: Vec<ParameterDefinition>,
}

impl ConstructorDefinition {
    pub fn new(class_name: &str, parameters: Vec<ParameterDefinition>) -> Self {
        Self {
            class_name: class_name.to_string(),
            parameters,
        }
    }

    /// Parameter list for languages that declare the constructor in the class
    /// header; each parameter also declares its field.
    pub fn header_parameters(&self, language: &LanguageDefinition) -> Result<String> {
        let parameters = self
            .parameters
            .iter()
            .map(|p| p.print_with(language, language.field_parameter_template))
            .collect::<Result<Vec<_>>>()?;
        Ok(parameters.join(", "))
    }

    /// The explicit constructor block placed inside the class body.
    pub fn to_statement(&self, language: &LanguageDefinition) -> Result<Statement> {
        let template = if language.constructor_also_declare_fields {
            language.field_parameter_template
        } else {
            language.parameter_template
        };

        let mut parameters: Vec<String> = language
            .instance_receiver
            .map(str::to_string)
            .into_iter()
            .collect();
        for parameter in &self.parameters {
            parameters.push(parameter.print_with(language, template)?);
        }

        let body = if language.constructor_also_declare_fields {
            Vec::new()
        } else {
            self.parameters
                .iter()
                .map(|p| {
                    Statement::line(
                        language.statement(&format!("{} = {}", language.self_member(&p.name), p.name)),
                    )
                })
                .collect()
        };

        let header = fill(
            language.constructor_template,
            &[("class", &self.class_name), ("params", &parameters.join(", "))],
        );
        Ok(Statement::block(header, body))
    }
}

impl Printable for ConstructorDefinition {
    fn print(&self, language: &LanguageDefinition) -> Result<String> {
        self.to_statement(language)?.print(language)
    }
}
