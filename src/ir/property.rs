use super::{Printable, TypeDefinition};
use crate::error::Result;
use crate::languages::{fill, LanguageDefinition};

/// A field, or a class-level constant when `is_constant` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: String,
    pub property_type: TypeDefinition,
    /// Initial value, already printed for the target language.
    pub default: Option<String>,
    pub is_constant: bool,
}

impl PropertyDefinition {
    pub fn field(name: &str, property_type: TypeDefinition, default: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            property_type,
            default,
            is_constant: false,
        }
    }

    pub fn constant(name: &str, property_type: TypeDefinition, value: String) -> Self {
        Self {
            name: name.to_string(),
            property_type,
            default: Some(value),
            is_constant: true,
        }
    }

    /// The parameter that initializes this field.
    pub fn to_parameter(&self) -> ParameterDefinition {
        ParameterDefinition {
            name: self.name.clone(),
            parameter_type: self.property_type.clone(),
            default: self.default.clone(),
        }
    }
}

impl Printable for PropertyDefinition {
    fn print(&self, language: &LanguageDefinition) -> Result<String> {
        let template = if self.is_constant {
            language.constant_template
        } else {
            language.field_template
        };
        Ok(fill(
            template,
            &[
                ("name", &self.name),
                ("type", &self.property_type.print(language)?),
                ("init", &initializer(language, self.default.as_deref())),
            ],
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub name: String,
    pub parameter_type: TypeDefinition,
    pub default: Option<String>,
}

impl ParameterDefinition {
    pub fn new(name: &str, parameter_type: TypeDefinition) -> Self {
        Self {
            name: name.to_string(),
            parameter_type,
            default: None,
        }
    }

    /// Print with an explicit template, e.g. the field-declaring form.
    pub fn print_with(&self, language: &LanguageDefinition, template: &str) -> Result<String> {
        Ok(fill(
            template,
            &[
                ("name", &self.name),
                ("type", &self.parameter_type.print(language)?),
                ("init", &initializer(language, self.default.as_deref())),
            ],
        ))
    }
}

impl Printable for ParameterDefinition {
    fn print(&self, language: &LanguageDefinition) -> Result<String> {
        self.print_with(language, language.parameter_template)
    }
}

fn initializer(language: &LanguageDefinition, value: Option<&str>) -> String {
    value
        .map(|value| fill(language.initializer_template, &[("value", value)]))
        .unwrap_or_default()
}
