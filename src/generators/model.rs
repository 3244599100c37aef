use super::{enum_name, property_type, ClassParser};
use crate::config::ClassKindSettings;
use crate::error::Result;
use crate::ir::{
    ClassDefinition, ConstructorDefinition, EnumDefinition, Import, MethodDefinition,
    ParameterDefinition, PropertyDefinition, Statement, TypeDefinition,
};
use crate::languages::{fill, LanguageDefinition, NativeType};
use crate::naming::to_enum_constant;
use crate::schema_processor::{DefinitionHelper, DefinitionPropertyHelper};
use serde_yaml::Value;
use tracing::debug;

/// Emits the data class of one definition.
pub struct ModelClassParser<'a> {
    definition: &'a DefinitionHelper,
    language: &'a LanguageDefinition,
    settings: &'a ClassKindSettings,
}

impl<'a> ModelClassParser<'a> {
    pub fn new(
        definition: &'a DefinitionHelper,
        language: &'a LanguageDefinition,
        settings: &'a ClassKindSettings,
    ) -> Self {
        Self {
            definition,
            language,
            settings,
        }
    }

    fn default_value(&self, property: &DefinitionPropertyHelper, declared: &TypeDefinition) -> Option<String> {
        if !self.language.supports_default_values {
            return None;
        }

        property
            .default
            .as_ref()
            .and_then(|value| self.literal(property, value))
            .or_else(|| declared.nullable.then(|| self.language.null_literal.to_string()))
    }

    /// The schema default as a literal of the property's type; `None` when the
    /// two disagree.
    fn literal(&self, property: &DefinitionPropertyHelper, value: &Value) -> Option<String> {
        if property.property_type.is_array() {
            return None;
        }

        let type_name = property.property_type.element().name.as_str();
        let literal = match (value, NativeType::from_name(type_name)) {
            (Value::String(text), _) if property.enum_values().is_some() => format!(
                "{}.{}",
                enum_name(&self.definition.name, &property.name),
                to_enum_constant(text)
            ),
            (Value::String(text), Some(NativeType::String)) => self.language.string_literal(text),
            (Value::Bool(flag), Some(NativeType::Boolean)) => self.language.bool_literal(*flag).to_string(),
            (Value::Number(number), Some(NativeType::Integer)) if number.is_i64() || number.is_u64() => {
                number.to_string()
            }
            (Value::Number(number), Some(NativeType::Number)) => {
                let text = number.to_string();
                if text.contains(['.', 'e', 'E']) {
                    text
                } else {
                    format!("{text}.0")
                }
            }
            _ => {
                debug!(
                    definition = %self.definition.name,
                    property = %property.name,
                    "default value does not match the property type, skipping"
                );
                return None;
            }
        };
        Some(literal)
    }

    fn equality_form(&self, property: &DefinitionPropertyHelper) -> &'static str {
        let forms = &self.language.equality;
        if property.property_type.is_array() {
            return forms.array;
        }
        if property.enum_values().is_some() {
            return forms.generic;
        }
        match NativeType::from_name(&property.property_type.name) {
            Some(NativeType::String) => forms.generic,
            Some(_) => forms.numeric,
            None => forms.object,
        }
    }

    /// Structural equality: identity and type guards, then one clause per
    /// property in declaration order.
    fn equals_method(&self) -> MethodDefinition {
        let language = self.language;
        let forms = &language.equality;

        let mut body: Vec<Statement> = forms
            .guard
            .iter()
            .map(|line| Statement::line(fill(line, &[("class", &self.definition.name)])))
            .collect();

        let clauses: Vec<String> = self
            .definition
            .properties
            .iter()
            .map(|property| fill(self.equality_form(property), &[("name", &property.name)]))
            .collect();
        let comparison = if clauses.is_empty() {
            language.true_literal.to_string()
        } else {
            clauses.join(forms.join)
        };
        body.push(Statement::line(language.return_statement(&comparison)));

        MethodDefinition::new(
            forms.method_name,
            vec![ParameterDefinition::new(
                forms.parameter_name,
                TypeDefinition::any().nullable(true),
            )],
            TypeDefinition::native(NativeType::Boolean),
        )
        .override_method()
        .with_body(body)
    }

    fn hash_code_method(&self) -> Option<MethodDefinition> {
        let expression = self.language.hash_code_expression?;
        let fields: Vec<&str> = self
            .definition
            .properties
            .iter()
            .map(|property| property.name.as_str())
            .collect();
        let value = fill(expression, &[("fields", &fields.join(", "))]);

        Some(
            MethodDefinition::new("hashCode", Vec::new(), TypeDefinition::named(self.language.hash_code_type))
                .override_method()
                .with_body(vec![Statement::line(self.language.return_statement(&value))]),
        )
    }
}

impl ClassParser for ModelClassParser<'_> {
    fn class_name(&self) -> String {
        self.definition.name.clone()
    }

    fn parse(&self) -> Result<ClassDefinition> {
        let definition = self.definition;
        let mut class = ClassDefinition::new(&definition.name, &self.settings.package);
        // A data class needs at least one field in some languages.
        class.is_data_class = !definition.properties.is_empty();
        class.inherits_from = self.settings.inherits_from.clone();
        class.implements = self.settings.implements_interfaces.clone();

        for property in &definition.properties {
            let declared = property_type(&definition.name, property);
            let hoisted = property
                .enum_values()
                .map(|values| EnumDefinition::new(&enum_name(&definition.name, &property.name), values));

            for name in declared.named_types() {
                if hoisted.as_ref().map_or(true, |e| e.name != name) {
                    class.add_import(Import::class(&self.settings.package, name));
                }
            }

            let default = self.default_value(property, &declared);
            class
                .properties
                .push(PropertyDefinition::field(&property.name, declared, default));
            class.enums.extend(hoisted);
        }

        class.constructor = Some(ConstructorDefinition::new(
            &definition.name,
            class.properties.iter().map(PropertyDefinition::to_parameter).collect(),
        ));

        class.methods.push(self.equals_method());
        if self.language.needs_hash_code_method {
            class.methods.extend(self.hash_code_method());
        }

        debug!(
            class = %class.name,
            properties = class.properties.len(),
            enums = class.enums.len(),
            "parsed model class"
        );
        Ok(class)
    }
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
