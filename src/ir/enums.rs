use super::{render, Printable};
use crate::error::Result;
use crate::languages::LanguageDefinition;
use crate::naming::to_enum_constant;
use serde::Serialize;
use tera::Context;

/// An enum hoisted out of an inline `enum:` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Serialize)]
struct EnumConstant<'a> {
    name: String,
    value: &'a str,
}

impl EnumDefinition {
    pub fn new(name: &str, values: &[String]) -> Self {
        Self {
            name: name.to_string(),
            values: values.to_vec(),
        }
    }
}

impl Printable for EnumDefinition {
    fn print(&self, language: &LanguageDefinition) -> Result<String> {
        let mut constants: Vec<EnumConstant> = Vec::with_capacity(self.values.len());
        for value in &self.values {
            let name = to_enum_constant(value);
            if constants.iter().any(|c| c.name == name) {
                continue;
            }
            constants.push(EnumConstant { name, value });
        }

        let mut context = Context::new();
        context.insert("name", &self.name);
        context.insert("constants", &constants);
        render(language.enum_template, &context)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::languages::SupportedLanguage;

    fn status() -> EnumDefinition {
        EnumDefinition::new(
            "PetStatus",
            &["available".to_string(), "sold-out".to_string()],
        )
    }

    #[test]
    fn EnumDefinition___typescript___prints_string_enum() {
        let printed = status().print(SupportedLanguage::TypeScript.definition()).unwrap();

        assert_eq!(
            printed,
            "export enum PetStatus {\n    AVAILABLE = \"available\",\n    SOLD_OUT = \"sold-out\",\n}"
        );
    }

    #[test]
    fn EnumDefinition___python___subclasses_enum() {
        let printed = status().print(SupportedLanguage::Python.definition()).unwrap();

        assert_eq!(
            printed,
            "class PetStatus(Enum):\n    AVAILABLE = \"available\"\n    SOLD_OUT = \"sold-out\""
        );
    }

    #[test]
    fn EnumDefinition___kotlin___keeps_wire_value_and_lookup() {
        let printed = status().print(SupportedLanguage::Kotlin.definition()).unwrap();

        assert!(printed.starts_with("enum class PetStatus(val value: String) {\n    AVAILABLE(\"available\"),\n    SOLD_OUT(\"sold-out\");"));
        assert!(printed.contains("fun fromValue(value: String?): PetStatus?"));
    }

    #[test]
    fn EnumDefinition___colliding_constants___keep_first_value() {
        let duplicated = EnumDefinition::new("Mode", &["on".to_string(), "ON".to_string()]);

        let printed = duplicated.print(SupportedLanguage::Java.definition()).unwrap();

        assert_eq!(printed.matches("ON(").count(), 1);
    }
}
