#![allow(non_snake_case)]

use super::*;
use crate::config::ClassKind;
use crate::ir::Printable;
use crate::languages::SupportedLanguage;
use crate::schema_processor::DefinitionTypeHelper;

fn native(name: &str, type_name: &str, required: bool) -> DefinitionPropertyHelper {
    DefinitionPropertyHelper::new(name, DefinitionTypeHelper::new(type_name, None, false), required)
}

fn array_of(name: &str, type_name: &str) -> DefinitionPropertyHelper {
    DefinitionPropertyHelper::new(
        name,
        DefinitionTypeHelper::new("array", Some(DefinitionTypeHelper::new(type_name, None, false)), false),
        false,
    )
}

fn pet() -> DefinitionHelper {
    DefinitionHelper::new(
        "Pet",
        vec![
            native("id", "integer", true),
            native("name", "string", false),
            array_of("tags", "string"),
        ],
    )
}

fn parse(definition: &DefinitionHelper, language: SupportedLanguage) -> ClassDefinition {
    let settings = ClassKindSettings::new(language, ClassKind::Model);
    ModelClassParser::new(definition, language.definition(), &settings)
        .parse()
        .unwrap()
}

#[test]
fn ModelClassParser___pet___has_one_field_per_property() {
    let class = parse(&pet(), SupportedLanguage::Kotlin);

    let names: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["id", "name", "tags"]);
    assert!(class.is_data_class);
    assert_eq!(class.constructor.as_ref().unwrap().parameters.len(), 3);
}

#[test]
fn ModelClassParser___equals___compares_every_property_in_order() {
    let language = SupportedLanguage::Kotlin.definition();
    let class = parse(&pet(), SupportedLanguage::Kotlin);

    let equals = class.methods.iter().find(|m| m.name == "equals").unwrap();
    let printed = equals.print(language).unwrap();

    let expected = "return this.id == that.id \
        && Objects.equals(this.name, that.name) \
        && this.tags?.toList() == that.tags?.toList()";
    assert!(printed.contains(expected), "{printed}");
    assert!(printed.contains("override fun equals(other: Any?): Boolean {"));
    assert!(printed.contains("if (other !is Pet) return false"));
}

#[test]
fn ModelClassParser___object_property___uses_equality_method_form() {
    let owner = DefinitionHelper::new("Owner", vec![native("pet", "Pet", false)]);
    let class = parse(&owner, SupportedLanguage::Kotlin);

    let printed = class.methods[0].print(SupportedLanguage::Kotlin.definition()).unwrap();

    assert!(printed.contains("(this.pet?.equals(that.pet) ?: (that.pet == null))"));
}

#[test]
fn ModelClassParser___java___adds_hash_code() {
    let class = parse(&pet(), SupportedLanguage::Java);

    let hash_code = class.methods.iter().find(|m| m.name == "hashCode").unwrap();
    let printed = hash_code.print(SupportedLanguage::Java.definition()).unwrap();

    assert!(printed.contains("return Objects.hash(id, name, tags);"));
    assert!(!parse(&pet(), SupportedLanguage::Kotlin)
        .methods
        .iter()
        .any(|m| m.name == "hashCode"));
}

#[test]
fn ModelClassParser___inline_enum___is_hoisted() {
    let mut status = native("status", "string", false);
    status.property_type.is_enum = true;
    status.enum_values = Some(vec!["available".to_string(), "sold".to_string()]);
    status.default = Some(Value::String("available".to_string()));
    let definition = DefinitionHelper::new("Pet", vec![native("id", "integer", true), status]);

    let class = parse(&definition, SupportedLanguage::Kotlin);

    assert_eq!(class.enums.len(), 1);
    assert_eq!(class.enums[0].name, "PetStatus");
    assert_eq!(class.properties[1].property_type, TypeDefinition::named("PetStatus").nullable(true));
    assert_eq!(class.properties[1].default.as_deref(), Some("PetStatus.AVAILABLE"));
    assert!(class.imports.is_empty());
}

#[test]
fn ModelClassParser___defaults___follow_language_support() {
    let mut limit = native("limit", "number", false);
    limit.default = Some(serde_yaml::from_str("5").unwrap());
    let definition = DefinitionHelper::new("Paging", vec![limit, native("cursor", "string", false)]);

    let python = parse(&definition, SupportedLanguage::Python);
    let java = parse(&definition, SupportedLanguage::Java);

    assert_eq!(python.properties[0].default.as_deref(), Some("5.0"));
    assert_eq!(python.properties[1].default.as_deref(), Some("None"));
    assert!(java.properties.iter().all(|p| p.default.is_none()));
}

#[test]
fn ModelClassParser___referenced_models___are_imported() {
    let owner = DefinitionHelper::new("Owner", vec![native("pet", "Pet", true), array_of("toys", "Toy")]);

    let class = parse(&owner, SupportedLanguage::TypeScript);
    let printed = class.print(SupportedLanguage::TypeScript.definition()).unwrap();

    assert!(printed.contains("import { Pet } from \"./Pet\";"));
    assert!(printed.contains("import { Toy } from \"./Toy\";"));
}

#[test]
fn ModelClassParser___no_properties___is_not_a_data_class() {
    let empty = DefinitionHelper::new("Empty", Vec::new());

    let class = parse(&empty, SupportedLanguage::Kotlin);
    let printed = class.print(SupportedLanguage::Kotlin.definition()).unwrap();

    assert!(!class.is_data_class);
    assert!(printed.contains("class Empty() {"));
    assert!(printed.contains("return true"));
}
