#![allow(non_snake_case)]

use super::*;
use crate::ir::{ParameterDefinition, Statement, TypeDefinition};
use crate::languages::{NativeType, SupportedLanguage};
use test_case::test_case;

fn pet() -> ClassDefinition {
    let mut class = ClassDefinition::new("Pet", "com.example.model");
    class.is_data_class = true;
    class.properties = vec![
        PropertyDefinition::field("id", TypeDefinition::native(NativeType::Integer), None),
        PropertyDefinition::field(
            "status",
            TypeDefinition::named("PetStatus").nullable(true),
            Some("null".to_string()),
        ),
    ];
    class.constructor = Some(ConstructorDefinition::new(
        "Pet",
        class.properties.iter().map(PropertyDefinition::to_parameter).collect(),
    ));
    class.enums = vec![EnumDefinition::new("PetStatus", &["sold".to_string()])];
    class
}

fn print(class: &ClassDefinition, language: SupportedLanguage) -> String {
    class.print(language.definition()).unwrap()
}

#[test]
fn ClassDefinition___kotlin_data_class___declares_constructor_in_header() {
    let printed = print(&pet(), SupportedLanguage::Kotlin);

    assert!(printed.starts_with("package com.example.model\n\nimport java.util.Objects\n\n"));
    assert!(printed.contains("data class Pet(val id: Long, val status: PetStatus? = null) {"));
    assert!(!printed.contains("var id"));
    assert!(printed.contains("    enum class PetStatus(val value: String) {"));
}

#[test]
fn ClassDefinition___java_class___declares_fields_and_constructor() {
    let printed = print(&pet(), SupportedLanguage::Java);

    assert!(printed.contains("public class Pet {\n    public long id;\n    public PetStatus status = null;\n\n    public Pet(long id, PetStatus status) {\n        this.id = id;\n        this.status = status;\n    }"));
    assert!(printed.contains("    public enum PetStatus {"));
}

#[test]
fn ClassDefinition___python_data_class___uses_decorator_and_fields() {
    let printed = print(&pet(), SupportedLanguage::Python);

    assert!(printed.contains("@dataclass(kw_only=True)\nclass Pet:\n    id: int\n    status: Optional[PetStatus] = null"));
    assert!(!printed.contains("__init__"));
}

#[test]
fn ClassDefinition___typescript___hoists_enum_before_class() {
    let printed = print(&pet(), SupportedLanguage::TypeScript);

    let enum_at = printed.find("export enum PetStatus").unwrap();
    let class_at = printed.find("export class Pet").unwrap();
    assert!(enum_at < class_at);
    assert!(printed.contains("constructor(public id: number, public status: PetStatus | null = null) {"));
}

#[test_case(SupportedLanguage::TypeScript, "}\n\n\nexport class Pet")]
#[test_case(SupportedLanguage::Python, "\n\n\n@dataclass(kw_only=True)")]
fn ClassDefinition___hoisted_enum___is_two_blank_lines_above_class(language: SupportedLanguage, expected: &str) {
    let printed = print(&pet(), language);

    assert!(printed.contains(expected), "{printed}");
    assert!(!printed.contains("\n\n\n\n"), "{printed}");
}

#[test]
fn ClassDefinition___supertypes___follow_language_layout() {
    let mut class = ClassDefinition::new("GetPetsApi", "api");
    class.inherits_from = Some("com.example.BaseRequest".to_string());
    class.implements = vec!["com.example.ApiRequest".to_string(), "Serializable".to_string()];

    assert!(print(&class, SupportedLanguage::Java)
        .contains("public class GetPetsApi extends BaseRequest implements ApiRequest, Serializable {"));
    assert!(print(&class, SupportedLanguage::Kotlin)
        .contains("class GetPetsApi : BaseRequest(), ApiRequest, Serializable {"));
    assert!(print(&class, SupportedLanguage::Python)
        .contains("class GetPetsApi(BaseRequest, ApiRequest, Serializable):\n    pass"));
    assert!(print(&class, SupportedLanguage::Java).contains("import com.example.ApiRequest;"));
}

#[test]
fn ClassDefinition___static_class___has_no_constructor() {
    let mut class = ClassDefinition::new("PetTableSchema", "db");
    class.is_static = true;
    class.constants = vec![PropertyDefinition::constant(
        "TABLE_NAME",
        TypeDefinition::native(NativeType::String),
        "\"pet\"".to_string(),
    )];
    class.methods = vec![MethodDefinition::new(
        "createTable",
        vec![ParameterDefinition::new("db", TypeDefinition::named("Database"))],
        TypeDefinition::void(),
    )
    .static_method()
    .with_body(vec![Statement::line("db.execute(\"\", listOf<Any?>())")])];

    let printed = print(&class, SupportedLanguage::Kotlin);

    assert!(printed.contains("object PetTableSchema {\n    const val TABLE_NAME: String = \"pet\"\n\n    fun createTable(db: Database): Unit {"));
}

#[test]
fn ClassDefinition___imports___skip_own_package_when_language_allows() {
    let mut class = ClassDefinition::new("PetTableSchema", "db");
    class.add_import(Import::class("db", "Database"));
    class.add_import(Import::class("model", "Pet"));
    class.add_import(Import::class("model", "Pet"));

    let java = print(&class, SupportedLanguage::Java);
    let typescript = print(&class, SupportedLanguage::TypeScript);
    let python = print(&class, SupportedLanguage::Python);

    assert!(!java.contains("import db.Database;"));
    assert_eq!(java.matches("import model.Pet;").count(), 1);
    assert!(typescript.contains("import { Database } from \"./Database\";"));
    assert!(typescript.contains("import { Pet } from \"model/Pet\";"));
    assert!(python.contains("from model.pet import Pet"));
}
