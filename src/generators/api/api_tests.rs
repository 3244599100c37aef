#![allow(non_snake_case)]

use super::*;
use crate::config::ClassKind;
use crate::languages::SupportedLanguage;
use crate::operation_processor::convert;
use crate::parsers::{normalize_definitions, normalize_paths};
use crate::schema_processor::prepare_definitions;

const PET: &str = r#"
Pet:
  properties:
    id:
      type: integer
    name:
      type: string
"#;

fn helpers(paths: &str) -> Vec<PathHelper> {
    let definitions: serde_yaml::Value = serde_yaml::from_str(PET).unwrap();
    let paths: serde_yaml::Value = serde_yaml::from_str(paths).unwrap();
    let mut graph = prepare_definitions(&normalize_definitions(definitions.as_mapping().unwrap()));
    convert(&normalize_paths(paths.as_mapping().unwrap()), &mut graph).unwrap()
}

fn parse(path: &PathHelper, language: SupportedLanguage, settings: ClassKindSettings) -> ClassDefinition {
    let model = ClassKindSettings::new(language, ClassKind::Model);
    ApiClassParser::new(path, language.definition(), &settings, &model)
        .parse()
        .unwrap()
}

fn printed(class: &ClassDefinition, name: &str, language: SupportedLanguage) -> String {
    class
        .methods
        .iter()
        .find(|m| m.name == name)
        .unwrap()
        .print(language.definition())
        .unwrap()
}

const GET_PET: &str = r#"
/pets/{id}:
  get:
    parameters:
      - name: id
        in: path
        required: true
        type: string
    responses:
      200:
        description: ok
        schema:
          $ref: '#/definitions/Pet'
      404:
        description: missing
        schema:
          type: string
"#;

const LIST_PETS: &str = r#"
/owners/{ownerId}/pets:
  get:
    parameters:
      - name: ownerId
        in: path
        required: true
        type: string
      - name: limit
        in: query
        type: integer
    responses:
      200:
        description: ok
        schema:
          type: array
          items:
            $ref: '#/definitions/Pet'
"#;

const ADD_PET: &str = r#"
/pets:
  post:
    parameters:
      - name: pet
        in: body
        required: true
        schema:
          $ref: '#/definitions/Pet'
    responses:
      201:
        description: created
"#;

#[test]
fn split_url___separates_literals_and_parameters() {
    assert_eq!(
        split_url("/users/{userId}/orders/{orderId}"),
        [
            UrlPart::Literal("/users/"),
            UrlPart::Parameter("userId"),
            UrlPart::Literal("/orders/"),
            UrlPart::Parameter("orderId"),
        ]
    );
    assert_eq!(split_url("/pets"), [UrlPart::Literal("/pets")]);
}

#[test]
fn ApiClassParser___class_name___appends_api_suffix() {
    let paths = helpers(GET_PET);
    let settings = ClassKindSettings::new(SupportedLanguage::Kotlin, ClassKind::Api);

    let parser = ApiClassParser::new(&paths[0], SupportedLanguage::Kotlin.definition(), &settings, &settings);

    assert_eq!(parser.class_name(), "GetPetsByIdApi");
}

#[test]
fn ApiClassParser___path_parameter___is_interpolated_into_url() {
    let paths = helpers(GET_PET);
    let settings = ClassKindSettings::new(SupportedLanguage::Kotlin, ClassKind::Api);

    let class = parse(&paths[0], SupportedLanguage::Kotlin, settings);

    let names: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["id"]);
    let get_url = printed(&class, "getUrl", SupportedLanguage::Kotlin);
    assert!(get_url.contains("fun getUrl(): String"), "{get_url}");
    assert!(get_url.contains("return \"/pets/\" + this.id"), "{get_url}");
}

#[test]
fn ApiClassParser___query_parameter___is_appended_only_when_set() {
    let paths = helpers(LIST_PETS);
    let settings = ClassKindSettings::new(SupportedLanguage::Kotlin, ClassKind::Api);

    let class = parse(&paths[0], SupportedLanguage::Kotlin, settings);

    let get_url = printed(&class, "getUrl", SupportedLanguage::Kotlin);
    for line in [
        "var url = \"/owners/\" + this.parameters.ownerId + \"/pets\"",
        "var query = \"\"",
        "if (this.parameters.limit != null) {",
        "query += \"&limit=\" + this.parameters.limit",
        "return if (query.isEmpty()) url else url + \"?\" + query.substring(1)",
    ] {
        assert!(get_url.contains(line), "missing {line} in {get_url}");
    }
}

#[test]
fn ApiClassParser___several_parameters___import_request_parameters_type() {
    let paths = helpers(LIST_PETS);
    let settings = ClassKindSettings::new(SupportedLanguage::Java, ClassKind::Api);

    let class = parse(&paths[0], SupportedLanguage::Java, settings);

    let parameters = &class.properties[0];
    assert_eq!(parameters.name, "parameters");
    assert_eq!(
        parameters.property_type,
        TypeDefinition::named("GetOwnersByOwnerIdPetsRequestParameters")
    );
    assert_eq!(class.imports, [Import::class("model", "GetOwnersByOwnerIdPetsRequestParameters")]);
}

#[test]
fn ApiClassParser___python___converts_values_to_strings() {
    let paths = helpers(LIST_PETS);
    let settings = ClassKindSettings::new(SupportedLanguage::Python, ClassKind::Api);

    let class = parse(&paths[0], SupportedLanguage::Python, settings);

    let get_url = printed(&class, "getUrl", SupportedLanguage::Python);
    assert!(get_url.contains("def getUrl(self) -> str:"), "{get_url}");
    assert!(get_url.contains("if self.parameters.limit is not None:"), "{get_url}");
    assert!(
        get_url.contains("query += \"&limit=\" + str(self.parameters.limit)"),
        "{get_url}"
    );
}

#[test]
fn ApiClassParser___get_method___returns_verb() {
    let paths = helpers(ADD_PET);
    let settings = ClassKindSettings::new(SupportedLanguage::TypeScript, ClassKind::Api);

    let class = parse(&paths[0], SupportedLanguage::TypeScript, settings);

    let get_method = printed(&class, "getMethod", SupportedLanguage::TypeScript);
    assert!(get_method.contains("return \"POST\";"), "{get_method}");
}

#[test]
fn ApiClassParser___body___is_returned_by_get_body() {
    let paths = helpers(ADD_PET);
    let settings = ClassKindSettings::new(SupportedLanguage::Kotlin, ClassKind::Api);

    let class = parse(&paths[0], SupportedLanguage::Kotlin, settings);

    let names: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["body"]);
    let get_body = printed(&class, "getBody", SupportedLanguage::Kotlin);
    assert!(get_body.contains("fun getBody(): Any?"), "{get_body}");
    assert!(get_body.contains("return this.body"), "{get_body}");
    let get_url = printed(&class, "getUrl", SupportedLanguage::Kotlin);
    assert!(get_url.contains("return \"/pets\""), "{get_url}");
}

#[test]
fn ApiClassParser___no_body___returns_null() {
    let paths = helpers(GET_PET);
    let settings = ClassKindSettings::new(SupportedLanguage::Java, ClassKind::Api);

    let class = parse(&paths[0], SupportedLanguage::Java, settings);

    let get_body = printed(&class, "getBody", SupportedLanguage::Java);
    assert!(get_body.contains("return null;"), "{get_body}");
}

#[test]
fn ApiClassParser___response_types___are_printed_as_strings() {
    let paths = helpers(GET_PET);
    let settings = ClassKindSettings::new(SupportedLanguage::Kotlin, ClassKind::Api);

    let class = parse(&paths[0], SupportedLanguage::Kotlin, settings);

    let success = printed(&class, "getSuccessResponseType", SupportedLanguage::Kotlin);
    assert!(success.contains("return \"Pet\""), "{success}");
    let error = printed(&class, "getErrorResponseType", SupportedLanguage::Kotlin);
    assert!(error.contains("return \"String\""), "{error}");
}

#[test]
fn ApiClassParser___array_response_and_missing_error___print_list_and_null() {
    let paths = helpers(LIST_PETS);
    let settings = ClassKindSettings::new(SupportedLanguage::TypeScript, ClassKind::Api);

    let class = parse(&paths[0], SupportedLanguage::TypeScript, settings);

    let success = printed(&class, "getSuccessResponseType", SupportedLanguage::TypeScript);
    assert!(success.contains("return \"Array<Pet>\";"), "{success}");
    let error = printed(&class, "getErrorResponseType", SupportedLanguage::TypeScript);
    assert!(error.contains("return null;"), "{error}");
}

#[test]
fn ApiClassParser___configured_interface___marks_accessors_override() {
    let paths = helpers(GET_PET);
    let mut settings = ClassKindSettings::new(SupportedLanguage::Kotlin, ClassKind::Api);
    settings.implements_interfaces = vec!["com.example.api.ApiRequest".to_string()];

    let class = parse(&paths[0], SupportedLanguage::Kotlin, settings);
    let file = class.print(SupportedLanguage::Kotlin.definition()).unwrap();

    assert!(class.methods.iter().all(|m| m.is_override));
    assert!(file.contains("import com.example.api.ApiRequest"), "{file}");
    assert!(file.contains("class GetPetsByIdApi(val id: String) : ApiRequest {"), "{file}");
    assert!(file.contains("override fun getMethod(): String"), "{file}");
}
