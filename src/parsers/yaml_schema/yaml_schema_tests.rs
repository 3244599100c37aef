#![allow(non_snake_case)]

use super::*;

fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

#[test]
fn resolve_reference___strips_definition_path() {
    assert_eq!(resolve_reference("#/definitions/Pet"), "Pet");
    assert_eq!(resolve_reference("Pet"), "Pet");
    assert_eq!(resolve_reference(&resolve_reference("#/definitions/Pet")), "Pet");
}

#[test]
fn YamlType___ref_schema___resolves_to_bare_name() {
    let schema = yaml("$ref: '#/definitions/Category'");

    let parsed = YamlType::from_schema(&schema);

    assert_eq!(parsed.name, "Category");
    assert!(!parsed.is_native());
    assert!(parsed.items.is_none());
}

#[test]
fn YamlType___array_of_refs___resolves_item_name() {
    let schema = yaml("type: array\nitems:\n  $ref: '#/definitions/Tag'\n");

    let parsed = YamlType::from_schema(&schema);

    assert!(parsed.is_array());
    assert_eq!(parsed.items.as_deref().map(|t| t.name.as_str()), Some("Tag"));
}

#[test]
fn YamlType___missing_type___defaults_to_object() {
    let parsed = YamlType::from_schema(&yaml("properties:\n  a:\n    type: string\n"));

    assert_eq!(parsed.name, "object");
}

#[test]
fn YamlType___native_names___are_native() {
    for name in NATIVE_TYPES {
        assert!(YamlType::new(name, None, false).is_native(), "{name}");
    }
    assert!(!YamlType::new("array", None, false).is_native());
}

#[test]
fn YamlDefinition___reads_required_enum_default_and_inline_objects() {
    let schema = yaml(
        r#"
required: [name]
properties:
  id:
    type: integer
  name:
    type: string
  status:
    type: string
    enum: [available, sold]
    default: available
  address:
    type: object
    properties:
      street:
        type: string
"#,
    );

    let definition = YamlDefinition::from_schema("Pet", &schema);

    let names: Vec<&str> = definition.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["id", "name", "status", "address"]);
    assert!(definition.properties[1].required);
    assert!(!definition.properties[0].required);

    let status = &definition.properties[2];
    assert!(status.property_type.is_enum);
    assert_eq!(status.enum_values.as_deref(), Some(&["available".to_string(), "sold".to_string()][..]));
    assert_eq!(status.default, Some(Value::String("available".into())));

    let address = &definition.properties[3];
    assert_eq!(address.property_type.name, "object");
    assert_eq!(address.properties.len(), 1);
    assert_eq!(address.properties[0].name, "street");
}

#[test]
fn YamlProperty___array_of_inline_objects___takes_fields_from_items() {
    let schema = yaml(
        r#"
type: array
items:
  type: object
  properties:
    quantity:
      type: integer
"#,
    );

    let property = YamlProperty::from_schema("lines", &schema, false);

    assert!(property.property_type.is_array());
    assert_eq!(property.properties.len(), 1);
    assert_eq!(property.properties[0].name, "quantity");
}

#[test]
fn normalize_paths___splits_methods_and_reads_parameters_and_responses() {
    let paths = yaml(
        r#"
/pets/{id}:
  parameters:
    - name: id
      in: path
      required: true
      type: string
  get:
    tags: [pet]
    responses:
      200:
        description: ok
        schema:
          $ref: '#/definitions/Pet'
      "404":
        description: missing
  delete:
    parameters:
      - name: force
        in: query
        type: boolean
    responses:
      default:
        description: whatever
"#,
    );

    let normalized = normalize_paths(paths.as_mapping().unwrap());

    assert_eq!(normalized.len(), 2);
    let get = &normalized[0];
    assert_eq!(get.method, HttpMethod::Get);
    assert_eq!(get.tag.as_deref(), Some("pet"));
    assert_eq!(get.parameters.len(), 1);
    assert_eq!(get.parameters[0].location, ParameterLocation::Path);
    assert_eq!(get.responses.len(), 2);
    assert_eq!(get.responses[0].status_code, 200);
    assert_eq!(get.responses[0].response_type.as_ref().map(|t| t.name.as_str()), Some("Pet"));
    assert_eq!(get.responses[1].status_code, 404);
    assert!(get.responses[1].response_type.is_none());

    let delete = &normalized[1];
    assert_eq!(delete.method, HttpMethod::Delete);
    assert_eq!(delete.parameters.len(), 2);
    assert!(delete.responses.is_empty());
}

#[test]
fn normalize_paths___body_parameter___reads_schema() {
    let paths = yaml(
        r#"
/pets:
  post:
    parameters:
      - name: pet
        in: body
        required: true
        schema:
          $ref: '#/definitions/Pet'
"#,
    );

    let normalized = normalize_paths(paths.as_mapping().unwrap());

    let body = &normalized[0].parameters[0];
    assert_eq!(body.location, ParameterLocation::Body);
    assert_eq!(body.parameter_type.name, "Pet");
    assert!(body.required);
}
