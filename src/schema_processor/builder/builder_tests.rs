#![allow(non_snake_case)]

use super::*;
use crate::parsers::normalize_definitions;

fn graph_from(yaml: &str) -> DefinitionGraph {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    prepare_definitions(&normalize_definitions(value.as_mapping().unwrap()))
}

fn closed_graph_from(yaml: &str) -> DefinitionGraph {
    let mut graph = graph_from(yaml);
    let names = graph.names();
    create_definitions_from_properties(&mut graph, names).unwrap();
    graph
}

const STORE: &str = r#"
Pet:
  properties:
    id:
      type: integer
    name:
      type: string
    category:
      $ref: '#/definitions/Category'
    address:
      type: object
      properties:
        street:
          type: string
        geo:
          type: object
          properties:
            lat:
              type: number
Category:
  properties:
    id:
      type: integer
    label:
      type: string
Money:
  properties:
    amount:
      type: number
"#;

#[test]
fn prepare_definitions___computes_needs_table_from_id() {
    let graph = graph_from(STORE);

    assert!(graph.needs_table("Pet"));
    assert!(graph.needs_table("Category"));
    assert!(!graph.needs_table("Money"));
    assert_eq!(graph.names(), ["Pet", "Category", "Money"]);
}

#[test]
fn create_definitions_from_properties___names_nested_inline_objects() {
    let graph = closed_graph_from(STORE);

    let pet = graph.get("Pet").unwrap();
    assert_eq!(pet.property("address").unwrap().property_type.name, "Address");
    assert!(pet.property("address").unwrap().sub_properties.is_empty());

    let address = graph.get("Address").unwrap();
    assert!(address.use_fields_as_part_of_the_same_table);
    assert!(!address.needs_table);
    assert_eq!(address.property("geo").unwrap().property_type.name, "Geo");

    let geo = graph.get("Geo").unwrap();
    assert_eq!(geo.properties.len(), 1);
    assert_eq!(geo.properties[0].name, "lat");
}

#[test]
fn create_definitions_from_properties___leaves_table_references_alone() {
    let graph = closed_graph_from(STORE);

    assert_eq!(
        graph.get("Pet").unwrap().property("category").unwrap().property_type.name,
        "Category"
    );
    assert!(!graph.contains("Category2"));
}

#[test]
fn create_definitions_from_properties___reports_created_names() {
    let mut graph = graph_from(STORE);
    let names = graph.names();

    let created = create_definitions_from_properties(&mut graph, names).unwrap();

    assert_eq!(created, ["Address", "Geo"]);
}

#[test]
fn create_definitions_from_properties___non_table_reference_gets_property_named_copy() {
    let mut graph = closed_graph_from(
        r#"
Invoice:
  properties:
    id:
      type: integer
    total:
      $ref: '#/definitions/Money'
Money:
  properties:
    amount:
      type: number
"#,
    );

    let total = graph.get("Total").unwrap();
    assert_eq!(total.properties, graph.get("Money").unwrap().properties);
    assert!(total.use_fields_as_part_of_the_same_table);
    assert_eq!(
        graph.get("Invoice").unwrap().property("total").unwrap().property_type.name,
        "Total"
    );

    // Running again is a no-op.
    let names = graph.names();
    assert!(create_definitions_from_properties(&mut graph, names).unwrap().is_empty());
}

#[test]
fn create_definitions_from_properties___same_named_reference_is_reused() {
    let graph = closed_graph_from(
        r#"
Order:
  properties:
    id:
      type: integer
    money:
      $ref: '#/definitions/Money'
Money:
  properties:
    amount:
      type: number
"#,
    );

    assert_eq!(graph.len(), 2);
    assert!(graph.get("Money").unwrap().use_fields_as_part_of_the_same_table);
}

#[test]
fn create_definitions_from_properties___different_shapes_get_owner_prefixed_names() {
    let graph = closed_graph_from(
        r#"
Person:
  properties:
    id:
      type: integer
    address:
      type: object
      properties:
        street:
          type: string
Company:
  properties:
    id:
      type: integer
    address:
      type: object
      properties:
        zip:
          type: string
"#,
    );

    assert!(graph.contains("Address"));
    assert!(graph.contains("CompanyAddress"));
    assert_eq!(
        graph.get("Company").unwrap().property("address").unwrap().property_type.name,
        "CompanyAddress"
    );
}

#[test]
fn create_definitions_from_properties___array_of_inline_objects___rewrites_element_type() {
    let graph = closed_graph_from(
        r#"
Order:
  properties:
    id:
      type: integer
    lines:
      type: array
      items:
        type: object
        properties:
          quantity:
            type: integer
"#,
    );

    let lines = graph.get("Order").unwrap().property("lines").unwrap();
    assert!(lines.property_type.is_array());
    assert_eq!(lines.property_type.element().name, "Lines");
    assert!(graph.contains("Lines"));
}

#[test]
fn create_definitions_from_properties___never_adds_id_to_existing_definitions() {
    let before = graph_from(STORE);
    let after = closed_graph_from(STORE);

    for definition in before.iter() {
        assert_eq!(after.needs_table(&definition.name), definition.needs_table);
    }
}

#[test]
fn create_definitions_from_properties___unknown_reference___is_dangling() {
    let mut graph = graph_from(
        r#"
Pet:
  properties:
    owner:
      $ref: '#/definitions/Person'
"#,
    );
    let names = graph.names();

    let err = create_definitions_from_properties(&mut graph, names).unwrap_err();

    assert!(matches!(
        err,
        GeneratorError::DanglingReference { ref target, .. } if target == "Person"
    ));
}

#[test]
fn verify_closure___closed_graph___passes() {
    let graph = closed_graph_from(STORE);

    verify_closure(&graph).unwrap();
    for definition in graph.iter() {
        for property in &definition.properties {
            let element = property.property_type.element();
            assert!(
                element.is_native() || element.is_enum || graph.contains(&element.name),
                "{}.{} -> {}",
                definition.name,
                property.name,
                element.name
            );
        }
    }
}

#[test]
fn verify_closure___unsynthesized_graph___fails() {
    let graph = graph_from(STORE);

    assert!(verify_closure(&graph).is_err());
}
