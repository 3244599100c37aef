//! The definition graph: one [`DefinitionHelper`] per model, keyed by name.
//!
//! The graph is an arena. Definitions never hold each other; a property that
//! points at another model does so by type name, and a property that takes
//! part in a relationship holds a [`ReferenceKey`] into the `references` list
//! of the definition that owns the edge.
//!
//! Lifecycle of one conversion run:
//!
//! 1. [`builder::prepare_definitions`] creates a node per `definitions` entry.
//! 2. [`builder::create_definitions_from_properties`] names every anonymous
//!    object until a pass creates nothing new.
//! 3. [`builder::verify_closure`] checks that every type name resolves.
//! 4. [`references::prepare_references`] classifies and links relationships.
//!
//! After step 4 the graph is only read.

pub mod builder;
pub mod references;

use crate::error::{GeneratorError, Result};
use crate::parsers::{resolve_reference, YamlProperty, YamlType, NATIVE_TYPES};
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;

pub use builder::{create_definitions_from_properties, prepare_definitions, verify_closure};
pub use references::{foreign_key_name, prepare_references};

/// Property name that marks a definition as table-backed.
pub const ID_PROPERTY: &str = "id";

/// How two table-backed definitions relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relationship {
    OneToOne,
    OneToN,
    NToOne,
}

/// A property type, `$ref` resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionTypeHelper {
    pub name: String,
    /// Element type of an array.
    pub sub_type: Option<Box<DefinitionTypeHelper>>,
    pub is_enum: bool,
}

impl DefinitionTypeHelper {
    pub fn new(name: &str, sub_type: Option<DefinitionTypeHelper>, is_enum: bool) -> Self {
        Self {
            name: resolve_reference(name),
            sub_type: sub_type.map(Box::new),
            is_enum,
        }
    }

    pub fn from_yaml(yaml: &YamlType) -> Self {
        Self::new(
            &yaml.name,
            yaml.items.as_deref().map(Self::from_yaml),
            yaml.is_enum,
        )
    }

    pub fn is_native(&self) -> bool {
        NATIVE_TYPES.contains(&self.name.as_str())
    }

    pub fn is_array(&self) -> bool {
        self.name == "array"
    }

    /// The array element type, or the type itself for scalars.
    pub fn element(&self) -> &DefinitionTypeHelper {
        match &self.sub_type {
            Some(sub_type) if self.is_array() => sub_type,
            _ => self,
        }
    }

    pub fn element_mut(&mut self) -> &mut DefinitionTypeHelper {
        if !self.is_array() {
            return self;
        }
        match self {
            DefinitionTypeHelper {
                sub_type: Some(sub_type),
                ..
            } => &mut **sub_type,
            scalar => scalar,
        }
    }

    /// Native or enum element: nothing to resolve in the graph.
    pub fn is_scalar_element(&self) -> bool {
        let element = self.element();
        element.is_native() || element.is_enum
    }
}

/// Position of an edge inside the `references` list of its owning definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReferenceKey {
    pub definition: String,
    pub index: usize,
}

/// A classified relationship, stored on the referenced definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionReferenceHelper {
    /// The definition on the other end of the edge (the one holding the property
    /// that triggered it).
    pub definition: String,
    /// The property the edge is anchored on: the owner's property for ONE_TO_ONE
    /// and ONE_TO_N, the foreign key on the referenced side for N_TO_ONE.
    pub property: String,
    pub relationship: Relationship,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionPropertyHelper {
    pub name: String,
    pub property_type: DefinitionTypeHelper,
    pub required: bool,
    pub enum_values: Option<Vec<String>>,
    pub default: Option<Value>,
    pub sub_properties: Vec<DefinitionPropertyHelper>,
    pub refers_to: Option<ReferenceKey>,
}

impl DefinitionPropertyHelper {
    pub fn new(name: &str, property_type: DefinitionTypeHelper, required: bool) -> Self {
        Self {
            name: name.to_string(),
            property_type,
            required,
            enum_values: None,
            default: None,
            sub_properties: Vec::new(),
            refers_to: None,
        }
    }

    pub fn from_yaml(yaml: &YamlProperty) -> Self {
        Self {
            name: yaml.name.clone(),
            property_type: DefinitionTypeHelper::from_yaml(&yaml.property_type),
            required: yaml.required,
            enum_values: yaml.enum_values.clone(),
            default: yaml.default.clone(),
            sub_properties: yaml.properties.iter().map(Self::from_yaml).collect(),
            refers_to: None,
        }
    }

    /// Enum values of the property or of its array elements.
    pub fn enum_values(&self) -> Option<&[String]> {
        if self.property_type.element().is_enum {
            self.enum_values.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionHelper {
    pub name: String,
    pub properties: Vec<DefinitionPropertyHelper>,
    pub needs_table: bool,
    /// Incoming relationships.
    pub references: Vec<DefinitionReferenceHelper>,
    /// Set when this definition is stored as prefixed columns of its owner.
    pub use_fields_as_part_of_the_same_table: bool,
    pub tag: Option<String>,
}

impl DefinitionHelper {
    pub fn new(name: &str, properties: Vec<DefinitionPropertyHelper>) -> Self {
        let needs_table = properties.iter().any(|p| p.name == ID_PROPERTY);
        Self {
            name: name.to_string(),
            properties,
            needs_table,
            references: Vec::new(),
            use_fields_as_part_of_the_same_table: false,
            tag: None,
        }
    }

    pub fn property(&self, name: &str) -> Option<&DefinitionPropertyHelper> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn id_property(&self) -> Option<&DefinitionPropertyHelper> {
        self.property(ID_PROPERTY)
    }
}

/// Arena of definitions, keyed by name, in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DefinitionGraph {
    definitions: IndexMap<String, DefinitionHelper>,
}

impl DefinitionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, definition: DefinitionHelper) {
        self.definitions.insert(definition.name.clone(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&DefinitionHelper> {
        self.definitions.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DefinitionHelper> {
        self.definitions.get_mut(name)
    }

    /// Lookup that treats a missing name as a logic error.
    pub fn require(&self, name: &str) -> Result<&DefinitionHelper> {
        self.get(name)
            .ok_or_else(|| GeneratorError::UnknownDefinition(name.to_string()))
    }

    pub fn require_mut(&mut self, name: &str) -> Result<&mut DefinitionHelper> {
        self.get_mut(name)
            .ok_or_else(|| GeneratorError::UnknownDefinition(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn needs_table(&self, name: &str) -> bool {
        self.get(name).is_some_and(|d| d.needs_table)
    }

    pub fn names(&self) -> Vec<String> {
        self.definitions.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DefinitionHelper> {
        self.definitions.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DefinitionHelper> {
        self.definitions.values_mut()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Append an edge to `target`'s references and return its key.
    pub fn attach_reference(
        &mut self,
        target: &str,
        reference: DefinitionReferenceHelper,
    ) -> Result<ReferenceKey> {
        let definition = self.require_mut(target)?;
        definition.references.push(reference);
        Ok(ReferenceKey {
            definition: target.to_string(),
            index: definition.references.len() - 1,
        })
    }

    pub fn reference(&self, key: &ReferenceKey) -> Option<&DefinitionReferenceHelper> {
        self.get(&key.definition)?.references.get(key.index)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn property(name: &str, type_name: &str) -> DefinitionPropertyHelper {
        DefinitionPropertyHelper::new(name, DefinitionTypeHelper::new(type_name, None, false), false)
    }

    #[test]
    fn DefinitionHelper___id_property___needs_table() {
        let with_id = DefinitionHelper::new("Pet", vec![property("id", "integer")]);
        let without_id = DefinitionHelper::new("Address", vec![property("identifier", "string")]);

        assert!(with_id.needs_table);
        assert!(!without_id.needs_table);
    }

    #[test]
    fn DefinitionTypeHelper___ref_name___resolves_idempotently() {
        let once = DefinitionTypeHelper::new("#/definitions/Pet", None, false);
        let twice = DefinitionTypeHelper::new(&once.name, None, false);

        assert_eq!(once.name, "Pet");
        assert_eq!(once, twice);
    }

    #[test]
    fn DefinitionTypeHelper___element___unwraps_arrays_only() {
        let array = DefinitionTypeHelper::new(
            "array",
            Some(DefinitionTypeHelper::new("Tag", None, false)),
            false,
        );
        let scalar = DefinitionTypeHelper::new("string", None, false);

        assert_eq!(array.element().name, "Tag");
        assert_eq!(scalar.element().name, "string");
        assert!(!array.is_scalar_element());
        assert!(scalar.is_scalar_element());
    }

    #[test]
    fn DefinitionTypeHelper___element_mut___rewrites_array_element_or_scalar() {
        let mut array = DefinitionTypeHelper::new(
            "array",
            Some(DefinitionTypeHelper::new("object", None, false)),
            false,
        );
        let mut scalar = DefinitionTypeHelper::new("object", None, false);

        *array.element_mut() = DefinitionTypeHelper::new("Tag", None, false);
        *scalar.element_mut() = DefinitionTypeHelper::new("Owner", None, false);

        assert_eq!(array.name, "array");
        assert_eq!(array.element().name, "Tag");
        assert_eq!(scalar.name, "Owner");
    }

    #[test]
    fn DefinitionGraph___attach_reference___returns_resolvable_key() {
        let mut graph = DefinitionGraph::new();
        graph.insert(DefinitionHelper::new("Pet", vec![property("id", "integer")]));

        let key = graph
            .attach_reference(
                "Pet",
                DefinitionReferenceHelper {
                    definition: "Owner".into(),
                    property: "pet".into(),
                    relationship: Relationship::OneToOne,
                },
            )
            .unwrap();

        assert_eq!(key.index, 0);
        assert_eq!(graph.reference(&key).unwrap().definition, "Owner");
    }

    #[test]
    fn DefinitionGraph___require_missing___is_unknown_definition() {
        let graph = DefinitionGraph::new();

        assert!(matches!(
            graph.require("Ghost"),
            Err(GeneratorError::UnknownDefinition(name)) if name == "Ghost"
        ));
    }
}
