use super::{DefinitionGraph, DefinitionReferenceHelper, Relationship};
use crate::error::Result;
use crate::naming::lower_first;
use tracing::{debug, info};

/// Name of the foreign key a child carries to point back at `owner`.
pub fn foreign_key_name(owner: &str) -> String {
    format!("{}Id", lower_first(owner))
}

/// Classify every property that points at a table-backed definition and link
/// both sides of the edge.
///
/// The edge is stored on the referenced definition. Its `refers_to` back-link
/// goes on the owner's property, except for N_TO_ONE where it goes on the
/// child's foreign key.
///
/// Must run on a closed graph. Existing edges are dropped first, so running it
/// twice yields the same graph.
pub fn prepare_references(graph: &mut DefinitionGraph) -> Result<()> {
    for definition in graph.iter_mut() {
        definition.references.clear();
        for property in &mut definition.properties {
            property.refers_to = None;
        }
    }

    let mut edges = 0;
    for owner in graph.names() {
        let property_count = graph.require(&owner)?.properties.len();

        for index in 0..property_count {
            let (property_name, target, is_array) = {
                let property = &graph.require(&owner)?.properties[index];
                (
                    property.name.clone(),
                    property.property_type.element().name.clone(),
                    property.property_type.is_array(),
                )
            };
            if !graph.needs_table(&target) {
                continue;
            }

            let reference = if is_array {
                let foreign_key = foreign_key_name(&owner);
                if graph.require(&target)?.property(&foreign_key).is_some() {
                    DefinitionReferenceHelper {
                        definition: owner.clone(),
                        property: foreign_key,
                        relationship: Relationship::NToOne,
                    }
                } else {
                    DefinitionReferenceHelper {
                        definition: owner.clone(),
                        property: property_name.clone(),
                        relationship: Relationship::OneToN,
                    }
                }
            } else {
                DefinitionReferenceHelper {
                    definition: owner.clone(),
                    property: property_name.clone(),
                    relationship: Relationship::OneToOne,
                }
            };

            debug!(
                owner = %owner,
                property = %property_name,
                target = %target,
                relationship = ?reference.relationship,
                "linked reference"
            );
            let anchor = if reference.relationship == Relationship::NToOne {
                target.clone()
            } else {
                owner.clone()
            };
            let anchor_property = reference.property.clone();
            let key = graph.attach_reference(&target, reference)?;
            let anchor = graph.require_mut(&anchor)?;
            if let Some(property) = anchor.properties.iter_mut().find(|p| p.name == anchor_property) {
                property.refers_to = Some(key);
            }
            edges += 1;
        }
    }

    info!(edges, "relationship inference complete");
    Ok(())
}
