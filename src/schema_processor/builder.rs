use super::{DefinitionGraph, DefinitionHelper, DefinitionPropertyHelper, DefinitionTypeHelper};
use crate::error::{GeneratorError, Result};
use crate::naming::capitalize;
use crate::parsers::YamlDefinition;
use tracing::{debug, info};

/// Type name the normalizer gives to schemas without a `type` or `$ref`.
const ANONYMOUS_OBJECT: &str = "object";

/// Build one node per definition. Cross references are resolved later, once
/// every node exists.
pub fn prepare_definitions(yaml_definitions: &[YamlDefinition]) -> DefinitionGraph {
    let mut graph = DefinitionGraph::new();

    for yaml in yaml_definitions {
        let properties = yaml
            .properties
            .iter()
            .map(DefinitionPropertyHelper::from_yaml)
            .collect();
        let definition = DefinitionHelper::new(&yaml.name, properties);
        debug!(
            definition = %definition.name,
            needs_table = definition.needs_table,
            "prepared definition"
        );
        graph.insert(definition);
    }

    graph
}

/// Give every anonymous or flattened object property a definition of its own.
///
/// Scans the definitions named in `names`, then only the definitions created
/// by the previous pass, until a pass creates nothing. Returns the names of
/// every definition created.
pub fn create_definitions_from_properties(
    graph: &mut DefinitionGraph,
    names: Vec<String>,
) -> Result<Vec<String>> {
    let mut pending = names;
    let mut created_total = Vec::new();

    while !pending.is_empty() {
        let mut created = Vec::new();

        for owner in &pending {
            let property_count = graph.require(owner)?.properties.len();
            for index in 0..property_count {
                if let Some(name) = synthesize_property_definition(graph, owner, index)? {
                    created.push(name);
                }
            }
        }

        created_total.extend(created.iter().cloned());
        pending = created;
    }

    info!(created = created_total.len(), "definition synthesis reached a fixpoint");
    Ok(created_total)
}

/// Check that every property type is native, an enum, or a known definition.
pub fn verify_closure(graph: &DefinitionGraph) -> Result<()> {
    for definition in graph.iter() {
        for property in &definition.properties {
            let element = property.property_type.element();
            if property.property_type.is_scalar_element() || graph.contains(&element.name) {
                continue;
            }
            return Err(GeneratorError::DanglingReference {
                definition: definition.name.clone(),
                property: property.name.clone(),
                target: element.name.clone(),
            });
        }
    }
    Ok(())
}

/// Returns the name of a newly created definition, or `None` when the
/// property was left alone or pointed at an existing one.
fn synthesize_property_definition(
    graph: &mut DefinitionGraph,
    owner: &str,
    index: usize,
) -> Result<Option<String>> {
    let property = graph.require(owner)?.properties[index].clone();
    if property.property_type.is_scalar_element() {
        return Ok(None);
    }

    let target = property.property_type.element().name.clone();
    if graph.needs_table(&target) {
        return Ok(None);
    }

    let base_name = capitalize(&property.name);
    let shape = if target == ANONYMOUS_OBJECT || !property.sub_properties.is_empty() {
        property.sub_properties.clone()
    } else if let Some(existing) = graph.get(&base_name).filter(|d| !d.needs_table) {
        existing.properties.clone()
    } else if let Some(existing) = graph.get(&target) {
        existing.properties.clone()
    } else {
        return Err(GeneratorError::DanglingReference {
            definition: owner.to_string(),
            property: property.name.clone(),
            target,
        });
    };

    let mut name = base_name.clone();
    let mut attempt = 1;
    let created = loop {
        match graph.get_mut(&name) {
            None => {
                let mut definition = DefinitionHelper::new(&name, shape);
                definition.use_fields_as_part_of_the_same_table = !definition.needs_table;
                debug!(definition = %name, owner, property = %property.name, "synthesized definition");
                graph.insert(definition);
                break true;
            }
            Some(existing) if existing.properties == shape => {
                existing.use_fields_as_part_of_the_same_table = !existing.needs_table;
                break false;
            }
            Some(_) => {
                name = if attempt == 1 {
                    format!("{owner}{base_name}")
                } else {
                    format!("{owner}{base_name}{attempt}")
                };
                attempt += 1;
            }
        }
    };

    let definition = graph.require_mut(owner)?;
    let property = &mut definition.properties[index];
    *property.property_type.element_mut() = DefinitionTypeHelper::new(&name, None, false);
    property.sub_properties.clear();

    Ok(created.then_some(name))
}

#[cfg(test)]
#[path = "builder/builder_tests.rs"]
mod builder_tests;
