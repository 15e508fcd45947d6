//! File handling and validation for dynt configuration.
//!
//! This module reads template definitions from YAML and validates their IDs
//! and shapes before any of them is rendered.

use std::fs::File;

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::debug;

use crate::definitions::TemplateDefinition;
use crate::error::Error::{EmptyId, IdWithSpace, NonUniqueTemplateId, NumericId};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(' ') {
        return Err(IdWithSpace(id.to_string()));
    }

    // Anything that parses as an index would never be selected by ID.
    if id.chars().all(|c| c.is_numeric()) || id.parse::<usize>().is_ok() {
        return Err(NumericId(id.to_string()));
    }

    Ok(())
}

fn validate_shape(definition: &TemplateDefinition) -> Result<()> {
    let expected = definition.values.len() + 1;
    if definition.fragments.len() != expected {
        return Err(Error::Shape {
            id: definition.id.clone(),
            original: dyn_template_core::Error::fragment_count(
                expected,
                definition.fragments.len(),
            ),
        });
    }

    Ok(())
}

/// Indexes validated definitions by ID, keeping the file order.
///
/// # Errors
///
/// Returns an error if an ID is invalid or repeated, or if a definition does
/// not have exactly one more fragment than values.
pub fn index_definitions(
    definitions: Vec<TemplateDefinition>,
) -> Result<IndexMap<String, TemplateDefinition>> {
    let mut indexed = IndexMap::with_capacity(definitions.len());

    for definition in definitions {
        validate_id(&definition.id)?;
        validate_shape(&definition)?;

        match indexed.entry(definition.id.clone()) {
            Entry::Occupied(_) => return Err(NonUniqueTemplateId(definition.id)),
            Entry::Vacant(entry) => {
                entry.insert(definition);
            }
        }
    }

    Ok(indexed)
}

/// Loads and validates template definitions from a configuration file.
///
/// # Arguments
///
/// * `config_path` - Path to the YAML configuration file
///
/// # Returns
///
/// The validated definitions keyed by ID, in file order
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is invalid or doesn't match the expected structure
/// - No templates are defined
/// - Any template ID is invalid or duplicated, or a template has the wrong shape
pub fn get_template_definitions(
    config_path: &str,
) -> Result<IndexMap<String, TemplateDefinition>> {
    let reader = get_reader("template definition", config_path)?;

    let definitions: Vec<TemplateDefinition> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "parsing".to_string(),
            "template definition".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    if definitions.is_empty() {
        return Err(Error::empty_definitions(config_path.to_string()));
    }

    debug!(
        "Read {} template definitions from `{}`",
        definitions.len(),
        config_path
    );

    index_definitions(definitions)
}
