//! Selecting, describing, and rendering templates for the CLI.

use std::io::Write;

use dyn_template_core::{dyn_template, try_closure, DynTemplate};
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info};

use crate::cli_args::Args;
use crate::config;
use crate::definitions::TemplateDefinition;
use crate::error::{Error, Result};
use crate::file_handling;
use crate::sources::{build_literal, Slot};

/// Finds a template by ID, or by zero-based index when the argument is numeric.
///
/// # Errors
///
/// Returns an error if no template matches.
pub fn select_template<'a>(
    definitions: &'a IndexMap<String, TemplateDefinition>,
    id_or_index: &str,
) -> Result<&'a TemplateDefinition> {
    if let Ok(index) = id_or_index.parse::<usize>() {
        return definitions
            .get_index(index)
            .map(|(_, definition)| definition)
            .ok_or(Error::TemplateIndexOutOfRange(index));
    }

    definitions
        .get(id_or_index)
        .ok_or_else(|| Error::TemplateNotFound(id_or_index.to_string()))
}

/// Writes one line per template: its index and how it displays.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_list(
    definitions: &IndexMap<String, TemplateDefinition>,
    out: &mut impl Write,
) -> Result<()> {
    for (index, definition) in definitions.values().enumerate() {
        writeln!(out, "{index}: {definition}")?;
    }

    Ok(())
}

/// Writes the normalized shape of a template without invoking any slot.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_description(template: &DynTemplate<Slot>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "first: {:?}", template.first())?;
    writeln!(out, "slots: {}", template.slot_count())?;
    writeln!(
        out,
        "strs: [{}]",
        template.strs().iter().map(|s| format!("{s:?}")).join(", ")
    )?;

    Ok(())
}

/// Renders the template `times` times, one line per render.
///
/// # Errors
///
/// Returns the first error raised by a slot, or an error if writing fails.
pub fn write_renders(
    template: &DynTemplate<Slot>,
    times: usize,
    out: &mut impl Write,
) -> Result<()> {
    let render = try_closure(template);

    for _ in 0..times {
        let rendered = render()?;
        writeln!(out, "{rendered}")?;
    }

    Ok(())
}

/// Runs the CLI for already parsed arguments, writing results to `out`.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, the configuration cannot be
/// loaded, the template cannot be found, or rendering fails.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    args.validate()?;

    let config_path = config::get_config_path(args.config_path.as_deref());
    debug!("Config path: `{}`", config_path);

    let definitions = file_handling::get_template_definitions(&config_path)?;

    if args.list {
        return write_list(&definitions, out);
    }

    let id_or_index = args
        .template_id_or_index
        .as_deref()
        .ok_or(Error::MissingTemplateId)?;
    let definition = select_template(&definitions, id_or_index)?;
    info!("Selected template: {}", definition);

    let template = dyn_template(build_literal(definition)?);

    if args.describe {
        write_description(&template, out)
    } else {
        write_renders(&template, args.times, out)
    }
}
