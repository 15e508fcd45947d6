//! Turning template definitions into literal templates.
//!
//! Static values become plain interpolations. Dynamic values become slots:
//! boxed callables that read their source again each time they are invoked.

use std::cell::Cell;
use std::env;
use std::time::Instant;

use dyn_template_core::{Interpolation, Literal};
use log::debug;

use crate::definitions::{TemplateDefinition, ValueDefinition};
use crate::error::{Error, Result};

/// A dynamic value of a rendered template.
pub type Slot = Box<dyn Fn() -> Result<String>>;

fn slot(f: impl Fn() -> Result<String> + 'static) -> Slot {
    Box::new(f)
}

fn env_slot(name: &str) -> Slot {
    let name = name.to_string();
    slot(move || env::var(&name).map_err(|e| Error::env_var(name.clone(), e)))
}

fn counter_slot(start: i64, step: i64) -> Slot {
    let next = Cell::new(start);
    slot(move || {
        let current = next.get();
        next.set(current.saturating_add(step));
        Ok(current.to_string())
    })
}

fn elapsed_slot(started: Instant) -> Slot {
    slot(move || Ok(started.elapsed().as_millis().to_string()))
}

fn to_interpolation(value: &ValueDefinition, started: Instant) -> Interpolation<Slot> {
    match value {
        ValueDefinition::Text(text) => Interpolation::text(text.as_str()),
        ValueDefinition::Number(number) => Interpolation::other(number.clone()),
        ValueDefinition::Env(name) => Interpolation::callable(env_slot(name)),
        ValueDefinition::Counter { start, step } => {
            Interpolation::callable(counter_slot(*start, *step))
        }
        ValueDefinition::ElapsedMs => Interpolation::callable(elapsed_slot(started)),
    }
}

/// Builds the literal template described by `definition`.
///
/// Each call creates fresh slots, so counters start over and elapsed time is
/// measured from this call.
///
/// # Errors
///
/// Returns [`Error::Shape`] if the definition does not have exactly one more
/// fragment than values.
pub fn build_literal(definition: &TemplateDefinition) -> Result<Literal<Slot>> {
    let started = Instant::now();
    let exps = definition
        .values
        .iter()
        .map(|value| to_interpolation(value, started))
        .collect();

    debug!(
        "Building template `{}` with {} values, {} dynamic",
        definition.id,
        definition.values.len(),
        definition.values.iter().filter(|v| v.is_dynamic()).count()
    );

    Literal::from_parts(definition.fragments.clone(), exps).map_err(|original| Error::Shape {
        id: definition.id.clone(),
        original,
    })
}
