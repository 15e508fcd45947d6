//! Normalization of literal templates.
//!
//! This module splits a [`Literal`] into static text and the callables that
//! have to be re-evaluated on every render. Text and other plain values are
//! folded into the neighbouring static text once, here, so only callables
//! survive as dynamic slots.

use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use log::{debug, trace};

use crate::literal::{Interpolation, Literal};

/// A normalized template: a static prefix followed by callables, each paired
/// with the static text that comes after it.
///
/// The parts are immutable once built and shared between clones, so one
/// template can back any number of closures.
pub struct DynTemplate<F> {
    first: Arc<str>,
    fns: Arc<[F]>,
    strs: Arc<[String]>,
}

impl<F> DynTemplate<F> {
    /// Static text before the first callable, or the whole text when there
    /// are no callables.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Callables in the order they appeared in the literal template.
    pub fn fns(&self) -> &[F] {
        &self.fns
    }

    /// Static text following each callable; `strs()[i]` belongs to `fns()[i]`.
    pub fn strs(&self) -> &[String] {
        &self.strs
    }

    /// Number of dynamic slots.
    pub fn slot_count(&self) -> usize {
        self.fns.len()
    }

    pub fn is_static(&self) -> bool {
        self.fns.is_empty()
    }

    /// Invokes every callable in order and assembles the string.
    pub fn render<T>(&self) -> String
    where
        F: Fn() -> T,
        T: Display,
    {
        trace!("Rendering template with {} slots", self.slot_count());

        self.fns
            .iter()
            .zip(self.strs.iter())
            .fold(String::from(self.first()), |mut rendered, (f, s)| {
                rendered.push_str(&f().to_string());
                rendered.push_str(s);
                rendered
            })
    }

    /// Like [`DynTemplate::render`] for fallible callables.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a callable, unchanged. Callables
    /// after the failing one are not invoked.
    pub fn try_render<T, E>(&self) -> Result<String, E>
    where
        F: Fn() -> Result<T, E>,
        T: Display,
    {
        trace!("Rendering template with {} fallible slots", self.slot_count());

        let mut rendered = String::from(self.first());
        for (f, s) in self.fns.iter().zip(self.strs.iter()) {
            rendered.push_str(&f()?.to_string());
            rendered.push_str(s);
        }

        Ok(rendered)
    }
}

impl<F> Clone for DynTemplate<F> {
    fn clone(&self) -> Self {
        Self {
            first: Arc::clone(&self.first),
            fns: Arc::clone(&self.fns),
            strs: Arc::clone(&self.strs),
        }
    }
}

impl<F: PartialEq> PartialEq for DynTemplate<F> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.strs == other.strs && self.fns == other.fns
    }
}

impl<F> Debug for DynTemplate<F> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DynTemplate")
            .field("first", &self.first)
            .field("fns", &self.fns.len())
            .field("strs", &self.strs)
            .finish()
    }
}

/// Normalizes a literal template into a [`DynTemplate`].
///
/// Callables become dynamic slots. Strings are appended to the surrounding
/// static text as they are, and any other value is appended using its
/// [`Display`] representation.
///
/// # Examples
///
/// ```
/// use dyn_template_core::literal::Literal;
/// use dyn_template_core::template::dyn_template;
///
/// let template = dyn_template(Literal::new("a").value(1, "b").call(|| "Z", "c"));
///
/// assert_eq!(template.first(), "a1b");
/// assert_eq!(template.fns().len(), 1);
/// assert_eq!(template.strs(), ["c"]);
/// ```
pub fn dyn_template<F>(literal: Literal<F>) -> DynTemplate<F> {
    let (strings, exps) = literal.into_parts();
    let mut strings = strings.into_iter();

    if exps.is_empty() {
        return DynTemplate {
            first: strings.next().unwrap_or_default().into(),
            fns: Arc::from([]),
            strs: Arc::from([]),
        };
    }

    let mut fns = Vec::new();
    let mut segments = Vec::with_capacity(exps.len() + 1);
    let mut current = String::new();

    for exp in exps {
        if let Some(fragment) = strings.next() {
            current.push_str(&fragment);
        }

        match exp {
            Interpolation::Callable(f) => {
                segments.push(std::mem::take(&mut current));
                fns.push(f);
            }
            Interpolation::Text(text) => current.push_str(&text),
            Interpolation::Other(value) => current.push_str(&value.to_string()),
        }
    }

    // Only the trailing fragment is left.
    for fragment in strings {
        current.push_str(&fragment);
    }
    segments.push(current);

    let mut segments = segments.into_iter();
    let first = segments.next().unwrap_or_default();

    debug!(
        "Normalized template into {} dynamic slots with a {} byte prefix",
        fns.len(),
        first.len()
    );

    DynTemplate {
        first: first.into(),
        fns: fns.into(),
        strs: segments.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Thunk = fn() -> &'static str;

    fn x() -> &'static str {
        "X"
    }

    fn y() -> &'static str {
        "Y"
    }

    type Fallible = Box<dyn Fn() -> Result<i32, String>>;

    fn fallible(f: impl Fn() -> Result<i32, String> + 'static) -> Fallible {
        Box::new(f)
    }

    struct Broken;

    impl Display for Broken {
        fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("partial")?;
            Err(std::fmt::Error)
        }
    }

    #[test]
    #[should_panic(expected = "Display implementation returned an error")]
    fn test_render_panics_on_failing_display() {
        let template = dyn_template(Literal::new("a").call(|| Broken, "b"));
        let _ = template.render();
    }

    #[test]
    #[should_panic(expected = "Display implementation returned an error")]
    fn test_try_render_panics_on_failing_display() {
        let template = dyn_template(Literal::new("a").call(|| Ok::<_, ()>(Broken), "b"));
        let _ = template.try_render();
    }

    #[test]
    #[should_panic(expected = "Display implementation returned an error")]
    fn test_normalize_panics_on_failing_display() {
        let _ = dyn_template(Literal::<Thunk>::new("a").value(Broken, "b"));
    }

    #[test]
    fn test_no_interpolations_short_circuits() {
        let template = dyn_template(Literal::<Thunk>::new("plain text"));

        assert_eq!(template.first(), "plain text");
        assert!(template.fns().is_empty());
        assert!(template.strs().is_empty());
        assert!(template.is_static());
    }

    #[test]
    fn test_values_without_callables_collapse_into_first() {
        let template = dyn_template(
            Literal::<Thunk>::new("a")
                .value(1, "b")
                .text("s", "c")
                .value(true, "d"),
        );

        assert_eq!(template.first(), "a1bsctrued");
        assert!(template.fns().is_empty());
        assert!(template.strs().is_empty());
    }

    #[test]
    fn test_every_callable_gets_a_slot() {
        let template = dyn_template(
            Literal::new("a")
                .call(x as Thunk, "b")
                .call(y as Thunk, "c")
                .call(x as Thunk, ""),
        );

        assert_eq!(template.first(), "a");
        assert_eq!(template.slot_count(), 3);
        assert_eq!(template.strs(), ["b", "c", ""]);
    }

    #[test]
    fn test_adjacent_callables_get_empty_fragments() {
        let template = dyn_template(
            Literal::new("")
                .call(x as Thunk, "")
                .call(y as Thunk, ""),
        );

        assert_eq!(template.first(), "");
        assert_eq!(template.strs(), ["", ""]);
        assert_eq!(template.render(), "XY");
    }

    #[test]
    fn test_values_fold_into_following_fragment() {
        let template = dyn_template(
            Literal::new("<")
                .call(x as Thunk, " and ")
                .value(2, " then ")
                .text("more", ">"),
        );

        assert_eq!(template.first(), "<");
        assert_eq!(template.strs(), [" and 2 then more>"]);
    }

    #[test]
    fn test_render_folds_in_order() {
        let template = dyn_template(
            Literal::new("a")
                .call(x as Thunk, "b")
                .call(y as Thunk, "c"),
        );

        assert_eq!(template.render(), "aXbYc");
    }

    #[test]
    fn test_try_render_stops_at_first_error() {
        let template = dyn_template(
            Literal::new("a")
                .call(fallible(|| Ok(1)), "b")
                .call(fallible(|| Err("boom".to_string())), "c")
                .call(fallible(|| panic!("must not be invoked")), "d"),
        );

        assert_eq!(template.try_render(), Err::<String, _>("boom".to_string()));
    }

    #[test]
    fn test_equal_inputs_normalize_equal() {
        let build = || {
            dyn_template(
                Literal::new("a")
                    .value(1, "b")
                    .call(x as Thunk, "c"),
            )
        };

        assert_eq!(build(), build());

        let different = dyn_template(Literal::new("a").value(1, "b").call(y as Thunk, "c"));
        assert_ne!(build(), different);
    }

    #[test]
    fn test_clone_shares_parts() {
        let template = dyn_template(Literal::new("a").call(x as Thunk, "b"));
        let cloned = template.clone();

        assert!(Arc::ptr_eq(&template.fns, &cloned.fns));
        assert!(Arc::ptr_eq(&template.strs, &cloned.strs));
    }

    #[test]
    fn test_debug_shows_slot_count() {
        let template = dyn_template(Literal::new("a").call(x as Thunk, "b"));
        assert_eq!(
            format!("{template:?}"),
            "DynTemplate { first: \"a\", fns: 1, strs: [\"b\"] }"
        );
    }
}
