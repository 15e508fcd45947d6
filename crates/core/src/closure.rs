//! Closures that re-render a normalized template on every call.
//!
//! Nothing is cached: each call invokes every callable again, in order, and
//! returns a freshly assembled string.

use std::fmt::Display;

use crate::literal::Literal;
use crate::template::{dyn_template, DynTemplate};

/// Builds a zero-argument closure that renders `template` on every call.
///
/// The closure holds its own handle on the template's parts, so the template
/// can keep being used to build more closures. It is `Send + Sync` when `F`
/// is `Send + Sync`.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
///
/// use dyn_template_core::closure::closure;
/// use dyn_template_core::literal::Literal;
/// use dyn_template_core::template::dyn_template;
///
/// let count = Cell::new(0);
/// let template = dyn_template(Literal::new("calls: ").call(
///     || {
///         count.set(count.get() + 1);
///         count.get()
///     },
///     "",
/// ));
///
/// let render = closure(&template);
/// assert_eq!(render(), "calls: 1");
/// assert_eq!(render(), "calls: 2");
/// ```
pub fn closure<F, T>(template: &DynTemplate<F>) -> impl Fn() -> String
where
    F: Fn() -> T,
    T: Display,
{
    let template = template.clone();
    move || template.render()
}

/// Builds a closure over fallible callables.
///
/// A call returns the first error any callable produces, exactly as the
/// callable returned it, and never a partially rendered string.
pub fn try_closure<F, T, E>(template: &DynTemplate<F>) -> impl Fn() -> Result<String, E>
where
    F: Fn() -> Result<T, E>,
    T: Display,
{
    let template = template.clone();
    move || template.try_render()
}

/// Normalizes `literal` and wraps it in a closure in one step.
///
/// # Examples
///
/// ```
/// use dyn_template_core::closure::dyn_string;
/// use dyn_template_core::literal::Literal;
///
/// type Thunk = Box<dyn Fn() -> &'static str>;
///
/// let render = dyn_string(
///     Literal::<Thunk>::new("a")
///         .call(Box::new(|| "X"), "b")
///         .call(Box::new(|| "Y"), "c"),
/// );
/// assert_eq!(render(), "aXbYc");
/// ```
pub fn dyn_string<F, T>(literal: Literal<F>) -> impl Fn() -> String
where
    F: Fn() -> T,
    T: Display,
{
    closure(&dyn_template(literal))
}

/// Fallible counterpart of [`dyn_string`].
pub fn try_dyn_string<F, T, E>(literal: Literal<F>) -> impl Fn() -> Result<String, E>
where
    F: Fn() -> Result<T, E>,
    T: Display,
{
    try_closure(&dyn_template(literal))
}
