//! Literal templates: static fragments interleaved with interpolations.
//!
//! A [`Literal`] always holds exactly one more fragment than it holds
//! interpolations. The builder methods keep that shape by appending an
//! interpolation together with the fragment that follows it.

use std::fmt::{Debug, Display, Formatter};

use crate::error::{Error, Result};

/// The kind of an [`Interpolation`], used to decide how it is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Deferred until the built closure is invoked
    Callable,
    /// Merged directly into the surrounding static text
    Text,
    /// Stringified once, when the template is normalized
    Other,
}

/// A single value embedded between two static fragments.
pub enum Interpolation<F> {
    Callable(F),
    Text(String),
    Other(Box<dyn Display>),
}

impl<F> Interpolation<F> {
    pub fn callable(f: F) -> Self {
        Self::Callable(f)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn other(value: impl Display + 'static) -> Self {
        Self::Other(Box::new(value))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Callable(_) => Kind::Callable,
            Self::Text(_) => Kind::Text,
            Self::Other(_) => Kind::Other,
        }
    }
}

impl<F> From<&str> for Interpolation<F> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<F> From<String> for Interpolation<F> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<F> Debug for Interpolation<F> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Callable(_) => formatter.write_str("Callable(..)"),
            Self::Text(text) => formatter.debug_tuple("Text").field(text).finish(),
            Self::Other(value) => formatter
                .debug_tuple("Other")
                .field(&value.to_string())
                .finish(),
        }
    }
}

/// A literal template made of `N + 1` static fragments and `N` interpolations.
///
/// # Examples
///
/// ```
/// use dyn_template_core::literal::Literal;
///
/// let literal = Literal::new("a")
///     .value(1, "b")
///     .call(|| "Z", "c");
///
/// assert_eq!(literal.strings(), ["a", "b", "c"]);
/// assert_eq!(literal.exps().len(), 2);
/// ```
pub struct Literal<F> {
    strings: Vec<String>,
    exps: Vec<Interpolation<F>>,
}

impl<F> Debug for Literal<F> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Literal")
            .field("strings", &self.strings)
            .field("exps", &self.exps)
            .finish()
    }
}

impl<F> Literal<F> {
    /// Starts a literal template with its leading fragment.
    pub fn new(head: impl Into<String>) -> Self {
        Self {
            strings: vec![head.into()],
            exps: Vec::new(),
        }
    }

    /// Builds a literal template from two parallel sequences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FragmentCount`] unless there is exactly one more
    /// fragment than there are interpolations.
    pub fn from_parts(strings: Vec<String>, exps: Vec<Interpolation<F>>) -> Result<Self> {
        let expected = exps.len() + 1;
        if strings.len() != expected {
            return Err(Error::fragment_count(expected, strings.len()));
        }

        Ok(Self { strings, exps })
    }

    /// Appends an interpolation and the fragment that follows it.
    pub fn interpolate(mut self, exp: Interpolation<F>, next: impl Into<String>) -> Self {
        self.exps.push(exp);
        self.strings.push(next.into());
        self
    }

    pub fn call(self, f: F, next: impl Into<String>) -> Self {
        self.interpolate(Interpolation::Callable(f), next)
    }

    pub fn text(self, value: impl Into<String>, next: impl Into<String>) -> Self {
        self.interpolate(Interpolation::text(value), next)
    }

    pub fn value(self, value: impl Display + 'static, next: impl Into<String>) -> Self {
        self.interpolate(Interpolation::other(value), next)
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn exps(&self) -> &[Interpolation<F>] {
        &self.exps
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Interpolation<F>>) {
        (self.strings, self.exps)
    }
}
