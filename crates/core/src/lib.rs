//! Dyn Template Core Library
//!
//! This crate builds lazily re-evaluated strings out of literal templates. A
//! template is split into static text and embedded callables, and the result
//! is wrapped in a closure that re-invokes only the callables and reassembles
//! the string each time it is called.
//!
//! # Key Features
//!
//! - **Literal Templates**: Static fragments interleaved with callables, text, or any displayable value
//! - **Normalization**: Everything static is folded into plain text once, up front
//! - **Closures**: Zero-argument closures that re-render on every call, with no caching
//! - **Fallible Callables**: Errors from a callable are returned to the caller unchanged
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//!
//! use dyn_template_core::{dyn_string, Literal};
//!
//! let hits = Cell::new(0);
//! let render = dyn_string(Literal::new("hits: ").value(1, "+").call(
//!     || {
//!         hits.set(hits.get() + 1);
//!         hits.get()
//!     },
//!     "",
//! ));
//!
//! assert_eq!(render(), "hits: 1+1");
//! assert_eq!(render(), "hits: 1+2");
//! ```

pub mod closure;
pub mod error;
pub mod literal;
pub mod template;

pub use closure::{closure, dyn_string, try_closure, try_dyn_string};
pub use error::{Error, Result};
pub use literal::{Interpolation, Kind, Literal};
pub use template::{dyn_template, DynTemplate};
