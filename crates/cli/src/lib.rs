//! Dyn Template CLI Library
//!
//! This crate provides `dynt`, a small command-line driver for
//! `dyn-template-core`. Templates are declared in YAML as literal fragments
//! and values, normalized once, and rendered through a closure as many times
//! as requested. Dynamic values are read again on every render.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`config`]: Configuration file path resolution
//! - [`definitions`]: YAML template definitions
//! - [`file_handling`]: Loading and validating definitions
//! - [`sources`]: Turning definitions into literal templates with dynamic slots
//! - [`render`]: Selecting, describing, and rendering a template
//!
//! # Examples
//!
//! ```bash
//! # List the templates in the default config file
//! dynt --list
//!
//! # Render a template by ID three times
//! dynt --times 3 status
//!
//! # Show how a template was normalized, by index
//! dynt --describe 0
//!
//! # Use another config file
//! dynt -c ./templates.yml status
//! ```

pub mod cli_args;
pub mod config;
pub mod definitions;
pub mod error;
pub mod file_handling;
pub mod render;
pub mod sources;
