//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and provides
//! validation for CLI arguments using the `clap` crate.

use clap::Parser;

use crate::error::{Error, Result};

/// Command-line arguments for the `dynt` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use dyn_template_cli::cli_args::Args;
///
/// let args = Args::parse_from(["dynt", "--times", "3", "status"]);
/// assert_eq!(args.times, 3);
/// assert_eq!(args.template_id_or_index.as_deref(), Some("status"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the template definitions config file YAML.
    ///
    /// If not provided, defaults to `~/.dyn-template/templates.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// How many times to render the template, one line per render.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub times: usize,

    /// Print the normalized shape of the template instead of rendering it.
    #[arg(long, short = 'd', action)]
    pub describe: bool,

    /// List the available templates and exit.
    #[arg(long, short = 'l', action)]
    pub list: bool,

    /// The ID or zero-based index of the template to render.
    pub template_id_or_index: Option<String>,
}

impl Args {
    /// Checks the argument combinations `clap` cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if no template was named without `--list`, or if
    /// `--times` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.list {
            return Ok(());
        }

        if self.template_id_or_index.is_none() {
            return Err(Error::MissingTemplateId);
        }

        if self.times == 0 {
            return Err(Error::ZeroRenders);
        }

        Ok(())
    }
}
