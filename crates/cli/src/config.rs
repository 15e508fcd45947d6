//! Configuration path utilities for dynt.
//!
//! This module resolves the template definitions file path and expands shell
//! variables like `~` in it.

/// Default path for the template definitions file
const DEFAULT_CONFIG_PATH: &str = "~/.dyn-template/templates.yml";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use dyn_template_cli::config::get_config_path;
///
/// let custom_path = get_config_path(Some("/path/to/templates.yml"));
/// assert_eq!(custom_path, "/path/to/templates.yml");
/// ```
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    let config_path = config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let result = get_config_path(Some("/custom/path/templates.yml"));
        assert_eq!(result, "/custom/path/templates.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".dyn-template/templates.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let result = get_config_path(Some("~/my-templates.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-templates.yml"));
    }
}
