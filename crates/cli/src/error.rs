use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("No templates were found in the template definition YAML. Is `{}` empty?", .path)]
    EmptyDefinitions { path: String },

    #[error("Found a non-unique template ID: `{}`", .0)]
    NonUniqueTemplateId(String),

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("Invalid ID `{}`: ID cannot be numeric, it would be read as an index", .0)]
    NumericId(String),

    #[error("Template `{}` has the wrong shape: {}", .id, .original)]
    Shape {
        id: String,
        original: dyn_template_core::Error,
    },

    #[error("Template not found: `{}`", .0)]
    TemplateNotFound(String),

    #[error("Template index out of range: {}", .0)]
    TemplateIndexOutOfRange(usize),

    #[error("A template ID or index is required unless `--list` is given.")]
    MissingTemplateId,

    #[error("The template must be rendered at least once.")]
    ZeroRenders,

    #[error("Environment variable `{}` could not be read: {}", .name, .original)]
    EnvVar {
        name: String,
        original: std::env::VarError,
    },
}

impl Error {
    pub fn empty_definitions(path: String) -> Self {
        Self::EmptyDefinitions { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn env_var(name: String, original: std::env::VarError) -> Self {
        Self::EnvVar { name, original }
    }
}
