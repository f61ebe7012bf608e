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

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Interactive input failed: {}", .0)]
    Prompt(#[from] std::io::Error),

    #[error("Interactive input ended before all questions were answered.")]
    PromptAborted,

    #[error("Invalid contract alias: alias may not be empty")]
    EmptyAlias,

    #[error("Invalid contract alias `{}`: alias may not contain a slash (reserved for package-qualified names)", .0)]
    AliasWithSlash(String),

    #[error("Contract alias `{}` maps to an empty contract name", .0)]
    EmptyContractName(String),

    #[error("Invalid dependency name `{}`: name may not contain a slash", .0)]
    DependencyWithSlash(String),

    #[error("Project manifest at `{}` has an empty project name", .path)]
    EmptyProjectName { path: String },

    #[error("Invalid argument `{}`: expected `name=value`", .0)]
    ArgumentFormat(String),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
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

    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
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
}
