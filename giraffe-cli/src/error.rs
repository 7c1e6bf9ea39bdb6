//! Error handling for the giraffe CLI

use giraffe_core::FeatureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Feature {index}: {source}")]
    Feature {
        index: usize,
        #[source]
        source: FeatureError,
    },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    pub fn feature(index: usize, source: FeatureError) -> Self {
        Self::Feature { index, source }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config(format!("TOML serialization error: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", err))
    }
}

impl From<FeatureError> for CliError {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::Json(e) => e.into(),
            other => Self::invalid_input(other.to_string()),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::Feature { source: FeatureError::InvalidType(_), .. } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Valid feature types are: {}\n\
                 • Run 'giraffe types' to list them with their ids",
                giraffe_core::labels().join(", ")
            ));
        }

        CliError::InvalidInput { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Input must be a JSON array of feature objects\n\
                 • Aligned features need alignment, evalue and identities",
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your giraffe.toml configuration file\n\
                 • Use 'giraffe config --example' to generate a sample configuration",
            );
        }

        _ => {}
    }

    message
}
