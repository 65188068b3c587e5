use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating [`Settings`](crate::settings::Settings).
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings are not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to render settings as TOML: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error(transparent)]
    Model(#[from] marquee_model::ModelError),
}

impl SettingsError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SettingsError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsError>;
