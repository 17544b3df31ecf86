//! Error types for Navitoir.
//!
//! Classification is total and never fails; these cover table loading,
//! settings snapshots and host protocol misuse.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavitoirError {
    #[error("A command is still being carried out. Wait for it to finish.")]
    Busy,

    #[error("Trigger table parse error: {0}")]
    TriggerTable(#[from] toml::de::Error),

    #[error("Unknown {category} payload '{payload}' in trigger table")]
    UnknownPayload { category: String, payload: String },

    #[error("Empty trigger phrase for {category} payload '{payload}'")]
    EmptyPhrase { category: String, payload: String },

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("Settings store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NavitoirError {
    pub fn code(&self) -> i32 {
        match self {
            NavitoirError::Busy => -32000,
            NavitoirError::TriggerTable(_) => -32001,
            NavitoirError::UnknownPayload { .. } => -32002,
            NavitoirError::EmptyPhrase { .. } => -32003,
            NavitoirError::UnknownLocale(_) => -32004,
            NavitoirError::Store(_) => -32005,
            NavitoirError::Io(_) => -32006,
            NavitoirError::Json(_) => -32700,
        }
    }
}
