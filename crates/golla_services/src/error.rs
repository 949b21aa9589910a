use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a key-value backend.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("i/o error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("key '{key}' is not usable as a storage name")]
    InvalidKey { key: String },
}

/// Errors surfaced by the preset store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to persist '{key}'")]
    Persistence {
        key: String,
        #[source]
        source: KvError,
    },

    #[error("failed to encode presets for '{key}'")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored data could not be decoded. Listing recovers from this silently;
    /// it only reaches callers through [`crate::store::PresetStore::custom_strict`].
    #[error("stored data under '{key}' is corrupt: {reason}")]
    CorruptState { key: String, reason: String },

    /// Stored data was written by a newer build. Listing recovers from this
    /// silently; mutations refuse so the newer data is never overwritten.
    #[error("stored data under '{key}' uses schema version {version}, this build reads {supported}")]
    UnsupportedVersion {
        key: String,
        version: u32,
        supported: u32,
    },

    #[error("preset name must not be empty")]
    EmptyName,

    #[error("preset must contain at least one item")]
    EmptyItems,
}

/// Errors loading settings from disk.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(String),
}
