//! Golla Services Layer
//!
//! Platform abstraction for persisted presets and settings.

pub mod error;
pub mod kv;
pub mod preset;
pub mod settings;
pub mod store;

pub use error::{KvError, SettingsError, StoreError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use preset::{Namespace, Preset};
pub use settings::Settings;
pub use store::PresetStore;

/// Opens the file-backed preset store described by `settings`.
pub fn init_services(settings: &Settings) -> Result<PresetStore<FileStore>, KvError> {
    let storage = &settings.storage;
    let backend = FileStore::open(&storage.data_dir)?;
    tracing::info!(dir = %storage.data_dir.display(), "preset storage ready");
    Ok(PresetStore::with_keys(
        backend,
        storage.presets_key.as_str(),
        storage.team_groups_key.as_str(),
    ))
}
