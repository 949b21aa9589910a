//! Settings management

use crate::error::SettingsError;
use crate::store::{DEFAULT_PRESETS_KEY, DEFAULT_TEAM_GROUPS_KEY};
use golla_core::SpinConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// App settings
///
/// Every section has defaults, so a settings file only needs the fields it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub picker: PickerSettings,
    pub roulette: SpinConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub data_dir: PathBuf,
    pub presets_key: String,
    pub team_groups_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Team counts offered by the team splitter.
    pub team_counts: Vec<usize>,
    /// How many numbers the number picker can draw at once.
    pub number_counts: Vec<usize>,
    pub default_min: i64,
    pub default_max: i64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".golla"),
            presets_key: DEFAULT_PRESETS_KEY.to_owned(),
            team_groups_key: DEFAULT_TEAM_GROUPS_KEY.to_owned(),
        }
    }
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            team_counts: vec![2, 3, 4],
            number_counts: vec![1, 2, 3, 5, 10],
            default_min: 1,
            default_max: 100,
        }
    }
}

impl PickerSettings {
    /// First configured team count that `members` people can fill, if any.
    pub fn team_count_for(&self, members: usize) -> Option<usize> {
        self.team_counts
            .iter()
            .copied()
            .find(|&teams| teams >= 1 && teams <= members)
    }
}

impl Settings {
    /// Reads and validates a JSON settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &raw)
    }

    /// Like [`Settings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_json(path, &raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn from_json(path: &Path, raw: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let picker = &self.picker;
        if picker.default_min > picker.default_max {
            return Err(SettingsError::Invalid(format!(
                "default_min ({}) is above default_max ({})",
                picker.default_min, picker.default_max
            )));
        }
        if picker.team_counts.is_empty() || picker.team_counts.contains(&0) {
            return Err(SettingsError::Invalid(
                "team_counts must be non-empty and positive".into(),
            ));
        }
        if picker.number_counts.is_empty() || picker.number_counts.contains(&0) {
            return Err(SettingsError::Invalid(
                "number_counts must be non-empty and positive".into(),
            ));
        }
        if self.storage.presets_key == self.storage.team_groups_key {
            return Err(SettingsError::Invalid(
                "presets_key and team_groups_key must differ".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.picker.team_counts, vec![2, 3, 4]);
        assert_eq!(settings.roulette, SpinConfig::default());
        assert_eq!(settings.storage.presets_key, DEFAULT_PRESETS_KEY);
    }

    #[test]
    fn test_team_count_for_group_size() {
        let mut picker = PickerSettings::default();
        assert_eq!(picker.team_count_for(6), Some(2));
        assert_eq!(picker.team_count_for(1), None);

        picker.team_counts = vec![8, 3];
        assert_eq!(picker.team_count_for(6), Some(3));
        assert_eq!(picker.team_count_for(2), None);
        assert_eq!(picker.team_count_for(8), Some(8));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("golla.json");
        fs::write(&path, r#"{ "picker": { "default_max": 45 }, "roulette": { "min_turns": 3 } }"#)
            .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.picker.default_min, 1);
        assert_eq!(settings.picker.default_max, 45);
        assert_eq!(settings.roulette.min_turns, 3);
        assert_eq!(settings.roulette.extra_turns, 3);
        assert_eq!(settings.storage, StorageSettings::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(Settings::load_or_default(&path).unwrap(), Settings::default());
        assert!(matches!(Settings::load(&path), Err(SettingsError::Read { .. })));
    }

    #[test]
    fn test_bad_files_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("golla.json");

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Settings::load_or_default(&path),
            Err(SettingsError::Parse { .. })
        ));

        fs::write(&path, r#"{ "picker": { "default_min": 10, "default_max": 1 } }"#).unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Invalid(_))));

        fs::write(&path, r#"{ "picker": { "team_counts": [] } }"#).unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Invalid(_))));
    }
}
