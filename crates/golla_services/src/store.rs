//! Preset store
//!
//! Persists custom presets per [`Namespace`] on top of a [`KeyValueStore`].
//! Each namespace lives under one key as a versioned JSON envelope:
//!
//! ```json
//! { "version": 1, "presets": [ { "id": "...", "name": "...", "items": ["..."] } ] }
//! ```
//!
//! A bare array (the older layout) is still read and gets upgraded on the next
//! write. An envelope from a different version is listed as empty but never
//! overwritten: `save` and `delete` fail with
//! [`StoreError::UnsupportedVersion`] instead. Seeded defaults are never
//! written; they are prepended on every list.
//!
//! Every mutation is read-modify-write with no locking. Two handles writing
//! the same namespace resolve as last-write-wins.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::preset::{Namespace, Preset};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Envelope version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

pub const DEFAULT_PRESETS_KEY: &str = "random-picker-presets";
pub const DEFAULT_TEAM_GROUPS_KEY: &str = "random-picker-team-groups";

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    presets: &'a [Preset],
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    presets: Vec<Preset>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    Versioned(Envelope),
    Legacy(Vec<Preset>),
}

static LAST_ID_MILLIS: AtomicU64 = AtomicU64::new(0);

/// Current wall-clock milliseconds, bumped past the last value handed out so
/// two saves in the same millisecond still get distinct ids.
fn next_id_millis() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut last = LAST_ID_MILLIS.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_ID_MILLIS.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

fn decode(ns: Namespace, key: &str, raw: &str) -> Result<Vec<Preset>, StoreError> {
    let corrupt = |reason: String| StoreError::CorruptState {
        key: key.to_owned(),
        reason,
    };

    let presets = match serde_json::from_str::<Stored>(raw).map_err(|e| corrupt(e.to_string()))? {
        Stored::Versioned(env) if env.version == SCHEMA_VERSION => env.presets,
        Stored::Versioned(env) => {
            return Err(StoreError::UnsupportedVersion {
                key: key.to_owned(),
                version: env.version,
                supported: SCHEMA_VERSION,
            });
        }
        Stored::Legacy(presets) => presets,
    };

    // Defaults live in code only; a stored copy would shadow or duplicate one
    Ok(presets
        .into_iter()
        .filter(|p| {
            let shadow = ns.is_default_id(&p.id);
            if shadow {
                tracing::warn!(%ns, id = %p.id, "ignoring stored entry with a default id");
            }
            !shadow
        })
        .map(|mut p| {
            p.is_default = false;
            p
        })
        .collect())
}

/// Named item lists in two independent namespaces.
pub struct PresetStore<S> {
    backend: S,
    presets_key: String,
    team_groups_key: String,
}

impl<S: KeyValueStore> PresetStore<S> {
    /// Store using the standard storage keys.
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, DEFAULT_PRESETS_KEY, DEFAULT_TEAM_GROUPS_KEY)
    }

    pub fn with_keys(
        backend: S,
        presets_key: impl Into<String>,
        team_groups_key: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            presets_key: presets_key.into(),
            team_groups_key: team_groups_key.into(),
        }
    }

    /// Storage key backing `ns`.
    pub fn key(&self, ns: Namespace) -> &str {
        match ns {
            Namespace::General => &self.presets_key,
            Namespace::TeamGroup => &self.team_groups_key,
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Defaults first, then custom entries in the order they were saved.
    ///
    /// Never fails: unreadable or corrupt storage lists as no custom entries.
    pub fn list_all(&self, ns: Namespace) -> Vec<Preset> {
        let mut all = ns.defaults().to_vec();
        all.extend(self.custom(ns));
        all
    }

    /// Custom entries only, swallowing storage errors.
    pub fn custom(&self, ns: Namespace) -> Vec<Preset> {
        self.custom_strict(ns).unwrap_or_else(|e| {
            tracing::warn!(%ns, error = %e, "treating stored presets as empty");
            Vec::new()
        })
    }

    /// Custom entries, surfacing read failures and corruption.
    pub fn custom_strict(&self, ns: Namespace) -> Result<Vec<Preset>, StoreError> {
        let key = self.key(ns);
        let raw = self
            .backend
            .get(key)
            .map_err(|source| StoreError::Persistence {
                key: key.to_owned(),
                source,
            })?;
        match raw {
            Some(raw) => decode(ns, key, &raw),
            None => Ok(Vec::new()),
        }
    }

    /// Looks up an entry, default or custom, by id.
    pub fn find(&self, ns: Namespace, id: &str) -> Option<Preset> {
        ns.defaults()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .or_else(|| self.custom(ns).into_iter().find(|p| p.id == id))
    }

    /// Appends a new custom entry and returns it.
    ///
    /// The name is trimmed. There is no update-in-place: saving an existing
    /// name creates a second entry.
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyName`] / [`StoreError::EmptyItems`] for blank input.
    /// - [`StoreError::Persistence`] when the backend can't be read or written.
    /// - [`StoreError::UnsupportedVersion`] when storage holds a newer envelope;
    ///   nothing is written.
    ///
    /// Corrupt stored data is not an error here: it is discarded and replaced.
    pub fn save<T: AsRef<str>>(
        &mut self,
        ns: Namespace,
        name: &str,
        items: &[T],
    ) -> Result<Preset, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if items.is_empty() {
            return Err(StoreError::EmptyItems);
        }

        let mut customs = self.load_for_write(ns)?;
        let preset = Preset {
            id: format!("{}-{}", ns.id_prefix(), next_id_millis()),
            name: name.to_owned(),
            items: items.iter().map(|s| s.as_ref().to_owned()).collect(),
            is_default: false,
        };
        customs.push(preset.clone());
        self.write(ns, &customs)?;

        tracing::info!(%ns, id = %preset.id, name = %preset.name, items = preset.items.len(), "saved preset");
        Ok(preset)
    }

    /// Removes the custom entry with `id`.
    ///
    /// Returns `false` without touching storage when `id` is a default (they
    /// can't be deleted) or doesn't exist. Fails with
    /// [`StoreError::UnsupportedVersion`] rather than rewriting a newer envelope.
    pub fn delete(&mut self, ns: Namespace, id: &str) -> Result<bool, StoreError> {
        if ns.is_default_id(id) {
            tracing::warn!(%ns, id, "refusing to delete a default preset");
            return Ok(false);
        }

        let customs = match self.custom_strict(ns) {
            Ok(customs) => customs,
            Err(e @ StoreError::CorruptState { .. }) => {
                tracing::warn!(%ns, id, error = %e, "nothing to delete from corrupt storage");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        let before = customs.len();
        let kept: Vec<Preset> = customs.into_iter().filter(|p| p.id != id).collect();
        if kept.len() == before {
            tracing::debug!(%ns, id, "delete of unknown preset id");
            return Ok(false);
        }
        self.write(ns, &kept)?;

        tracing::info!(%ns, id, "deleted preset");
        Ok(true)
    }

    fn load_for_write(&self, ns: Namespace) -> Result<Vec<Preset>, StoreError> {
        match self.custom_strict(ns) {
            Ok(customs) => Ok(customs),
            Err(e @ StoreError::CorruptState { .. }) => {
                tracing::warn!(%ns, error = %e, "discarding unreadable stored presets");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, ns: Namespace, presets: &[Preset]) -> Result<(), StoreError> {
        let key = self.key(ns).to_owned();
        let encoded = serde_json::to_string(&EnvelopeRef {
            version: SCHEMA_VERSION,
            presets,
        })
        .map_err(|source| StoreError::Encode {
            key: key.clone(),
            source,
        })?;
        self.backend
            .set(&key, &encoded)
            .map_err(|source| StoreError::Persistence { key, source })
    }
}
