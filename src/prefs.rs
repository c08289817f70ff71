// src/prefs.rs  —  Persisted language preference
//
// The single piece of cross-run state.  Reads happen at startup (and
// once more when the fullscreen warning picks its language); a write
// happens on every language change.  Persistence failures degrade to
// an in-memory value with a diagnostic — a language switch must never
// fail because the disk did.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage seam for the language preference.  Injected into the
/// localizer so tests run against [`MemPrefStore`].
pub trait PrefStore {
    /// The stored language tag, if any.  Callers default to the
    /// primary code on `None`.
    fn language(&self) -> Option<String>;
    /// Store `tag`.  Best-effort: implementations log failures.
    fn set_language(&mut self, tag: &str);
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PrefsFile {
    language: Option<String>,
}

/// TOML-file-backed store, one file next to the config.
pub struct FilePrefStore {
    path: PathBuf,
    cached: Option<String>,
}

impl FilePrefStore {
    /// Open the store at `path`.  A missing or unreadable file reads
    /// as "nothing persisted yet".
    pub fn open(path: PathBuf) -> Self {
        let cached = match std::fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<PrefsFile>(&raw) {
                Ok(p) => p.language,
                Err(e) => {
                    log::warn!("prefs: ignoring malformed {}: {e}", path.display());
                    None
                }
            },
            Err(_) => None,
        };
        Self { path, cached }
    }

    pub fn default_path() -> PathBuf {
        crate::config::config_dir().join("romdeck").join("prefs.toml")
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PrefStore for FilePrefStore {
    fn language(&self) -> Option<String> {
        self.cached.clone()
    }

    fn set_language(&mut self, tag: &str) {
        self.cached = Some(tag.to_string());
        let file = PrefsFile {
            language: self.cached.clone(),
        };
        let write = || -> anyhow::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, toml::to_string(&file)?)?;
            Ok(())
        };
        if let Err(e) = write() {
            log::warn!("prefs: could not persist language to {}: {e}", self.path.display());
        }
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemPrefStore {
    language: Option<String>,
}

impl MemPrefStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(tag: &str) -> Self {
        Self {
            language: Some(tag.to_string()),
        }
    }
}

impl PrefStore for MemPrefStore {
    fn language(&self) -> Option<String> {
        self.language.clone()
    }

    fn set_language(&mut self, tag: &str) {
        self.language = Some(tag.to_string());
    }
}
