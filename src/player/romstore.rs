// src/player/romstore.rs  —  Object-URL registry for user ROMs
//
// A picked file becomes an opaque `blob:` handle the player address
// can carry.  The backing bytes live only as long as the handle:
// revoking it on session end releases them, and a revoked handle is
// never reused.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rand::distributions::Alphanumeric;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const TOKEN_LEN: usize = 12;

/// A user-picked ROM file: display name + raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRom {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl LocalRom {
    /// Reads the file at `path`.  An empty path models a dismissed
    /// picker and maps to `Ok(None)`.
    pub fn from_path(path: &Path) -> Result<Option<Self>> {
        if path.as_os_str().is_empty() {
            return Ok(None);
        }
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading ROM file {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Some(Self { name, bytes }))
    }
}

/// Transient handle standing in for a registered ROM's bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomHandle(String);

impl RomHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registry issuing and resolving `blob:` handles.
pub struct RomStore {
    entries: HashMap<String, Vec<u8>>,
    rng: SmallRng,
}

impl RomStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Registers `rom` and returns a fresh handle for it.
    pub fn create(&mut self, rom: LocalRom) -> RomHandle {
        let token: String = (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        let handle = format!("blob:romdeck/{token}");
        log::debug!("romstore: registered {} ({} bytes) as {handle}", rom.name, rom.bytes.len());
        self.entries.insert(handle.clone(), rom.bytes);
        RomHandle(handle)
    }

    /// Releases the bytes behind `handle`.  Returns whether anything
    /// was actually held — revoking twice is harmless.
    pub fn revoke(&mut self, handle: &RomHandle) -> bool {
        let released = self.entries.remove(&handle.0).is_some();
        if released {
            log::debug!("romstore: revoked {}", handle.0);
        }
        released
    }

    /// Player-side lookup of a live handle.
    pub fn resolve(&self, handle: &str) -> Option<&[u8]> {
        self.entries.get(handle).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RomStore {
    fn default() -> Self {
        Self::new()
    }
}
