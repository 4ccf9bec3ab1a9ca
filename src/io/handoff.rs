// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Handoff of the composite and notes to the results view.
//!
//! The annotation view publishes a [`SessionSnapshot`] into a key/value
//! store; the results view reads it back once when it starts. The two
//! sides share nothing else, and the producer may be gone by the time the
//! consumer reads. Missing keys mean "nothing to display".

use crate::compositor::CompositedImage;
use crate::models::{Note, SessionSnapshot};
use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose, Engine as _};
use std::collections::HashMap;
use std::path::PathBuf;

/// Key holding the composite as a PNG data URL.
pub const IMAGE_KEY: &str = "combinedImage";

/// Key holding the notes as a JSON array of `{text, color}` records.
pub const NOTES_KEY: &str = "notes";

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// String key/value storage shared by both sides of the handoff.
pub trait HandoffStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Process-local store, scoped to the running application.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HandoffStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store keeping one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl HandoffStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

/// Encode a composite as a `data:image/png;base64,...` URL.
pub fn encode_data_url(composite: &CompositedImage) -> String {
    format!(
        "{}{}",
        DATA_URL_PREFIX,
        general_purpose::STANDARD.encode(composite.png_bytes())
    )
}

/// Decode a PNG data URL back into a composite.
pub fn decode_data_url(url: &str) -> Result<CompositedImage> {
    let payload = url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| anyhow!("not a PNG data URL"))?;
    let png = general_purpose::STANDARD
        .decode(payload.trim())
        .context("invalid base64 payload")?;
    Ok(CompositedImage::from_png(png)?)
}

/// Write the snapshot into the store, replacing anything published before.
pub fn publish<S: HandoffStore + ?Sized>(store: &mut S, snapshot: &SessionSnapshot) -> Result<()> {
    match snapshot.composite {
        Some(ref composite) => store.set(IMAGE_KEY, encode_data_url(composite))?,
        None => store.remove(IMAGE_KEY)?,
    }
    let notes = serde_json::to_string(&snapshot.notes)?;
    store.set(NOTES_KEY, notes)?;
    log::info!(
        "Published handoff: composite={} notes={}",
        snapshot.composite.is_some(),
        snapshot.notes.len()
    );
    Ok(())
}

/// Read the snapshot back. Missing or unreadable entries come back empty.
pub fn receive<S: HandoffStore + ?Sized>(store: &S) -> Result<SessionSnapshot> {
    let composite = match store.get(IMAGE_KEY)? {
        Some(url) => match decode_data_url(&url) {
            Ok(composite) => Some(composite),
            Err(e) => {
                log::warn!("Ignoring unreadable handoff image: {:#}", e);
                None
            }
        },
        None => None,
    };

    let notes = match store.get(NOTES_KEY)? {
        Some(json) => match serde_json::from_str::<Vec<Note>>(&json) {
            Ok(notes) => notes,
            Err(e) => {
                log::warn!("Ignoring unreadable handoff notes: {}", e);
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    Ok(SessionSnapshot::new(composite, notes))
}
