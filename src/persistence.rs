use crate::core::types::UserProfile;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::NamedTempFile;

/// Storage slot for the dictionary word list (a JSON array of strings).
pub const DICTIONARY_KEY: &str = "user_dictionary";
/// Storage slot for the player profile (a JSON object).
pub const PROFILE_KEY: &str = "user_profile";

/// A string-keyed blob store holding the engine's persisted JSON values.
///
/// The engine never surfaces these errors to gameplay callers; they are
/// logged at the call site and the in-memory state stays authoritative.
pub trait BlobStore {
    /// Reads the value under `key`; `Ok(None)` when the slot has never been
    /// written.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Replaces the value under `key`.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed store: one JSON file per key under a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(key).with_extension("json")
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        // Write to a sibling temp file, then rename into place, so a crash
        // mid-write never leaves a truncated slot behind.
        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.persist(self.slot_path(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

/// In-memory store for tests. Clones share the same slots, so a test can keep
/// a handle while the engine owns another, and writes can be made to fail on
/// demand to exercise the fire-and-forget failure policy.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Direct peek at a slot, bypassing the trait.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes.get() {
            return Err(io::Error::other("writes disabled"));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Saves the player profile, flooring the score to a whole number first.
/// Failures are logged and swallowed, same as dictionary saves.
pub fn save_user_profile(store: &mut dyn BlobStore, user_name: &str, score: f64, is_dark_mode: bool) {
    let profile = UserProfile {
        user_name: user_name.to_string(),
        score: score.floor() as i64,
        is_dark_mode,
    };
    let json = match serde_json::to_string(&profile) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("[ERROR] Failed to serialize user profile: {e}");
            return;
        }
    };
    if let Err(e) = store.write(PROFILE_KEY, &json) {
        eprintln!("[ERROR] Failed to save user profile: {e}");
    }
}

/// Loads the player profile; `None` for a first-time user or when the slot
/// cannot be read or parsed.
pub fn load_user_profile(store: &dyn BlobStore) -> Option<UserProfile> {
    let raw = match store.read(PROFILE_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            eprintln!("[ERROR] Failed to read user profile: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            eprintln!("[ERROR] Persisted user profile is malformed: {e}");
            None
        }
    }
}
