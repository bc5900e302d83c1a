//! Client-local key-value persistence.
//!
//! Entries are plain files under an application home directory, written
//! atomically (tmp file + rename). The engine stores exactly two keys:
//! `user` (the serialized session profile) and `selectedFaculty` (a plain
//! string), read once at startup and written on each relevant change.

use std::{
    env, fs,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AdmissionError;

const DEFAULT_DIR_NAME: &str = ".admission_core";
const ENTRIES_DIR: &str = "entries";
const TMP_SUFFIX: &str = "tmp";

pub type Result<T> = std::result::Result<T, AdmissionError>;

/// File-backed key-value store rooted at `~/.admission_core` (overridable
/// via `ADMISSION_CORE_HOME`, or an explicit root for tests).
#[derive(Debug, Clone)]
pub struct LocalStore {
    entries_dir: PathBuf,
}

impl LocalStore {
    pub fn open(root: PathBuf) -> Result<Self> {
        let entries_dir = root.join(ENTRIES_DIR);
        ensure_dir(&entries_dir)?;
        Ok(Self { entries_dir })
    }

    pub fn open_default() -> Result<Self> {
        Self::open(app_data_dir())
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.put(key, &json)
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let name = canonical_key(key);
        if name.is_empty() {
            return Err(AdmissionError::Storage(format!(
                "key `{key}` does not map to a file name"
            )));
        }
        Ok(self.entries_dir.join(name))
    }
}

/// Application data directory, defaulting to `~/.admission_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("ADMISSION_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn canonical_key(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect()
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
