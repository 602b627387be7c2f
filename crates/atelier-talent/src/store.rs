//! Capacidad clave/valor inyectable.
//!
//! Los valores son strings opacos (JSON en la práctica), igual que el
//! almacenamiento local del navegador que reemplaza.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;

use crate::TalentError;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, TalentError>;
    fn set(&self, key: &str, value: &str) -> Result<(), TalentError>;
    fn remove(&self, key: &str) -> Result<(), TalentError>;
}

/// Store en memoria (tests y sesiones efímeras).
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    data: Mutex<BTreeMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, TalentError> {
        let data = self.data.lock().map_err(|_| TalentError::LockPoisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TalentError> {
        let mut data = self.data.lock().map_err(|_| TalentError::LockPoisoned)?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TalentError> {
        let mut data = self.data.lock().map_err(|_| TalentError::LockPoisoned)?;
        data.remove(key);
        Ok(())
    }
}

/// Store respaldado por un único archivo JSON (`{ clave: valor }`).
///
/// Cada escritura reescribe el archivo completo de forma atómica
/// (`.tmp` + rename).
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(),
               lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, TalentError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, data: &BTreeMap<String, String>) -> Result<(), TalentError> {
        let json = serde_json::to_string_pretty(data)?;
        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;
        debug!("key-value file {} written ({} keys)", self.path.display(), data.len());
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, TalentError> {
        let _guard = self.lock.lock().map_err(|_| TalentError::LockPoisoned)?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TalentError> {
        let _guard = self.lock.lock().map_err(|_| TalentError::LockPoisoned)?;
        let mut data = self.read_all()?;
        data.insert(key.to_string(), value.to_string());
        self.write_all(&data)
    }

    fn remove(&self, key: &str) -> Result<(), TalentError> {
        let _guard = self.lock.lock().map_err(|_| TalentError::LockPoisoned)?;
        let mut data = self.read_all()?;
        if data.remove(key).is_some() {
            self.write_all(&data)?;
        }
        Ok(())
    }
}
