//! Talentos guardados por el usuario ("favoritos").
//!
//! Se guarda un array JSON de ids bajo una sola clave. Los ids se mantienen
//! únicos y ordenados.

use std::collections::BTreeSet;

use log::{info, warn};
use uuid::Uuid;

use crate::{KeyValueStore, TalentError};

/// Clave bajo la que se persiste la lista.
pub const SAVED_TALENT_KEY: &str = "savedTalent";

pub struct SavedTalent<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SavedTalent<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVED_TALENT_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load(&self) -> Result<BTreeSet<Uuid>, TalentError> {
        match self.store.get(&self.key)? {
            None => Ok(BTreeSet::new()),
            Some(raw) => {
                let ids: Vec<Uuid> = serde_json::from_str(&raw).map_err(|e| {
                                                                 warn!("saved talent list is unreadable: {e}");
                                                                 TalentError::Corrupted(self.key.clone())
                                                             })?;
                Ok(ids.into_iter().collect())
            }
        }
    }

    fn save(&self, ids: &BTreeSet<Uuid>) -> Result<(), TalentError> {
        let raw = serde_json::to_string(&ids.iter().collect::<Vec<_>>())?;
        self.store.set(&self.key, &raw)
    }

    /// Ids guardados, en orden.
    pub fn list(&self) -> Result<Vec<Uuid>, TalentError> {
        Ok(self.load()?.into_iter().collect())
    }

    pub fn contains(&self, id: Uuid) -> Result<bool, TalentError> {
        Ok(self.load()?.contains(&id))
    }

    /// Devuelve `true` si el id no estaba guardado.
    pub fn add(&self, id: Uuid) -> Result<bool, TalentError> {
        let mut ids = self.load()?;
        let inserted = ids.insert(id);
        if inserted {
            self.save(&ids)?;
            info!("talent {id} saved");
        }
        Ok(inserted)
    }

    /// Devuelve `true` si el id estaba guardado.
    pub fn remove(&self, id: Uuid) -> Result<bool, TalentError> {
        let mut ids = self.load()?;
        let removed = ids.remove(&id);
        if removed {
            self.save(&ids)?;
            info!("talent {id} removed from saved list");
        }
        Ok(removed)
    }

    /// Alterna el estado; devuelve si queda guardado.
    pub fn toggle(&self, id: Uuid) -> Result<bool, TalentError> {
        if self.remove(id)? {
            Ok(false)
        } else {
            self.add(id)
        }
    }

    pub fn clear(&self) -> Result<(), TalentError> {
        self.store.remove(&self.key)
    }
}
