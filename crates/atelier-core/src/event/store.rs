use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{WizardEvent, WizardEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, session_id: Uuid, kind: WizardEventKind) -> WizardEvent;
    /// Lista eventos de una sesión (orden ascendente por seq).
    fn list(&self, session_id: Uuid) -> Vec<WizardEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: HashMap<Uuid, Vec<WizardEvent>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sesiones con al menos un evento.
    pub fn sessions(&self) -> Vec<Uuid> {
        self.inner.keys().copied().collect()
    }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, session_id: Uuid, kind: WizardEventKind) -> WizardEvent {
        let events = self.inner.entry(session_id).or_default();
        let ev = WizardEvent { seq: events.len() as u64,
                               session_id,
                               kind,
                               ts: Utc::now() };
        events.push(ev.clone());
        ev
    }

    fn list(&self, session_id: Uuid) -> Vec<WizardEvent> {
        self.inner.get(&session_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_per_session() {
        let mut store = InMemoryEventStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.append_kind(a, WizardEventKind::FieldUpdated { path: "x".into() });
        let second = store.append_kind(a, WizardEventKind::StepCompleted { step_id: 1 });
        let other = store.append_kind(b, WizardEventKind::StepCompleted { step_id: 1 });
        assert_eq!(second.seq, 1);
        assert_eq!(other.seq, 0);
        assert_eq!(store.list(a).len(), 2);
        assert!(store.list(Uuid::new_v4()).is_empty());
        assert_eq!(store.sessions().len(), 2);
    }
}
