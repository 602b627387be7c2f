//! Builder para `WizardController`.
//!
//! Junta el registro de steps, el borrador inicial (sembrado desde la
//! identidad si no se pasa uno explícito), el store de eventos y la duración
//! de la suspensión de transición.
//!
//! Si el store ya contiene eventos para `session_id`, la sesión se reanuda:
//! el estado se reconstruye por replay y no se emite un nuevo
//! `WizardInitialized`.
//!
//! ```ignore
//! let wizard = WizardController::builder(registry)
//!     .identity(Identity::new("Ada", "Lovelace", "ada@example.com"))
//!     .transition_delay(Duration::from_millis(300))
//!     .build()?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use log::info;
use uuid::Uuid;

use crate::constants::DEFAULT_TRANSITION_DELAY_MS;
use crate::draft::{Identity, ProfileDraft};
use crate::engine::{TeardownHandle, WizardController, WizardState};
use crate::errors::WizardError;
use crate::event::{EventStore, InMemoryEventStore, WizardEventKind};
use crate::repo::{InMemoryWizardRepository, WizardRepository};
use crate::registry::StepRegistry;

#[derive(Debug)]
pub struct WizardBuilder<E: EventStore = InMemoryEventStore> {
    registry: Arc<StepRegistry>,
    identity: Option<Identity>,
    draft: Option<ProfileDraft>,
    event_store: E,
    session_id: Option<Uuid>,
    transition_delay: Duration,
    teardown: TeardownHandle,
}

impl WizardBuilder<InMemoryEventStore> {
    pub fn new(registry: impl Into<Arc<StepRegistry>>) -> Self {
        Self { registry: registry.into(),
               identity: None,
               draft: None,
               event_store: InMemoryEventStore::new(),
               session_id: None,
               transition_delay: Duration::from_millis(DEFAULT_TRANSITION_DELAY_MS),
               teardown: TeardownHandle::new() }
    }
}

impl<E: EventStore> WizardBuilder<E> {
    /// Identidad del usuario autenticado; siembra el borrador inicial.
    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Borrador explícito. Tiene prioridad sobre la siembra por identidad.
    pub fn draft(mut self, draft: ProfileDraft) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }

    pub fn session_id(mut self, session_id: Uuid) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub fn teardown_handle(mut self, handle: TeardownHandle) -> Self {
        self.teardown = handle;
        self
    }

    /// Cambia el store de eventos (p. ej. para reanudar una sesión).
    pub fn event_store<E2: EventStore>(self, event_store: E2) -> WizardBuilder<E2> {
        WizardBuilder { registry: self.registry,
                        identity: self.identity,
                        draft: self.draft,
                        event_store,
                        session_id: self.session_id,
                        transition_delay: self.transition_delay,
                        teardown: self.teardown }
    }

    pub fn build(self) -> Result<WizardController<E>, WizardError> {
        if self.registry.step_count() == 0 {
            return Err(WizardError::InvalidRegistry("registry has no steps".into()));
        }
        let mut event_store = self.event_store;
        let session_id = self.session_id.unwrap_or_else(Uuid::new_v4);
        let draft = match self.draft {
            Some(d) => d,
            None => self.registry.seed(self.identity.as_ref()),
        };

        let existing = event_store.list(session_id);
        let state = if existing.is_empty() {
            event_store.append_kind(session_id,
                                    WizardEventKind::WizardInitialized { profile: self.registry.profile().to_string(),
                                                                         definition_hash:
                                                                             self.registry.definition_hash().to_string(),
                                                                         step_count: self.registry.step_count() });
            info!("wizard '{}' initialized (session {session_id})", self.registry.profile());
            WizardState::new()
        } else {
            // La sesión debe haberse creado con la misma tabla de steps
            if let Some(WizardEventKind::WizardInitialized { definition_hash, .. }) = existing.first().map(|e| &e.kind) {
                if definition_hash != self.registry.definition_hash() {
                    return Err(WizardError::InvalidRegistry(format!("session {session_id} was created with definition \
                                                                     {definition_hash}")));
                }
            }
            let state = InMemoryWizardRepository::new().load(&existing, &self.registry);
            info!("wizard '{}' resumed at step {} (session {session_id}, {} events)",
                  self.registry.profile(),
                  state.current_step,
                  existing.len());
            state
        };

        Ok(WizardController { registry: self.registry,
                              draft,
                              state,
                              pending: None,
                              event_store,
                              session_id,
                              transition_delay: self.transition_delay,
                              teardown: self.teardown })
    }
}
