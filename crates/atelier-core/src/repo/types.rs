//! Replay lineal: consume eventos en orden y produce un `WizardState`.
//!
//! Una sesión reanudada nunca queda a mitad de transición: una
//! `TransitionStarted` sin commit se ignora. Los errores de validación no se
//! reconstruyen (se recalculan en el siguiente avance).
use crate::engine::WizardState;
use crate::event::{WizardEvent, WizardEventKind};
use crate::registry::StepRegistry;

/// Trait para reconstruir el estado de una sesión a partir de sus eventos.
pub trait WizardRepository {
    fn load(&self, events: &[WizardEvent], registry: &StepRegistry) -> WizardState;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InMemoryWizardRepository;

impl InMemoryWizardRepository {
    pub fn new() -> Self {
        Self
    }
}

impl WizardRepository for InMemoryWizardRepository {
    fn load(&self, events: &[WizardEvent], registry: &StepRegistry) -> WizardState {
        let mut state = WizardState::new();
        for ev in events {
            match &ev.kind {
                WizardEventKind::StepCompleted { step_id } if registry.contains(*step_id) => {
                    state.completed_steps.insert(*step_id);
                }
                WizardEventKind::TransitionCommitted { step_id } if registry.contains(*step_id) => {
                    state.current_step = *step_id;
                }
                _ => {}
            }
        }
        state
    }
}
