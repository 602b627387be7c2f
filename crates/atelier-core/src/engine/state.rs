//! Estado observable del wizard y resultados de navegación.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::validation::ErrorMap;

/// Estado del wizard.
///
/// Transiciones válidas del step actual:
/// - hacia adelante, sólo si el step actual valida (y queda completado);
/// - hacia atrás, siempre.
///
/// `completed_steps` sólo crece: un step completado no se revoca aunque sus
/// campos se editen luego a un valor inválido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub current_step: u32,
    pub completed_steps: BTreeSet<u32>,
    pub is_transitioning: bool,
    pub errors: ErrorMap,
}

impl WizardState {
    pub fn new() -> Self {
        Self { current_step: 1,
               completed_steps: BTreeSet::new(),
               is_transitioning: false,
               errors: ErrorMap::new() }
    }

    pub fn is_completed(&self, step_id: u32) -> bool {
        self.completed_steps.contains(&step_id)
    }

    /// Un step es alcanzable (clicable en la lista de steps) si no está más
    /// allá del frente actual o si ya fue completado.
    pub fn is_reachable(&self, step_id: u32) -> bool {
        step_id <= self.current_step || self.completed_steps.contains(&step_id)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Resultado de una petición de navegación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AdvanceOutcome {
    /// El destino es el step actual: no-op.
    Unchanged,
    /// Ya hay una transición pendiente; la petición se ignora.
    Ignored,
    /// El step actual no valida; se queda en él con estos errores.
    Blocked(ErrorMap),
    /// Transición iniciada, pendiente de `commit_transition`.
    Pending { from: u32, to: u32 },
    /// Transición aplicada.
    Moved { from: u32, to: u32 },
    /// El wizard se desmontó durante la suspensión; el commit se descartó.
    Discarded { to: u32 },
}
