//! Errores del core.
//!
//! Sólo cubren usos incorrectos por parte del llamador (ids de step
//! inexistentes, paths vacíos, registros mal formados). Los errores de
//! validación y los fallos de envío viajan como datos (`ErrorMap`,
//! `SubmitOutcome`) y nunca como `Err`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum WizardError {
    #[error("unknown step id {0}")] UnknownStep(u32),
    #[error("invalid field path '{0}'")] InvalidPath(String),
    #[error("invalid step registry: {0}")] InvalidRegistry(String),
    #[error("not on the final step (current {current}, final {last})")] NotOnFinalStep { current: u32, last: u32 },
    #[error("no transition pending")] NoPendingTransition,
    #[error("wizard has been torn down")] TornDown,
    #[error("internal: {0}")] Internal(String),
}
