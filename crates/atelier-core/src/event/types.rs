//! Tipos de evento del wizard y estructura `WizardEvent`.
//!
//! Rol:
//! - El `WizardController` emite un evento por cada cambio observable de su
//!   estado a un `EventStore` append-only.
//! - Con esos eventos `repo::WizardRepository` reconstruye el step actual y
//!   los steps completados (reanudar una sesión, auditoría).
//! - Los valores de los campos NO viajan en los eventos, sólo sus paths.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardEventKind {
    /// Primer evento de una sesión: fija perfil, hash de definición y número
    /// de steps.
    WizardInitialized { profile: String, definition_hash: String, step_count: u32 },
    /// Se escribió un campo del borrador.
    FieldUpdated { path: String },
    /// Un avance hacia adelante fue bloqueado por validación.
    StepBlocked { step_id: u32, fields: Vec<String> },
    /// Un step validó limpio por primera vez. Nunca se revoca.
    StepCompleted { step_id: u32 },
    /// Comenzó la suspensión de una transición.
    TransitionStarted { from: u32, to: u32 },
    /// La transición se aplicó: `step_id` es el nuevo step actual.
    TransitionCommitted { step_id: u32 },
    /// La transición se descartó porque el wizard fue desmontado.
    TransitionDiscarded { step_id: u32 },
    /// El borrador completo se entregó al pipeline de envío.
    SubmissionRequested { draft_fingerprint: String },
}

impl WizardEventKind {
    /// Código compacto de una letra (útil en tests y logs).
    pub fn code(&self) -> &'static str {
        match self {
            WizardEventKind::WizardInitialized { .. } => "I",
            WizardEventKind::FieldUpdated { .. } => "U",
            WizardEventKind::StepBlocked { .. } => "B",
            WizardEventKind::StepCompleted { .. } => "C",
            WizardEventKind::TransitionStarted { .. } => "S",
            WizardEventKind::TransitionCommitted { .. } => "T",
            WizardEventKind::TransitionDiscarded { .. } => "D",
            WizardEventKind::SubmissionRequested { .. } => "R",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardEvent {
    pub seq: u64, // orden de append dentro de la sesión
    pub session_id: Uuid,
    pub kind: WizardEventKind,
    pub ts: DateTime<Utc>, // metadato, no participa en el replay
}
