//! Constantes del motor de wizards.
//!
//! `ENGINE_VERSION` entra en el hash de definición de cada `StepRegistry`:
//! un cambio incompatible en la semántica de las reglas debe incrementarla
//! para que sesiones persistidas con otra versión sean detectables.

/// Versión lógica del motor. Forma parte del `definition_hash` del registro.
pub const ENGINE_VERSION: &str = "W1.0";

/// Duración por defecto (ms) de la suspensión entre `TransitionStarted` y el
/// commit del nuevo step. Sólo existe para dejar correr la animación de salida.
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 300;

/// Mensaje que se muestra cuando el colaborador de envío falla sin mensaje propio.
pub const FALLBACK_SUBMIT_MESSAGE: &str = "Failed to complete profile. Please try again.";
