use atelier_core::WizardError;
use atelier_domain::DomainError;
use atelier_talent::TalentError;
use thiserror::Error;

/// Errores de la aplicación (nivel binario / integración).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error del wizard: {0}")]
    Wizard(#[from] WizardError),
    #[error("Error de dominio: {0}")]
    Domain(#[from] DomainError),
    #[error("Error de talentos guardados: {0}")]
    Talent(#[from] TalentError),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Step {step} bloqueado por validación: {fields}")]
    StepBlocked { step: u32, fields: String },
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
}
