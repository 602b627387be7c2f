//! Atelier Rust Library
//!
//! Punto de entrada de la aplicación de wizards de perfil:
//! - `config`: configuración global cargada desde el entorno (`.env`).
//! - `errors`: error de aplicación que agrupa los de cada crate.
//! - `logging`: bootstrap de logs para los binarios.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{AppConfig, CONFIG};
pub use errors::AppError;

use std::sync::Arc;

use atelier_core::{Identity, StepRegistry, WizardController};
use atelier_domain::ProfileKind;

/// Crea un wizard para el tipo de perfil con la configuración dada.
pub fn wizard_for(kind: ProfileKind,
                  identity: Option<Identity>,
                  config: &AppConfig)
                  -> Result<WizardController, AppError> {
    let registry: Arc<StepRegistry> = atelier_profiles::registry_for(kind)?;
    let mut builder = WizardController::builder(registry).transition_delay(config.wizard.transition_delay());
    if let Some(identity) = identity {
        builder = builder.identity(identity);
    }
    Ok(builder.build()?)
}
