//! Reconstrucción (replay) del estado de un wizard a partir de eventos.
mod types;

pub use types::{InMemoryWizardRepository, WizardRepository};
