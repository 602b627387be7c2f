//! WizardController: la máquina de estados del wizard.
//!
//! Provee el controlador, su builder y los tipos de estado/resultado que ve
//! la UI.

pub mod builder;
pub mod core;
pub mod state;
pub mod teardown;

pub use self::core::WizardController;
pub use builder::WizardBuilder;
pub use state::{AdvanceOutcome, WizardState};
pub use teardown::TeardownHandle;
