//! atelier-core: motor parametrizable de wizards de perfil.
//!
//! Un wizard es una secuencia ordenada de steps de formulario. Cada step
//! posee sus reglas de validación, todos comparten un borrador (`ProfileDraft`)
//! anidado y el avance hacia adelante queda bloqueado mientras el step actual
//! no valide. El último step entrega el borrador completo a un
//! `ProfileSubmitter` externo.
pub mod constants;
pub mod draft;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod registry;
pub mod repo;
pub mod submission;
pub mod validation;

pub use draft::{default_seed, FieldPath, FieldValue, Identity, ProfileDraft, Seeder};
pub use engine::{AdvanceOutcome, TeardownHandle, WizardBuilder, WizardController, WizardState};
pub use errors::WizardError;
pub use event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
pub use registry::{StepDescriptor, StepRegistry, StepRegistryBuilder};
pub use repo::{InMemoryWizardRepository, WizardRepository};
pub use submission::{ProfileSubmitter, SubmissionPipeline, SubmissionResult, SubmissionState, SubmitError,
                     SubmitOutcome};
pub use validation::{validate, ErrorMap, FieldRule, RuleKind, RuleSet};
