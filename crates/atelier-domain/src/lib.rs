// atelier-domain library entry point
pub mod error;
pub mod profile_kind;
pub mod recommendation;
pub mod submission;
pub use atelier_core::Identity;
pub use error::DomainError;
pub use profile_kind::ProfileKind;
pub use recommendation::{AuthorAndSubjectOnly, Recommendation, Visibility, VisibilityPolicy};
pub use submission::ProfileSubmission;
