//! SubmissionPipeline: entrega del borrador completo a la capacidad externa
//! de "completar perfil".
//!
//! - `ProfileSubmitter`: capacidad asíncrona provista por el anfitrión
//!   (HTTP en la app real; el core es agnóstico al transporte).
//! - `SubmissionPipeline`: guarda de un único envío en vuelo, mensaje de
//!   error visible y callback de finalización disparado una sola vez.

mod pipeline;
mod submitter;

pub use pipeline::{SubmissionPipeline, SubmissionState, SubmitOutcome};
pub use submitter::{ProfileSubmitter, SubmissionResult, SubmitError};
