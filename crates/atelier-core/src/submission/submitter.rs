use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::draft::ProfileDraft;

/// Respuesta del colaborador de envío.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmissionResult {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false,
               message: Some(message.into()) }
    }
}

/// Fallos de transporte / servidor (la petición no produjo un `SubmissionResult`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Capacidad externa que persiste el perfil completo.
#[async_trait]
pub trait ProfileSubmitter: Send + Sync {
    async fn submit(&self, draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError>;
}

#[async_trait]
impl<T: ProfileSubmitter + ?Sized> ProfileSubmitter for std::sync::Arc<T> {
    async fn submit(&self, draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError> {
        (**self).submit(draft).await
    }
}

#[async_trait]
impl<T: ProfileSubmitter + ?Sized> ProfileSubmitter for Box<T> {
    async fn submit(&self, draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError> {
        (**self).submit(draft).await
    }
}
