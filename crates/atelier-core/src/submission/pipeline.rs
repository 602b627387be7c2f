use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use log::{info, warn};
use serde::Serialize;

use super::{ProfileSubmitter, SubmissionResult};
use crate::constants::FALLBACK_SUBMIT_MESSAGE;
use crate::draft::ProfileDraft;
use crate::validation::ErrorMap;

/// Resultado visible de un intento de envío.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    /// El colaborador aceptó el perfil; el callback de finalización ya se disparó.
    Completed,
    /// Fallo recuperable: mensaje a mostrar. El borrador queda intacto.
    Failed(String),
    /// El último step no valida; no se llamó al colaborador. Lo produce el
    /// controlador, nunca el pipeline.
    Blocked(ErrorMap),
    /// Ya hay un envío en vuelo; el intento se ignora.
    AlreadySubmitting,
    /// El perfil ya se completó en un envío anterior.
    AlreadyCompleted,
    /// Hay una transición de step pendiente; el controlador no envía nada.
    Ignored,
}

/// Snapshot del estado del pipeline para la UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionState {
    pub is_submitting: bool,
    pub completed: bool,
    pub error: Option<String>,
}

type CompletionCallback = Box<dyn Fn() + Send + Sync>;

pub struct SubmissionPipeline<S: ProfileSubmitter> {
    submitter: S,
    submitting: AtomicBool,
    completed: AtomicBool,
    last_error: Mutex<Option<String>>,
    on_complete: Option<CompletionCallback>,
}

/// Libera la guarda de envío incluso si el future se cancela a mitad.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<S: ProfileSubmitter> SubmissionPipeline<S> {
    pub fn new(submitter: S) -> Self {
        Self { submitter,
               submitting: AtomicBool::new(false),
               completed: AtomicBool::new(false),
               last_error: Mutex::new(None),
               on_complete: None }
    }

    /// Callback `onProfileComplete` del anfitrión (navegar fuera, etc.).
    pub fn on_complete(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn state(&self) -> SubmissionState {
        SubmissionState { is_submitting: self.is_submitting(),
                          completed: self.is_completed(),
                          error: self.last_error() }
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    fn set_error(&self, error: Option<String>) {
        *self.last_error.lock().unwrap_or_else(|p| p.into_inner()) = error;
    }

    /// Entrega el borrador al colaborador. Nunca reintenta: el reintento es
    /// siempre una nueva llamada iniciada por el usuario.
    pub async fn submit(&self, draft: &ProfileDraft) -> SubmitOutcome {
        if self.is_completed() {
            return SubmitOutcome::AlreadyCompleted;
        }
        if self.submitting.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_err() {
            warn!("submission ignored: another submission is in flight");
            return SubmitOutcome::AlreadySubmitting;
        }
        let _guard = InFlight(&self.submitting);
        self.set_error(None);

        let outcome = match self.submitter.submit(draft).await {
            Ok(SubmissionResult { success: true, .. }) => {
                if self.completed.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_ok() {
                    info!("profile submission completed");
                    if let Some(cb) = &self.on_complete {
                        cb();
                    }
                    SubmitOutcome::Completed
                } else {
                    SubmitOutcome::AlreadyCompleted
                }
            }
            Ok(SubmissionResult { message, .. }) => {
                let message = message.filter(|m| !m.trim().is_empty())
                                     .unwrap_or_else(|| FALLBACK_SUBMIT_MESSAGE.to_string());
                warn!("profile submission rejected: {message}");
                SubmitOutcome::Failed(message)
            }
            Err(e) => {
                warn!("profile submission failed: {e}");
                SubmitOutcome::Failed(FALLBACK_SUBMIT_MESSAGE.to_string())
            }
        };

        if let SubmitOutcome::Failed(message) = &outcome {
            self.set_error(Some(message.clone()));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::SubmitError;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    struct Scripted(Mutex<Vec<Result<SubmissionResult, SubmitError>>>);

    #[async_trait]
    impl ProfileSubmitter for Scripted {
        async fn submit(&self, _draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError> {
            self.0.lock().unwrap().remove(0)
        }
    }

    fn scripted(results: Vec<Result<SubmissionResult, SubmitError>>) -> Scripted {
        Scripted(Mutex::new(results))
    }

    #[tokio::test]
    async fn failure_message_is_surfaced_and_cleared_on_retry() {
        let pipeline = SubmissionPipeline::new(scripted(vec![Ok(SubmissionResult::failed("Email already in use")),
                                                             Ok(SubmissionResult::ok())]));
        let draft = ProfileDraft::new();
        assert_eq!(pipeline.submit(&draft).await, SubmitOutcome::Failed("Email already in use".into()));
        assert_eq!(pipeline.last_error().as_deref(), Some("Email already in use"));
        assert!(!pipeline.is_submitting());

        assert_eq!(pipeline.submit(&draft).await, SubmitOutcome::Completed);
        assert_eq!(pipeline.last_error(), None);
    }

    #[tokio::test]
    async fn transport_errors_and_empty_messages_use_fallback() {
        let pipeline = SubmissionPipeline::new(scripted(vec![Err(SubmitError::Transport("connection reset".into())),
                                                             Ok(SubmissionResult { success: false,
                                                                                   message: Some("  ".into()) }),]));
        let draft = ProfileDraft::new();
        assert_eq!(pipeline.submit(&draft).await, SubmitOutcome::Failed(FALLBACK_SUBMIT_MESSAGE.into()));
        assert_eq!(pipeline.submit(&draft).await, SubmitOutcome::Failed(FALLBACK_SUBMIT_MESSAGE.into()));
    }

    #[tokio::test]
    async fn completion_callback_fires_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let pipeline = SubmissionPipeline::new(scripted(vec![Ok(SubmissionResult::ok())])).on_complete(move || {
                                                                                              counter.fetch_add(1, Ordering::SeqCst);
                                                                                          });
        let draft = ProfileDraft::new();
        assert_eq!(pipeline.submit(&draft).await, SubmitOutcome::Completed);
        assert_eq!(pipeline.submit(&draft).await, SubmitOutcome::AlreadyCompleted);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(pipeline.state().completed);
    }
}
