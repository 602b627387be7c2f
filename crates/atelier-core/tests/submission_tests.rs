use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use atelier_core::constants::FALLBACK_SUBMIT_MESSAGE;
use atelier_core::{AdvanceOutcome, FieldRule, ProfileDraft, ProfileSubmitter, StepRegistry, SubmissionPipeline,
                   SubmissionResult, SubmitError, SubmitOutcome, WizardController, WizardError};
use tokio::sync::Notify;

/// Colaborador que registra los borradores recibidos y responde lo indicado.
struct Recording {
    reply: Mutex<Vec<Result<SubmissionResult, SubmitError>>>,
    seen: Mutex<Vec<ProfileDraft>>,
}

impl Recording {
    fn new(reply: Vec<Result<SubmissionResult, SubmitError>>) -> Self {
        Self { reply: Mutex::new(reply),
               seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl ProfileSubmitter for Recording {
    async fn submit(&self, draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError> {
        self.seen.lock().unwrap().push(draft.clone());
        self.reply.lock().unwrap().remove(0)
    }
}

/// Colaborador que queda bloqueado hasta que el test lo libera.
struct Gated {
    release: Notify,
    calls: AtomicUsize,
}

#[async_trait]
impl ProfileSubmitter for Gated {
    async fn submit(&self, _draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(SubmissionResult::ok())
    }
}

fn two_steps() -> StepRegistry {
    StepRegistry::builder("submission").step(1, "Basics", vec![FieldRule::required("fullName", "Full name is required")])
                                       .step(2,
                                             "Agreement",
                                             vec![FieldRule::required("terms", "You must accept the terms")])
                                       .build()
                                       .unwrap()
}

async fn wizard_on_last_step() -> WizardController {
    let mut w = WizardController::builder(two_steps()).transition_delay(Duration::ZERO)
                                                      .build()
                                                      .unwrap();
    w.update_field("fullName", "Ada Lovelace").unwrap();
    w.next().await.unwrap();
    w
}

#[tokio::test]
async fn complete_is_only_allowed_on_the_final_step() {
    let mut w = WizardController::builder(two_steps()).transition_delay(Duration::ZERO)
                                                      .build()
                                                      .unwrap();
    let pipeline = SubmissionPipeline::new(Recording::new(vec![]));
    assert_eq!(w.complete(&pipeline).await, Err(WizardError::NotOnFinalStep { current: 1, last: 2 }));
}

#[tokio::test]
async fn invalid_final_step_blocks_submission() {
    let mut w = wizard_on_last_step().await;
    let pipeline = SubmissionPipeline::new(Recording::new(vec![Ok(SubmissionResult::ok())]));

    let outcome = w.complete(&pipeline).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Blocked(ref e) if e.get("terms") == Some("You must accept the terms")));
    assert!(pipeline.submitter().seen.lock().unwrap().is_empty());
    assert!(!w.state().is_completed(2));
}

#[tokio::test]
async fn server_rejection_keeps_draft_and_allows_retry() {
    let mut w = wizard_on_last_step().await;
    w.update_field("terms", true).unwrap();
    let before = w.draft().clone();
    let pipeline = SubmissionPipeline::new(Recording::new(vec![Ok(SubmissionResult::failed("Email already in use")),
                                                               Ok(SubmissionResult::ok())]));

    let first = w.complete(&pipeline).await.unwrap();
    assert_eq!(first, SubmitOutcome::Failed("Email already in use".into()));
    assert_eq!(pipeline.last_error().as_deref(), Some("Email already in use"));
    assert!(!pipeline.is_submitting());
    assert_eq!(w.draft(), &before);
    assert!(w.is_final_step());

    assert_eq!(w.complete(&pipeline).await.unwrap(), SubmitOutcome::Completed);
    assert_eq!(pipeline.last_error(), None);
    let seen = pipeline.submitter().seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1], before);
}

#[tokio::test]
async fn transport_failure_uses_fallback_message() {
    let mut w = wizard_on_last_step().await;
    w.update_field("terms", true).unwrap();
    let pipeline = SubmissionPipeline::new(Recording::new(vec![Err(SubmitError::Server { status: 500,
                                                                                         message: "boom".into() })]));
    assert_eq!(w.complete(&pipeline).await.unwrap(), SubmitOutcome::Failed(FALLBACK_SUBMIT_MESSAGE.into()));
}

#[tokio::test]
async fn success_fires_completion_once_and_is_final() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let mut w = wizard_on_last_step().await;
    w.update_field("terms", true).unwrap();
    let pipeline = SubmissionPipeline::new(Recording::new(vec![Ok(SubmissionResult::ok())])).on_complete(move || {
                                                                                                counter.fetch_add(1, Ordering::SeqCst);
                                                                                            });

    assert_eq!(w.complete(&pipeline).await.unwrap(), SubmitOutcome::Completed);
    assert_eq!(w.complete(&pipeline).await.unwrap(), SubmitOutcome::AlreadyCompleted);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(w.state().is_completed(2));
    assert_eq!(w.events().last().map(|e| e.kind.code()), Some("R"));
}

#[tokio::test]
async fn concurrent_submit_is_rejected_while_in_flight() {
    let pipeline = SubmissionPipeline::new(Gated { release: Notify::new(),
                                                   calls: AtomicUsize::new(0) });
    let draft = ProfileDraft::new();

    let first = pipeline.submit(&draft);
    let second = async {
        // deja que el primer envío tome la guarda
        while !pipeline.is_submitting() {
            tokio::task::yield_now().await;
        }
        let outcome = pipeline.submit(&draft).await;
        pipeline.submitter().release.notify_one();
        outcome
    };
    let (a, b) = tokio::join!(first, second);

    assert_eq!(a, SubmitOutcome::Completed);
    assert_eq!(b, SubmitOutcome::AlreadySubmitting);
    assert_eq!(pipeline.submitter().calls.load(Ordering::SeqCst), 1);
    assert!(!pipeline.is_submitting());
}

#[tokio::test]
async fn complete_is_ignored_while_a_transition_is_pending() {
    let mut w = wizard_on_last_step().await;
    w.update_field("terms", true).unwrap();
    let pipeline = SubmissionPipeline::new(Recording::new(vec![Ok(SubmissionResult::ok())]));

    assert_eq!(w.begin_advance(1).unwrap(), AdvanceOutcome::Pending { from: 2, to: 1 });
    assert_eq!(w.complete(&pipeline).await.unwrap(), SubmitOutcome::Ignored);
    assert!(pipeline.submitter().seen.lock().unwrap().is_empty());
    assert!(!pipeline.is_completed());

    assert_eq!(w.commit_transition().unwrap(), AdvanceOutcome::Moved { from: 2, to: 1 });
    assert_eq!(w.current_step(), 1);
}
