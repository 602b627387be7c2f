use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use atelier_core::{AdvanceOutcome, Identity, ProfileDraft, ProfileSubmitter, SubmissionPipeline, SubmissionResult,
                   SubmitError, SubmitOutcome, WizardController};
use atelier_domain::ProfileKind;
use atelier_rust::{wizard_for, AppConfig};

fn instant_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.wizard.transition_delay_ms = 0;
    config
}

struct Reply(SubmissionResult);

#[async_trait]
impl ProfileSubmitter for Reply {
    async fn submit(&self, _draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError> {
        Ok(self.0.clone())
    }
}

/// Stylist (7 steps) hasta el último step con todo válido.
async fn stylist_on_last_step() -> WizardController {
    let mut w = wizard_for(ProfileKind::Stylist,
                           Some(Identity::new("Grace", "Hopper", "grace@example.com")),
                           &instant_config()).unwrap();
    w.update_field("location.city", "Paris").unwrap();
    w.update_field("location.country", "France").unwrap();
    w.update_field("specialties", vec!["editorial"]).unwrap();
    w.update_field("clientTypes", vec!["brand"]).unwrap();
    w.update_field("yearsExperience", 12).unwrap();
    w.update_field("bio", "Editorial stylist working across Paris and Milan.").unwrap();
    w.update_field("portfolioImages", vec!["https://cdn.example.com/g.jpg"]).unwrap();
    while !w.is_final_step() {
        assert!(matches!(w.next().await.unwrap(), AdvanceOutcome::Moved { .. }), "{:?}", w.errors());
    }
    w.update_field("agreeToTerms", true).unwrap();
    w
}

#[tokio::test]
async fn scenario_a_model_step_one_reports_both_fields() {
    let mut w = wizard_for(ProfileKind::Model, None, &instant_config()).unwrap();
    w.update_field("email", "ada@").unwrap();

    let outcome = w.advance(2).await.unwrap();
    let AdvanceOutcome::Blocked(errors) = outcome else {
        panic!("expected a blocked advance");
    };
    assert_eq!(errors.get("fullName"), Some("Full name is required"));
    assert_eq!(errors.get("email"), Some("Valid email is required"));
    assert_eq!(w.current_step(), 1);
}

#[tokio::test]
async fn scenario_b_valid_step_one_advances() {
    let mut w = wizard_for(ProfileKind::Model, None, &instant_config()).unwrap();
    w.update_field("fullName", "Ada Lovelace").unwrap();
    w.update_field("email", "ada@example.com").unwrap();

    w.advance(2).await.unwrap();
    assert_eq!(w.current_step(), 2);
    assert_eq!(w.state().completed_steps.iter().copied().collect::<Vec<_>>(), vec![1]);
    assert!(w.errors().is_empty());
}

#[tokio::test]
async fn scenario_c_step_list_jump_back_skips_validation() {
    let mut w = stylist_on_last_step().await;
    w.jump_to(4).await.unwrap();
    // step 4 queda inválido; volver atrás no lo valida
    w.update_field("clientTypes", Vec::<String>::new()).unwrap();

    assert_eq!(w.jump_to(2).await.unwrap(), AdvanceOutcome::Moved { from: 4, to: 2 });
    assert_eq!(w.current_step(), 2);
    assert!(w.errors().is_empty());
}

#[tokio::test]
async fn scenario_d_rejected_submission_surfaces_the_message() {
    let mut w = stylist_on_last_step().await;
    let draft_before = w.draft().clone();
    let pipeline = SubmissionPipeline::new(Reply(SubmissionResult::failed("Email already in use")));

    let outcome = w.complete(&pipeline).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Failed("Email already in use".into()));
    assert_eq!(pipeline.state().error.as_deref(), Some("Email already in use"));
    assert!(!pipeline.is_submitting());
    assert_eq!(w.draft(), &draft_before);
}

#[tokio::test]
async fn scenario_e_success_fires_on_complete_once() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let mut w = stylist_on_last_step().await;
    let pipeline = SubmissionPipeline::new(Reply(SubmissionResult::ok())).on_complete(move || {
                                                                             counter.fetch_add(1, Ordering::SeqCst);
                                                                         });

    assert_eq!(w.complete(&pipeline).await.unwrap(), SubmitOutcome::Completed);
    assert_eq!(w.complete(&pipeline).await.unwrap(), SubmitOutcome::AlreadyCompleted);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}
