//! Demo de punta a punta: wizard de modelo con identidad sembrada, un envío
//! rechazado, reintento exitoso y la lista de talentos guardados.
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use atelier_core::{AdvanceOutcome, Identity, ProfileDraft, ProfileSubmitter, SubmissionPipeline, SubmissionResult,
                   SubmitError, SubmitOutcome};
use atelier_domain::{ProfileKind, ProfileSubmission};
use atelier_rust::logging::init_logging;
use atelier_rust::{wizard_for, AppError, CONFIG};
use atelier_talent::{JsonFileStore, SavedTalent};
use log::{info, warn};
use uuid::Uuid;

/// Backend simulado: rechaza el primer intento como lo haría un email duplicado.
struct DemoBackend {
    attempts: AtomicUsize,
}

#[async_trait]
impl ProfileSubmitter for DemoBackend {
    async fn submit(&self, draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError> {
        if self.attempts.fetch_add(1, Ordering::SeqCst) == 0 {
            return Ok(SubmissionResult::failed("Email already in use"));
        }
        let submission =
            ProfileSubmission::from_draft(ProfileKind::Model, draft).map_err(|e| SubmitError::Transport(e.to_string()))?;
        info!("payload: {}", submission.to_payload());
        Ok(SubmissionResult::ok())
    }
}

async fn run() -> Result<(), AppError> {
    let identity = Identity::new("Ada", "Lovelace", "ada@example.com");
    let mut wizard = wizard_for(ProfileKind::Model, Some(identity), &CONFIG)?;

    let answers: Vec<Vec<(&str, atelier_core::FieldValue)>> =
        vec![vec![],
             vec![("location.city", "Milano".into()), ("location.country", "Italy".into())],
             vec![("measurements.height", 178.into()), ("measurements.waist", 62.into())],
             vec![("appearance.hairColor", "brown".into()), ("appearance.eyeColor", "green".into())],
             vec![("experienceLevel", "professional".into()), ("categories", vec!["runway", "editorial"].into())],
             vec![("portfolioImages", vec!["https://cdn.example.com/ada-1.jpg"].into())],
             vec![("rates.hourly", 150.into()), ("availability", vec!["weekdays"].into())],
             vec![("agreeToTerms", true.into())]];

    for (idx, fields) in answers.into_iter().enumerate() {
        for (path, value) in fields {
            wizard.update_field(path, value)?;
        }
        if idx + 1 == wizard.registry().step_count() as usize {
            break;
        }
        match wizard.next().await? {
            AdvanceOutcome::Moved { to, .. } => {
                let title = wizard.current_descriptor().map(|d| d.title()).unwrap_or_default();
                info!("step {to}: {title}");
            }
            AdvanceOutcome::Blocked(errors) => {
                for (path, message) in errors.iter() {
                    warn!("{path}: {message}");
                }
                let fields: Vec<&str> = errors.paths().collect();
                return Err(AppError::StepBlocked { step: wizard.current_step(),
                                                   fields: fields.join(", ") });
            }
            _ => {}
        }
    }

    let pipeline = SubmissionPipeline::new(DemoBackend { attempts: AtomicUsize::new(0) })
        .on_complete(|| info!("profile complete, leaving the wizard"));
    loop {
        match wizard.complete(&pipeline).await? {
            SubmitOutcome::Failed(message) => warn!("submission failed: {message}; retrying"),
            SubmitOutcome::Completed | SubmitOutcome::AlreadyCompleted => break,
            other => {
                warn!("unexpected submission outcome {other:?}");
                break;
            }
        }
    }

    let saved = SavedTalent::new(JsonFileStore::new(&CONFIG.talent.saved_path));
    let favourite = Uuid::new_v4();
    saved.toggle(favourite)?;
    info!("saved talent: {} entries in {}", saved.list()?.len(), CONFIG.talent.saved_path.display());
    saved.toggle(favourite)?;
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging(&CONFIG.log.filter);
    if let Err(e) = run().await {
        eprintln!("[atelier-demo] {e}");
        std::process::exit(1);
    }
}
