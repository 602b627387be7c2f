use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use atelier_core::{validate, AdvanceOutcome, Identity, ProfileDraft, ProfileSubmitter, SubmissionPipeline,
                   SubmissionResult, SubmitError, SubmitOutcome, WizardController};
use atelier_domain::ProfileKind;
use atelier_profiles::{build_registry, registry_for};
use serde_json::json;

struct AcceptAll;

#[async_trait]
impl ProfileSubmitter for AcceptAll {
    async fn submit(&self, _draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError> {
        Ok(SubmissionResult::ok())
    }
}

fn complete_draft(kind: ProfileKind) -> ProfileDraft {
    let individual = json!({
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "location": {"city": "Milano", "country": "Italy"},
        "measurements": {"height": 178, "waist": 62},
        "appearance": {"hairColor": "brown", "eyeColor": "green"},
        "experienceLevel": "professional",
        "categories": ["runway", "editorial"],
        "portfolioImages": ["https://cdn.example.com/1.jpg"],
        "availability": ["weekdays"],
        "specialties": ["fashion"],
        "equipment": {"camera": "Leica SL2"},
        "yearsExperience": 8,
        "bio": "Editorial work for independent labels since 2016.",
        "designCategories": ["womenswear"],
        "collections": ["SS25"],
        "services": ["custom tailoring"],
        "clientTypes": ["celebrity"],
        "kit": {"brands": ["MAC"]},
        "agreeToTerms": true
    });
    let brand = json!({
        "companyName": "Maison Nord",
        "contactName": "Ada Lovelace",
        "email": "talent@maisonnord.com",
        "headquarters": {"city": "Paris", "country": "France"},
        "industry": "luxury",
        "companySize": "51-200",
        "description": "Ready-to-wear house focused on Nordic tailoring.",
        "talentNeeds": ["model", "photographer"],
        "agreeToTerms": true
    });
    let raw = if kind == ProfileKind::Brand { brand } else { individual };
    ProfileDraft::from_json(raw).unwrap()
}

#[test]
fn step_counts_per_profile() {
    let counts: Vec<(ProfileKind, u32)> =
        ProfileKind::ALL.iter().map(|k| (*k, registry_for(*k).unwrap().step_count())).collect();
    assert_eq!(counts,
               vec![(ProfileKind::Model, 8),
                    (ProfileKind::Photographer, 7),
                    (ProfileKind::Designer, 8),
                    (ProfileKind::Stylist, 7),
                    (ProfileKind::MakeupArtist, 7),
                    (ProfileKind::Brand, 8)]);
}

#[test]
fn registries_are_cached_and_named_by_slug() {
    for kind in ProfileKind::ALL {
        let a = registry_for(kind).unwrap();
        let b = registry_for(kind).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.profile(), kind.slug());
        assert_eq!(a.definition_hash(), build_registry(kind).unwrap().definition_hash());
    }
}

#[tokio::test]
async fn model_step_one_blocks_on_missing_name_and_bad_email() {
    let mut w = WizardController::builder(registry_for(ProfileKind::Model).unwrap()).transition_delay(Duration::ZERO)
                                                                                     .build()
                                                                                     .unwrap();
    w.update_field("fullName", "").unwrap();
    w.update_field("email", "ada-at-example").unwrap();

    let outcome = w.advance(2).await.unwrap();
    assert!(matches!(outcome, AdvanceOutcome::Blocked(_)));
    assert_eq!(w.errors().get("fullName"), Some("Full name is required"));
    assert_eq!(w.errors().get("email"), Some("Valid email is required"));
    assert_eq!(w.current_step(), 1);
}

#[tokio::test]
async fn model_step_one_filled_moves_to_step_two() {
    let mut w = WizardController::builder(registry_for(ProfileKind::Model).unwrap())
        .identity(Identity::new("Ada", "Lovelace", "ada@example.com"))
        .transition_delay(Duration::ZERO)
        .build()
        .unwrap();

    assert_eq!(w.advance(2).await.unwrap(), AdvanceOutcome::Moved { from: 1, to: 2 });
    assert_eq!(w.current_step(), 2);
    assert_eq!(w.state().completed_steps.iter().copied().collect::<Vec<_>>(), vec![1]);
    assert!(w.errors().is_empty());
}

#[test]
fn brand_seeds_contact_name() {
    let registry = registry_for(ProfileKind::Brand).unwrap();
    let draft = registry.seed(Some(&Identity::new("Ada", "Lovelace", "ada@example.com")));
    assert_eq!(draft.get_str("contactName").and_then(|v| v.as_text()), Some("Ada Lovelace"));
    assert!(draft.get_str("fullName").is_none());
}

#[test]
fn empty_drafts_fail_the_first_step_of_every_profile() {
    for kind in ProfileKind::ALL {
        let registry = registry_for(kind).unwrap();
        let errors = validate(&registry, 1, &ProfileDraft::new()).unwrap();
        assert!(errors.contains("email"), "{kind} step 1 should require an email");
    }
}

#[tokio::test]
async fn every_profile_can_be_walked_and_submitted() {
    for kind in ProfileKind::ALL {
        let registry = registry_for(kind).unwrap();
        let last = registry.step_count();
        let mut w = WizardController::builder(registry).draft(complete_draft(kind))
                                                       .transition_delay(Duration::ZERO)
                                                       .build()
                                                       .unwrap();
        while !w.is_final_step() {
            let outcome = w.next().await.unwrap();
            assert!(matches!(outcome, AdvanceOutcome::Moved { .. }),
                    "{kind} blocked on step {}: {:?}",
                    w.current_step(),
                    w.errors());
        }
        let pipeline = SubmissionPipeline::new(AcceptAll);
        assert_eq!(w.complete(&pipeline).await.unwrap(), SubmitOutcome::Completed);
        assert_eq!(w.state().completed_steps.len() as u32, last);
    }
}
