//! Wizard de marcas (8 steps).
//!
//! A diferencia de los perfiles individuales, la identidad del usuario se
//! vuelca como persona de contacto (`contactName`).
use atelier_core::{FieldPath, FieldRule, FieldValue, Identity, ProfileDraft, StepRegistry, WizardError};

use crate::common;

const INDUSTRIES: &[&str] = &["fashion", "beauty", "retail", "luxury", "sportswear", "agency", "media"];
const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "500+"];

/// Seeder de marcas: `contactName` y `email`.
pub fn seed(identity: &Identity) -> ProfileDraft {
    let mut draft = ProfileDraft::new();
    for (key, value) in [("contactName", identity.full_name()), ("email", identity.email.trim().to_string())] {
        if !value.is_empty() {
            let _ = draft.set(&FieldPath::lenient(key), FieldValue::Text(value));
        }
    }
    draft
}

pub fn registry() -> Result<StepRegistry, WizardError> {
    StepRegistry::builder("brand").seeder(seed)
                                  .step(1,
                                        "Company Information",
                                        vec![FieldRule::required("companyName", "Company name is required"),
                                             FieldRule::required("contactName", "Contact name is required"),
                                             FieldRule::email("email", "Valid email is required")])
                                  .step(2,
                                        "Headquarters",
                                        vec![FieldRule::required("headquarters.city", "City is required"),
                                             FieldRule::required("headquarters.country", "Country is required")])
                                  .step(3,
                                        "Industry",
                                        vec![FieldRule::required("industry", "Industry is required"),
                                             FieldRule::one_of("industry", INDUSTRIES, "Choose a valid industry")])
                                  .step(4,
                                        "Company Size",
                                        vec![FieldRule::required("companySize", "Company size is required"),
                                             FieldRule::one_of("companySize", COMPANY_SIZES,
                                                               "Choose a valid company size")])
                                  .step(5,
                                        "Brand Story",
                                        vec![FieldRule::required("description", "Description is required"),
                                             FieldRule::min_length("description",
                                                                   30,
                                                                   "Description must be at least 30 characters")])
                                  .step(6,
                                        "Talent Needs",
                                        vec![FieldRule::non_empty_selection("talentNeeds",
                                                                            "Select at least one kind of talent")])
                                  .step(7, "Online Presence", vec![])
                                  .step(8, "Review & Submit", vec![common::terms()])
                                  .build()
}
