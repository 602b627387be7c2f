//! Wizard de modelos (8 steps).
use atelier_core::{FieldRule, StepRegistry, WizardError};

use crate::common;

pub fn registry() -> Result<StepRegistry, WizardError> {
    StepRegistry::builder("model").step(1, "Basic Information", common::basic_information())
                                  .step(2, "Location", common::location())
                                  .step(3,
                                        "Measurements",
                                        vec![FieldRule::required("measurements.height", "Height is required"),
                                             FieldRule::number_range("measurements.height",
                                                                     140.0,
                                                                     220.0,
                                                                     "Height must be between 140 and 220 cm"),
                                             FieldRule::number_range("measurements.bust", 50.0, 150.0,
                                                                     "Bust must be between 50 and 150 cm"),
                                             FieldRule::number_range("measurements.waist", 40.0, 150.0,
                                                                     "Waist must be between 40 and 150 cm"),
                                             FieldRule::number_range("measurements.hips", 50.0, 150.0,
                                                                     "Hips must be between 50 and 150 cm")])
                                  .step(4,
                                        "Appearance",
                                        vec![FieldRule::required("appearance.hairColor", "Hair color is required"),
                                             FieldRule::required("appearance.eyeColor", "Eye color is required")])
                                  .step(5,
                                        "Experience",
                                        vec![FieldRule::required("experienceLevel", "Experience level is required"),
                                             FieldRule::one_of("experienceLevel",
                                                               common::EXPERIENCE_LEVELS,
                                                               "Choose a valid experience level"),
                                             FieldRule::non_empty_selection("categories",
                                                                            "Select at least one category")])
                                  .step(6, "Portfolio", common::portfolio())
                                  .step(7,
                                        "Rates & Availability",
                                        vec![FieldRule::number_range("rates.hourly", 0.0, 100_000.0,
                                                                     "Hourly rate must be a positive amount"),
                                             FieldRule::non_empty_selection("availability",
                                                                            "Select your availability")])
                                  .step(8, "Review & Submit", vec![common::terms()])
                                  .build()
}
