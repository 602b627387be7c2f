//! Wizard de diseñadores (8 steps).
use atelier_core::{FieldRule, StepRegistry, WizardError};

use crate::common;

pub fn registry() -> Result<StepRegistry, WizardError> {
    StepRegistry::builder("designer").step(1, "Basic Information", common::basic_information())
                                     .step(2, "Location", common::location())
                                     .step(3,
                                           "Design Focus",
                                           vec![FieldRule::non_empty_selection("designCategories",
                                                                               "Select at least one design category")])
                                     .step(4, "Experience", common::years_of_experience())
                                     .step(5,
                                           "Collections",
                                           vec![FieldRule::non_empty_selection("collections",
                                                                               "Add at least one collection")])
                                     .step(6,
                                           "Services",
                                           vec![FieldRule::non_empty_selection("services",
                                                                               "Select at least one service")])
                                     .step(7, "Portfolio", common::portfolio())
                                     .step(8, "Review & Submit", vec![common::terms()])
                                     .build()
}
