//! Wizard de estilistas (7 steps).
use atelier_core::{FieldRule, StepRegistry, WizardError};

use crate::common;

pub fn registry() -> Result<StepRegistry, WizardError> {
    let mut experience = common::years_of_experience();
    experience.push(common::bio());

    StepRegistry::builder("stylist").step(1, "Basic Information", common::basic_information())
                                    .step(2, "Location", common::location())
                                    .step(3,
                                          "Specialties",
                                          vec![FieldRule::non_empty_selection("specialties",
                                                                              "Select at least one specialty")])
                                    .step(4,
                                          "Clients",
                                          vec![FieldRule::non_empty_selection("clientTypes",
                                                                              "Select at least one client type")])
                                    .step(5, "Experience", experience)
                                    .step(6, "Portfolio", common::portfolio())
                                    .step(7,
                                          "Rates & Terms",
                                          vec![FieldRule::number_range("rates.dayRate",
                                                                       0.0,
                                                                       1_000_000.0,
                                                                       "Day rate must be a positive amount"),
                                               common::terms()])
                                    .build()
}
