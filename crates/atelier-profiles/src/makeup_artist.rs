//! Wizard de maquilladores (7 steps).
use atelier_core::{FieldRule, StepRegistry, WizardError};

use crate::common;

pub fn registry() -> Result<StepRegistry, WizardError> {
    StepRegistry::builder("makeup-artist").step(1, "Basic Information", common::basic_information())
                                          .step(2, "Location", common::location())
                                          .step(3,
                                                "Specialties",
                                                vec![FieldRule::non_empty_selection("specialties",
                                                                                    "Select at least one specialty")])
                                          .step(4,
                                                "Kit & Products",
                                                vec![FieldRule::non_empty_selection("kit.brands",
                                                                                    "List at least one product brand")])
                                          .step(5, "Experience", common::years_of_experience())
                                          .step(6, "Portfolio", common::portfolio())
                                          .step(7,
                                                "Rates & Terms",
                                                vec![FieldRule::number_range("rates.session",
                                                                             0.0,
                                                                             100_000.0,
                                                                             "Session rate must be a positive amount"),
                                                     common::terms()])
                                          .build()
}
