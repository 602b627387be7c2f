//! ValidationEngine: reglas por step y evaluación pura.
//!
//! Cada step posee un `RuleSet` fijo. La evaluación no corta en la primera
//! regla fallida: el usuario ve todos los campos inválidos a la vez. Si dos
//! reglas fallan sobre el mismo path se conserva el mensaje de la primera
//! declarada.

mod error_map;
mod rule;

pub use error_map::ErrorMap;
pub use rule::{is_valid_email, FieldRule, RuleKind, RuleSet};

use crate::draft::ProfileDraft;
use crate::errors::WizardError;
use crate::registry::StepRegistry;

/// Valida el step `step_id` del registro contra el borrador.
///
/// Determinista y sin efectos secundarios. `Err` sólo si el step no existe.
pub fn validate(registry: &StepRegistry, step_id: u32, draft: &ProfileDraft) -> Result<ErrorMap, WizardError> {
    let rules = registry.rule_set_for(step_id).ok_or(WizardError::UnknownStep(step_id))?;
    Ok(rules.evaluate(draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::FieldPath;

    #[test]
    fn unknown_step_is_an_error_not_a_validation_result() {
        let registry = StepRegistry::builder("t").step(1, "Uno", vec![]).build().unwrap();
        assert_eq!(validate(&registry, 2, &ProfileDraft::new()), Err(WizardError::UnknownStep(2)));
        assert!(validate(&registry, 1, &ProfileDraft::new()).unwrap().is_empty());
    }

    #[test]
    fn nested_paths_are_read_through_groups() {
        let registry = StepRegistry::builder("t").step(1,
                                                       "Dirección",
                                                       vec![FieldRule::required("address.street", "Street is required"),
                                                            FieldRule::required("address.city", "City is required"),])
                                                 .build()
                                                 .unwrap();
        let draft = ProfileDraft::new().with(&FieldPath::parse("address.city").unwrap(), "Paris".into())
                                       .unwrap();
        let errors = validate(&registry, 1, &draft).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("address.street"), Some("Street is required"));
    }
}
