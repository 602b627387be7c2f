//! StepRegistry: lista ordenada e inmutable de steps de un tipo de perfil.
//!
//! Configuración pura. Cada tipo profesional instancia su propio registro
//! (7 u 8 steps, reglas distintas) y todos comparten el mismo controlador.

mod builder;
mod descriptor;

pub use builder::StepRegistryBuilder;
pub use descriptor::StepDescriptor;

use serde_json::json;

use crate::draft::{default_seed, Identity, ProfileDraft, Seeder};
use crate::validation::RuleSet;

/// Definición inmutable de un wizard.
pub struct StepRegistry {
    profile: String,
    steps: Vec<StepDescriptor>,
    definition_hash: String,
    seeder: Seeder,
}

impl StepRegistry {
    pub fn builder(profile: impl Into<String>) -> StepRegistryBuilder {
        StepRegistryBuilder::new(profile)
    }

    /// Identificador del tipo de perfil (`"model"`, `"brand"`, ...).
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn step_count(&self) -> u32 {
        self.steps.len() as u32
    }

    /// Descriptor del step `id` (1-based).
    pub fn step(&self, id: u32) -> Option<&StepDescriptor> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.steps.get(idx)
    }

    pub fn rule_set_for(&self, id: u32) -> Option<&RuleSet> {
        self.step(id).map(StepDescriptor::rules)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.step(id).is_some()
    }

    /// Hash de la tabla completa (perfil, títulos, reglas y versión del motor).
    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    /// Borrador inicial para una identidad. Sin identidad, borrador vacío.
    pub fn seed(&self, identity: Option<&Identity>) -> ProfileDraft {
        identity.map(self.seeder).unwrap_or_default()
    }

    /// Resumen serializable (para la CLI y logs).
    pub fn summary(&self) -> serde_json::Value {
        json!({
            "profile": self.profile,
            "definition_hash": self.definition_hash,
            "steps": self.steps.iter().map(|s| json!({
                "id": s.id(),
                "title": s.title(),
                "fields": s.rules().paths().iter().map(|p| p.to_string()).collect::<Vec<_>>(),
            })).collect::<Vec<_>>(),
        })
    }
}

impl std::fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry")
         .field("profile", &self.profile)
         .field("steps", &self.steps)
         .field("definition_hash", &self.definition_hash)
         .finish_non_exhaustive()
    }
}

pub(crate) fn default_seeder() -> Seeder {
    default_seed
}
