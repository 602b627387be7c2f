//! Builder de `StepRegistry`.
//!
//! Valida la tabla al construir: al menos un step, ids contiguos desde 1 en
//! orden de declaración, títulos no vacíos y ninguna regla con path vacío.

use serde_json::json;

use super::{default_seeder, StepDescriptor, StepRegistry};
use crate::constants::ENGINE_VERSION;
use crate::draft::Seeder;
use crate::errors::WizardError;
use crate::hashing::fingerprint;
use crate::validation::FieldRule;

pub struct StepRegistryBuilder {
    profile: String,
    steps: Vec<StepDescriptor>,
    seeder: Seeder,
}

impl std::fmt::Debug for StepRegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistryBuilder")
         .field("profile", &self.profile)
         .field("steps", &self.steps.len())
         .finish_non_exhaustive()
    }
}

impl StepRegistryBuilder {
    pub fn new(profile: impl Into<String>) -> Self {
        Self { profile: profile.into(),
               steps: Vec::new(),
               seeder: default_seeder() }
    }

    /// Declara el siguiente step.
    pub fn step(mut self, id: u32, title: impl Into<String>, rules: Vec<FieldRule>) -> Self {
        self.steps.push(StepDescriptor::new(id, title, rules));
        self
    }

    /// Añade un descriptor ya construido.
    pub fn descriptor(mut self, descriptor: StepDescriptor) -> Self {
        self.steps.push(descriptor);
        self
    }

    /// Reemplaza el seeder por defecto.
    pub fn seeder(mut self, seeder: Seeder) -> Self {
        self.seeder = seeder;
        self
    }

    pub fn build(self) -> Result<StepRegistry, WizardError> {
        if self.profile.trim().is_empty() {
            return Err(WizardError::InvalidRegistry("profile name is empty".into()));
        }
        if self.steps.is_empty() {
            return Err(WizardError::InvalidRegistry(format!("'{}' has no steps", self.profile)));
        }
        for (idx, step) in self.steps.iter().enumerate() {
            let expected = idx as u32 + 1;
            if step.id() != expected {
                return Err(WizardError::InvalidRegistry(format!("'{}': step #{} declared with id {}",
                                                                self.profile,
                                                                expected,
                                                                step.id())));
            }
            if step.title().trim().is_empty() {
                return Err(WizardError::InvalidRegistry(format!("'{}': step {} has no title", self.profile, expected)));
            }
            if let Some(bad) = step.rules().rules().iter().find(|r| r.path.is_empty()) {
                return Err(WizardError::InvalidRegistry(format!("'{}': step {} rule '{}' has an empty path",
                                                                self.profile, expected, bad.message)));
            }
        }

        let definition_hash = fingerprint(&json!({
                                              "engine_version": ENGINE_VERSION,
                                              "profile": self.profile,
                                              "steps": self.steps,
                                          }))?;

        Ok(StepRegistry { profile: self.profile,
                          steps: self.steps,
                          definition_hash,
                          seeder: self.seeder })
    }
}
