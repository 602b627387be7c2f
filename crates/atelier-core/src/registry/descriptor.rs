use serde::Serialize;

use crate::draft::ProfileDraft;
use crate::validation::{ErrorMap, RuleSet};

/// Un step del wizard: id 1-based, título visible y reglas que posee.
#[derive(Debug, Clone, Serialize)]
pub struct StepDescriptor {
    id: u32,
    title: String,
    rules: RuleSet,
}

impl StepDescriptor {
    pub fn new(id: u32, title: impl Into<String>, rules: impl Into<RuleSet>) -> Self {
        Self { id,
               title: title.into(),
               rules: rules.into() }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn validate(&self, draft: &ProfileDraft) -> ErrorMap {
        self.rules.evaluate(draft)
    }
}
