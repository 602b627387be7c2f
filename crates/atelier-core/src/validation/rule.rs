use serde::Serialize;

use super::ErrorMap;
use crate::draft::{FieldPath, FieldValue, ProfileDraft};

/// Predicado de una regla. Serializable para que la tabla de reglas forme
/// parte del hash de definición del registro.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleKind {
    /// Presente y no vacío (texto sin blancos, lista/grupo no vacíos, `true`).
    Required,
    /// Forma `local@dominio.tld`.
    Email,
    /// Selección múltiple con al menos un elemento.
    NonEmptySelection,
    /// Número (o texto numérico) en `[min, max]`. Ausente o vacío pasa.
    NumberRange { min: f64, max: f64 },
    /// Texto dentro de un conjunto cerrado. Ausente o vacío pasa.
    OneOf { options: Vec<String> },
    /// Texto con al menos `min` caracteres tras `trim`. Ausente o vacío pasa.
    MinLength { min: usize },
}

/// Regla aplicada a un campo, con su mensaje para la UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRule {
    pub path: FieldPath,
    pub kind: RuleKind,
    pub message: String,
}

impl FieldRule {
    pub fn new(path: &str, kind: RuleKind, message: impl Into<String>) -> Self {
        Self { path: FieldPath::lenient(path),
               kind,
               message: message.into() }
    }

    pub fn required(path: &str, message: impl Into<String>) -> Self {
        Self::new(path, RuleKind::Required, message)
    }

    pub fn email(path: &str, message: impl Into<String>) -> Self {
        Self::new(path, RuleKind::Email, message)
    }

    pub fn non_empty_selection(path: &str, message: impl Into<String>) -> Self {
        Self::new(path, RuleKind::NonEmptySelection, message)
    }

    pub fn number_range(path: &str, min: f64, max: f64, message: impl Into<String>) -> Self {
        Self::new(path, RuleKind::NumberRange { min, max }, message)
    }

    pub fn one_of(path: &str, options: &[&str], message: impl Into<String>) -> Self {
        let options = options.iter().map(|s| s.to_string()).collect();
        Self::new(path, RuleKind::OneOf { options }, message)
    }

    pub fn min_length(path: &str, min: usize, message: impl Into<String>) -> Self {
        Self::new(path, RuleKind::MinLength { min }, message)
    }

    /// `true` si el borrador satisface la regla.
    pub fn check(&self, draft: &ProfileDraft) -> bool {
        let value = draft.get(&self.path);
        match &self.kind {
            RuleKind::Required => value.is_some_and(|v| !v.is_blank()),
            RuleKind::Email => value.and_then(FieldValue::as_text).is_some_and(is_valid_email),
            RuleKind::NonEmptySelection => value.and_then(FieldValue::as_list).is_some_and(|l| !l.is_empty()),
            RuleKind::NumberRange { min, max } => match value {
                None => true,
                Some(FieldValue::Text(s)) if s.trim().is_empty() => true,
                Some(v) => v.as_number().is_some_and(|n| n >= *min && n <= *max),
            },
            RuleKind::OneOf { options } => match value {
                None => true,
                Some(FieldValue::Text(s)) if s.trim().is_empty() => true,
                Some(FieldValue::Text(s)) => options.iter().any(|o| o == s.trim()),
                Some(_) => false,
            },
            RuleKind::MinLength { min } => match value {
                None => true,
                Some(FieldValue::Text(s)) if s.trim().is_empty() => true,
                Some(FieldValue::Text(s)) => s.trim().chars().count() >= *min,
                Some(_) => false,
            },
        }
    }
}

/// Conjunto ordenado de reglas de un step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Paths gobernados por este conjunto (sin duplicados, en orden).
    pub fn paths(&self) -> Vec<&FieldPath> {
        let mut out: Vec<&FieldPath> = Vec::new();
        for r in &self.rules {
            if !out.contains(&&r.path) {
                out.push(&r.path);
            }
        }
        out
    }

    /// Evalúa todas las reglas sin cortocircuito.
    pub fn evaluate(&self, draft: &ProfileDraft) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for rule in &self.rules {
            if !rule.check(draft) {
                errors.insert_first(rule.path.to_string(), rule.message.clone());
            }
        }
        errors
    }
}

impl From<Vec<FieldRule>> for RuleSet {
    fn from(rules: Vec<FieldRule>) -> Self {
        Self::new(rules)
    }
}

/// `local@dominio.tld`: sin espacios, una sola `@`, parte local no vacía y un
/// punto en el dominio con caracteres a ambos lados.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
