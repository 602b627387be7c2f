use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FieldPath, FieldValue};
use crate::errors::WizardError;

/// Borrador de perfil: mapa anidado direccionado por `FieldPath`.
///
/// Invariante: `set` reemplaza exactamente una hoja; el resto del árbol,
/// incluidos los hermanos del nodo modificado, se conserva.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileDraft {
    fields: BTreeMap<String, FieldValue>,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lee un campo siguiendo el path a través de los grupos anidados.
    pub fn get(&self, path: &FieldPath) -> Option<&FieldValue> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.fields.get(first)?;
        for segment in rest {
            current = current.as_group()?.get(segment)?;
        }
        Some(current)
    }

    /// Atajo para paths literales; un path inválido simplemente no existe.
    pub fn get_str(&self, path: &str) -> Option<&FieldValue> {
        FieldPath::parse(path).ok().and_then(|p| self.get(&p))
    }

    /// Escribe un valor en el path. Si un segmento intermedio contiene una
    /// hoja, ésta se reemplaza por un grupo.
    pub fn set(&mut self, path: &FieldPath, value: FieldValue) -> Result<(), WizardError> {
        if path.is_empty() {
            return Err(WizardError::InvalidPath(path.to_string()));
        }
        set_in(&mut self.fields, path.segments(), value);
        Ok(())
    }

    /// Variante funcional de `set`: devuelve un borrador nuevo y deja `self`
    /// intacto.
    pub fn with(&self, path: &FieldPath, value: FieldValue) -> Result<ProfileDraft, WizardError> {
        let mut next = self.clone();
        next.set(path, value)?;
        Ok(next)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.get(path).is_some()
    }

    /// Número de campos de primer nivel.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Snapshot JSON plano (lo que recibe el colaborador de envío).
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Construye un borrador a partir de un objeto JSON.
    pub fn from_json(value: Value) -> Result<Self, WizardError> {
        if !value.is_object() {
            return Err(WizardError::Internal("draft must be a JSON object".into()));
        }
        serde_json::from_value(value).map_err(|e| WizardError::Internal(format!("draft: {e}")))
    }
}

fn set_in(map: &mut BTreeMap<String, FieldValue>, segments: &[String], value: FieldValue) {
    match segments {
        [] => {}
        [leaf] => {
            map.insert(leaf.clone(), value);
        }
        [head, rest @ ..] => {
            let entry = map.entry(head.clone()).or_insert_with(|| FieldValue::Group(BTreeMap::new()));
            if !matches!(entry, FieldValue::Group(_)) {
                *entry = FieldValue::Group(BTreeMap::new());
            }
            if let FieldValue::Group(children) = entry {
                set_in(children, rest, value);
            }
        }
    }
}
