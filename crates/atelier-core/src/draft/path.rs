use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WizardError;

/// Path tipado hacia un campo del borrador.
///
/// Se construye desde la notación con puntos (`"rates.hourly"`). Un path sin
/// segmentos no direcciona nada y sólo puede obtenerse vía `lenient`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parseo estricto: rechaza paths vacíos o con segmentos vacíos (`"a..b"`).
    pub fn parse(raw: &str) -> Result<Self, WizardError> {
        let segments: Vec<String> = raw.split('.').map(|s| s.trim().to_string()).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(WizardError::InvalidPath(raw.to_string()));
        }
        Ok(Self { segments })
    }

    /// Parseo tolerante usado por las tablas estáticas de reglas: descarta
    /// segmentos vacíos. El registro rechaza luego reglas con path vacío.
    pub fn lenient(raw: &str) -> Self {
        let segments = raw.split('.')
                          .map(str::trim)
                          .filter(|s| !s.is_empty())
                          .map(str::to_string)
                          .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Último segmento (nombre del campo hoja).
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path del grupo contenedor, `None` para campos de primer nivel.
    pub fn parent(&self) -> Option<FieldPath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self { segments: self.segments[..self.segments.len() - 1].to_vec() })
    }

    /// `true` si `self` está anidado (estrictamente) bajo `ancestor`.
    pub fn is_under(&self, ancestor: &FieldPath) -> bool {
        self.segments.len() > ancestor.segments.len() && self.segments.starts_with(&ancestor.segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = WizardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}
