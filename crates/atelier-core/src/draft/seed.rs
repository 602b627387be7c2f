use serde::{Deserialize, Serialize};

use super::{FieldPath, FieldValue, ProfileDraft};

/// Identidad del usuario autenticado, provista por la aplicación anfitriona.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Identity {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { first_name: first_name.into(),
               last_name: last_name.into(),
               email: email.into() }
    }

    /// Nombre completo; ignora partes vacías.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()].iter()
                                                       .filter(|s| !s.is_empty())
                                                       .copied()
                                                       .collect::<Vec<_>>()
                                                       .join(" ")
    }
}

/// Vuelca una identidad en el borrador inicial de un wizard.
pub type Seeder = fn(&Identity) -> ProfileDraft;

/// Seeder por defecto: `fullName`, `firstName`, `lastName` y `email`.
/// Los campos vacíos de la identidad no se escriben.
pub fn default_seed(identity: &Identity) -> ProfileDraft {
    let mut draft = ProfileDraft::new();
    let pairs = [("fullName", identity.full_name()),
                 ("firstName", identity.first_name.trim().to_string()),
                 ("lastName", identity.last_name.trim().to_string()),
                 ("email", identity.email.trim().to_string())];
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        // claves literales de un solo segmento: nunca vacías
        let _ = draft.set(&FieldPath::lenient(key), FieldValue::Text(value));
    }
    draft
}
