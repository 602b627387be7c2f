// submission.rs
use crate::{DomainError, ProfileKind};
use atelier_core::validation::is_valid_email;
use atelier_core::ProfileDraft;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contrato de salida del wizard: lo que recibe el backend al completar un
/// perfil. El borrador viaja completo como objeto JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    id: Uuid,
    kind: ProfileKind,
    email: String,
    draft: ProfileDraft,
    created_at: DateTime<Utc>,
}

impl ProfileSubmission {
    /// Construye la submission a partir del borrador final.
    ///
    /// # Errores
    /// `DomainError::ValidationError` si el borrador no contiene un `email`
    /// válido (todas las cuentas se identifican por email).
    pub fn from_draft(kind: ProfileKind, draft: &ProfileDraft) -> Result<Self, DomainError> {
        let email = draft.get_str("email")
                         .and_then(|v| v.as_text())
                         .map(str::trim)
                         .filter(|e| !e.is_empty())
                         .ok_or_else(|| DomainError::ValidationError("draft has no email".to_string()))?;
        if !is_valid_email(email) {
            return Err(DomainError::ValidationError(format!("invalid email '{email}'")));
        }
        Ok(ProfileSubmission { id: Uuid::new_v4(),
                               kind,
                               email: email.to_string(),
                               draft: draft.clone(),
                               created_at: Utc::now() })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Cuerpo JSON enviado al backend.
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "profileType": self.kind.slug(),
            "email": self.email,
            "profile": self.draft.to_json(),
        })
    }
}
