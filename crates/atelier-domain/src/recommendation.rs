// recommendation.rs
use crate::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Alcance declarado por el autor de una recomendación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    ConnectionsOnly,
    Private,
}

/// Recomendación escrita por un profesional sobre otro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    id: Uuid,
    author_id: Uuid,
    subject_id: Uuid,
    body: String,
    rating: u8,
    visibility: Visibility,
    created_at: DateTime<Utc>,
}

impl Recommendation {
    /// Crea una recomendación validada.
    ///
    /// # Errores
    /// `DomainError::ValidationError` si el autor se recomienda a sí mismo, el
    /// texto está vacío o el rating no está en `1..=5`.
    pub fn new(author_id: Uuid,
               subject_id: Uuid,
               body: impl Into<String>,
               rating: u8,
               visibility: Visibility)
               -> Result<Self, DomainError> {
        let body = body.into().trim().to_string();
        if author_id == subject_id {
            return Err(DomainError::ValidationError("Una recomendación no puede ser para uno mismo".to_string()));
        }
        if body.is_empty() {
            return Err(DomainError::ValidationError("El texto de la recomendación está vacío".to_string()));
        }
        if !(1..=5).contains(&rating) {
            return Err(DomainError::ValidationError(format!("Rating fuera de rango: {rating}")));
        }
        Ok(Recommendation { id: Uuid::new_v4(),
                            author_id,
                            subject_id,
                            body,
                            rating,
                            visibility,
                            created_at: Utc::now() })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn author_id(&self) -> Uuid {
        self.author_id
    }

    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `true` si `user` es el autor o el sujeto.
    pub fn involves(&self, user: Uuid) -> bool {
        self.author_id == user || self.subject_id == user
    }
}

/// Decide si un visitante puede ver una recomendación.
///
/// Las reglas de negocio concretas las provee la aplicación anfitriona; aquí
/// sólo se fija la interfaz.
pub trait VisibilityPolicy {
    /// `viewer == None` representa un visitante anónimo.
    fn is_visible_to(&self, recommendation: &Recommendation, viewer: Option<Uuid>) -> bool;
}

/// Política mínima: sólo autor y sujeto ven la recomendación.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthorAndSubjectOnly;

impl VisibilityPolicy for AuthorAndSubjectOnly {
    fn is_visible_to(&self, recommendation: &Recommendation, viewer: Option<Uuid>) -> bool {
        viewer.is_some_and(|v| recommendation.involves(v))
    }
}
