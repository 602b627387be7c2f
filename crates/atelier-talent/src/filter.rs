//! Filtro de tarjetas de talento para la pantalla de búsqueda.
use std::collections::BTreeSet;

use atelier_domain::ProfileKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resumen de un perfil tal como aparece en el listado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentCard {
    pub id: Uuid,
    pub kind: ProfileKind,
    pub display_name: String,
    pub city: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Criterios combinados con AND. Un criterio en `None`/`false` no filtra.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentFilter {
    pub kind: Option<ProfileKind>,
    pub city: Option<String>,
    /// Texto libre: nombre o tags, sin distinguir mayúsculas.
    pub query: Option<String>,
    pub saved_only: bool,
}

impl TalentFilter {
    pub fn matches(&self, card: &TalentCard, saved: &BTreeSet<Uuid>) -> bool {
        if self.kind.is_some_and(|k| k != card.kind) {
            return false;
        }
        if let Some(city) = self.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            let same_city = card.city.as_deref().is_some_and(|c| c.trim().eq_ignore_ascii_case(city));
            if !same_city {
                return false;
            }
        }
        if let Some(q) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let q = q.to_lowercase();
            let hit = card.display_name.to_lowercase().contains(&q) || card.tags.iter().any(|t| t.to_lowercase().contains(&q));
            if !hit {
                return false;
            }
        }
        !self.saved_only || saved.contains(&card.id)
    }

    /// Aplica el filtro conservando el orden de entrada.
    pub fn apply<'a>(&self, cards: &'a [TalentCard], saved: &[Uuid]) -> Vec<&'a TalentCard> {
        let saved: BTreeSet<Uuid> = saved.iter().copied().collect();
        cards.iter().filter(|c| self.matches(c, &saved)).collect()
    }
}
