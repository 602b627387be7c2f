// profile_kind.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tipo profesional de un perfil. Cada uno tiene su propio wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileKind {
    Model,
    Photographer,
    Designer,
    Stylist,
    MakeupArtist,
    Brand,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 6] = [ProfileKind::Model,
                                       ProfileKind::Photographer,
                                       ProfileKind::Designer,
                                       ProfileKind::Stylist,
                                       ProfileKind::MakeupArtist,
                                       ProfileKind::Brand];

    /// Identificador estable (`"makeup-artist"`), usado en registros y eventos.
    pub fn slug(&self) -> &'static str {
        match self {
            ProfileKind::Model => "model",
            ProfileKind::Photographer => "photographer",
            ProfileKind::Designer => "designer",
            ProfileKind::Stylist => "stylist",
            ProfileKind::MakeupArtist => "makeup-artist",
            ProfileKind::Brand => "brand",
        }
    }

    /// Etiqueta legible para la UI.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileKind::Model => "Model",
            ProfileKind::Photographer => "Photographer",
            ProfileKind::Designer => "Designer",
            ProfileKind::Stylist => "Stylist",
            ProfileKind::MakeupArtist => "Makeup Artist",
            ProfileKind::Brand => "Brand",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ProfileKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        ProfileKind::ALL.into_iter()
                        .find(|k| k.slug() == normalized)
                        .ok_or_else(|| DomainError::UnknownProfileKind(s.to_string()))
    }
}
