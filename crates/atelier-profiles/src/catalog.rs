//! Registros compartidos por tipo de perfil.
use std::sync::Arc;

use atelier_core::{StepRegistry, WizardError};
use atelier_domain::ProfileKind;
use once_cell::sync::Lazy;

type Cached = Lazy<Result<Arc<StepRegistry>, WizardError>>;

static MODEL: Cached = Lazy::new(|| crate::model::registry().map(Arc::new));
static PHOTOGRAPHER: Cached = Lazy::new(|| crate::photographer::registry().map(Arc::new));
static DESIGNER: Cached = Lazy::new(|| crate::designer::registry().map(Arc::new));
static STYLIST: Cached = Lazy::new(|| crate::stylist::registry().map(Arc::new));
static MAKEUP_ARTIST: Cached = Lazy::new(|| crate::makeup_artist::registry().map(Arc::new));
static BRAND: Cached = Lazy::new(|| crate::brand::registry().map(Arc::new));

/// Construye un registro nuevo (sin caché).
pub fn build_registry(kind: ProfileKind) -> Result<StepRegistry, WizardError> {
    match kind {
        ProfileKind::Model => crate::model::registry(),
        ProfileKind::Photographer => crate::photographer::registry(),
        ProfileKind::Designer => crate::designer::registry(),
        ProfileKind::Stylist => crate::stylist::registry(),
        ProfileKind::MakeupArtist => crate::makeup_artist::registry(),
        ProfileKind::Brand => crate::brand::registry(),
    }
}

/// Registro compartido del tipo de perfil; se construye una sola vez.
pub fn registry_for(kind: ProfileKind) -> Result<Arc<StepRegistry>, WizardError> {
    let cell: &Cached = match kind {
        ProfileKind::Model => &MODEL,
        ProfileKind::Photographer => &PHOTOGRAPHER,
        ProfileKind::Designer => &DESIGNER,
        ProfileKind::Stylist => &STYLIST,
        ProfileKind::MakeupArtist => &MAKEUP_ARTIST,
        ProfileKind::Brand => &BRAND,
    };
    Lazy::force(cell).clone()
}
