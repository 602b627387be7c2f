//! atelier-talent – lista de talentos guardados y filtro del buscador.
//!
//! La lista se persiste a través de una capacidad clave/valor inyectada
//! (`KeyValueStore`); el core nunca toca almacenamiento global.

pub mod error;
pub mod filter;
pub mod saved;
pub mod store;

pub use error::TalentError;
pub use filter::{TalentCard, TalentFilter};
pub use saved::{SavedTalent, SAVED_TALENT_KEY};
pub use store::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore};
