//! FieldStore: el borrador de perfil en construcción.
//!
//! - `FieldPath`: dirección tipada de un campo (`"address.city"`).
//! - `FieldValue`: valor de un campo (texto, número, bool, selección múltiple
//!   o grupo anidado).
//! - `ProfileDraft`: mapa anidado con get/set por path que preserva siempre
//!   los hermanos del nodo modificado.
//! - `Identity` / `Seeder`: identidad del usuario autenticado y cómo se
//!   vuelca al borrador inicial.

mod path;
mod seed;
mod store;
mod value;

pub use path::FieldPath;
pub use seed::{default_seed, Identity, Seeder};
pub use store::ProfileDraft;
pub use value::FieldValue;
