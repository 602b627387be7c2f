//! Hashing de definiciones y snapshots.
//!
//! Los mapas del core son `BTreeMap` y `serde_json` (sin `preserve_order`)
//! ordena las claves de objetos, así que la serialización compacta ya es
//! canónica y basta con hashearla.

mod hash;

pub use hash::{fingerprint, hash_str};
