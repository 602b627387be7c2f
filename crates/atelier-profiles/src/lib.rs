//! atelier-profiles – tablas de steps de los seis wizards profesionales.
//!
//! Cada módulo declara la tabla de su tipo de perfil (títulos y reglas por
//! step) sobre el mismo motor de `atelier-core`. `registry_for` devuelve el
//! registro ya construido y compartido.

mod catalog;
mod common;

pub mod brand;
pub mod designer;
pub mod makeup_artist;
pub mod model;
pub mod photographer;
pub mod stylist;

pub use catalog::{build_registry, registry_for};
