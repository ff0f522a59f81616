//! Resolución y clasificación de opciones del componente.

pub mod defaults;
pub mod list;
pub mod resolver;

pub use list::{allowed_params, PARAMS_LIST};
pub use resolver::{get_params, resolve_options, ResolvedOptions};

/// Normaliza una clave de opción: quita un único marcador `'_'` inicial si
/// existe. Pura; no hace ninguna otra transformación. Una clave que queda
/// vacía tras quitar el marcador pasa por el lookup de schema como
/// cualquier otra.
pub fn normalize_key(key: &str) -> &str {
    key.strip_prefix(crate::constants::INTERNAL_MARKER).unwrap_or(key)
}
