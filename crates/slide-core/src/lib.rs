//! slide-core: resolución de opciones del carrusel.
//!
//! Defaults en capas (base -> extendidos -> caller) más clasificación de
//! claves contra la whitelist declarada del componente. Las claves no
//! reconocidas se acumulan en un bucket aparte para el sub-componente
//! anidado que el componente envuelve.

pub mod constants;
pub mod merge;
pub mod params;

pub use merge::{extend, is_object};
pub use params::{
    allowed_params, get_params, normalize_key, resolve_options, ResolvedOptions, PARAMS_LIST,
};
