//! Constantes del componente.
//!
//! Claves reservadas que participan en la resolución de opciones. Cambiar
//! estos nombres rompe el contrato con el código que consume los
//! parámetros resueltos.

/// Clave reservada para registros de manejadores de eventos. Siempre está
/// presente como objeto en los parámetros resueltos, incluso sin caller ni
/// defaults.
pub const EVENTS_KEY: &str = "on";

/// Flag de ciclo de vida del componente embebedor. Se fuerza a `true` en
/// cada resolución; no es configurable por esta vía.
pub const EMIT_CLASSES_KEY: &str = "_emitClasses";

/// Marcador que distingue la variante interna de un nombre público en la
/// lista declarada de parámetros.
pub const INTERNAL_MARKER: char = '_';
