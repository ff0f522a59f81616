//! Resolución de opciones: defaults en capas + clasificación por schema.
//!
//! Orden de merge fijo y determinista: seed (`on`) -> defaults base ->
//! defaults extendidos -> flag forzado -> claves reconocidas del caller.
//! Las claves no reconocidas van a `rest` para el sub-componente anidado.
//! La rutina es total: nunca falla ni hace panic, y no muta sus inputs.

use indexmap::IndexSet;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{EMIT_CLASSES_KEY, EVENTS_KEY};
use crate::merge::{extend, is_object};

use super::defaults::{base_defaults, extended_defaults};
use super::list::allowed_params;
use super::normalize_key;

/// Salida de una resolución. Los tres buckets se construyen de cero en
/// cada invocación y son propiedad del caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOptions {
    /// Set completo de parámetros que el componente usa internamente.
    pub params: Value,
    /// Sólo las claves reconocidas que el caller pasó (para diffing en
    /// updates de configuración).
    pub passed: Value,
    /// Claves no reconocidas, verbatim (passthrough al sub-componente).
    pub rest: Value,
}

/// Resuelve las opciones del caller contra las dos fuentes de defaults y
/// el schema declarado.
///
/// `None` equivale a un mapping vacío. JSON no tiene `undefined`: un valor
/// `Null` del caller se trata como "no suministrado" y no aparece en
/// ningún bucket; es el mecanismo para des-setear una opción condicional
/// sin ensuciar el passthrough.
pub fn resolve_options(
    caller: Option<&Value>,
    base: &Value,
    extended: &Value,
    allowed: &IndexSet<String>,
) -> ResolvedOptions {
    let mut params = Map::new();
    params.insert(EVENTS_KEY.to_string(), Value::Object(Map::new()));

    if let Value::Object(m) = base {
        extend(&mut params, m);
    }
    if let Value::Object(m) = extended {
        extend(&mut params, m);
    }
    // Forzado después de los defaults; las escrituras del caller caen en
    // nombres normalizados y nunca colisionan con esta clave.
    params.insert(EMIT_CLASSES_KEY.to_string(), Value::Bool(true));

    let mut passed = Map::new();
    let mut rest = Map::new();

    let empty = Map::new();
    let caller = match caller {
        Some(Value::Object(m)) => m,
        _ => &empty,
    };

    for (key, value) in caller.iter() {
        let public = normalize_key(key);
        if value.is_null() {
            continue;
        }
        if allowed.contains(public) {
            if is_object(value) {
                merge_at(&mut params, public, value);
                merge_at(&mut passed, public, value);
            } else {
                params.insert(public.to_string(), value.clone());
                passed.insert(public.to_string(), value.clone());
            }
        } else {
            rest.insert(public.to_string(), value.clone());
        }
    }

    ResolvedOptions {
        params: Value::Object(params),
        passed: Value::Object(passed),
        rest: Value::Object(rest),
    }
}

/// Merge aditivo de un objeto del caller sobre `dst[key]`: las claves del
/// caller se suman al objeto existente. Si no había objeto en esa clave
/// (ausente, o default escalar) se parte de uno vacío.
fn merge_at(dst: &mut Map<String, Value>, key: &str, value: &Value) {
    if !matches!(dst.get(key), Some(Value::Object(_))) {
        dst.insert(key.to_string(), Value::Object(Map::new()));
    }
    if let (Some(Value::Object(existing)), Value::Object(incoming)) = (dst.get_mut(key), value) {
        for (k, v) in incoming.iter() {
            existing.insert(k.clone(), v.clone());
        }
    }
}

/// Punto de entrada del componente embebedor: cablea sus propios defaults
/// y su schema declarado sobre `resolve_options`.
pub fn get_params(caller: Option<&Value>) -> ResolvedOptions {
    resolve_options(
        caller,
        &base_defaults(),
        &extended_defaults(),
        allowed_params(),
    )
}
