//! Utilidades para fusionar opciones JSON de forma determinista.
//!
//! El merge es "shallow" a un nivel: cuando ambos lados tienen un objeto
//! bajo la misma clave, las claves internas se combinan una a una; para
//! cualquier otro valor la clave entrante reemplaza a la existente.

use serde_json::{Map, Value};

/// True sólo para `Value::Object`. Los arrays cuentan como escalares a
/// efectos del merge.
pub fn is_object(v: &Value) -> bool {
    matches!(v, Value::Object(_))
}

/// Merge shallow: keys from `src` override keys in `dst`; nested objects
/// merge key-by-key instead of being replaced.
pub fn extend(dst: &mut Map<String, Value>, src: &Map<String, Value>) {
    for (k, v) in src.iter() {
        match (dst.get_mut(k), v) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                for (ik, iv) in incoming.iter() {
                    existing.insert(ik.clone(), iv.clone());
                }
            }
            _ => {
                dst.insert(k.clone(), v.clone());
            }
        }
    }
}
