//! Pruebas para utilitarios de merge de opciones.
//!
//! Verificamos la semántica shallow a un nivel: claves escalares se
//! sobreescriben, objetos anidados se combinan clave a clave.

use serde_json::{json, Map, Value};
use slide_core::merge::{extend, is_object};

fn obj(v: Value) -> Map<String, Value> {
    v.as_object().cloned().expect("object literal")
}

#[test]
fn extend_overrides_scalars_and_keeps_unrelated_keys() {
    let mut dst = obj(json!({"x": 1, "keep": "dst"}));
    let src = obj(json!({"x": 2, "new": true}));

    extend(&mut dst, &src);

    // claves simples son sobreescritas
    assert_eq!(dst["x"], json!(2));
    // claves que sólo existen en dst se mantienen
    assert_eq!(dst["keep"], json!("dst"));
    // claves nuevas aparecen
    assert_eq!(dst["new"], json!(true));
}

#[test]
fn extend_merges_nested_objects_key_by_key() {
    let mut dst = obj(json!({"nav": {"a": 1, "shared": "dst"}}));
    let src = obj(json!({"nav": {"b": 2, "shared": "src"}}));

    extend(&mut dst, &src);

    assert_eq!(dst["nav"], json!({"a": 1, "b": 2, "shared": "src"}));
}

#[test]
fn extend_replaces_when_either_side_is_not_an_object() {
    let mut dst = obj(json!({"y": {"z": 3}, "s": 1}));
    let src = obj(json!({"y": "replaced", "s": {"now": "object"}}));

    extend(&mut dst, &src);

    // objeto existente reemplazado por escalar entrante
    assert_eq!(dst["y"], json!("replaced"));
    // escalar existente reemplazado por objeto entrante
    assert_eq!(dst["s"], json!({"now": "object"}));
}

#[test]
fn arrays_count_as_scalars() {
    assert!(!is_object(&json!([1, 2, 3])));
    assert!(!is_object(&json!(null)));
    assert!(is_object(&json!({})));

    let mut dst = obj(json!({"list": {"a": 1}}));
    let src = obj(json!({"list": [1, 2]}));
    extend(&mut dst, &src);
    assert_eq!(dst["list"], json!([1, 2]));
}
