//! Demo de SlideKit: resuelve un set de opciones representativo y traduce
//! una página de muestra con la preferencia persistida.

use serde_json::json;
use slide_core::get_params;
use slide_i18n::{translate_page, Page, PageNode, PreferenceStore};
use slidekit_rust::config::CONFIG;

/// Resolución de opciones: muestra los tres buckets para un caller típico
/// (claves reconocidas, variante interna, módulo y plugin desconocido).
fn run_params_demo() {
    let caller = json!({
        "slidesPerView": 3,
        "_speed": 450,
        "loop": true,
        "pagination": { "clickable": true },
        "customPlugin": { "enabled": true },
        "debugProbe": null,
    });

    let resolved = get_params(Some(&caller));
    println!("== params ==");
    println!("{}", serde_json::to_string_pretty(&resolved.params).expect("params serializable"));
    println!("== passed ==");
    println!("{}", serde_json::to_string_pretty(&resolved.passed).expect("passed serializable"));
    println!("== rest ==");
    println!("{}", serde_json::to_string_pretty(&resolved.rest).expect("rest serializable"));
}

/// Traducción de página: nodos marcados con claves de la tabla más un nodo
/// estático que nunca se toca.
fn run_translate_demo() {
    let store = PreferenceStore::new(&CONFIG.i18n.lang_file);
    let mut page = Page::new(vec![
        PageNode::marked("t1", ""),
        PageNode::marked("t2", ""),
        PageNode::marked("t7", ""),
        PageNode::plain("(pie de página estático)"),
    ]);

    let applied = translate_page(&mut page, None, &store);
    println!("== página ({}) ==", applied);
    for node in &page.nodes {
        println!("{}", node.content);
    }
}

fn main() {
    run_params_demo();
    run_translate_demo();
}
