//! Pruebas de la rutina de traducción de página.

use slide_i18n::{translate_page, Page, PageNode, PreferenceStore};
use uuid::Uuid;

fn temp_store() -> PreferenceStore {
    let path = std::env::temp_dir().join(format!("slidekit-page-{}.json", Uuid::new_v4()));
    PreferenceStore::new(path)
}

fn sample_page() -> Page {
    Page::new(vec![
        PageNode::marked("t1", "placeholder"),
        PageNode::marked("t999", "sin traducción"),
        PageNode::plain("chrome estático"),
    ])
}

#[test]
fn explicit_request_wins_and_is_persisted() {
    let store = temp_store();
    let mut page = sample_page();

    let applied = translate_page(&mut page, Some("zh_CN"), &store);

    assert_eq!(applied, "zh_CN");
    assert_eq!(page.nodes[0].content, "欢迎使用 Slide Studio");
    // la preferencia quedó guardada para la próxima visita
    assert_eq!(store.load().as_deref(), Some("zh_CN"));
    let _ = std::fs::remove_file(store.path());
}

#[test]
fn stored_preference_drives_translation() {
    let store = temp_store();
    store.save("ja").expect("seed preference");
    let mut page = sample_page();

    let applied = translate_page(&mut page, None, &store);

    assert_eq!(applied, "ja");
    assert_eq!(page.nodes[0].content, "Slide Studioへようこそ");
    let _ = std::fs::remove_file(store.path());
}

#[test]
fn unknown_stored_locale_falls_back_to_default() {
    let store = temp_store();
    store.save("xx_YY").expect("seed preference");
    let mut page = sample_page();

    let applied = translate_page(&mut page, None, &store);

    assert_eq!(applied, "en");
    assert_eq!(page.nodes[0].content, "Welcome to Slide Studio");
    let _ = std::fs::remove_file(store.path());
}

#[test]
fn explicit_unsupported_request_persists_raw_but_applies_default() {
    let store = temp_store();
    let mut page = sample_page();

    let applied = translate_page(&mut page, Some("fr"), &store);

    // se guarda lo pedido tal cual, pero la traducción cae al default
    assert_eq!(applied, "en");
    assert_eq!(store.load().as_deref(), Some("fr"));
    let _ = std::fs::remove_file(store.path());
}

#[test]
fn unmatched_key_and_plain_nodes_stay_unchanged() {
    let store = temp_store();
    let mut page = sample_page();

    translate_page(&mut page, Some("en"), &store);

    assert_eq!(page.nodes[1].content, "sin traducción");
    assert_eq!(page.nodes[2].content, "chrome estático");
    let _ = std::fs::remove_file(store.path());
}

#[test]
fn absent_preference_translates_with_default_locale() {
    let store = temp_store();
    let mut page = sample_page();

    let applied = translate_page(&mut page, None, &store);

    assert_eq!(applied, "en");
    assert_eq!(page.nodes[0].content, "Welcome to Slide Studio");
}
