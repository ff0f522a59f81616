//! Pruebas del store de preferencia persistida.

use slide_i18n::{PreferenceStore, DEFAULT_LOCALE};
use uuid::Uuid;

fn temp_store() -> PreferenceStore {
    let path = std::env::temp_dir().join(format!("slidekit-pref-{}.json", Uuid::new_v4()));
    PreferenceStore::new(path)
}

#[test]
fn unset_preference_loads_none_and_defaults() {
    let store = temp_store();
    assert_eq!(store.load(), None);
    assert_eq!(store.load_or_default(), DEFAULT_LOCALE);
}

#[test]
fn save_then_load_roundtrip() {
    let store = temp_store();
    store.save("ja").expect("save should succeed");
    assert_eq!(store.load().as_deref(), Some("ja"));
    let _ = std::fs::remove_file(store.path());
}

#[test]
fn saving_again_overwrites_previous_choice() {
    let store = temp_store();
    store.save("ja").expect("first save");
    store.save("zh_CN").expect("second save");
    assert_eq!(store.load().as_deref(), Some("zh_CN"));
    let _ = std::fs::remove_file(store.path());
}

#[test]
fn corrupt_file_is_treated_as_unset() {
    let store = temp_store();
    std::fs::write(store.path(), "not-json{{").expect("write corrupt file");
    assert_eq!(store.load(), None);
    assert_eq!(store.load_or_default(), DEFAULT_LOCALE);
    let _ = std::fs::remove_file(store.path());
}
