//! Tabla estática de textos por idioma.
//!
//! Catálogo locale -> clave -> texto. Las claves `tN` las declaran los
//! nodos marcados de la página. Un idioma desconocido no es un error de la
//! tabla: el fallback al idioma por defecto ocurre en `page::resolve_locale`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Idioma aplicado cuando la preferencia está ausente o fuera de la tabla.
pub const DEFAULT_LOCALE: &str = "en";

type Entries = HashMap<&'static str, &'static str>;

static TABLE: Lazy<HashMap<&'static str, Entries>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("en", en());
    table.insert("zh_CN", zh_cn());
    table.insert("ja", ja());
    table
});

fn en() -> Entries {
    [
        ("t1", "Welcome to Slide Studio"),
        ("t2", "Setup takes just a few steps. Let's start!"),
        ("t3", "User Agreement"),
        ("t4", "Disagree"),
        ("t5", "Agree"),
        ("t6", "Back"),
        ("t7", "Next"),
        ("t8", "Finish"),
        ("t9", "Login"),
        ("t10", "Log out"),
        ("t11", "Cancel"),
        ("t12", "Confirm"),
        ("t13", "Network disconnected, please check and try again later."),
        ("t14", "Release note"),
    ]
    .into_iter()
    .collect()
}

fn zh_cn() -> Entries {
    [
        ("t1", "欢迎使用 Slide Studio"),
        ("t2", "只需几步即可完成设置，让我们开始吧！"),
        ("t3", "用户使用协议"),
        ("t4", "拒绝"),
        ("t5", "同意"),
        ("t6", "上一步"),
        ("t7", "下一步"),
        ("t8", "完成"),
        ("t9", "登录"),
        ("t10", "退出登录"),
        ("t11", "取消"),
        ("t12", "确认"),
        ("t13", "网络连接断开，请检查后重试。"),
        ("t14", "版本说明"),
    ]
    .into_iter()
    .collect()
}

fn ja() -> Entries {
    [
        ("t1", "Slide Studioへようこそ"),
        ("t2", "数ステップで設定が完了します。始めましょう！"),
        ("t3", "利用規約"),
        ("t4", "同意しない"),
        ("t5", "同意する"),
        ("t6", "戻る"),
        ("t7", "次へ"),
        ("t8", "完了"),
        ("t9", "ログイン"),
        ("t10", "ログアウト"),
        ("t11", "キャンセル"),
        ("t12", "確認"),
        ("t13", "ネットワークが切断されました。確認して再試行してください。"),
        ("t14", "リリースノート"),
    ]
    .into_iter()
    .collect()
}

/// Tabla completa (sólo lectura).
pub fn lang_table() -> &'static HashMap<&'static str, Entries> {
    &TABLE
}

/// ¿Existe el idioma en la tabla? Igualdad exacta, case-sensitive.
pub fn supported(locale: &str) -> bool {
    TABLE.contains_key(locale)
}

/// Texto para `key` bajo `locale`, si ambos existen.
pub fn lookup(locale: &str, key: &str) -> Option<&'static str> {
    TABLE.get(locale).and_then(|entries| entries.get(key).copied())
}
