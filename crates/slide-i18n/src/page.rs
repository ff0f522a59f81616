//! Sustitución de textos sobre una página de nodos marcados.
//!
//! Equivalente al paso de activación de la vista: cada nodo marcado
//! declara una clave `tN` y recibe el texto de la tabla bajo el idioma
//! activo. Nodos sin entrada para su clave quedan intactos.

use serde::{Deserialize, Serialize};

use crate::preference::PreferenceStore;
use crate::table::{lookup, supported, DEFAULT_LOCALE};

/// Nodo de la página. Está "marcado" cuando declara una clave de texto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    /// Clave del texto (`tN`), o `None` para nodos que no se traducen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Contenido actual del nodo.
    pub content: String,
}

impl PageNode {
    pub fn marked(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self { key: Some(key.into()), content: content.into() }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self { key: None, content: content.into() }
    }
}

/// Página: colección plana de nodos en orden de documento.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub nodes: Vec<PageNode>,
}

impl Page {
    pub fn new(nodes: Vec<PageNode>) -> Self {
        Self { nodes }
    }
}

/// Idioma activo para una visita: un pedido explícito gana y se persiste
/// para la próxima; si no hay, se usa la preferencia guardada. Cualquier
/// candidato fuera de la tabla cae al idioma por defecto.
pub fn resolve_locale(requested: Option<&str>, store: &PreferenceStore) -> String {
    let candidate = match requested {
        Some(lang) => {
            // se persiste el valor pedido tal cual, antes del chequeo de tabla
            if let Err(e) = store.save(lang) {
                log::warn!("no se pudo persistir la preferencia de idioma: {}", e);
            }
            lang.to_string()
        }
        None => store.load_or_default(),
    };
    if supported(&candidate) {
        candidate
    } else {
        DEFAULT_LOCALE.to_string()
    }
}

/// Reescribe el contenido de cada nodo marcado con la entrada de la tabla
/// para su clave bajo el idioma activo. Devuelve el idioma aplicado.
pub fn translate_page(page: &mut Page, requested: Option<&str>, store: &PreferenceStore) -> String {
    let locale = resolve_locale(requested, store);
    for node in page.nodes.iter_mut() {
        if let Some(key) = node.key.as_deref() {
            if let Some(text) = lookup(&locale, key) {
                node.content = text.to_string();
            }
        }
    }
    log::debug!("página traducida con idioma {}", locale);
    locale
}
