//! Preferencia de idioma persistida entre ejecuciones.
//!
//! Estado global del proceso modelado con accesores explícitos de
//! lectura/escritura. Regla de inicialización: idioma por defecto cuando
//! no hay preferencia guardada. La persistencia es un archivo JSON pequeño
//! cuya ruta viene del entorno.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::DEFAULT_LOCALE;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Variable de entorno con la ruta del archivo de preferencia.
pub const LANG_FILE_ENV: &str = "SLIDEKIT_LANG_FILE";

/// Ruta usada cuando la variable no está definida.
pub const LANG_FILE_DEFAULT: &str = ".slidekit_lang.json";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("io: {0}")] Io(#[from] std::io::Error),
    #[error("serde: {0}")] Serde(#[from] serde_json::Error),
}

/// Shape persistida en disco.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    locale: String,
    updated_at: DateTime<Utc>,
}

/// Accesores sobre la preferencia persistida.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Construye el store desde el entorno (`SLIDEKIT_LANG_FILE`).
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let path = std::env::var(LANG_FILE_ENV).unwrap_or_else(|_| LANG_FILE_DEFAULT.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Preferencia guardada, o `None` si el archivo no existe o no parsea.
    /// La lectura nunca falla hacia arriba: un archivo corrupto se loguea y
    /// se trata como ausente.
    pub fn load(&self) -> Option<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return None,
        };
        match serde_json::from_str::<StoredPreference>(&raw) {
            Ok(stored) => Some(stored.locale),
            Err(e) => {
                log::warn!("preferencia de idioma ilegible en {:?}: {}", self.path, e);
                None
            }
        }
    }

    /// Idioma efectivo: la preferencia guardada o el default si no hay.
    pub fn load_or_default(&self) -> String {
        self.load().unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }

    /// Guarda la preferencia con timestamp UTC.
    pub fn save(&self, locale: &str) -> Result<(), PreferenceError> {
        let stored = StoredPreference {
            locale: locale.to_string(),
            updated_at: Utc::now(),
        };
        let raw = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, raw)?;
        log::debug!("preferencia de idioma guardada: {}", locale);
        Ok(())
    }
}
