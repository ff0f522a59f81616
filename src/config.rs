//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! La única sección por ahora es la de localización de la página.

use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación (extensible para más secciones).
pub struct AppConfig {
    /// Configuración de localización.
    pub i18n: I18nConfig,
}

/// Parámetros de localización de la página.
pub struct I18nConfig {
    /// Ruta del archivo con la preferencia de idioma persistida.
    pub lang_file: String,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    let lang_file = env::var(slide_i18n::preference::LANG_FILE_ENV)
        .unwrap_or_else(|_| slide_i18n::preference::LANG_FILE_DEFAULT.to_string());
    AppConfig {
        i18n: I18nConfig { lang_file },
    }
});
