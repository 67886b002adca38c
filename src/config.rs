//! Configuración central del demo.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Configuración del binario `interaction-demo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Filtro para env_logger (`INTERACTION_LOG`, por defecto `info`).
    pub log_filter: String,
    /// Emitir JSON indentado (`INTERACTION_PRETTY`, por defecto `true`).
    pub pretty: bool,
    /// Imprimir el fingerprint de cada interacción (`INTERACTION_FINGERPRINT`).
    pub fingerprint: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { log_filter: "info".to_string(),
               pretty: true,
               fingerprint: false }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda; valores
    /// ausentes o no reconocidos caen al default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let log_filter = lookup("INTERACTION_LOG").filter(|v| !v.trim().is_empty()).unwrap_or(defaults.log_filter);
        let pretty = lookup("INTERACTION_PRETTY").and_then(|v| parse_flag(&v)).unwrap_or(defaults.pretty);
        let fingerprint = lookup("INTERACTION_FINGERPRINT").and_then(|v| parse_flag(&v)).unwrap_or(defaults.fingerprint);
        Self { log_filter, pretty, fingerprint }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<DemoConfig> = Lazy::new(DemoConfig::from_env);

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }
