//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use atelier_core::constants::DEFAULT_TRANSITION_DELAY_MS;

use crate::errors::AppError;

pub const ENV_TRANSITION_DELAY_MS: &str = "ATELIER_TRANSITION_DELAY_MS";
pub const ENV_SAVED_TALENT_PATH: &str = "ATELIER_SAVED_TALENT_PATH";
pub const ENV_LOG: &str = "ATELIER_LOG";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub wizard: WizardConfig,
    pub talent: TalentConfig,
    pub log: LogConfig,
}

/// Parámetros del controlador de wizards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Suspensión entre el inicio y el commit de una transición.
    pub transition_delay_ms: u64,
}

impl WizardConfig {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self { transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS }
    }
}

/// Dónde se guarda la lista de talentos guardados.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalentConfig {
    pub saved_path: PathBuf,
}

impl Default for TalentConfig {
    fn default() -> Self {
        Self { saved_path: PathBuf::from("saved_talent.json") }
    }
}

/// Filtro de logs para los binarios (sintaxis de `EnvFilter`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: "info".to_string() }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Lee la configuración a partir de una función de búsqueda; valores
    /// ausentes o vacíos toman el default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = AppConfig::default();
        if let Some(raw) = get(ENV_TRANSITION_DELAY_MS) {
            cfg.wizard.transition_delay_ms =
                raw.parse().map_err(|_| AppError::Config(format!("{ENV_TRANSITION_DELAY_MS} inválido: '{raw}'")))?;
        }
        if let Some(path) = get(ENV_SAVED_TALENT_PATH) {
            cfg.talent.saved_path = PathBuf::from(path);
        }
        if let Some(filter) = get(ENV_LOG) {
            cfg.log.filter = filter;
        }
        Ok(cfg)
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
/// Una configuración inválida se reporta y se reemplaza por los defaults.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    AppConfig::from_env().unwrap_or_else(|e| {
                             log::warn!("{e}; usando configuración por defecto");
                             AppConfig::default()
                         })
});
