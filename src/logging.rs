//! Inicialización de logs para los binarios.
//!
//! Las librerías del workspace loguean con la fachada `log`; el subscriber de
//! `tracing-subscriber` los recoge a través de su puente `tracing-log`.
use tracing_subscriber::EnvFilter;

/// Instala el subscriber global. Un filtro inválido cae a `info`; una segunda
/// llamada no tiene efecto.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
