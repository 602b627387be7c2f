use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Marca de desmontaje compartible con el anfitrión.
///
/// Tras `teardown`, un commit de transición pendiente se descarta y el
/// controlador rechaza nuevas operaciones.
#[derive(Debug, Clone, Default)]
pub struct TeardownHandle(Arc<AtomicBool>);

impl TeardownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teardown(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_torn_down(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
