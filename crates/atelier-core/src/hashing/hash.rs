use blake3::Hasher;
use serde::Serialize;

use crate::errors::WizardError;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Fingerprint de cualquier valor serializable (JSON compacto + blake3).
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> Result<String, WizardError> {
    let raw = serde_json::to_string(value).map_err(|e| WizardError::Internal(format!("fingerprint: {e}")))?;
    Ok(hash_str(&raw))
}
