//! mech-policies – Políticas de nombrado de especies
//!
//! Provee el contrato para asignar nombres locales de mecanismo a
//! identificadores nuevos y una implementación determinista basada en la
//! fórmula y un digest del identificador.

use std::collections::HashSet;

use mech_domain::Identifier;
use sha2::{Digest, Sha256};

/// Contrato de políticas de nombrado deterministas.
pub trait NamingPolicy: Send + Sync {
    fn id(&self) -> &'static str;
    /// Devuelve un nombre que no está en `taken`. Para las mismas entradas
    /// siempre devuelve el mismo nombre.
    fn mint(&self, identifier: &Identifier, taken: &HashSet<String>) -> String;
}

/// Política: `<fórmula>-<digest>` con sufijo numérico ante colisiones.
pub struct FormulaNamePolicy {
    digest_len: usize,
}

impl FormulaNamePolicy {
    pub fn new() -> Self {
        Self { digest_len: 6 }
    }

    pub fn with_digest_len(digest_len: usize) -> Self {
        Self { digest_len: digest_len.clamp(1, 64) }
    }
}

impl Default for FormulaNamePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingPolicy for FormulaNamePolicy {
    fn id(&self) -> &'static str {
        "formula_digest"
    }

    fn mint(&self, identifier: &Identifier, taken: &HashSet<String>) -> String {
        let base = format!("{}-{}", identifier.formula().unwrap_or("SPC"), short_digest(identifier, self.digest_len));
        if !taken.contains(&base) {
            return base;
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{base}-{n}");
            if !taken.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Primeros `len` caracteres hex del sha256 del identificador.
pub fn short_digest(identifier: &Identifier, len: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(identifier.as_str().as_bytes());
    let hex = format!("{:x}", hasher.finalize());
    hex[..len.min(hex.len())].to_string()
}
