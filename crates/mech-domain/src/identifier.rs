//! Identificador canónico de estructura.
//!
//! Un `Identifier` es la cadena canónica que codifica la conectividad de una
//! molécula y, opcionalmente, sus descriptores estereoquímicos. Dos
//! identificadores iguales denotan la misma estructura. Los identificadores con
//! capas (InChI) se ven como `prefijo/fórmula/capa/capa/...`; las capas
//! estereoquímicas empiezan con `b`, `t`, `m` o `s`.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Prefijos de las capas estereoquímicas (doble enlace, tetraédrica, inversión,
/// tipo de estereo).
pub const STEREO_LAYER_PREFIXES: [char; 4] = ['b', 't', 'm', 's'];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::ValidationError("Identificador vacío".to_string()));
        }
        if raw.trim() != raw {
            return Err(DomainError::ValidationError(format!("Identificador con espacios: {raw:?}")));
        }
        Ok(Identifier(raw))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Capa de fórmula (`C4H10O` en `InChI=1S/C4H10O/...`), si existe.
    pub fn formula(&self) -> Option<&str> {
        self.0.split('/').nth(1).filter(|f| !f.is_empty())
    }

    /// Capas posteriores a la fórmula, en orden.
    pub fn layers(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').skip(2)
    }

    /// `true` si alguna capa estereoquímica está presente.
    pub fn has_stereo(&self) -> bool {
        self.layers().any(is_stereo_layer)
    }

    /// Construye un identificador nuevo reescribiendo cada capa posterior a
    /// la fórmula. `None` elimina la capa. Prefijo y fórmula se conservan.
    pub fn map_layers<F>(&self, mut f: F) -> Identifier
        where F: FnMut(&str) -> Option<String>
    {
        let mut parts: Vec<String> = self.0.split('/').take(2).map(str::to_string).collect();
        parts.extend(self.layers().filter_map(|layer| f(layer)));
        Identifier(parts.join("/"))
    }
}

/// `true` si la capa es estereoquímica.
pub fn is_stereo_layer(layer: &str) -> bool {
    layer.chars().next().is_some_and(|c| STEREO_LAYER_PREFIXES.contains(&c))
}

impl TryFrom<String> for Identifier {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self, Self::Error> { Identifier::new(value) }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self { value.0 }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
