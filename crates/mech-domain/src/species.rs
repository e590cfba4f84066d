use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{DomainError, Identifier};

/// Especie de un mecanismo: nombre local + identificador canónico. Los
/// atributos auxiliares (fórmula, metadata) viajan de forma opaca.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    name: String,
    identifier: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    formula: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    metadata: serde_json::Value,
}

impl Species {
    pub fn new(name: &str, identifier: Identifier) -> Result<Self, DomainError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(DomainError::ValidationError(format!("Nombre de especie inválido: {name:?}")));
        }
        let formula = identifier.formula().map(str::to_string);
        Ok(Species { name: name.to_string(),
                     identifier,
                     formula,
                     metadata: serde_json::Value::Null })
    }

    /// Crea una nueva instancia con metadata opaca.
    pub fn with_metadata(&self, metadata: serde_json::Value) -> Self {
        let mut species = self.clone();
        species.metadata = metadata;
        species
    }

    /// Fórmula explícita (p. ej. la de un archivo de mecanismo) en lugar de la
    /// capa de fórmula del identificador.
    pub fn with_formula(&self, formula: Option<String>) -> Self {
        let mut species = self.clone();
        if formula.is_some() {
            species.formula = formula;
        }
        species
    }

    /// Crea una nueva instancia con otro identificador (los demás atributos se
    /// conservan).
    pub fn with_identifier(&self, identifier: Identifier) -> Self {
        let mut species = self.clone();
        if let Some(formula) = identifier.formula() {
            species.formula = Some(formula.to_string());
        }
        species.identifier = identifier;
        species
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn identifier(&self) -> &Identifier { &self.identifier }
    pub fn formula(&self) -> Option<&str> { self.formula.as_deref() }
    pub fn metadata(&self) -> &serde_json::Value { &self.metadata }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}>", self.name, self.identifier)
    }
}
