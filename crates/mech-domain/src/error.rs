use thiserror::Error;

/// Error del dominio de mecanismos de reacción.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    ValidationError(String),

    /// Una reacción referencia un nombre de especie que no existe en el
    /// diccionario de especies. La reacción se descarta, el lote sigue.
    #[error("Participante sin resolver en {reaction}: {name}")]
    UnresolvedParticipant { reaction: String, name: String },

    /// Dos conjuntos de especies que deberían compartir un fragmento no
    /// tienen ninguno en común. No es una condición ignorable.
    #[error("Sin fragmento común entre [{fragments}] y [{candidates}]")]
    NoFragmentOverlap { fragments: String, candidates: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_participant_format() {
        let err = DomainError::UnresolvedParticipant { reaction: "A=B".into(), name: "B".into() };
        assert_eq!(err.to_string(), "Participante sin resolver en A=B: B");
    }

    #[test]
    fn test_validation_format() {
        let err = DomainError::ValidationError("nombre vacío".into());
        assert_eq!(err.to_string(), "Error de validación: nombre vacío");
    }
}
