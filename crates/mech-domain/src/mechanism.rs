//! Mecanismo: diccionario de especies + diccionario de reacciones.
//!
//! Ambos diccionarios conservan el orden de inserción (`IndexMap`), de modo
//! que "la primera especie encontrada" tiene un significado estable. Las
//! operaciones del motor nunca mutan un mecanismo de entrada: siempre
//! construyen uno nuevo.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{DomainError, Identifier, ReactionKey, Species};

pub type SpeciesDict = IndexMap<String, Species>;
pub type ReactionDict = IndexMap<ReactionKey<String>, RateParams>;

/// Parámetros de velocidad de una reacción. Su forma interna es opaca para
/// el motor: se copian sin cambios o se sintetizan vacíos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateParams(serde_json::Value);

impl RateParams {
    pub fn new(value: serde_json::Value) -> Self { Self(value) }
    /// Parámetros sintetizados para reacciones creadas por la expansión.
    pub fn unset() -> Self { Self(serde_json::Value::Null) }
    pub fn is_unset(&self) -> bool { self.0.is_null() }
    pub fn as_value(&self) -> &serde_json::Value { &self.0 }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mechanism {
    pub species: SpeciesDict,
    pub reactions: ReactionDict,
}

impl Mechanism {
    pub fn new(species: SpeciesDict, reactions: ReactionDict) -> Self {
        Self { species, reactions }
    }

    /// Agrega una especie validando que el nombre no exista todavía.
    pub fn add_species(&mut self, species: Species) -> Result<(), DomainError> {
        if self.species.contains_key(species.name()) {
            return Err(DomainError::ValidationError(format!("Especie duplicada: {}", species.name())));
        }
        self.species.insert(species.name().to_string(), species);
        Ok(())
    }

    /// Agrega una reacción validando que no exista ya con la misma clave.
    pub fn add_reaction(&mut self, key: ReactionKey<String>, params: RateParams) -> Result<(), DomainError> {
        if self.reactions.contains_key(&key) {
            return Err(DomainError::ValidationError(format!("Reacción duplicada: {key}")));
        }
        self.reactions.insert(key, params);
        Ok(())
    }

    pub fn species_named(&self, name: &str) -> Option<&Species> { self.species.get(name) }

    /// Identificadores de todas las especies, en orden de inserción.
    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.species.values().map(Species::identifier)
    }

    pub fn is_empty(&self) -> bool { self.species.is_empty() && self.reactions.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collider;

    fn species(name: &str) -> Species {
        Species::new(name, Identifier::new(format!("id_{name}")).unwrap()).unwrap()
    }

    #[test]
    fn test_add_species_rejects_duplicates() {
        let mut mech = Mechanism::default();
        mech.add_species(species("A")).unwrap();
        assert!(mech.add_species(species("A")).is_err());
        assert_eq!(mech.identifiers().count(), 1);
    }

    #[test]
    fn test_add_reaction_rejects_duplicates() {
        let mut mech = Mechanism::default();
        let key = ReactionKey::new(vec!["A".to_string()], vec!["B".to_string()], Collider::None);
        mech.add_reaction(key.clone(), RateParams::unset()).unwrap();
        assert!(mech.add_reaction(key, RateParams::new(serde_json::json!([1.0, 0.0, 0.0]))).is_err());
    }

    #[test]
    fn test_rate_params_transparent() {
        let p: RateParams = serde_json::from_str("{\"A\": 1e13}").unwrap();
        assert!(!p.is_unset());
        assert!(RateParams::unset().is_unset());
        assert_eq!(serde_json::to_string(&RateParams::unset()).unwrap(), "null");
    }
}
