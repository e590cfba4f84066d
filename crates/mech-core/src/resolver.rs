//! Resolución bidireccional nombre ↔ identificador.
//!
//! Se construye una vez por mecanismo; las búsquedas son O(1) y sin efectos
//! secundarios, por lo que los workers la comparten por referencia.
use std::collections::HashMap;

use mech_domain::{Identifier, SpeciesDict};

#[derive(Debug, Clone, Default)]
pub struct IdentifierResolver {
    by_name: HashMap<String, Identifier>,
    by_identifier: HashMap<Identifier, String>,
}

impl IdentifierResolver {
    pub fn from_species(species: &SpeciesDict) -> Self {
        let mut by_name = HashMap::with_capacity(species.len());
        let mut by_identifier = HashMap::with_capacity(species.len());
        for (name, sp) in species {
            by_name.insert(name.clone(), sp.identifier().clone());
            // el primer nombre registrado para un identificador gana
            by_identifier.entry(sp.identifier().clone()).or_insert_with(|| name.clone());
        }
        Self { by_name, by_identifier }
    }

    pub fn resolve(&self, name: &str) -> Option<&Identifier> { self.by_name.get(name) }

    pub fn name_of(&self, identifier: &Identifier) -> Option<&str> {
        self.by_identifier.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.by_name.len() }
    pub fn is_empty(&self) -> bool { self.by_name.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_domain::Species;

    #[test]
    fn test_resolves_both_directions() {
        let mut species = SpeciesDict::new();
        for (name, id) in [("A", "id_A"), ("B", "id_B"), ("B_alias", "id_B")] {
            species.insert(name.to_string(), Species::new(name, Identifier::new(id).unwrap()).unwrap());
        }
        let resolver = IdentifierResolver::from_species(&species);
        assert_eq!(resolver.resolve("A").map(Identifier::as_str), Some("id_A"));
        assert_eq!(resolver.resolve("C"), None);
        assert_eq!(resolver.name_of(&Identifier::new("id_B").unwrap()), Some("B"));
        assert_eq!(resolver.len(), 3);
    }
}
