//! Fusión del conjunto global de variantes en diccionarios canónicos.
//!
//! Cada identificador distinto recibe exactamente un nombre: el que ya tenía
//! en el mecanismo previo (fusión idempotente) o uno nuevo de la política de
//! nombrado. Cada clave de reacción distinta en identificadores produce una
//! sola entrada, aunque la hayan enumerado varias reacciones de origen.
use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;
use mech_domain::{DomainError, Identifier, Mechanism, RateParams, ReactionDict, ReactionKey, Species, SpeciesDict};
use mech_policies::NamingPolicy;

pub fn merge_reactions<P>(variants: &[ReactionKey<Identifier>], existing: &Mechanism, naming: &P) -> Result<Mechanism, DomainError>
    where P: NamingPolicy + ?Sized
{
    let mut names: HashMap<Identifier, String> = HashMap::new();
    for sp in existing.species.values() {
        names.entry(sp.identifier().clone()).or_insert_with(|| sp.name().to_string());
    }
    let mut taken: HashSet<String> = existing.species.keys().cloned().collect();

    // identificadores en orden canónico: el nombrado no depende del orden de
    // llegada de los shards
    let distinct: BTreeSet<&Identifier> = variants.iter().flat_map(|v| v.participants()).collect();
    let mut species = SpeciesDict::with_capacity(distinct.len());
    for identifier in distinct {
        let name = match names.get(identifier) {
            Some(name) => name.clone(),
            None => {
                let minted = naming.mint(identifier, &taken);
                taken.insert(minted.clone());
                names.insert(identifier.clone(), minted.clone());
                minted
            }
        };
        let record = match existing.species.get(&name) {
            Some(prev) if prev.identifier() == identifier => prev.clone(),
            _ => Species::new(&name, identifier.clone())?,
        };
        species.insert(name, record);
    }

    let mut reactions = ReactionDict::new();
    let mut seen: HashSet<ReactionKey<Identifier>> = HashSet::new();
    for variant in variants {
        if !seen.insert(variant.canonical()) {
            continue;
        }
        let key = variant.try_map(|identifier| {
                              names.get(identifier)
                                   .cloned()
                                   .ok_or_else(|| DomainError::UnresolvedParticipant { reaction: variant.to_string(),
                                                                                      name: identifier.to_string() })
                          })?;
        let params = existing.reactions.get(&key).cloned().unwrap_or_else(RateParams::unset);
        reactions.insert(key, params);
    }
    debug!("fusión ({}): {} especies, {} reacciones a partir de {} variantes",
           naming.id(),
           species.len(),
           reactions.len(),
           variants.len());
    Ok(Mechanism::new(species, reactions))
}
