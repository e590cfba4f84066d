//! Camino inverso: eliminación de la estereoquímica de un mecanismo.
//!
//! Cada especie pasa a su identificador libre de estereo. Las especies que
//! colapsan al mismo identificador se funden en la primera encontrada; las
//! reacciones se reescriben con el nombre superviviente y las que quedan
//! repetidas se descartan. Todo lo descartado se devuelve para auditoría.
use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use mech_domain::{Identifier, Mechanism, ReactionDict, ReactionKey, Species, SpeciesDict};
use mech_engine::StructureService;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripOutcome {
    pub mechanism: Mechanism,
    /// Especies fundidas en otra (con su identificador original).
    pub removed_species: Vec<Species>,
    /// Reacciones duplicadas tras quitar el estereo o con participantes sin
    /// especie, con su clave original.
    pub removed_reactions: Vec<ReactionKey<String>>,
}

pub fn remove_stereochemistry<S: StructureService>(service: &S, mechanism: &Mechanism) -> StripOutcome {
    let mut outcome = StripOutcome::default();

    // nombre de entrada -> nombre superviviente
    let mut alias: HashMap<&str, String> = HashMap::with_capacity(mechanism.species.len());
    let mut survivors: HashMap<Identifier, String> = HashMap::new();
    let mut species = SpeciesDict::with_capacity(mechanism.species.len());
    for (name, sp) in &mechanism.species {
        let free = service.stereo_free_identifier(sp.identifier());
        match survivors.get(&free) {
            Some(survivor) => {
                debug!("especie {name} fundida en {survivor}");
                alias.insert(name, survivor.clone());
                outcome.removed_species.push(sp.clone());
            }
            None => {
                survivors.insert(free.clone(), name.clone());
                alias.insert(name, name.clone());
                species.insert(name.clone(), sp.with_identifier(free));
            }
        }
    }

    let mut reactions = ReactionDict::with_capacity(mechanism.reactions.len());
    let mut seen: HashSet<ReactionKey<String>> = HashSet::new();
    for (key, params) in &mechanism.reactions {
        let renamed = match key.try_map(|name| alias.get(name.as_str()).cloned().ok_or_else(|| name.clone())) {
            Ok(renamed) => renamed,
            Err(name) => {
                warn!("reacción {key} descartada: participante sin especie {name}");
                outcome.removed_reactions.push(key.clone());
                continue;
            }
        };
        // los nombres supervivientes son biyectivos con los identificadores
        // libres, así que la forma canónica en nombres basta
        if !seen.insert(renamed.canonical()) {
            debug!("reacción {key} duplicada sin estereo");
            outcome.removed_reactions.push(key.clone());
            continue;
        }
        reactions.insert(renamed, params.clone());
    }

    if !outcome.removed_species.is_empty() || !outcome.removed_reactions.is_empty() {
        warn!("sin estereo: {} especies y {} reacciones removidas",
              outcome.removed_species.len(),
              outcome.removed_reactions.len());
    }
    outcome.mechanism = Mechanism::new(species, reactions);
    outcome
}
