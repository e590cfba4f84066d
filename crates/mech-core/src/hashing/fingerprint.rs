//! Huella de un mecanismo independiente de los nombres.
//!
//! Dos mecanismos con las mismas especies (por identificador) y las mismas
//! reacciones (en identificadores, lados ordenados, mismo colisionador) tienen
//! la misma huella aunque las especies se llamen distinto o el orden de
//! inserción cambie. Los participantes sin especie se escriben como `?nombre`.
use std::collections::BTreeSet;

use mech_domain::{Mechanism, ReactionKey};
use serde_json::json;

use super::to_canonical_json;
use crate::constants::ENGINE_VERSION;

pub fn mechanism_fingerprint(mechanism: &Mechanism) -> String {
    let species: BTreeSet<&str> = mechanism.identifiers().map(|id| id.as_str()).collect();
    let label = |name: &String| {
        mechanism.species_named(name)
                 .map(|sp| sp.identifier().to_string())
                 .unwrap_or_else(|| format!("?{name}"))
    };
    let reactions: BTreeSet<String> =
        mechanism.reactions
                 .keys()
                 .map(|key| {
                     ReactionKey::<String>::new(key.reactants.iter().map(&label).collect(),
                                                key.products.iter().map(&label).collect(),
                                                key.collider.clone()).canonical()
                                                                     .to_string()
                 })
                 .collect();
    let doc = json!({
        "engine_version": ENGINE_VERSION,
        "species": species,
        "reactions": reactions,
    });
    blake3::hash(to_canonical_json(&doc).as_bytes()).to_hex().to_string()
}
