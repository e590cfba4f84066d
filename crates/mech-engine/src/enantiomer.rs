//! Filtro de reacciones enantioméricas.
//!
//! Dos variantes son imágenes especulares cuando reflejar todos los
//! identificadores de una produce exactamente la otra. De cada par se
//! conserva un único representante: las variantes se recorren en orden
//! canónico y se conserva el menor de cada par. El resultado no depende del
//! orden de entrada.
use std::collections::BTreeSet;

use mech_domain::StereoReaction;

use crate::inchi::mirror_image;

/// Variantes conservadas y variantes redundantes (para auditoría). Ambas en
/// orden canónico.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnantiomerSplit {
    pub kept: Vec<StereoReaction>,
    pub removed: Vec<StereoReaction>,
}

/// Reacción especular: cada reactivo y producto reflejado.
pub fn mirror_reaction(reaction: &StereoReaction) -> StereoReaction {
    reaction.map_identifiers(mirror_image)
}

pub fn filter_enantiomer_reactions(variants: &[StereoReaction]) -> EnantiomerSplit {
    let ordered: BTreeSet<&StereoReaction> = variants.iter().collect();
    let mut kept_set: BTreeSet<&StereoReaction> = BTreeSet::new();
    let mut split = EnantiomerSplit::default();
    for variant in ordered {
        let mirror = mirror_reaction(variant);
        if mirror != *variant && kept_set.contains(&mirror) {
            split.removed.push(variant.clone());
        } else {
            kept_set.insert(variant);
            split.kept.push(variant.clone());
        }
    }
    split
}
