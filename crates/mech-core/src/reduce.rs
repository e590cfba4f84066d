//! Reducción de pares enantioméricos y reinserción del colisionador.
use std::collections::BTreeSet;

use mech_domain::{Collider, Identifier, ReactionKey, StereoReaction};
use mech_engine::{EnantiomerSplit, StructureService};

/// Conserva un representante por par especular. Las variantes llegan en
/// orden canónico (`BTreeSet`), así el representante es el mismo en cada
/// corrida.
pub fn reduce_enantiomers<S: StructureService>(service: &S, variants: &BTreeSet<StereoReaction>) -> EnantiomerSplit {
    let ordered: Vec<StereoReaction> = variants.iter().cloned().collect();
    service.enantiomer_equivalence_filter(&ordered)
}

/// El mismo colisionador para todas las variantes, conservadas o no.
pub fn reattach(variants: &[StereoReaction], collider: &Collider) -> Vec<ReactionKey<Identifier>> {
    variants.iter().map(|v| v.with_collider(collider)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_engine::{CatalogService, StructureCatalog};

    fn id(s: &str) -> Identifier { Identifier::new(s).unwrap() }

    const PROPENE_OXIDE_S: &str = "InChI=1S/C3H6O/c1-3-2-4-3/h3H,2H2,1H3/t3-/m0/s1";
    const PROPENE_OXIDE_R: &str = "InChI=1S/C3H6O/c1-3-2-4-3/h3H,2H2,1H3/t3-/m1/s1";
    const OH: &str = "InChI=1S/HO/h1H";

    #[test]
    fn test_reduce_and_reattach() {
        let svc = CatalogService::new(StructureCatalog::default()).unwrap();
        let variants: BTreeSet<StereoReaction> = [StereoReaction::new(vec![id(PROPENE_OXIDE_R), id(OH)], vec![id(OH)]),
                                                  StereoReaction::new(vec![id(PROPENE_OXIDE_S), id(OH)], vec![id(OH)])].into_iter()
                                                                                                                     .collect();
        let split = reduce_enantiomers(&svc, &variants);
        assert_eq!(split.kept.len(), 1);
        assert_eq!(split.removed.len(), 1);

        let collider = Collider::Token("(+M)".into());
        let kept = reattach(&split.kept, &collider);
        let removed = reattach(&split.removed, &collider);
        assert!(kept.iter().chain(removed.iter()).all(|k| k.collider == collider));
    }
}
