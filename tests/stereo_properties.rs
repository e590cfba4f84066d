//! Propiedades de punta a punta: expansión, reducción de enantiómeros,
//! colisionador, partición y strip.

use std::collections::BTreeSet;

use mechstereo::expansion::{enumerate_variants, mechanism_fingerprint, merge_reactions, normalize, reattach,
                            reduce_enantiomers, IdentifierResolver};
use mechstereo::policies::FormulaNamePolicy;
use mechstereo::{expand_mech_stereo, remove_stereochemistry, CatalogService, Collider, Identifier, Mechanism,
                 RateParams, ReactionKey, Species, StructureCatalog};
use proptest::prelude::*;

// A: éter dietílico; B: 2-butanol (un estereocentro)
const ID_A: &str = "InChI=1S/C4H10O/c1-3-5-4-2/h3-4H2,1-2H3";
const ID_B: &str = "InChI=1S/C4H10O/c1-3-4(2)5/h4-5H,3H2,1-2H3";
const ID_B1: &str = "InChI=1S/C4H10O/c1-3-4(2)5/h4-5H,3H2,1-2H3/t4-/m0/s1";
const ID_B2: &str = "InChI=1S/C4H10O/c1-3-4(2)5/h4-5H,3H2,1-2H3/t4-/m1/s1";
const H: &str = "InChI=1S/H";
const O2: &str = "InChI=1S/O2/c1-2";
const HO2: &str = "InChI=1S/HO2/c1-2/h1H";

fn id(s: &str) -> Identifier { Identifier::new(s).unwrap() }

fn key(r: &[&str], p: &[&str], collider: Collider) -> ReactionKey<String> {
    ReactionKey::new(r.iter().map(|s| s.to_string()).collect(), p.iter().map(|s| s.to_string()).collect(), collider)
}

fn service() -> CatalogService {
    let catalog: StructureCatalog = serde_json::from_value(serde_json::json!({
        "entries": [{
            "reactants": [ID_A], "products": [ID_B], "class": "isomerization",
            "variants": [
                {"reactants": [ID_A], "products": [ID_B1]},
                {"reactants": [ID_A], "products": [ID_B2]}
            ]
        }]
    })).unwrap();
    CatalogService::new(catalog).unwrap()
}

fn scenario(collider: Collider) -> Mechanism {
    let mut m = Mechanism::default();
    m.add_species(Species::new("A", id(ID_A)).unwrap()).unwrap();
    m.add_species(Species::new("B_stereofree", id(ID_B)).unwrap()).unwrap();
    m.add_reaction(key(&["A"], &["B_stereofree"], collider), RateParams::unset()).unwrap();
    m
}

#[test]
fn concrete_scenario_a_to_b() {
    let mech = scenario(Collider::None);
    let svc = service();
    let resolver = IdentifierResolver::from_species(&mech.species);
    let (source, _) = mech.reactions.get_index(0).unwrap();

    let normalized = normalize(source, &resolver).unwrap();
    let enumeration = enumerate_variants(&svc, &normalized).unwrap();
    assert_eq!(enumeration.variants.len(), 2);

    let split = reduce_enantiomers(&svc, &enumeration.variants);
    assert_eq!((split.kept.len(), split.removed.len()), (1, 1));

    let kept = reattach(&split.kept, &normalized.collider);
    let removed = reattach(&split.removed, &normalized.collider);
    assert!(kept.iter().chain(&removed).all(|k| k.collider == Collider::None));

    let merged = merge_reactions(&kept, &mech, &FormulaNamePolicy::new()).unwrap();
    assert_eq!(merged.reactions.len(), 1);
    assert_eq!(merged.species.len(), 2);
    assert!(merged.species.contains_key("A"));
    let b = merged.species.values().find(|sp| sp.name() != "A").unwrap();
    assert!(b.identifier() == &id(ID_B1) || b.identifier() == &id(ID_B2));
}

#[test]
fn collider_is_reattached_to_kept_and_removed() {
    let outcome = expand_mech_stereo(service(), &scenario(Collider::Token("(+M)".into())), 1).unwrap();
    let report = &outcome.report.reactions[0];
    assert_eq!(report.removed.len(), 1);
    assert!(report.kept.iter().chain(&report.removed).all(|k| k.collider.token() == Some("(+M)")));
    let (out_key, _) = outcome.mechanism.reactions.get_index(0).unwrap();
    assert_eq!(out_key.collider, Collider::Token("(+M)".into()));
}

#[test]
fn stripping_stereo_free_mechanism_changes_nothing() {
    let mech = scenario(Collider::None);
    let out = remove_stereochemistry(&service(), &mech);
    assert_eq!(out.mechanism, mech);
    assert!(out.removed_species.is_empty());
    assert!(out.removed_reactions.is_empty());
}

#[test]
fn expand_then_strip_returns_the_original_reaction() {
    let mech = scenario(Collider::None);
    let expanded = expand_mech_stereo(service(), &mech, 2).unwrap();
    assert_ne!(mechanism_fingerprint(&expanded.mechanism), mechanism_fingerprint(&mech));
    let stripped = remove_stereochemistry(&service(), &expanded.mechanism);
    assert_eq!(mechanism_fingerprint(&stripped.mechanism), mechanism_fingerprint(&mech));
}

#[test]
fn one_bad_reaction_among_valid_ones() {
    let mut mech = scenario(Collider::None);
    for (name, s) in [("H", H), ("O2", O2), ("HO2", HO2)] {
        mech.add_species(Species::new(name, id(s)).unwrap()).unwrap();
    }
    mech.add_reaction(key(&["H", "O2"], &["HO2"], Collider::Token("(+M)".into())), RateParams::unset()).unwrap();
    mech.add_reaction(key(&["HO2"], &["H", "O2"], Collider::None), RateParams::unset()).unwrap();
    mech.add_reaction(key(&["H", "O3"], &["HO2"], Collider::None), RateParams::unset()).unwrap();

    let outcome = expand_mech_stereo(service(), &mech, 4).unwrap();
    assert_eq!(outcome.report.expanded_count(), 3);
    let dropped: Vec<_> = outcome.report.dropped().map(|r| r.source.to_string()).collect();
    assert_eq!(dropped, vec!["H+O3=HO2".to_string()]);
    assert!(outcome.report.is_complete());
}

fn reaction_pool() -> Vec<ReactionKey<String>> {
    vec![key(&["A"], &["B_stereofree"], Collider::None),
         key(&["H", "O2"], &["HO2"], Collider::Token("(+M)".into())),
         key(&["HO2"], &["H", "O2"], Collider::None),
         key(&["A"], &["B_stereofree"], Collider::Token("+M".into())),
         key(&["B_stereofree"], &["A"], Collider::None)]
}

fn pool_mechanism(indices: &[usize]) -> Mechanism {
    let mut mech = Mechanism::default();
    for (name, s) in [("A", ID_A), ("B_stereofree", ID_B), ("H", H), ("O2", O2), ("HO2", HO2)] {
        mech.add_species(Species::new(name, id(s)).unwrap()).unwrap();
    }
    let pool = reaction_pool();
    for &i in indices {
        mech.add_reaction(pool[i].clone(), RateParams::unset()).unwrap();
    }
    mech
}

proptest! {
    #[test]
    fn worker_count_does_not_change_output(indices in proptest::sample::subsequence((0..5).collect::<Vec<usize>>(), 1..=5),
                                           nprocs in 2usize..6) {
        let mech = pool_mechanism(&indices);
        let one = expand_mech_stereo(service(), &mech, 1).unwrap();
        let many = expand_mech_stereo(service(), &mech, nprocs).unwrap();
        let ids = |m: &Mechanism| m.identifiers().cloned().collect::<BTreeSet<_>>();
        prop_assert_eq!(ids(&one.mechanism), ids(&many.mechanism));
        prop_assert_eq!(mechanism_fingerprint(&one.mechanism), mechanism_fingerprint(&many.mechanism));
        prop_assert_eq!(one.mechanism.species.keys().collect::<Vec<_>>(), many.mechanism.species.keys().collect::<Vec<_>>());
    }
}
