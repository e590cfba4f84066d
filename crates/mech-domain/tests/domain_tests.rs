use mech_domain::{select_shared_fragment, Collider, DomainError, Identifier, Mechanism, RateParams, ReactionKey, Species};
use serde_json::json;

fn id(s: &str) -> Identifier { Identifier::new(s).unwrap() }

#[test]
fn test_species_json_keeps_identifier_and_metadata() {
    let sp = Species::new("BUTOH_S", id("InChI=1S/C4H10O/c1-3-4(2)5/h4-5H,3H2,1-2H3/t4-/m0/s1")).unwrap()
                                                                                             .with_metadata(json!({"source": "test"}));
    let v = serde_json::to_value(&sp).unwrap();
    assert_eq!(v["identifier"], "InChI=1S/C4H10O/c1-3-4(2)5/h4-5H,3H2,1-2H3/t4-/m0/s1");
    assert_eq!(v["formula"], "C4H10O");
    let back: Species = serde_json::from_value(v).unwrap();
    assert_eq!(back, sp);
}

#[test]
fn test_reaction_key_json_with_and_without_collider() {
    let with: ReactionKey<String> =
        serde_json::from_value(json!({"reactants": ["H", "O2"], "products": ["HO2"], "collider": "(+M)"})).unwrap();
    assert_eq!(with.collider.token(), Some("(+M)"));
    let without: ReactionKey<String> = serde_json::from_value(json!({"reactants": ["H", "O2"], "products": ["HO2"]})).unwrap();
    assert_eq!(without.collider, Collider::None);
    assert_ne!(with, without);
}

#[test]
fn test_mechanism_preserves_insertion_order() {
    let mut mech = Mechanism::default();
    for name in ["C", "A", "B"] {
        mech.add_species(Species::new(name, id(&format!("id_{name}"))).unwrap()).unwrap();
    }
    mech.add_reaction(ReactionKey::new(vec!["C".into()], vec!["A".into()], Collider::None), RateParams::unset())
        .unwrap();
    assert_eq!(mech.species.keys().map(String::as_str).collect::<Vec<_>>(), vec!["C", "A", "B"]);
    assert_eq!(mech.identifiers().map(Identifier::as_str).collect::<Vec<_>>(), vec!["id_C", "id_A", "id_B"]);
    assert!(!mech.is_empty());
}

#[test]
fn test_shared_fragment_between_channel_and_hot_species() {
    let fragments = vec![id("InChI=1S/CH3/h1H3"), id("InChI=1S/C2H4O/c1-2-3/h2H,1H3")];
    let hot = vec![id("InChI=1S/C2H4O/c1-2-3/h2H,1H3")];
    let sel = select_shared_fragment(&fragments, &hot).unwrap();
    assert_eq!(sel.shared, fragments[1]);
    assert_eq!(sel.partners, vec![fragments[0].clone()]);
}

#[test]
fn test_no_fragment_overlap_is_hard_error() {
    let err = select_shared_fragment(&[id("InChI=1S/CH3/h1H3")], &[id("InChI=1S/HO/h1H")]).unwrap_err();
    assert!(matches!(err, DomainError::NoFragmentOverlap { .. }));
}
