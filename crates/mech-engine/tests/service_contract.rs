//! Contrato de `StructureService` con una implementación mínima propia: los
//! métodos por defecto (filtro de enantiómeros, forma sin estereo) deben
//! funcionar sin el catálogo.

use mech_domain::{Identifier, Side, StereoReaction};
use mech_engine::{EngineError, ReactionSite, StructureService};

const EPOXIDE: &str = "InChI=1S/C3H6O/c1-3-2-4-3/h3H,2H2,1H3";

fn id(s: &str) -> Identifier { Identifier::new(s).unwrap() }

struct Site(&'static str);

impl ReactionSite for Site {
    fn class_label(&self) -> &str { self.0 }
}

/// Devuelve dos sitios y, para el primero, las dos configuraciones del
/// epóxido como productos.
struct TwoSites;

impl StructureService for TwoSites {
    type Site = Site;
    type StereoSite = (Vec<Identifier>, Vec<Identifier>);
    type Fragment = Identifier;

    fn classify_and_build_reaction(&self, _r: &[Identifier], _p: &[Identifier]) -> Result<Vec<Site>, EngineError> {
        Ok(vec![Site("ring closure"), Site("elimination")])
    }

    fn enumerate_stereo_variants(&self, _site: &Site) -> Result<Vec<Self::StereoSite>, EngineError> {
        Ok(["m0", "m1"].iter()
                       .map(|m| (vec![], vec![id(&format!("{EPOXIDE}/t3-/{m}/s1"))]))
                       .collect())
    }

    fn fragment_graphs(&self, site: &Self::StereoSite, side: Side) -> Vec<Identifier> {
        match side {
            Side::Reactants => site.0.clone(),
            Side::Products => site.1.clone(),
        }
    }

    fn stereo_identifier(&self, fragment: &Identifier) -> Result<Identifier, EngineError> { Ok(fragment.clone()) }
}

#[test]
fn default_filter_keeps_one_of_mirror_pair() {
    let svc = TwoSites;
    let sites = svc.classify_and_build_reaction(&[], &[]).unwrap();
    assert_eq!(sites[0].class_label(), "ring closure");
    let variants: Vec<StereoReaction> =
        svc.enumerate_stereo_variants(&sites[0])
           .unwrap()
           .iter()
           .map(|v| StereoReaction::new(svc.fragment_graphs(v, Side::Reactants), svc.fragment_graphs(v, Side::Products)))
           .collect();
    let split = svc.enantiomer_equivalence_filter(&variants);
    assert_eq!(split.kept.len(), 1);
    assert_eq!(split.removed.len(), 1);
    assert!(split.kept[0].products()[0].as_str().contains("/m0/"));
}

#[test]
fn default_stereo_free_identifier() {
    let svc = TwoSites;
    assert_eq!(svc.stereo_free_identifier(&id(&format!("{EPOXIDE}/t3-/m1/s1"))), id(EPOXIDE));
}
