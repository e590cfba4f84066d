//! Enumeración de variantes estereoquímicas de una reacción.
//!
//! La reacción (sin colisionador) se clasifica con el servicio de estructura,
//! se enumeran todas las asignaciones estereoquímicas válidas de su sitio
//! reactivo y cada fragmento de cada lado recibe su identificador con estereo
//! resuelto. Una variante con algún fragmento sin identificador se descarta
//! sola; las demás siguen.
use std::collections::BTreeSet;

use mech_domain::{Identifier, Side, StereoReaction};
use mech_engine::{EngineError, ReactionSite, StructureService};
use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedReaction;

/// Variante descartada: posición en la enumeración del servicio y causa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantFailure {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Clase de reacción del primer sitio candidato (sólo informativa).
    pub class: String,
    /// Variantes distintas en orden canónico.
    pub variants: BTreeSet<StereoReaction>,
    pub discarded: Vec<VariantFailure>,
}

pub fn enumerate_variants<S: StructureService>(service: &S, reaction: &NormalizedReaction) -> Result<Enumeration, EngineError> {
    let sites = service.classify_and_build_reaction(&reaction.reactants, &reaction.products)?;
    let Some(site) = sites.into_iter().next() else {
        return Err(EngineError::Unclassified(reaction.to_stereo_reaction().to_string()));
    };
    let class = site.class_label().to_string();

    let mut variants = BTreeSet::new();
    let mut discarded = Vec::new();
    for (index, stereo_site) in service.enumerate_stereo_variants(&site)?.iter().enumerate() {
        let resolved = side_identifiers(service, stereo_site, Side::Reactants)
            .and_then(|r| side_identifiers(service, stereo_site, Side::Products).map(|p| (r, p)));
        match resolved {
            Ok((reactants, products)) => {
                variants.insert(StereoReaction::new(reactants, products));
            }
            Err(err) => discarded.push(VariantFailure { index, reason: err.to_string() }),
        }
    }
    Ok(Enumeration { class, variants, discarded })
}

fn side_identifiers<S: StructureService>(service: &S, site: &S::StereoSite, side: Side) -> Result<Vec<Identifier>, EngineError> {
    service.fragment_graphs(site, side)
           .iter()
           .map(|fragment| service.stereo_identifier(fragment))
           .collect()
}
