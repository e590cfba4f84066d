//! Contrato del servicio de estructura molecular.
//!
//! El motor de expansión no conoce la forma interna de los objetos de
//! reacción ni de los grafos de fragmentos: los maneja a través de los tipos
//! asociados de `StructureService`. Las implementaciones deben ser puras
//! respecto a sus entradas (se invocan en paralelo desde varios workers).
use std::fmt;

use mech_domain::{Identifier, Side, StereoReaction};

use crate::enantiomer::{filter_enantiomer_reactions, EnantiomerSplit};
use crate::{inchi, EngineError};

/// Sitio reactivo clasificado. La etiqueta sólo se usa para reportes.
pub trait ReactionSite {
    fn class_label(&self) -> &str;
}

pub trait StructureService: Send + Sync {
    type Site: ReactionSite;
    type StereoSite;
    type Fragment: fmt::Debug;

    /// Clasifica la reacción y construye los sitios candidatos. El motor usa
    /// el primero.
    fn classify_and_build_reaction(&self,
                                   reactants: &[Identifier],
                                   products: &[Identifier])
                                   -> Result<Vec<Self::Site>, EngineError>;

    /// Todas las asignaciones estereoquímicas válidas del sitio.
    fn enumerate_stereo_variants(&self, site: &Self::Site) -> Result<Vec<Self::StereoSite>, EngineError>;

    /// Componentes conexas de un lado de la variante.
    fn fragment_graphs(&self, site: &Self::StereoSite, side: Side) -> Vec<Self::Fragment>;

    /// Identificador con estereo resuelto de un fragmento. Falla si el
    /// fragmento tiene un estereocentro mal definido.
    fn stereo_identifier(&self, fragment: &Self::Fragment) -> Result<Identifier, EngineError>;

    /// Separa las variantes redundantes por enantiomería.
    fn enantiomer_equivalence_filter(&self, variants: &[StereoReaction]) -> EnantiomerSplit {
        filter_enantiomer_reactions(variants)
    }

    /// Identificador sin descriptores estereoquímicos.
    fn stereo_free_identifier(&self, identifier: &Identifier) -> Identifier {
        inchi::stereo_free(identifier)
    }
}
