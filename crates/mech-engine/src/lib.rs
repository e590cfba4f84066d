use thiserror::Error;
pub mod catalog;
pub mod enantiomer;
pub mod inchi;
pub mod service;
pub use catalog::{CatalogEntry, CatalogService, CatalogVariant, StructureCatalog};
pub use enantiomer::{filter_enantiomer_reactions, mirror_reaction, EnantiomerSplit};
pub use service::{ReactionSite, StructureService};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Reacción no clasificable: {0}")]
    Unclassified(String),
    #[error("Estereoquímica indefinida en fragmento: {0}")]
    UndefinedStereo(String),
    #[error("Error de catálogo: {0}")]
    Catalog(String),
}
