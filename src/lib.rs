//! mechstereo: expansión estereoquímica de mecanismos de reacción.
//!
//! Este crate actúa como fachada del workspace:
//! - `expand_mech_stereo` reemplaza cada reacción por sus variantes
//!   estereoquímicas distintas (sin duplicados enantioméricos) y fusiona el
//!   resultado en diccionarios nuevos.
//! - `remove_stereochemistry` hace el camino inverso.
//!
//! Los tipos de cada capa se re-exportan desde sus crates.

pub use mech_adapters as adapters;
pub use mech_core as expansion;
pub use mech_domain as domain;
pub use mech_engine as engine;
pub use mech_policies as policies;

pub use mech_core::{ExpansionConfig, ExpansionOutcome, ExpansionReport, StereoExpander, StripOutcome, WorkerPolicy};
pub use mech_domain::{Collider, Identifier, Mechanism, RateParams, ReactionKey, Species};
pub use mech_engine::{CatalogService, StructureCatalog, StructureService};

pub mod errors {
    pub use mech_adapters::AdapterError;
    pub use mech_core::CoreError;
    pub use mech_domain::DomainError;
    pub use mech_engine::EngineError;
}

/// Expande `mechanism` con `nprocs` workers y la política de fallos por
/// defecto. Las reacciones descartadas y los shards perdidos quedan en
/// `ExpansionOutcome::report`.
pub fn expand_mech_stereo<S: StructureService>(service: S,
                                               mechanism: &Mechanism,
                                               nprocs: usize)
                                               -> Result<ExpansionOutcome, errors::CoreError> {
    StereoExpander::new(service).with_config(ExpansionConfig::default().with_nprocs(nprocs))
                                .expand(mechanism)
}

/// Mecanismo sin estereoquímica más lo removido, para auditoría.
pub fn remove_stereochemistry<S: StructureService>(service: &S, mechanism: &Mechanism) -> StripOutcome {
    mech_core::remove_stereochemistry(service, mechanism)
}
