//! mech-domain: tipos del mecanismo (identificadores, especies, claves de
//! reacción con colisionador, diccionarios) y sus errores de validación.
//!
//! `select_shared_fragment` no lo usa la expansión: es una utilidad para las
//! cadenas de colaboradores que cruzan los fragmentos de un canal con otro
//! conjunto de especies, donde la falta de solapamiento es un error duro
//! (`DomainError::NoFragmentOverlap`).
pub mod error;
pub mod fragment;
pub mod identifier;
pub mod mechanism;
pub mod reaction;
pub mod species;
pub use error::DomainError;
pub use fragment::{select_shared_fragment, SharedFragment};
pub use identifier::Identifier;
pub use mechanism::{Mechanism, RateParams, ReactionDict, SpeciesDict};
pub use reaction::{Collider, ReactionKey, Side, StereoReaction};
pub use species::Species;
