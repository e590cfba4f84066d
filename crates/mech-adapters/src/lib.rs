//! mech-adapters: documentos JSON de entrada/salida.
//!
//! Este crate provee:
//! - `MechanismDocument`: mecanismo como JSON (especies por nombre, lista de
//!   reacciones con colisionador y parámetros opacos).
//! - Lectura del catálogo de estructuras que respalda a `CatalogService`.
//! - `ReportDocument`: resumen auditable de una expansión o de un strip.
//!
//! El motor no conoce ningún formato de archivo; todo lo que toca disco vive
//! aquí.

pub mod document;
pub mod report;

use mech_domain::DomainError;
use thiserror::Error;

pub use document::{mechanism_to_string, parse_catalog, parse_mechanism, read_catalog, read_mechanism,
                   read_mechanism_with_digest, write_mechanism, MechanismDocument, ReactionRecord, SpeciesRecord};
pub use report::{content_digest, write_report, ExpansionSummary, ReportDocument, StripSummary};

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
