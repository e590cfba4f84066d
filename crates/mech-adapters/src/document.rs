//! Formato JSON de mecanismos.
//!
//! ```json
//! {
//!   "species": {"H2": {"identifier": "InChI=1S/H2/h1H"}},
//!   "reactions": [
//!     {"reactants": ["H", "O2"], "products": ["HO2"], "collider": "(+M)", "params": {"A": 1.0e12}}
//!   ]
//! }
//! ```
//! Las especies conservan el orden del archivo; `collider` y `params` son
//! opcionales.
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use mech_domain::{Collider, Identifier, Mechanism, RateParams, ReactionKey, Species};
use mech_engine::StructureCatalog;
use serde::{Deserialize, Serialize};

use crate::report::content_digest;
use crate::AdapterError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub identifier: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    #[serde(default)]
    pub collider: Collider,
    #[serde(default)]
    pub params: RateParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MechanismDocument {
    #[serde(default)]
    pub species: IndexMap<String, SpeciesRecord>,
    #[serde(default)]
    pub reactions: Vec<ReactionRecord>,
}

impl MechanismDocument {
    pub fn from_mechanism(mechanism: &Mechanism) -> Self {
        let species = mechanism.species
                               .iter()
                               .map(|(name, sp)| {
                                   (name.clone(),
                                    SpeciesRecord { identifier: sp.identifier().clone(),
                                                    formula: sp.formula().map(str::to_string),
                                                    metadata: sp.metadata().clone() })
                               })
                               .collect();
        let reactions = mechanism.reactions
                                 .iter()
                                 .map(|(key, params)| ReactionRecord { reactants: key.reactants.clone(),
                                                                       products: key.products.clone(),
                                                                       collider: key.collider.clone(),
                                                                       params: params.clone() })
                                 .collect();
        Self { species, reactions }
    }

    /// Valida nombres y duplicados. Las referencias a especies inexistentes
    /// se aceptan: el motor las reporta por reacción.
    pub fn into_mechanism(self) -> Result<Mechanism, AdapterError> {
        let mut mechanism = Mechanism::default();
        for (name, record) in self.species {
            let species = Species::new(&name, record.identifier)?.with_formula(record.formula)
                                                                 .with_metadata(record.metadata);
            mechanism.add_species(species)?;
        }
        for record in self.reactions {
            mechanism.add_reaction(ReactionKey::new(record.reactants, record.products, record.collider), record.params)?;
        }
        Ok(mechanism)
    }
}

pub fn parse_mechanism(text: &str) -> Result<Mechanism, AdapterError> {
    let doc: MechanismDocument = serde_json::from_str(text)?;
    doc.into_mechanism()
}

pub fn read_mechanism(path: impl AsRef<Path>) -> Result<Mechanism, AdapterError> {
    read_mechanism_with_digest(path).map(|(mechanism, _)| mechanism)
}

/// Lee el mecanismo y devuelve también el digest del texto leído, para
/// anotarlo en el reporte.
pub fn read_mechanism_with_digest(path: impl AsRef<Path>) -> Result<(Mechanism, String), AdapterError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mechanism = parse_mechanism(&text)?;
    debug!("{}: {} especies, {} reacciones",
           path.display(),
           mechanism.species.len(),
           mechanism.reactions.len());
    Ok((mechanism, content_digest(&text)))
}

pub fn mechanism_to_string(mechanism: &Mechanism) -> Result<String, AdapterError> {
    Ok(serde_json::to_string_pretty(&MechanismDocument::from_mechanism(mechanism))?)
}

pub fn write_mechanism(path: impl AsRef<Path>, mechanism: &Mechanism) -> Result<(), AdapterError> {
    fs::write(path, mechanism_to_string(mechanism)?)?;
    Ok(())
}

pub fn parse_catalog(text: &str) -> Result<StructureCatalog, AdapterError> { Ok(serde_json::from_str(text)?) }

pub fn read_catalog(path: impl AsRef<Path>) -> Result<StructureCatalog, AdapterError> {
    parse_catalog(&fs::read_to_string(path)?)
}
