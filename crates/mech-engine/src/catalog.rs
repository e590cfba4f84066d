//! Servicio de estructura respaldado por un catálogo precalculado.
//!
//! Cada entrada del catálogo describe una reacción libre de estereo (clave
//! canónica: lados ordenados en forma estándar sin estereo), su clase y la
//! lista de variantes estereoquímicas con los identificadores de cada
//! fragmento. Un fragmento con paridades sin asignar (`?`) no tiene
//! identificador canónico y hace fallar sólo a su variante.
use std::collections::HashMap;

use log::debug;
use mech_domain::{Identifier, Side};
use serde::{Deserialize, Serialize};

use crate::inchi::{has_undefined_stereo, stereo_free};
use crate::service::{ReactionSite, StructureService};
use crate::EngineError;

/// Etiqueta usada para reacciones desconocidas que pasan sin expandir.
pub const PASSTHROUGH_CLASS: &str = "unclassified";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureCatalog {
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub reactants: Vec<Identifier>,
    pub products: Vec<Identifier>,
    #[serde(default = "default_class")]
    pub class: String,
    #[serde(default)]
    pub variants: Vec<CatalogVariant>,
}

fn default_class() -> String { PASSTHROUGH_CLASS.to_string() }

/// Una asignación estereoquímica: fragmentos de reactivos y de productos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVariant {
    pub reactants: Vec<Identifier>,
    pub products: Vec<Identifier>,
}

/// Sitio reactivo del catálogo.
#[derive(Debug, Clone)]
pub struct CatalogSite {
    class: String,
    variants: Vec<CatalogVariant>,
}

impl ReactionSite for CatalogSite {
    fn class_label(&self) -> &str { &self.class }
}

type CatalogKey = (Vec<Identifier>, Vec<Identifier>);

fn catalog_key(reactants: &[Identifier], products: &[Identifier]) -> CatalogKey {
    let mut r: Vec<Identifier> = reactants.iter().map(stereo_free).collect();
    let mut p: Vec<Identifier> = products.iter().map(stereo_free).collect();
    r.sort();
    p.sort();
    (r, p)
}

pub struct CatalogService {
    index: HashMap<CatalogKey, CatalogSite>,
    passthrough_unknown: bool,
}

impl CatalogService {
    /// Indexa el catálogo. Dos entradas para la misma reacción libre de
    /// estereo son un error.
    pub fn new(catalog: StructureCatalog) -> Result<Self, EngineError> {
        let mut index = HashMap::with_capacity(catalog.entries.len());
        for entry in catalog.entries {
            let key = catalog_key(&entry.reactants, &entry.products);
            let site = CatalogSite { class: entry.class, variants: entry.variants };
            if index.insert(key, site).is_some() {
                return Err(EngineError::Catalog(format!("Entrada duplicada: {}={}",
                                                        join(&entry.reactants),
                                                        join(&entry.products))));
            }
        }
        debug!("catálogo de estructuras con {} entradas", index.len());
        Ok(Self { index, passthrough_unknown: true })
    }

    /// Con `false`, una reacción ausente del catálogo es `Unclassified`; con
    /// `true` (por defecto) se trata como reacción sin estereocentros.
    pub fn with_passthrough(mut self, passthrough_unknown: bool) -> Self {
        self.passthrough_unknown = passthrough_unknown;
        self
    }

    pub fn len(&self) -> usize { self.index.len() }
    pub fn is_empty(&self) -> bool { self.index.is_empty() }
}

impl StructureService for CatalogService {
    type Site = CatalogSite;
    type StereoSite = CatalogVariant;
    type Fragment = Identifier;

    fn classify_and_build_reaction(&self,
                                   reactants: &[Identifier],
                                   products: &[Identifier])
                                   -> Result<Vec<CatalogSite>, EngineError> {
        if let Some(site) = self.index.get(&catalog_key(reactants, products)) {
            return Ok(vec![site.clone()]);
        }
        if self.passthrough_unknown {
            let variant = CatalogVariant { reactants: reactants.to_vec(), products: products.to_vec() };
            return Ok(vec![CatalogSite { class: PASSTHROUGH_CLASS.to_string(), variants: vec![variant] }]);
        }
        Err(EngineError::Unclassified(format!("{}={}", join(reactants), join(products))))
    }

    fn enumerate_stereo_variants(&self, site: &CatalogSite) -> Result<Vec<CatalogVariant>, EngineError> {
        Ok(site.variants.clone())
    }

    fn fragment_graphs(&self, site: &CatalogVariant, side: Side) -> Vec<Identifier> {
        match side {
            Side::Reactants => site.reactants.clone(),
            Side::Products => site.products.clone(),
        }
    }

    fn stereo_identifier(&self, fragment: &Identifier) -> Result<Identifier, EngineError> {
        if has_undefined_stereo(fragment) {
            return Err(EngineError::UndefinedStereo(fragment.to_string()));
        }
        Ok(fragment.clone())
    }
}

fn join(ids: &[Identifier]) -> String {
    ids.iter().map(Identifier::as_str).collect::<Vec<_>>().join("+")
}
