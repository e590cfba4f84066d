//! Claves de reacción y variantes estereoquímicas.
//!
//! Una reacción se identifica por la tripleta ordenada
//! `(reactivos, productos, colisionador)`. Con `T = String` la reacción está
//! escrita en nombres del mecanismo; con `T = Identifier` está escrita en
//! identificadores canónicos. El colisionador (tercer cuerpo) nunca se traduce:
//! es un token opaco que se separa antes del trabajo estereoquímico y se
//! reinserta sin cambios.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Identifier;

/// Tercer cuerpo de una reacción (`(+M)`, `+M`, `(+N2)`...) o ninguno.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Collider {
    #[default]
    None,
    Token(String),
}

impl Collider {
    pub fn token(&self) -> Option<&str> {
        match self {
            Collider::None => None,
            Collider::Token(t) => Some(t),
        }
    }
}

impl From<Option<String>> for Collider {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(t) if !t.trim().is_empty() => Collider::Token(t),
            _ => Collider::None,
        }
    }
}

impl From<Collider> for Option<String> {
    fn from(value: Collider) -> Self {
        match value {
            Collider::None => None,
            Collider::Token(t) => Some(t),
        }
    }
}

/// Lado de una reacción.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side { Reactants, Products }

/// Clave de reacción `(reactivos, productos, colisionador)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReactionKey<T> {
    pub reactants: Vec<T>,
    pub products: Vec<T>,
    #[serde(default)]
    pub collider: Collider,
}

impl<T> ReactionKey<T> {
    pub fn new(reactants: Vec<T>, products: Vec<T>, collider: Collider) -> Self {
        Self { reactants, products, collider }
    }

    /// Reactivos seguidos de productos (el colisionador no participa).
    pub fn participants(&self) -> impl Iterator<Item = &T> {
        self.reactants.iter().chain(self.products.iter())
    }

    /// Traduce cada participante; el primer error corta la traducción. El
    /// colisionador se copia tal cual.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<ReactionKey<U>, E>
        where F: FnMut(&T) -> Result<U, E>
    {
        let reactants = self.reactants.iter().map(&mut f).collect::<Result<Vec<U>, E>>()?;
        let products = self.products.iter().map(&mut f).collect::<Result<Vec<U>, E>>()?;
        Ok(ReactionKey { reactants, products, collider: self.collider.clone() })
    }
}

impl<T: Ord + Clone> ReactionKey<T> {
    /// Forma canónica: cada lado ordenado. El orden dentro de un lado no es
    /// químicamente significativo.
    pub fn canonical(&self) -> Self {
        let mut reactants = self.reactants.clone();
        let mut products = self.products.clone();
        reactants.sort();
        products.sort();
        ReactionKey { reactants, products, collider: self.collider.clone() }
    }
}

impl<T: fmt::Display> fmt::Display for ReactionKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let third = self.collider.token().unwrap_or("");
        write!(f, "{}{third}={}{third}", join(&self.reactants), join(&self.products))
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join("+")
}

/// Variante estereoquímica de una reacción, sin colisionador. Cada lado se
/// guarda ordenado, de modo que dos variantes estructuralmente iguales son
/// iguales como valores (y como claves de `BTreeSet`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StereoReaction {
    reactants: Vec<Identifier>,
    products: Vec<Identifier>,
}

impl StereoReaction {
    pub fn new(mut reactants: Vec<Identifier>, mut products: Vec<Identifier>) -> Self {
        reactants.sort();
        products.sort();
        Self { reactants, products }
    }

    pub fn reactants(&self) -> &[Identifier] { &self.reactants }
    pub fn products(&self) -> &[Identifier] { &self.products }

    pub fn side(&self, side: Side) -> &[Identifier] {
        match side {
            Side::Reactants => &self.reactants,
            Side::Products => &self.products,
        }
    }

    /// Aplica `f` a todos los identificadores (p. ej. imagen especular).
    pub fn map_identifiers<F>(&self, mut f: F) -> StereoReaction
        where F: FnMut(&Identifier) -> Identifier
    {
        StereoReaction::new(self.reactants.iter().map(&mut f).collect(),
                            self.products.iter().map(&mut f).collect())
    }

    /// Reinserta el colisionador original.
    pub fn with_collider(&self, collider: &Collider) -> ReactionKey<Identifier> {
        ReactionKey::new(self.reactants.clone(), self.products.clone(), collider.clone())
    }
}

impl fmt::Display for StereoReaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", join(&self.reactants), join(&self.products))
    }
}
