//! Normalización de reacciones: nombres → identificadores, colisionador
//! separado.
use mech_domain::{Collider, DomainError, Identifier, ReactionKey, StereoReaction};

use crate::resolver::IdentifierResolver;

/// Reacción escrita en identificadores, con el colisionador aparte. El
/// colisionador nunca entra en la enumeración estereoquímica.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedReaction {
    pub reactants: Vec<Identifier>,
    pub products: Vec<Identifier>,
    pub collider: Collider,
}

impl NormalizedReaction {
    /// Clave completa en identificadores (colisionador incluido).
    pub fn to_key(&self) -> ReactionKey<Identifier> {
        ReactionKey::new(self.reactants.clone(), self.products.clone(), self.collider.clone())
    }

    /// Forma sin colisionador, como variante.
    pub fn to_stereo_reaction(&self) -> StereoReaction {
        StereoReaction::new(self.reactants.clone(), self.products.clone())
    }
}

/// Falla cerrado: cualquier reactivo o producto sin resolver invalida la
/// reacción completa.
pub fn normalize(reaction: &ReactionKey<String>, resolver: &IdentifierResolver) -> Result<NormalizedReaction, DomainError> {
    let key = reaction.try_map(|name| {
                                 resolver.resolve(name)
                                         .cloned()
                                         .ok_or_else(|| DomainError::UnresolvedParticipant { reaction: reaction.to_string(),
                                                                                            name: name.clone() })
                             })?;
    let ReactionKey { reactants, products, collider } = key;
    Ok(NormalizedReaction { reactants, products, collider })
}
