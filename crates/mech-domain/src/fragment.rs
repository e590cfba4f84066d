//! Selección del fragmento compartido entre dos conjuntos de especies.
//!
//! Lo usan las cadenas de colaboradores que cruzan los fragmentos de un
//! canal de disociación con un conjunto de especies candidatas (p. ej.
//! especies "calientes"). La ausencia de solapamiento es un error duro.
use std::fmt;

use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFragment<T> {
    /// Primer fragmento (en orden de `fragments`) presente en los candidatos.
    pub shared: T,
    /// Resto de fragmentos, en su orden original.
    pub partners: Vec<T>,
}

pub fn select_shared_fragment<T>(fragments: &[T], candidates: &[T]) -> Result<SharedFragment<T>, DomainError>
    where T: PartialEq + Clone + fmt::Display
{
    let Some(pos) = fragments.iter().position(|f| candidates.contains(f)) else {
        return Err(DomainError::NoFragmentOverlap { fragments: join(fragments), candidates: join(candidates) });
    };
    let shared = fragments[pos].clone();
    let partners = fragments.iter()
                            .enumerate()
                            .filter(|(i, _)| *i != pos)
                            .map(|(_, f)| f.clone())
                            .collect();
    Ok(SharedFragment { shared, partners })
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
