//! Reportes estructurados de la expansión.
//!
//! Cada reacción de origen produce un `ReactionReport`; cada shard devuelve
//! sus reportes por el canal de resultados (en lugar de texto suelto en la
//! salida estándar). El `ExpansionReport` agrega todo y registra los shards
//! perdidos con las reacciones que no se procesaron.
use std::fmt;

use chrono::{DateTime, Utc};
use mech_domain::{Identifier, ReactionKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enumerate::VariantFailure;
use crate::parallel::ShardId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReactionStatus {
    Expanded,
    /// La reacción completa se descartó (participante sin resolver, reacción
    /// no clasificable o todas sus variantes descartadas). El lote continúa.
    Dropped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionReport {
    pub source: ReactionKey<String>,
    pub status: ReactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub kept: Vec<ReactionKey<Identifier>>,
    pub removed: Vec<ReactionKey<Identifier>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discarded: Vec<VariantFailure>,
}

impl ReactionReport {
    pub fn dropped(source: ReactionKey<String>, reason: String) -> Self {
        Self { source,
               status: ReactionStatus::Dropped { reason },
               class: None,
               kept: Vec::new(),
               removed: Vec::new(),
               discarded: Vec::new() }
    }

    pub fn is_expanded(&self) -> bool { self.status == ReactionStatus::Expanded }
}

impl fmt::Display for ReactionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expandiendo estereo de la reacción: {}", self.source)?;
        if let ReactionStatus::Dropped { reason } = &self.status {
            return writeln!(f, " - Reacción descartada: {reason}");
        }
        if let Some(class) = &self.class {
            writeln!(f, " - Reacción identificada como {class}.")?;
        }
        for failure in &self.discarded {
            writeln!(f, " - Variante {} descartada: {}", failure.index, failure.reason)?;
        }
        writeln!(f, " - Versiones estereoquímicas de la reacción: {}", self.source)?;
        for rxn in &self.kept {
            writeln!(f, "    {rxn}")?;
        }
        if !self.removed.is_empty() {
            writeln!(f, " - Reacciones enantioméricas redundantes excluidas de la lista final")?;
            for rxn in &self.removed {
                writeln!(f, "    {rxn}")?;
            }
        }
        Ok(())
    }
}

/// Resultado de un shard: su identidad y un reporte por reacción, en el orden
/// del shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardReport {
    pub shard: ShardId,
    pub reactions: Vec<ReactionReport>,
}

impl ShardReport {
    /// Variantes conservadas acumuladas por el shard.
    pub fn variants(&self) -> impl Iterator<Item = &ReactionKey<Identifier>> {
        self.reactions.iter().flat_map(|r| r.kept.iter())
    }
}

/// Shard que terminó de forma anormal y las reacciones que no se procesaron.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LostShard {
    pub shard: ShardId,
    pub message: String,
    pub reactions: Vec<ReactionKey<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub nprocs: usize,
    pub reactions: Vec<ReactionReport>,
    pub lost: Vec<LostShard>,
}

impl ExpansionReport {
    pub fn new(nprocs: usize) -> Self {
        Self { run_id: Uuid::new_v4(),
               started_at: Utc::now(),
               nprocs,
               reactions: Vec::new(),
               lost: Vec::new() }
    }

    pub fn expanded_count(&self) -> usize { self.reactions.iter().filter(|r| r.is_expanded()).count() }

    pub fn dropped(&self) -> impl Iterator<Item = &ReactionReport> {
        self.reactions.iter().filter(|r| !r.is_expanded())
    }

    /// Reacciones que no llegaron a procesarse por fallo de su shard.
    pub fn lost_reactions(&self) -> impl Iterator<Item = &ReactionKey<String>> {
        self.lost.iter().flat_map(|l| l.reactions.iter())
    }

    /// `true` si todas las reacciones de entrada pasaron por un worker.
    pub fn is_complete(&self) -> bool { self.lost.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_domain::Collider;

    fn source() -> ReactionKey<String> {
        ReactionKey::new(vec!["A".to_string()], vec!["B".to_string()], Collider::None)
    }

    #[test]
    fn test_dropped_report_text() {
        let r = ReactionReport::dropped(source(), "sin resolver".into());
        assert!(!r.is_expanded());
        let text = r.to_string();
        assert!(text.contains("A=B"));
        assert!(text.contains("Reacción descartada: sin resolver"));
    }

    #[test]
    fn test_status_serialization() {
        let r = ReactionReport::dropped(source(), "x".into());
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["status"]["status"], "dropped");
        assert_eq!(v["status"]["reason"], "x");
    }

    #[test]
    fn test_report_counts() {
        let mut report = ExpansionReport::new(2);
        report.reactions.push(ReactionReport::dropped(source(), "x".into()));
        report.lost.push(LostShard { shard: ShardId { index: 1, start: 1, len: 1 },
                                     message: "boom".into(),
                                     reactions: vec![source()] });
        assert_eq!(report.expanded_count(), 0);
        assert_eq!(report.dropped().count(), 1);
        assert_eq!(report.lost_reactions().count(), 1);
        assert!(!report.is_complete());
    }
}
