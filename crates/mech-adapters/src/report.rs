//! Documento de auditoría de una corrida.
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use mech_core::{mechanism_fingerprint, ExpansionOutcome, LostShard, ReactionReport, StripOutcome};
use mech_domain::{ReactionKey, Species};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::AdapterError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub nprocs: usize,
    /// sha256 del archivo de entrada, si se conoce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_digest: Option<String>,
    pub fingerprint: String,
    pub expanded: usize,
    pub dropped: usize,
    pub species: usize,
    pub reactions: Vec<ReactionReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lost: Vec<LostShard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_digest: Option<String>,
    pub fingerprint: String,
    pub removed_species: Vec<Species>,
    pub removed_reactions: Vec<ReactionKey<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportDocument {
    Expansion(ExpansionSummary),
    Strip(StripSummary),
}

impl ReportDocument {
    pub fn expansion(outcome: &ExpansionOutcome, input_digest: Option<String>) -> Self {
        let report = &outcome.report;
        ReportDocument::Expansion(ExpansionSummary { run_id: report.run_id,
                                                     started_at: report.started_at,
                                                     nprocs: report.nprocs,
                                                     input_digest,
                                                     fingerprint: mechanism_fingerprint(&outcome.mechanism),
                                                     expanded: report.expanded_count(),
                                                     dropped: report.dropped().count(),
                                                     species: outcome.mechanism.species.len(),
                                                     reactions: report.reactions.clone(),
                                                     lost: report.lost.clone() })
    }

    pub fn strip(outcome: &StripOutcome, input_digest: Option<String>) -> Self {
        ReportDocument::Strip(StripSummary { input_digest,
                                             fingerprint: mechanism_fingerprint(&outcome.mechanism),
                                             removed_species: outcome.removed_species.clone(),
                                             removed_reactions: outcome.removed_reactions.clone() })
    }
}

/// sha256 hex de un texto de entrada.
pub fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn write_report(path: impl AsRef<Path>, report: &ReportDocument) -> Result<(), AdapterError> {
    fs::write(path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_domain::Mechanism;

    #[test]
    fn test_strip_report_is_tagged() {
        let doc = ReportDocument::strip(&StripOutcome::default(), Some(content_digest("{}")));
        let v = serde_json::to_value(&doc).unwrap();
        assert_eq!(v["kind"], "strip");
        assert_eq!(v["fingerprint"], mechanism_fingerprint(&Mechanism::default()));
        assert_eq!(v["input_digest"].as_str().map(str::len), Some(64));
    }
}
