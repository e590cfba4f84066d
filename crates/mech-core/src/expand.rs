//! Expansión estereoquímica de un mecanismo completo.
//!
//! `StereoExpander` reparte las reacciones entre shards; cada worker ejecuta
//! normalizar → enumerar → reducir → reinsertar colisionador sobre su bloque y
//! devuelve un `ShardReport`. Con todos los shards de vuelta, las variantes se
//! concatenan en orden de shard y se fusionan en un mecanismo nuevo.
use log::{error, info, warn};
use mech_domain::{Identifier, Mechanism, ReactionKey};
use mech_engine::StructureService;
use mech_policies::{FormulaNamePolicy, NamingPolicy};

use crate::config::{ExpansionConfig, WorkerPolicy};
use crate::enumerate::enumerate_variants;
use crate::errors::CoreError;
use crate::merge::merge_reactions;
use crate::normalize::normalize;
use crate::parallel::run_sharded;
use crate::reduce::{reattach, reduce_enantiomers};
use crate::report::{ExpansionReport, LostShard, ReactionReport, ReactionStatus, ShardReport};
use crate::resolver::IdentifierResolver;

/// Resultado de `expand`: mecanismo fusionado, variantes concatenadas (en
/// orden de shard) y el reporte de la corrida.
#[derive(Debug, Clone)]
pub struct ExpansionOutcome {
    pub mechanism: Mechanism,
    pub variants: Vec<ReactionKey<Identifier>>,
    pub report: ExpansionReport,
}

pub struct StereoExpander<S, P = FormulaNamePolicy> {
    service: S,
    naming: P,
    config: ExpansionConfig,
}

impl<S: StructureService> StereoExpander<S> {
    pub fn new(service: S) -> Self {
        Self { service,
               naming: FormulaNamePolicy::default(),
               config: ExpansionConfig::default() }
    }
}

impl<S, P> StereoExpander<S, P>
    where S: StructureService,
          P: NamingPolicy
{
    pub fn with_config(mut self, config: ExpansionConfig) -> Self {
        self.config = config;
        self
    }

    /// Sustituye la política de nombrado de especies nuevas.
    pub fn with_naming<Q: NamingPolicy>(self, naming: Q) -> StereoExpander<S, Q> {
        StereoExpander { service: self.service,
                         naming,
                         config: self.config }
    }

    pub fn service(&self) -> &S { &self.service }
    pub fn config(&self) -> &ExpansionConfig { &self.config }

    /// Expande una sola reacción. Nunca falla: una reacción sin resolver, no
    /// clasificable o sin ninguna variante válida queda como `Dropped` en su
    /// reporte.
    pub fn expand_reaction(&self, resolver: &IdentifierResolver, source: &ReactionKey<String>) -> ReactionReport {
        let normalized = match normalize(source, resolver) {
            Ok(n) => n,
            Err(err) => {
                warn!("reacción {source} descartada: {err}");
                return ReactionReport::dropped(source.clone(), err.to_string());
            }
        };
        let enumeration = match enumerate_variants(&self.service, &normalized) {
            Ok(e) => e,
            Err(err) => {
                warn!("reacción {source} descartada: {err}");
                return ReactionReport::dropped(source.clone(), err.to_string());
            }
        };
        for failure in &enumeration.discarded {
            warn!("reacción {source}: variante {} descartada: {}", failure.index, failure.reason);
        }
        let split = reduce_enantiomers(&self.service, &enumeration.variants);
        if split.kept.is_empty() {
            let reason = format!("ninguna variante válida ({} descartadas)", enumeration.discarded.len());
            warn!("reacción {source} descartada: {reason}");
            return ReactionReport { class: Some(enumeration.class),
                                    discarded: enumeration.discarded,
                                    ..ReactionReport::dropped(source.clone(), reason) };
        }
        let report = ReactionReport { source: source.clone(),
                                      status: ReactionStatus::Expanded,
                                      class: Some(enumeration.class),
                                      kept: reattach(&split.kept, &normalized.collider),
                                      removed: reattach(&split.removed, &normalized.collider),
                                      discarded: enumeration.discarded };
        info!("{report}");
        report
    }

    /// Fase paralela: todas las reacciones del mecanismo, sin fusionar.
    /// Devuelve los reportes por reacción (en orden de entrada para los
    /// shards que terminaron) y los shards perdidos.
    pub fn expand_variants(&self, mechanism: &Mechanism) -> Result<ExpansionReport, CoreError> {
        let resolver = IdentifierResolver::from_species(&mechanism.species);
        let sources: Vec<&ReactionKey<String>> = mechanism.reactions.keys().collect();
        let mut report = ExpansionReport::new(self.config.nprocs);

        let outcomes = run_sharded(&sources, self.config.nprocs, |shard, chunk| {
                           ShardReport { shard,
                                         reactions: chunk.iter().map(|src| self.expand_reaction(&resolver, src)).collect() }
                       })?;

        for outcome in outcomes {
            match outcome.result {
                Ok(shard_report) => report.reactions.extend(shard_report.reactions),
                Err(failure) => {
                    let lost: Vec<ReactionKey<String>> =
                        sources[outcome.shard.range()].iter().map(|k| (*k).clone()).collect();
                    if self.config.worker_policy == WorkerPolicy::FailFast {
                        return Err(CoreError::ShardFailed { shard: outcome.shard.index,
                                                            reactions: lost.len(),
                                                            message: failure.message });
                    }
                    error!("shard {} perdido ({}): {} reacciones sin procesar",
                           outcome.shard.index,
                           failure.message,
                           lost.len());
                    report.lost.push(LostShard { shard: outcome.shard,
                                                 message: failure.message,
                                                 reactions: lost });
                }
            }
        }
        Ok(report)
    }

    /// Expande y fusiona sobre un mecanismo previo: los nombres y parámetros
    /// que ya existen en `existing` se reutilizan.
    pub fn expand_into(&self, mechanism: &Mechanism, existing: &Mechanism) -> Result<ExpansionOutcome, CoreError> {
        let report = self.expand_variants(mechanism)?;
        let variants: Vec<ReactionKey<Identifier>> =
            report.reactions.iter().flat_map(|r| r.kept.iter().cloned()).collect();
        let merged = merge_reactions(&variants, existing, &self.naming)?;
        info!("expansión {}: {} reacciones expandidas, {} descartadas, {} perdidas → {} especies, {} reacciones",
              report.run_id,
              report.expanded_count(),
              report.dropped().count(),
              report.lost_reactions().count(),
              merged.species.len(),
              merged.reactions.len());
        Ok(ExpansionOutcome { mechanism: merged, variants, report })
    }

    /// Expande el mecanismo reutilizando sus propios nombres de especie.
    pub fn expand(&self, mechanism: &Mechanism) -> Result<ExpansionOutcome, CoreError> {
        self.expand_into(mechanism, mechanism)
    }
}
