//! mech-core: motor de expansión estereoquímica de mecanismos
//!
//! Flujo por reacción: resolver nombres → normalizar (separar colisionador) →
//! enumerar variantes → reducir enantiómeros → reinsertar colisionador. El
//! coordinador reparte las reacciones entre workers y la fusión construye
//! los diccionarios canónicos de salida. `strip` recorre el camino inverso.
pub mod config;
pub mod constants;
pub mod enumerate;
pub mod errors;
pub mod expand;
pub mod hashing;
pub mod merge;
pub mod normalize;
pub mod parallel;
pub mod reduce;
pub mod report;
pub mod resolver;
pub mod strip;

pub use config::{ExpansionConfig, WorkerPolicy};
pub use enumerate::{enumerate_variants, Enumeration, VariantFailure};
pub use errors::CoreError;
pub use expand::{ExpansionOutcome, StereoExpander};
pub use hashing::{mechanism_fingerprint, to_canonical_json};
pub use merge::merge_reactions;
pub use normalize::{normalize, NormalizedReaction};
pub use parallel::{run_sharded, ShardId, ShardOutcome, WorkerFailure};
pub use reduce::{reattach, reduce_enantiomers};
pub use report::{ExpansionReport, LostShard, ReactionReport, ReactionStatus, ShardReport};
pub use resolver::IdentifierResolver;
pub use strip::{remove_stereochemistry, StripOutcome};
