//! Canonicalización JSON y huellas de mecanismo.

pub mod canonical_json;
pub mod fingerprint;

pub use canonical_json::to_canonical_json;
pub use fingerprint::mechanism_fingerprint;
