//! Errores del motor de expansión.
//!
//! Los errores recuperables (reacción sin resolver, variante sin
//! identificador) no llegan aquí: se registran en el reporte de la reacción.
//! `CoreError` cubre lo que detiene una corrida completa.

use mech_domain::DomainError;
use mech_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    #[error(transparent)] Domain(#[from] DomainError),
    #[error(transparent)] Engine(#[from] EngineError),
    #[error("no se pudo construir el pool de workers: {0}")] WorkerPool(String),
    #[error("shard {shard} falló con {reactions} reacciones sin procesar: {message}")]
    ShardFailed { shard: usize, reactions: usize, message: String },
    #[error("configuración inválida: {0}")] Config(String),
}
