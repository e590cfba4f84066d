//! Ejecución por shards sobre un pool de threads.
//!
//! Los ítems se parten por índice en bloques contiguos; cada shard corre en
//! el pool y envía exactamente un `ShardOutcome` por el canal de resultados.
//! No hay estado mutable compartido: cada worker es dueño de su acumulador.
//! El coordinador espera a todos los shards y ordena los resultados por
//! índice, de modo que el resultado no depende de qué worker termine primero.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crossbeam_channel::unbounded;
use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Identidad de un shard: índice y rango `[start, start + len)` de ítems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShardId {
    pub index: usize,
    pub start: usize,
    pub len: usize,
}

impl ShardId {
    pub fn range(&self) -> std::ops::Range<usize> { self.start..self.start + self.len }
}

/// Terminación anormal de un shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerFailure {
    pub message: String,
}

#[derive(Debug)]
pub struct ShardOutcome<R> {
    pub shard: ShardId,
    pub result: Result<R, WorkerFailure>,
}

/// Partición contigua de `len` ítems en `min(worker_count, len)` shards; los
/// primeros shards reciben un ítem extra cuando la división no es exacta.
pub fn partition(len: usize, worker_count: usize) -> Vec<ShardId> {
    let shards = worker_count.max(1).min(len);
    if shards == 0 {
        return Vec::new();
    }
    let base = len / shards;
    let extra = len % shards;
    let mut start = 0;
    (0..shards).map(|index| {
                   let len = base + usize::from(index < extra);
                   let shard = ShardId { index, start, len };
                   start += len;
                   shard
               })
               .collect()
}

pub fn run_sharded<I, R, F>(items: &[I], worker_count: usize, worker: F) -> Result<Vec<ShardOutcome<R>>, CoreError>
    where I: Sync,
          R: Send,
          F: Fn(ShardId, &[I]) -> R + Sync
{
    let shards = partition(items.len(), worker_count);
    if shards.is_empty() {
        return Ok(Vec::new());
    }
    let pool = rayon::ThreadPoolBuilder::new().num_threads(shards.len())
                                              .thread_name(|i| format!("mech-shard-{i}"))
                                              .build()
                                              .map_err(|e| CoreError::WorkerPool(e.to_string()))?;

    let (tx, rx) = unbounded::<ShardOutcome<R>>();
    let worker = &worker;
    pool.scope(|scope| {
            for shard in shards.iter().copied() {
                let tx = tx.clone();
                let chunk = &items[shard.range()];
                scope.spawn(move |_| {
                         debug!("shard {} inicia con {} ítems", shard.index, shard.len);
                         let result = panic::catch_unwind(AssertUnwindSafe(|| worker(shard, chunk)))
                             .map_err(|payload| WorkerFailure { message: panic_message(payload.as_ref()) });
                         // el receptor vive hasta el final de run_sharded
                         let _ = tx.send(ShardOutcome { shard, result });
                     });
            }
        });
    drop(tx);

    let mut outcomes: Vec<ShardOutcome<R>> = rx.iter().collect();
    // un shard que no reportó se registra como fallo, nunca se pierde en silencio
    for shard in &shards {
        if !outcomes.iter().any(|o| o.shard.index == shard.index) {
            error!("shard {} no reportó resultado", shard.index);
            outcomes.push(ShardOutcome { shard: *shard,
                                         result: Err(WorkerFailure { message: "shard sin resultado".to_string() }) });
        }
    }
    outcomes.sort_by_key(|o| o.shard.index);
    Ok(outcomes)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "pánico sin mensaje".to_string()
    }
}
