//! Constantes del motor.

/// Versión del motor incluida en las huellas de mecanismo. Cambiarla invalida
/// las huellas previas.
pub const ENGINE_VERSION: &str = "M1";

/// Número de workers (entero o `auto`).
pub const ENV_NPROCS: &str = "MECH_NPROCS";
/// Política ante fallos de un worker (`best-effort` | `fail-fast`).
pub const ENV_WORKER_POLICY: &str = "MECH_WORKER_POLICY";

pub const DEFAULT_NPROCS: usize = 1;
