//! Configuración de la expansión desde variables de entorno.
//! Usa `MECH_NPROCS` y `MECH_WORKER_POLICY`; el archivo `.env` se carga una
//! sola vez.

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NPROCS, ENV_NPROCS, ENV_WORKER_POLICY};
use crate::errors::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Qué hacer cuando un shard termina de forma anormal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkerPolicy {
    /// Registrar las reacciones perdidas y continuar con el resto.
    #[default]
    BestEffort,
    /// Abortar la corrida completa.
    FailFast,
}

impl WorkerPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerPolicy::BestEffort => "best-effort",
            WorkerPolicy::FailFast => "fail-fast",
        }
    }
}

impl FromStr for WorkerPolicy {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "best-effort" => Ok(WorkerPolicy::BestEffort),
            "fail-fast" => Ok(WorkerPolicy::FailFast),
            other => Err(CoreError::Config(format!("política de worker desconocida: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionConfig {
    pub nprocs: usize,
    pub worker_policy: WorkerPolicy,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self { nprocs: DEFAULT_NPROCS, worker_policy: WorkerPolicy::default() }
    }
}

impl ExpansionConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Como `from_env`, pero los valores de `overrides` tienen prioridad: una
    /// variable sobrescrita no se lee del entorno.
    pub fn from_env_with<F>(overrides: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| overrides(key).or_else(|| env::var(key).ok()))
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let nprocs = match lookup(ENV_NPROCS) {
            None => DEFAULT_NPROCS,
            Some(v) => parse_nprocs(&v)?,
        };
        let worker_policy = match lookup(ENV_WORKER_POLICY) {
            None => WorkerPolicy::default(),
            Some(v) => v.parse()?,
        };
        Ok(Self { nprocs, worker_policy })
    }

    pub fn with_nprocs(mut self, nprocs: usize) -> Self {
        self.nprocs = nprocs.max(1);
        self
    }

    pub fn with_worker_policy(mut self, worker_policy: WorkerPolicy) -> Self {
        self.worker_policy = worker_policy;
        self
    }
}

/// `auto` usa el paralelismo disponible de la máquina.
pub fn parse_nprocs(raw: &str) -> Result<usize, CoreError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("auto") {
        return Ok(std::thread::available_parallelism().map(|n| n.get()).unwrap_or(DEFAULT_NPROCS));
    }
    match raw.parse::<usize>() {
        Ok(0) | Err(_) => Err(CoreError::Config(format!("{ENV_NPROCS} inválido: {raw:?}"))),
        Ok(n) => Ok(n),
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let cfg = ExpansionConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ExpansionConfig::default());
        assert_eq!(cfg.nprocs, 1);
    }

    #[test]
    fn test_reads_variables() {
        let cfg = ExpansionConfig::from_lookup(lookup(&[(ENV_NPROCS, "4"), (ENV_WORKER_POLICY, "fail_fast")])).unwrap();
        assert_eq!(cfg.nprocs, 4);
        assert_eq!(cfg.worker_policy, WorkerPolicy::FailFast);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ExpansionConfig::from_lookup(lookup(&[(ENV_NPROCS, "0")])).is_err());
        assert!(ExpansionConfig::from_lookup(lookup(&[(ENV_NPROCS, "many")])).is_err());
        assert!(ExpansionConfig::from_lookup(lookup(&[(ENV_WORKER_POLICY, "retry")])).is_err());
    }

    #[test]
    fn test_override_shadows_bad_variable() {
        let env = lookup(&[(ENV_NPROCS, "many"), (ENV_WORKER_POLICY, "fail-fast")]);
        let overridden = |key: &str| (key == ENV_NPROCS).then(|| "2".to_string()).or_else(|| env(key));
        let cfg = ExpansionConfig::from_lookup(overridden).unwrap();
        assert_eq!(cfg.nprocs, 2);
        assert_eq!(cfg.worker_policy, WorkerPolicy::FailFast);
        assert_eq!(cfg.worker_policy.as_str().parse::<WorkerPolicy>().unwrap(), WorkerPolicy::FailFast);
    }

    #[test]
    fn test_auto_nprocs_is_positive() {
        assert!(parse_nprocs("auto").unwrap() >= 1);
        assert_eq!(ExpansionConfig::default().with_nprocs(0).nprocs, 1);
    }
}
