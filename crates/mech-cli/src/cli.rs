use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mech_core::WorkerPolicy;

#[derive(Parser)]
#[command(name = "mech", about = "Expansión estereoquímica de mecanismos de reacción", version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Expande cada reacción en sus variantes estereoquímicas
    Expand(ExpandArgs),
    /// Quita la estereoquímica y funde especies/reacciones repetidas
    Strip(StripArgs),
}

#[derive(Args)]
pub struct ExpandArgs {
    /// Mecanismo de entrada (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub mechanism: PathBuf,

    /// Catálogo de estructuras (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Número de workers o `auto` (por defecto MECH_NPROCS o 1)
    #[arg(short = 'n', long, value_name = "N")]
    pub nprocs: Option<String>,

    /// Qué hacer si un worker falla (por defecto MECH_WORKER_POLICY)
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<PolicyArg>,

    /// Falla con reacciones ausentes del catálogo en lugar de pasarlas sin expandir
    #[arg(long)]
    pub strict_catalog: bool,

    #[command(flatten)]
    pub out: OutputOptions,
}

#[derive(Args)]
pub struct StripArgs {
    /// Mecanismo de entrada (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub mechanism: PathBuf,

    #[command(flatten)]
    pub out: OutputOptions,
}

#[derive(Args)]
pub struct OutputOptions {
    /// Mecanismo de salida (stdout si se omite)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Reporte de auditoría (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    BestEffort,
    FailFast,
}

impl From<PolicyArg> for WorkerPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::BestEffort => WorkerPolicy::BestEffort,
            PolicyArg::FailFast => WorkerPolicy::FailFast,
        }
    }
}
