//! `mech expand` / `mech strip`.
//!
//! Códigos de salida: 0 ok, 2 uso incorrecto (clap), 4 expansión incompleta
//! (algún shard perdido), 5 error.
mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::{error, warn};
use mech_adapters::{mechanism_to_string, read_catalog, read_mechanism_with_digest, write_mechanism, write_report,
                    AdapterError, ReportDocument};
use mech_core::constants::{ENV_NPROCS, ENV_WORKER_POLICY};
use mech_core::{remove_stereochemistry, CoreError, ExpansionConfig, StereoExpander, WorkerPolicy};
use mech_domain::Mechanism;
use mech_engine::{CatalogService, EngineError};
use thiserror::Error;

use crate::cli::{Cli, Command, ExpandArgs, OutputOptions, StripArgs};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn main() -> ExitCode {
    mech_core::config::init_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Expand(args) => expand(args),
        Command::Strip(args) => strip(args),
    };
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(4),
        Err(e) => {
            error!("{e}");
            ExitCode::from(5)
        }
    }
}

fn emit(mechanism: &Mechanism, out: &OutputOptions, report: &ReportDocument) -> Result<(), CliError> {
    match &out.output {
        Some(path) => write_mechanism(path, mechanism)?,
        None => println!("{}", mechanism_to_string(mechanism)?),
    }
    if let Some(path) = &out.report {
        write_report(path, report)?;
    }
    Ok(())
}

fn expand(args: ExpandArgs) -> Result<bool, CliError> {
    // las opciones de la línea de comandos tapan a las variables de entorno
    let policy = args.policy.map(WorkerPolicy::from);
    let config = ExpansionConfig::from_env_with(|key| match key {
                     ENV_NPROCS => args.nprocs.clone(),
                     ENV_WORKER_POLICY => policy.map(|p| p.as_str().to_string()),
                     _ => None,
                 })?;

    let (mechanism, digest) = read_mechanism_with_digest(&args.mechanism)?;
    let service = CatalogService::new(read_catalog(&args.catalog)?)?.with_passthrough(!args.strict_catalog);
    let outcome = StereoExpander::new(service).with_config(config).expand(&mechanism)?;

    emit(&outcome.mechanism, &args.out, &ReportDocument::expansion(&outcome, Some(digest)))?;
    if !outcome.report.is_complete() {
        warn!("{} reacciones no se procesaron", outcome.report.lost_reactions().count());
    }
    Ok(outcome.report.is_complete())
}

fn strip(args: StripArgs) -> Result<bool, CliError> {
    let (mechanism, digest) = read_mechanism_with_digest(&args.mechanism)?;
    // el strip sólo usa las operaciones de identificador del servicio
    let service = CatalogService::new(Default::default())?;
    let outcome = remove_stereochemistry(&service, &mechanism);
    emit(&outcome.mechanism, &args.out, &ReportDocument::strip(&outcome, Some(digest)))?;
    Ok(true)
}
