use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use omrs_models::Patient;
use omrs_registration::{RegistrationWorkflow, WorkflowOutcome};
use omrs_rest::RestClient;
use tracing_subscriber::EnvFilter;

mod scorer;
mod store;
mod view;

use scorer::NameMatchScorer;
use store::{JsonFileStore, StaticConnectivity};
use view::ConsoleView;

#[derive(Parser)]
#[command(
    name = "omrs",
    about = "Command line client for OpenMRS patient registration",
    version,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a patient, searching for possible duplicates first.
    Register {
        /// Path to the patient record JSON file.
        #[arg(short, long)]
        patient: PathBuf,
        /// OpenMRS server root, e.g. https://demo.openmrs.org/openmrs.
        #[arg(short, long, env = "OMRS_SERVER")]
        server: String,
        /// JSON file holding the locally known patients, used for the
        /// offline comparison.
        #[arg(long, env = "OMRS_STORE")]
        store: Option<PathBuf>,
        /// Treat the device as offline.
        #[arg(long, action = ArgAction::SetTrue)]
        offline: bool,
        /// Skip the duplicate search and submit directly ("proceed as new").
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Register {
            patient,
            server,
            store,
            offline,
            force,
        } => register(patient, server, store, offline, force).await,
    }
}

async fn register(
    patient_path: PathBuf,
    server: String,
    store_path: Option<PathBuf>,
    offline: bool,
    force: bool,
) -> Result<ExitCode> {
    let raw = fs::read_to_string(&patient_path)
        .with_context(|| format!("failed to read {}", patient_path.display()))?;
    let record: Patient = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse patient record {}", patient_path.display()))?;

    let api = RestClient::new(&server).context("failed to build HTTP client")?;
    let store = JsonFileStore::load(store_path.as_deref())?;

    let workflow = RegistrationWorkflow::new(
        Arc::new(api),
        Arc::new(store),
        Arc::new(StaticConnectivity { online: !offline }),
        Arc::new(NameMatchScorer),
        Arc::new(ConsoleView),
    );

    let outcome = if force {
        workflow.register(record).await
    } else {
        workflow.confirm(record).await
    };

    match outcome {
        WorkflowOutcome::Completed(_) => Ok(ExitCode::SUCCESS),
        WorkflowOutcome::AwaitingResolution { candidates, .. } => {
            eprintln!(
                "{} possible duplicate(s) found. Review them, or re-run with --force to register as a new patient.",
                candidates.len()
            );
            Ok(ExitCode::from(2))
        }
        WorkflowOutcome::Failed(err) => Err(err.into()),
    }
}
