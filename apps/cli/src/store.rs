//! Device-local collaborators for the CLI: a JSON-file patient store and a
//! flag-driven connectivity probe.

use anyhow::{Context, Result};
use omrs_models::Patient;
use omrs_registration::{ConnectivityProbe, PatientStore};
use std::fs;
use std::path::Path;

/// Locally known patients loaded from a JSON array on disk. Read once at
/// startup; the workflow only needs a snapshot for the offline comparison.
pub struct JsonFileStore {
    patients: Vec<Patient>,
}

impl JsonFileStore {
    /// Load the store, or an empty one when no path was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let patients = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse patient store {}", path.display()))?
            }
            None => Vec::new(),
        };
        Ok(Self { patients })
    }
}

impl PatientStore for JsonFileStore {
    fn all_patients(&self) -> Vec<Patient> {
        self.patients.clone()
    }
}

/// Connectivity as declared on the command line. A desktop process has no
/// radio state to sample, so the flag is authoritative for the whole run.
pub struct StaticConnectivity {
    pub online: bool,
}

impl ConnectivityProbe for StaticConnectivity {
    fn is_online(&self) -> bool {
        self.online
    }
}
