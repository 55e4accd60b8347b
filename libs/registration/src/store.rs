//! Device-local collaborators: patient store and connectivity probe.

use omrs_models::Patient;

/// Read access to the locally known patients. Used only by the offline
/// search branch; writes and sync are owned by the hosting application.
pub trait PatientStore: Send + Sync {
    fn all_patients(&self) -> Vec<Patient>;
}

/// Whether a network path is currently usable. Sampled synchronously at the
/// decision points that depend on it (strategy selection, submission
/// failure handling) — never cached across them.
pub trait ConnectivityProbe: Send + Sync {
    fn is_online(&self) -> bool;
}
