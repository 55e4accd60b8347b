//! Remote service interface for the registration workflow.

use async_trait::async_trait;
use omrs_models::{ModuleInfo, Patient};
use thiserror::Error;

/// Failure of a remote call. Non-2xx responses are failures, not data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
}

/// Abstract interface to the remote registration service.
///
/// Implementations range from a live REST client to in-memory test doubles.
/// Each method maps to one request; the workflow never has more than one
/// outstanding at a time.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Fetch the server's installed-module inventory.
    async fn list_modules(&self) -> Result<Vec<ModuleInfo>, ApiError>;

    /// Fetch server patients filtered by given name, for local comparison.
    async fn find_patients(&self, given_name: &str) -> Result<Vec<Patient>, ApiError>;

    /// Ask the server to rank patients similar to the candidate record.
    async fn find_similar(&self, patient: &Patient) -> Result<Vec<Patient>, ApiError>;

    /// Submit the finalized registration. The response body is not consumed.
    async fn register(&self, patient: &Patient) -> Result<(), ApiError>;
}
