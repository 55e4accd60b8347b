//! Workflow error taxonomy.
//!
//! Every failure returns to the caller as a value inside the workflow
//! outcome; nothing panics across the workflow boundary.

use crate::api::ApiError;
use crate::validation::ValidationOutcome;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// One or more required field groups are missing. Recoverable locally;
    /// no network activity has occurred.
    #[error("one or more required patient fields are missing")]
    Validation(ValidationOutcome),

    /// The module inventory could not be fetched. Never terminal — the
    /// workflow consumes it by falling back to the bulk-fetch strategy.
    #[error("module inventory query failed: {0}")]
    CapabilityQuery(#[source] ApiError),

    /// The duplicate search itself failed; registration must not proceed
    /// without a completed check.
    #[error("duplicate search failed: {0}")]
    SearchTransport(#[source] ApiError),

    /// The final registration call failed while online. (Offline, the same
    /// failure is treated as an accepted deferred submission instead.)
    #[error("registration submission failed: {0}")]
    Submission(#[source] ApiError),
}
