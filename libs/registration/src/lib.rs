//! Patient-registration workflow: duplicate detection and submission.
//!
//! # Architecture
//!
//! The workflow is a single pass through an explicit state machine:
//!
//! ```text
//! Validating → SelectingStrategy → Searching → {AwaitingResolution | Submitting}
//! ```
//!
//! Duplicate detection negotiates capability with the server before choosing
//! how to search:
//!
//! - **Remote similarity search** when the server's `registrationcore` module
//!   is at least 1.7 — the server ranks candidates itself.
//! - **Bulk fetch + local comparison** when the server is older, the module
//!   inventory is unreachable, or the inventory request is rejected.
//! - **Local-only comparison** against the device store when offline.
//!
//! Every collaborator (remote API, local store, connectivity probe,
//! similarity scorer, view) is a trait, so the workflow runs unchanged
//! against a live server, a test double, or any UI host.

mod capability;
mod error;
mod strategy;
mod validation;
mod workflow;

pub mod api;
pub mod similarity;
pub mod store;
pub mod version;
pub mod view;

pub use api::{ApiError, RegistrationApi};
pub use capability::{
    supports_server_similarity, REGISTRATION_CORE_MIN_MAJOR, REGISTRATION_CORE_MIN_MINOR,
    REGISTRATION_CORE_PACKAGE,
};
pub use error::RegistrationError;
pub use similarity::SimilarityScorer;
pub use store::{ConnectivityProbe, PatientStore};
pub use strategy::{select_strategy, SearchStrategy};
pub use validation::{validate, ValidationOutcome};
pub use view::RegistrationView;
pub use workflow::{RegistrationWorkflow, WorkflowOutcome};
