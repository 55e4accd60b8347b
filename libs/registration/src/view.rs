//! Presentation capability set the workflow reports into.

use crate::validation::ValidationOutcome;
use omrs_models::Patient;

/// Callbacks the workflow drives on its hosting UI.
///
/// Any implementor is interchangeable — an app screen, a terminal front end,
/// or a recording test double. The workflow owns the call order; implementors
/// must not call back into the workflow from these methods.
pub trait RegistrationView: Send + Sync {
    /// Show or hide the busy indicator.
    fn set_progress(&self, visible: bool);

    /// Reflect the per-field-group missing flags. Called on every validation,
    /// including a fully clear outcome, so stale error markers get reset.
    fn show_field_errors(&self, outcome: &ValidationOutcome);

    /// Present the duplicate-resolution choice for a non-empty candidate set.
    fn show_similar_patients(&self, candidates: &[Patient], patient: &Patient);

    /// Suggest upgrading the server's registration module. Surfaced when the
    /// workflow had to fall back to client-side comparison against a
    /// reachable server.
    fn show_upgrade_hint(&self);

    /// Report a terminal failure message.
    fn report_error(&self, message: &str);

    /// Registration finished (or was accepted for deferred sync); the host
    /// should navigate on from the form.
    fn complete(&self, patient: &Patient);
}
