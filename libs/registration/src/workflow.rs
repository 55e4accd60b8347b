//! Submission orchestrator: drives validation, capability negotiation, the
//! duplicate search, and the final registration call.

use crate::api::RegistrationApi;
use crate::error::RegistrationError;
use crate::similarity::SimilarityScorer;
use crate::store::{ConnectivityProbe, PatientStore};
use crate::strategy::{select_strategy, SearchStrategy};
use crate::validation::validate;
use crate::view::RegistrationView;
use omrs_models::Patient;
use std::sync::Arc;

/// Terminal result of one workflow run.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// The registration was submitted, or accepted for deferred sync while
    /// offline.
    Completed(Patient),
    /// Candidates were found; the human decision (merge or proceed as new)
    /// happens outside the workflow. Proceeding as new maps to
    /// [`RegistrationWorkflow::register`].
    AwaitingResolution {
        patient: Patient,
        candidates: Vec<Patient>,
    },
    Failed(RegistrationError),
}

enum State {
    Validating(Patient),
    SelectingStrategy(Patient),
    Searching(Patient, SearchStrategy),
    Submitting(Patient),
}

enum SearchResolution {
    Submit(Patient),
    Candidates(Patient, Vec<Patient>),
    Failed(RegistrationError),
}

/// One registration attempt at a time flows through this orchestrator.
///
/// The record under construction is threaded through the state machine as a
/// value — the orchestrator itself holds no per-run state, so it is reusable
/// across runs and safe to share. Network calls are strictly sequential: each
/// step's result decides the next request, and at most one is ever
/// outstanding. Dropping the future returned by [`confirm`] or [`register`]
/// at an await point abandons the run; there is no shared state a late
/// completion could touch.
///
/// [`confirm`]: RegistrationWorkflow::confirm
/// [`register`]: RegistrationWorkflow::register
pub struct RegistrationWorkflow {
    api: Arc<dyn RegistrationApi>,
    store: Arc<dyn PatientStore>,
    connectivity: Arc<dyn ConnectivityProbe>,
    scorer: Arc<dyn SimilarityScorer>,
    view: Arc<dyn RegistrationView>,
}

impl RegistrationWorkflow {
    pub fn new(
        api: Arc<dyn RegistrationApi>,
        store: Arc<dyn PatientStore>,
        connectivity: Arc<dyn ConnectivityProbe>,
        scorer: Arc<dyn SimilarityScorer>,
        view: Arc<dyn RegistrationView>,
    ) -> Self {
        Self {
            api,
            store,
            connectivity,
            scorer,
            view,
        }
    }

    /// Run the full workflow for a newly entered record: validate, search for
    /// records that may represent the same person, then submit or surface
    /// candidates for resolution.
    pub async fn confirm(&self, patient: Patient) -> WorkflowOutcome {
        let mut state = State::Validating(patient);

        loop {
            state = match state {
                State::Validating(patient) => {
                    let outcome = validate(&patient);
                    self.view.show_field_errors(&outcome);
                    if !outcome.is_valid() {
                        tracing::debug!("required fields missing, halting before any network call");
                        return WorkflowOutcome::Failed(RegistrationError::Validation(outcome));
                    }
                    self.view.set_progress(true);
                    State::SelectingStrategy(patient)
                }
                State::SelectingStrategy(patient) => {
                    let strategy = self.negotiate_strategy().await;
                    tracing::debug!(?strategy, "duplicate search strategy selected");
                    State::Searching(patient, strategy)
                }
                State::Searching(patient, strategy) => {
                    match self.search(patient, strategy).await {
                        SearchResolution::Submit(patient) => State::Submitting(patient),
                        SearchResolution::Candidates(patient, candidates) => {
                            self.view.set_progress(false);
                            self.view.show_similar_patients(&candidates, &patient);
                            return WorkflowOutcome::AwaitingResolution {
                                patient,
                                candidates,
                            };
                        }
                        SearchResolution::Failed(err) => {
                            self.view.set_progress(false);
                            self.view.report_error(&err.to_string());
                            return WorkflowOutcome::Failed(err);
                        }
                    }
                }
                State::Submitting(patient) => return self.submit(patient).await,
            };
        }
    }

    /// Submit the record directly, skipping the duplicate search. This is the
    /// path taken after the user resolves a candidate list with "proceed as
    /// new".
    pub async fn register(&self, patient: Patient) -> WorkflowOutcome {
        self.submit(patient).await
    }

    /// Probe connectivity, then — when online — query the module inventory
    /// and feed the result into the strategy table. An unreachable inventory
    /// degrades to the bulk-fetch strategy instead of aborting.
    async fn negotiate_strategy(&self) -> SearchStrategy {
        if !self.connectivity.is_online() {
            return select_strategy(false, None);
        }

        let modules = match self.api.list_modules().await {
            Ok(modules) => Some(modules),
            Err(err) => {
                let err = RegistrationError::CapabilityQuery(err);
                tracing::debug!("{err}; assuming similarity search unsupported");
                None
            }
        };
        select_strategy(true, modules.as_deref())
    }

    async fn search(&self, patient: Patient, strategy: SearchStrategy) -> SearchResolution {
        match strategy {
            SearchStrategy::RemoteSimilarity => match self.api.find_similar(&patient).await {
                Ok(candidates) => Self::resolve(patient, candidates),
                Err(err) => SearchResolution::Failed(RegistrationError::SearchTransport(err)),
            },
            SearchStrategy::BulkFetch => {
                let given_name = patient.given_name().unwrap_or_default().to_string();
                match self.api.find_patients(&given_name).await {
                    Ok(fetched) => {
                        // This strategy only runs against a server without the
                        // similarity capability; let the user know an upgrade
                        // would improve matching.
                        self.view.show_upgrade_hint();
                        if fetched.is_empty() {
                            SearchResolution::Submit(patient)
                        } else {
                            let candidates = self.scorer.find_similar(&fetched, &patient);
                            Self::resolve(patient, candidates)
                        }
                    }
                    Err(err) => SearchResolution::Failed(RegistrationError::SearchTransport(err)),
                }
            }
            SearchStrategy::LocalOnly => {
                let known = self.store.all_patients();
                let candidates = self.scorer.find_similar(&known, &patient);
                Self::resolve(patient, candidates)
            }
        }
    }

    fn resolve(patient: Patient, candidates: Vec<Patient>) -> SearchResolution {
        if candidates.is_empty() {
            SearchResolution::Submit(patient)
        } else {
            SearchResolution::Candidates(patient, candidates)
        }
    }

    async fn submit(&self, patient: Patient) -> WorkflowOutcome {
        match self.api.register(&patient).await {
            Ok(()) => {
                self.view.set_progress(false);
                self.view.complete(&patient);
                WorkflowOutcome::Completed(patient)
            }
            Err(err) if !self.connectivity.is_online() => {
                // Offline-first: the record is treated as queued for a later
                // sync, so the user is not blocked on connectivity.
                tracing::debug!("submission failed while offline ({err}), accepting as deferred");
                self.view.set_progress(false);
                self.view.complete(&patient);
                WorkflowOutcome::Completed(patient)
            }
            Err(err) => {
                let err = RegistrationError::Submission(err);
                self.view.set_progress(false);
                self.view.report_error(&err.to_string());
                WorkflowOutcome::Failed(err)
            }
        }
    }
}
