#![allow(dead_code)]

use async_trait::async_trait;
use omrs_models::{ModuleInfo, Patient, Person, PersonAddress, PersonName};
use omrs_registration::{
    ApiError, ConnectivityProbe, PatientStore, RegistrationApi, RegistrationView,
    SimilarityScorer, ValidationOutcome,
};
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Record builders
// ---------------------------------------------------------------------------

/// A record that passes validation, with the given preferred name.
pub fn patient(given: &str, family: &str) -> Patient {
    Patient {
        uuid: None,
        person: Person {
            names: vec![PersonName {
                given_name: Some(given.to_string()),
                family_name: Some(family.to_string()),
            }],
            gender: Some("F".to_string()),
            birthdate: Some("1987-03-15".to_string()),
            addresses: vec![PersonAddress {
                city_village: Some("Mirebalais".to_string()),
                ..Default::default()
            }],
        },
    }
}

pub fn registrationcore(version: &str) -> Vec<ModuleInfo> {
    vec![ModuleInfo {
        package_name: "org.openmrs.module.registrationcore".to_string(),
        version: version.to_string(),
    }]
}

pub fn transport_error() -> ApiError {
    ApiError::Transport("connection refused".to_string())
}

// ---------------------------------------------------------------------------
// Remote API double
// ---------------------------------------------------------------------------

/// Scripted API responses plus a call log in invocation order.
pub struct MockApi {
    pub modules: Result<Vec<ModuleInfo>, ApiError>,
    pub patients: Result<Vec<Patient>, ApiError>,
    pub similar: Result<Vec<Patient>, ApiError>,
    pub register_result: Result<(), ApiError>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            modules: Ok(vec![]),
            patients: Ok(vec![]),
            similar: Ok(vec![]),
            register_result: Ok(()),
            calls: Mutex::new(vec![]),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls().iter().any(|c| c.as_str() == name)
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }
}

#[async_trait]
impl RegistrationApi for MockApi {
    async fn list_modules(&self) -> Result<Vec<ModuleInfo>, ApiError> {
        self.record("list_modules");
        self.modules.clone()
    }

    async fn find_patients(&self, _given_name: &str) -> Result<Vec<Patient>, ApiError> {
        self.record("find_patients");
        self.patients.clone()
    }

    async fn find_similar(&self, _patient: &Patient) -> Result<Vec<Patient>, ApiError> {
        self.record("find_similar");
        self.similar.clone()
    }

    async fn register(&self, _patient: &Patient) -> Result<(), ApiError> {
        self.record("register");
        self.register_result.clone()
    }
}

// ---------------------------------------------------------------------------
// Local collaborator doubles
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockStore {
    pub patients: Vec<Patient>,
}

impl PatientStore for MockStore {
    fn all_patients(&self) -> Vec<Patient> {
        self.patients.clone()
    }
}

pub struct StaticProbe(pub bool);

impl ConnectivityProbe for StaticProbe {
    fn is_online(&self) -> bool {
        self.0
    }
}

/// Case-insensitive preferred-name equality — enough scoring for the tests.
pub struct NameScorer;

impl SimilarityScorer for NameScorer {
    fn find_similar(&self, candidates: &[Patient], patient: &Patient) -> Vec<Patient> {
        let eq = |a: Option<&str>, b: Option<&str>| match (a, b) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        };
        candidates
            .iter()
            .filter(|c| {
                eq(c.given_name(), patient.given_name())
                    && eq(c.family_name(), patient.family_name())
            })
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// View double
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Progress(bool),
    FieldErrors(ValidationOutcome),
    Candidates(usize),
    UpgradeHint,
    Error(String),
    Complete,
}

#[derive(Default)]
pub struct MockView {
    pub events: Mutex<Vec<ViewEvent>>,
}

impl MockView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    /// The progress indicator state after the last update, if any was made.
    pub fn progress_visible(&self) -> Option<bool> {
        self.events()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Progress(v) => Some(*v),
                _ => None,
            })
    }

    pub fn saw_upgrade_hint(&self) -> bool {
        self.events().contains(&ViewEvent::UpgradeHint)
    }

    pub fn saw_error(&self) -> bool {
        self.events()
            .iter()
            .any(|e| matches!(e, ViewEvent::Error(_)))
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl RegistrationView for MockView {
    fn set_progress(&self, visible: bool) {
        self.push(ViewEvent::Progress(visible));
    }

    fn show_field_errors(&self, outcome: &ValidationOutcome) {
        self.push(ViewEvent::FieldErrors(*outcome));
    }

    fn show_similar_patients(&self, candidates: &[Patient], _patient: &Patient) {
        self.push(ViewEvent::Candidates(candidates.len()));
    }

    fn show_upgrade_hint(&self) {
        self.push(ViewEvent::UpgradeHint);
    }

    fn report_error(&self, message: &str) {
        self.push(ViewEvent::Error(message.to_string()));
    }

    fn complete(&self, _patient: &Patient) {
        self.push(ViewEvent::Complete);
    }
}
