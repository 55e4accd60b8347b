//! Terminal rendering of the workflow's view callbacks.

use omrs_models::Patient;
use omrs_registration::{RegistrationView, ValidationOutcome};

pub struct ConsoleView;

fn display_name(patient: &Patient) -> String {
    format!(
        "{} {}",
        patient.given_name().unwrap_or("?"),
        patient.family_name().unwrap_or("?")
    )
}

impl RegistrationView for ConsoleView {
    fn set_progress(&self, visible: bool) {
        if visible {
            eprintln!("Checking for existing patients ...");
        }
    }

    fn show_field_errors(&self, outcome: &ValidationOutcome) {
        let missing = [
            (outcome.given_name_missing, "given name"),
            (outcome.family_name_missing, "family name"),
            (outcome.birthdate_missing, "birth date"),
            (outcome.gender_missing, "gender"),
            (outcome.address_missing, "address"),
        ];
        for (flag, label) in missing {
            if flag {
                eprintln!("Missing required field: {label}");
            }
        }
    }

    fn show_similar_patients(&self, candidates: &[Patient], patient: &Patient) {
        eprintln!(
            "Patients similar to {} already known:",
            display_name(patient)
        );
        for candidate in candidates {
            let uuid = candidate.uuid.as_deref().unwrap_or("local record");
            eprintln!("  - {} ({uuid})", display_name(candidate));
        }
    }

    fn show_upgrade_hint(&self) {
        eprintln!(
            "Note: the server does not support similarity search; upgrade its \
             registrationcore module to 1.7+ for better duplicate matching."
        );
    }

    fn report_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }

    fn complete(&self, patient: &Patient) {
        println!("Registered {}", display_name(patient));
    }
}
