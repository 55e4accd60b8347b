//! Field-match similarity scoring for the CLI.
//!
//! A deliberately small stand-in for a real matching engine: a candidate
//! counts as similar when at least two identity fields agree. Swap in a
//! stronger `SimilarityScorer` implementation without touching the workflow.

use omrs_models::Patient;
use omrs_registration::SimilarityScorer;

const MIN_MATCHING_FIELDS: usize = 2;

pub struct NameMatchScorer;

impl SimilarityScorer for NameMatchScorer {
    fn find_similar(&self, candidates: &[Patient], patient: &Patient) -> Vec<Patient> {
        candidates
            .iter()
            .filter(|candidate| matching_fields(candidate, patient) >= MIN_MATCHING_FIELDS)
            .cloned()
            .collect()
    }
}

fn matching_fields(a: &Patient, b: &Patient) -> usize {
    let fields = [
        (a.given_name(), b.given_name()),
        (a.family_name(), b.family_name()),
        (a.person.birthdate.as_deref(), b.person.birthdate.as_deref()),
        (a.person.gender.as_deref(), b.person.gender.as_deref()),
    ];
    fields
        .into_iter()
        .filter(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => x.trim().eq_ignore_ascii_case(y.trim()),
            _ => false,
        })
        .count()
}
