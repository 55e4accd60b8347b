//! Seam for the external similarity-scoring collaborator.

use omrs_models::Patient;

/// Ranks which of `candidates` plausibly represent the same person as
/// `patient`.
///
/// The workflow supplies the candidate set (from a bulk fetch or the local
/// store) and passes the ordered result through unchanged — scoring
/// semantics live entirely behind this trait.
pub trait SimilarityScorer: Send + Sync {
    fn find_similar(&self, candidates: &[Patient], patient: &Patient) -> Vec<Patient>;
}
