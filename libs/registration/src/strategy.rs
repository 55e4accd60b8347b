//! Duplicate-search strategy selection.

use crate::capability::supports_server_similarity;
use omrs_models::ModuleInfo;

/// The three ways to search for records that may represent the same person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Submit the record to the server's similarity endpoint and accept its
    /// candidate set directly. Preferred: the server can match on more than
    /// the client holds.
    RemoteSimilarity,
    /// Fetch server records filtered by given name, compare locally. Works
    /// against any server version.
    BulkFetch,
    /// Compare against the device store. The only option without a network
    /// path; nothing to fall back to below it.
    LocalOnly,
}

/// Choose a strategy from connectivity and the module-inventory result.
///
/// `modules` is `None` when the inventory could not be fetched — that case
/// and a server without the capability both land on [`SearchStrategy::BulkFetch`]:
/// absence of information never selects the more capable path.
pub fn select_strategy(online: bool, modules: Option<&[ModuleInfo]>) -> SearchStrategy {
    if !online {
        return SearchStrategy::LocalOnly;
    }
    match modules {
        Some(modules) if supports_server_similarity(modules) => SearchStrategy::RemoteSimilarity,
        _ => SearchStrategy::BulkFetch,
    }
}
