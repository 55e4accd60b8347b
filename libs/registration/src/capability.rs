//! Server capability detection from the installed-module inventory.

use crate::version;
use omrs_models::ModuleInfo;

/// Package identifier of the module providing server-side similarity search.
pub const REGISTRATION_CORE_PACKAGE: &str = "org.openmrs.module.registrationcore";

/// Minimum `registrationcore` version exposing the similar-patients endpoint.
pub const REGISTRATION_CORE_MIN_MAJOR: u32 = 1;
pub const REGISTRATION_CORE_MIN_MINOR: u32 = 7;

/// Whether the server supports server-side similarity search.
///
/// Scans the inventory for `registrationcore` at 1.7 or above. Absence of the
/// module and unparseable versions both report `false`: a capability is only
/// assumed present when the inventory proves it. Derived fresh from the given
/// inventory on every call — the server's module set can change between runs.
pub fn supports_server_similarity(modules: &[ModuleInfo]) -> bool {
    modules
        .iter()
        .filter(|m| m.package_name == REGISTRATION_CORE_PACKAGE)
        .any(|m| {
            version::meets_minimum(
                &m.version,
                REGISTRATION_CORE_MIN_MAJOR,
                REGISTRATION_CORE_MIN_MINOR,
            )
            .unwrap_or_else(|err| {
                tracing::warn!("unparseable registrationcore version, assuming unsupported: {err}");
                false
            })
        })
}
