//! Data models mirroring the OpenMRS REST representation.
//!
//! Field names follow the wire format (`givenName`, `cityVillage`, …) via
//! serde renames so these types deserialize directly from `ws/rest/v1`
//! responses and serialize back without translation layers.

use serde::{Deserialize, Serialize};

/// The list envelope every OpenMRS REST collection response arrives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Results<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A patient record under construction or as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default)]
    pub person: Person,
}

/// Demographic core of a patient. The REST representation carries names and
/// addresses as lists; the client treats the first entry as the preferred one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub names: Vec<PersonName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub addresses: Vec<PersonAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_village: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// One entry of the server's installed-module inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    pub package_name: String,
    pub version: String,
}

impl Person {
    /// Preferred name, i.e. the first entry of `names`.
    pub fn name(&self) -> Option<&PersonName> {
        self.names.first()
    }

    /// Preferred address, i.e. the first entry of `addresses`.
    pub fn address(&self) -> Option<&PersonAddress> {
        self.addresses.first()
    }
}

impl Patient {
    pub fn given_name(&self) -> Option<&str> {
        self.person
            .name()
            .and_then(|n| n.given_name.as_deref())
    }

    pub fn family_name(&self) -> Option<&str> {
        self.person
            .name()
            .and_then(|n| n.family_name.as_deref())
    }

    /// Flatten the identity fields into key/value pairs for the server-side
    /// similarity search. Blank fields are omitted.
    pub fn as_query_map(&self) -> Vec<(&'static str, String)> {
        let mut map = Vec::new();
        let mut push = |key: &'static str, value: Option<&str>| {
            if !is_blank(value) {
                map.push((key, value.unwrap_or_default().to_string()));
            }
        };

        push("givenName", self.given_name());
        push("familyName", self.family_name());
        push("gender", self.person.gender.as_deref());
        push("birthdate", self.person.birthdate.as_deref());
        if let Some(address) = self.person.address() {
            push("address1", address.address1.as_deref());
            push("address2", address.address2.as_deref());
            push("cityVillage", address.city_village.as_deref());
            push("stateProvince", address.state_province.as_deref());
            push("country", address.country.as_deref());
            push("postalCode", address.postal_code.as_deref());
        }
        map
    }
}

/// Blank means absent, empty, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
