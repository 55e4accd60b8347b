//! Required-field validation of a candidate patient record.

use omrs_models::{is_blank, Patient};

/// One flag per validated field group; a set flag marks the group as missing.
///
/// Overall validity is the conjunction of the negated flags — see
/// [`ValidationOutcome::is_valid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub given_name_missing: bool,
    pub family_name_missing: bool,
    pub birthdate_missing: bool,
    pub gender_missing: bool,
    pub address_missing: bool,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        !(self.given_name_missing
            || self.family_name_missing
            || self.birthdate_missing
            || self.gender_missing
            || self.address_missing)
    }
}

/// Check the record against the required-field rules.
///
/// Name, birth date, and gender each require a non-blank value. The address
/// group is satisfied by any single populated sub-field. Pure function; the
/// caller decides how to surface the flags.
pub fn validate(patient: &Patient) -> ValidationOutcome {
    let address_missing = match patient.person.address() {
        Some(a) => {
            is_blank(a.address1.as_deref())
                && is_blank(a.address2.as_deref())
                && is_blank(a.city_village.as_deref())
                && is_blank(a.state_province.as_deref())
                && is_blank(a.country.as_deref())
                && is_blank(a.postal_code.as_deref())
        }
        None => true,
    };

    ValidationOutcome {
        given_name_missing: is_blank(patient.given_name()),
        family_name_missing: is_blank(patient.family_name()),
        birthdate_missing: is_blank(patient.person.birthdate.as_deref()),
        gender_missing: is_blank(patient.person.gender.as_deref()),
        address_missing,
    }
}
