//! One validator per marketplace form.
//!
//! Each validator checks every field it knows about and reports all failures
//! at once; an error on one field never hides another. Cross-field errors
//! land on the dependent field (`confirmPassword`, `endDate`, `maxBudget`).

mod auth;
mod job;
mod profile;
mod proposal;

pub use auth::{
    validate_change_password_form, validate_forgot_password_form, validate_login_form,
    validate_register_form, validate_reset_password_form,
};
pub use job::validate_job_form;
pub use profile::{
    validate_certification_form, validate_education_form, validate_experience_form,
    validate_portfolio_item_form, validate_profile_form,
};
pub use proposal::{validate_proposal_form, validate_proposal_milestones};

/// True when the value is absent or only whitespace
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// The value, when present and not only whitespace
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::utils::date::{Clock, FixedClock};
    use crate::utils::validation::{Rules, StandardRules};
    use chrono::{TimeZone, Utc};

    /// Standard rules frozen at 2025-06-01 12:00 UTC
    pub fn rules() -> StandardRules<FixedClock> {
        StandardRules::with_clock(FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()))
    }

    /// Standard rules except that no date is ever valid
    pub struct NoValidDates(pub StandardRules<FixedClock>);

    impl Rules for NoValidDates {
        fn clock(&self) -> &dyn Clock {
            self.0.clock()
        }

        fn is_valid_date(&self, _value: Option<&str>, _must_be_future: bool) -> bool {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \t ")));
        assert!(!is_blank(Some(" x ")));

        assert_eq!(non_blank(Some(" ")), None);
        assert_eq!(non_blank(Some("https://x.io")), Some("https://x.io"));
    }
}
