//! Job posting form

use log::trace;

use super::{is_blank, non_blank};
use crate::models::{JobForm, JobType};
use crate::utils::error_messages::*;
use crate::utils::validation::{FieldErrors, Rules, ValidationResult};

/// Budget rules depend on how the job is paid: budget-based jobs need a
/// budget, hourly jobs need a rate and an estimate. A fixed-price job may
/// also give a budget range, in which case the minimum may not exceed the
/// maximum.
pub fn validate_job_form<R: Rules + ?Sized>(values: &JobForm, rules: &R) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if is_blank(values.title.as_deref()) {
        errors.add("title", TITLE_REQUIRED);
    }
    if is_blank(values.description.as_deref()) {
        errors.add("description", DESCRIPTION_REQUIRED);
    }

    if let Some(job_type) = values.job_type {
        trace!("Checking budget rules for {} job", job_type);

        if job_type.uses_budget() && !rules.is_valid_amount(values.budget) {
            errors.add("budget", INVALID_BUDGET);
        }

        if job_type == JobType::Hourly {
            if !rules.is_valid_amount(values.hourly_rate) {
                errors.add("hourlyRate", INVALID_HOURLY_RATE);
            }
            if !values.estimated_hours.is_some_and(|hours| hours > 0.0) {
                errors.add("estimatedHours", INVALID_ESTIMATED_HOURS);
            }
        }

        if job_type == JobType::FixedPrice {
            if let (Some(min), Some(max)) = (values.min_budget, values.max_budget) {
                let min_ok = rules.is_valid_amount(Some(min));
                let max_ok = rules.is_valid_amount(Some(max));

                if !min_ok {
                    errors.add("minBudget", INVALID_MIN_BUDGET);
                }
                if !max_ok {
                    errors.add("maxBudget", INVALID_MAX_BUDGET);
                } else if min_ok && min > max {
                    errors.add("maxBudget", MIN_BUDGET_EXCEEDS_MAX);
                }
            }
        }
    }

    if values.required_skills.is_empty() {
        errors.add("requiredSkills", SKILLS_REQUIRED);
    }

    // Untouched date pickers submit empty strings
    let start_date = non_blank(values.start_date.as_deref());
    let end_date = non_blank(values.end_date.as_deref());
    if let (Some(start), Some(end)) = (start_date, end_date) {
        let start_ok = rules.is_valid_date(Some(start), false);
        let end_ok = rules.is_valid_date(Some(end), false);

        if !start_ok {
            errors.add("startDate", INVALID_START_DATE);
        }
        if !end_ok {
            errors.add("endDate", INVALID_END_DATE);
        } else if start_ok && !rules.is_valid_date_range(Some(start), Some(end)) {
            errors.add("endDate", END_BEFORE_START);
        }
    }

    if let Some(attachments) = values.attachments.as_deref() {
        let uploads = rules.validate_file_uploads(Some(attachments));
        if let Some(error) = uploads.first_error() {
            errors.add("attachments", error);
        }
    }

    errors.finish("job")
}
