//! Freelancer profile forms: the profile itself, portfolio items, work
//! experience, education and certifications

use super::{is_blank, non_blank};
use crate::models::{
    CertificationForm, EducationForm, ExperienceForm, PortfolioItemForm, ProfileForm,
};
use crate::utils::error_messages::*;
use crate::utils::validation::{FieldErrors, Rules, ValidationResult};

/// Optional links are only checked when filled in
fn check_optional_url<R: Rules + ?Sized>(
    errors: &mut FieldErrors,
    field: &str,
    url: Option<&str>,
    rules: &R,
) {
    if let Some(url) = non_blank(url) {
        if !rules.validate_url(Some(url), false) {
            errors.add(field, INVALID_URL);
        }
    }
}

/// Start date is required; the end date is required unless the entry is
/// still ongoing, in which case it is ignored
fn check_period<R: Rules + ?Sized>(
    errors: &mut FieldErrors,
    start: Option<&str>,
    end: Option<&str>,
    is_current: bool,
    rules: &R,
) {
    let start_ok = rules.is_valid_date(start, false);
    if !start_ok {
        errors.add("startDate", INVALID_START_DATE);
    }

    if is_current {
        return;
    }

    if !rules.is_valid_date(end, false) {
        errors.add("endDate", INVALID_END_DATE);
    } else if start_ok && !rules.is_valid_date_range(start, end) {
        errors.add("endDate", END_BEFORE_START);
    }
}

pub fn validate_profile_form<R: Rules + ?Sized>(
    values: &ProfileForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if is_blank(values.title.as_deref()) {
        errors.add("title", TITLE_REQUIRED);
    }
    if is_blank(values.bio.as_deref()) {
        errors.add("bio", BIO_REQUIRED);
    }
    if !rules.is_valid_amount(values.hourly_rate) {
        errors.add("hourlyRate", INVALID_HOURLY_RATE);
    }
    if values.skills.is_empty() {
        errors.add("skills", SKILLS_REQUIRED);
    }

    check_optional_url(&mut errors, "githubUrl", values.github_url.as_deref(), rules);
    check_optional_url(&mut errors, "linkedinUrl", values.linkedin_url.as_deref(), rules);
    check_optional_url(&mut errors, "website", values.website.as_deref(), rules);
    check_optional_url(&mut errors, "kaggleUrl", values.kaggle_url.as_deref(), rules);

    errors.finish("profile")
}

pub fn validate_portfolio_item_form<R: Rules + ?Sized>(
    values: &PortfolioItemForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if is_blank(values.title.as_deref()) {
        errors.add("title", TITLE_REQUIRED);
    }
    if is_blank(values.description.as_deref()) {
        errors.add("description", DESCRIPTION_REQUIRED);
    }

    check_optional_url(&mut errors, "projectUrl", values.project_url.as_deref(), rules);
    check_optional_url(&mut errors, "githubUrl", values.github_url.as_deref(), rules);
    check_optional_url(&mut errors, "kaggleUrl", values.kaggle_url.as_deref(), rules);

    // Dates are optional here, but when both are given they must make sense
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

    errors.finish("portfolio item")
}

pub fn validate_experience_form<R: Rules + ?Sized>(
    values: &ExperienceForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if is_blank(values.title.as_deref()) {
        errors.add("title", TITLE_REQUIRED);
    }
    if is_blank(values.company.as_deref()) {
        errors.add("company", COMPANY_REQUIRED);
    }
    if is_blank(values.description.as_deref()) {
        errors.add("description", DESCRIPTION_REQUIRED);
    }

    check_period(
        &mut errors,
        values.start_date.as_deref(),
        values.end_date.as_deref(),
        values.is_current,
        rules,
    );

    errors.finish("experience")
}

pub fn validate_education_form<R: Rules + ?Sized>(
    values: &EducationForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if is_blank(values.institution.as_deref()) {
        errors.add("institution", INSTITUTION_REQUIRED);
    }
    if is_blank(values.degree.as_deref()) {
        errors.add("degree", DEGREE_REQUIRED);
    }
    if is_blank(values.field_of_study.as_deref()) {
        errors.add("fieldOfStudy", FIELD_OF_STUDY_REQUIRED);
    }
    if is_blank(values.description.as_deref()) {
        errors.add("description", DESCRIPTION_REQUIRED);
    }

    check_period(
        &mut errors,
        values.start_date.as_deref(),
        values.end_date.as_deref(),
        values.is_current,
        rules,
    );

    errors.finish("education")
}

/// Certifications may not expire; when they do, expiry must follow issue
pub fn validate_certification_form<R: Rules + ?Sized>(
    values: &CertificationForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if is_blank(values.name.as_deref()) {
        errors.add("name", CERTIFICATION_NAME_REQUIRED);
    }
    if is_blank(values.issuing_organization.as_deref()) {
        errors.add("issuingOrganization", ISSUING_ORGANIZATION_REQUIRED);
    }

    let issue_date = values.issue_date.as_deref();
    if !rules.is_valid_date(issue_date, false) {
        errors.add("issueDate", INVALID_ISSUE_DATE);
    }

    if let Some(expiration) = non_blank(values.expiration_date.as_deref()) {
        if !rules.is_valid_date(Some(expiration), false)
            || !rules.is_valid_date_range(issue_date, Some(expiration))
        {
            errors.add("expirationDate", INVALID_EXPIRATION_DATE);
        }
    }

    check_optional_url(&mut errors, "credentialUrl", values.credential_url.as_deref(), rules);

    errors.finish("certification")
}
