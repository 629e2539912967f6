//! Validation of raw JSON form payloads.
//!
//! Hosts that only hold the JSON a screen produced pick the [`FormKind`] and
//! get back the serialised result object the screen expects.

use derive_more::Display;
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use strum_macros::{EnumIter, EnumString};
use thiserror::Error;

use crate::models::*;
use crate::utils::validation::*;

/// Every form a payload can be validated as
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FormKind {
    #[display("Login")]
    Login,
    #[display("Register")]
    Register,
    #[display("Forgot password")]
    ForgotPassword,
    #[display("Reset password")]
    ResetPassword,
    #[display("Change password")]
    ChangePassword,
    #[display("Job posting")]
    Job,
    #[display("Proposal")]
    Proposal,
    #[display("Proposal milestones")]
    ProposalMilestones,
    #[display("Profile")]
    Profile,
    #[display("Portfolio item")]
    PortfolioItem,
    #[display("Experience")]
    Experience,
    #[display("Education")]
    Education,
    #[display("Certification")]
    Certification,
    #[display("Single file upload")]
    FileUpload,
    #[display("Multiple file uploads")]
    FileUploads,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unable to read payload: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown form kind: {0}")]
    UnknownForm(String),
}

/// Validation outcome of a payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadReport {
    pub valid: bool,
    pub result: Value,
}

impl PayloadReport {
    fn new(valid: bool, result: impl Serialize) -> Result<Self, PayloadError> {
        Ok(Self {
            valid,
            result: serde_json::to_value(result)?,
        })
    }
}

/// Parses a kebab-case form name such as `portfolio-item`
pub fn parse_form_kind(name: &str) -> Result<FormKind, PayloadError> {
    name.parse::<FormKind>()
        .map_err(|_| PayloadError::UnknownForm(name.to_string()))
}

fn form<T: DeserializeOwned>(body: Value) -> Result<T, PayloadError> {
    Ok(serde_json::from_value(body)?)
}

fn form_report(result: ValidationResult) -> Result<PayloadReport, PayloadError> {
    PayloadReport::new(result.is_valid(), result)
}

/// Deserialises `json` as the form `kind` and validates it.
///
/// For the file kinds a body of the wrong shape is passed on as a missing
/// file or file list, so it yields the validator's own structural error
/// rather than [`PayloadError::Json`]. Non-numeric amounts and unknown job
/// types are read leniently and surface as field errors.
///
/// # Arguments
/// * `kind` - Which form the body holds
/// * `json` - The raw payload
/// * `rules` - The checks to validate with
///
/// # Returns
/// * `Ok(PayloadReport)` holding the serialised result object
/// * `Err(PayloadError::Json)` if the payload is not JSON or a field has an
///   unusable shape
pub fn validate_payload<R: Rules + ?Sized>(
    kind: FormKind,
    json: &str,
    rules: &R,
) -> Result<PayloadReport, PayloadError> {
    let body: Value = serde_json::from_str(json)?;
    info!("Validating {} payload", kind);

    match kind {
        FormKind::Login => form_report(validate_login_form(&form(body)?, rules)),
        FormKind::Register => form_report(validate_register_form(&form(body)?, rules)),
        FormKind::ForgotPassword => form_report(validate_forgot_password_form(&form(body)?, rules)),
        FormKind::ResetPassword => form_report(validate_reset_password_form(&form(body)?, rules)),
        FormKind::ChangePassword => form_report(validate_change_password_form(&form(body)?, rules)),
        FormKind::Job => form_report(validate_job_form(&form(body)?, rules)),
        FormKind::Proposal => form_report(validate_proposal_form(&form(body)?, rules)),
        FormKind::Profile => form_report(validate_profile_form(&form(body)?, rules)),
        FormKind::PortfolioItem => form_report(validate_portfolio_item_form(&form(body)?, rules)),
        FormKind::Experience => form_report(validate_experience_form(&form(body)?, rules)),
        FormKind::Education => form_report(validate_education_form(&form(body)?, rules)),
        FormKind::Certification => form_report(validate_certification_form(&form(body)?, rules)),
        FormKind::ProposalMilestones => {
            let milestones: Vec<MilestoneForm> = form(body)?;
            let result = validate_proposal_milestones(&milestones, rules);
            PayloadReport::new(result.is_valid(), result)
        }
        FormKind::FileUpload => {
            let file = serde_json::from_value::<FileDescriptor>(body).ok();
            let result = validate_file_upload(file.as_ref());
            PayloadReport::new(result.valid, result)
        }
        FormKind::FileUploads => {
            let files = serde_json::from_value::<Vec<FileDescriptor>>(body).ok();
            let result = rules.validate_file_uploads(files.as_deref());
            PayloadReport::new(result.valid, result)
        }
    }
}

/// Reads the payload at `path` and validates it as `kind`
pub fn validate_payload_file<R: Rules + ?Sized>(
    kind: FormKind,
    path: &Path,
    rules: &R,
) -> Result<PayloadReport, PayloadError> {
    let json = fs::read_to_string(path)?;
    validate_payload(kind, &json, rules)
}
