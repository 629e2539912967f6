//! Form values submitted by the marketplace screens.
//!
//! Every record mirrors the JSON the screens produce: camelCase keys, every
//! field optional. A missing key reads as an empty or absent value, and
//! dates stay as the strings the date pickers produce.

use derive_more::Display;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum_macros::EnumIter;

pub use crate::utils::validation::FileDescriptor;

/// How a job is paid
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    #[display("Fixed price")]
    FixedPrice,
    #[display("Hourly")]
    Hourly,
    #[display("Milestone based")]
    MilestoneBased,
}

impl JobType {
    /// Job types paid from a single budget
    pub fn uses_budget(self) -> bool {
        matches!(self, JobType::FixedPrice | JobType::MilestoneBased)
    }
}

/// Reads a numeric field without rejecting the payload.
///
/// `null` and a missing key are absent. Anything that is not a JSON number,
/// such as `"5000"`, becomes `NaN`, which no amount check accepts, so the
/// form reports it against the field.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|value| value.as_f64().unwrap_or(f64::NAN)))
}

/// Reads the job `type`, treating an unknown name as no type at all
fn lenient_job_type<'de, D>(deserializer: D) -> Result<Option<JobType>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match serde_json::from_value(value.clone()) {
        Ok(job_type) => Ok(Some(job_type)),
        Err(_) => {
            warn!("Ignoring unknown job type {}", value);
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub remember: bool,
    pub use_biometrics: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForgotPasswordForm {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetPasswordForm {
    pub token: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordForm {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobForm {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient_job_type")]
    pub job_type: Option<JobType>,
    #[serde(deserialize_with = "lenient_number")]
    pub budget: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub min_budget: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub max_budget: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub hourly_rate: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub estimated_hours: Option<f64>,
    pub required_skills: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub attachments: Option<Vec<FileDescriptor>>,
}

/// One payment step of a proposal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MilestoneForm {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub amount: Option<f64>,
    pub due_date: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalForm {
    pub cover_letter: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub proposed_rate: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub proposed_budget: Option<f64>,
    pub milestones: Vec<MilestoneForm>,
    pub attachments: Option<Vec<FileDescriptor>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub title: Option<String>,
    pub bio: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub hourly_rate: Option<f64>,
    pub skills: Vec<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub website: Option<String>,
    pub kaggle_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioItemForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub kaggle_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceForm {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationForm {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationForm {
    pub name: Option<String>,
    pub issuing_organization: Option<String>,
    pub issue_date: Option<String>,
    pub expiration_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}
