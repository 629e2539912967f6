//! User-facing validation messages, rendered inline by the form screens

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const EMAIL_REQUIRED: &str = "Email is required";

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const WEAK_PASSWORD: &str = "Password must be at least 8 characters and include uppercase, lowercase, number and special character";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const CURRENT_PASSWORD_REQUIRED: &str = "Current password is required";
pub const RESET_TOKEN_REQUIRED: &str = "Reset token is required";

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const TERMS_NOT_ACCEPTED: &str = "You must agree to the terms and conditions";

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const INVALID_BUDGET: &str = "Please enter a valid budget amount";
pub const INVALID_MIN_BUDGET: &str = "Please enter a valid minimum budget";
pub const INVALID_MAX_BUDGET: &str = "Please enter a valid maximum budget";
pub const MIN_BUDGET_EXCEEDS_MAX: &str = "Maximum budget must be greater than or equal to minimum budget";
pub const INVALID_HOURLY_RATE: &str = "Please enter a valid hourly rate";
pub const INVALID_ESTIMATED_HOURS: &str = "Estimated hours must be greater than 0";
pub const SKILLS_REQUIRED: &str = "At least one skill is required";
pub const INVALID_START_DATE: &str = "Please enter a valid start date";
pub const INVALID_END_DATE: &str = "Please enter a valid end date";
pub const END_BEFORE_START: &str = "End date must be after start date";

pub const COVER_LETTER_REQUIRED: &str = "Cover letter is required";
pub const INVALID_PROPOSED_RATE: &str = "Please enter a valid proposed rate";
pub const INVALID_PROPOSED_BUDGET: &str = "Please enter a valid proposed budget";
pub const INVALID_MILESTONES: &str = "One or more milestones are invalid";
pub const MILESTONE_TITLE_REQUIRED: &str = "Milestone title is required";
pub const MILESTONE_DESCRIPTION_REQUIRED: &str = "Milestone description is required";
pub const INVALID_MILESTONE_AMOUNT: &str = "Please enter a valid milestone amount";
pub const INVALID_DUE_DATE: &str = "Due date must be a valid date in the future";

pub const BIO_REQUIRED: &str = "Bio is required";
pub const INVALID_URL: &str = "Please enter a valid URL";
pub const COMPANY_REQUIRED: &str = "Company is required";
pub const INSTITUTION_REQUIRED: &str = "Institution is required";
pub const DEGREE_REQUIRED: &str = "Degree is required";
pub const FIELD_OF_STUDY_REQUIRED: &str = "Field of study is required";
pub const CERTIFICATION_NAME_REQUIRED: &str = "Certification name is required";
pub const ISSUING_ORGANIZATION_REQUIRED: &str = "Issuing organization is required";
pub const INVALID_ISSUE_DATE: &str = "Please enter a valid issue date";
pub const INVALID_EXPIRATION_DATE: &str = "Expiration date must be a valid date after the issue date";

pub const INVALID_FILE_OBJECT: &str = "Invalid file object";
pub const INVALID_FILES_ARRAY: &str = "Invalid files array";
