//! Proposal form and its milestones

use log::debug;

use super::is_blank;
use crate::models::{MilestoneForm, ProposalForm};
use crate::utils::error_messages::*;
use crate::utils::validation::{FieldErrors, MilestonesValidation, Rules, ValidationResult};

fn check_milestone<R: Rules + ?Sized>(milestone: &MilestoneForm, rules: &R) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(milestone.title.as_deref()) {
        errors.add("title", MILESTONE_TITLE_REQUIRED);
    }
    if is_blank(milestone.description.as_deref()) {
        errors.add("description", MILESTONE_DESCRIPTION_REQUIRED);
    }
    if !rules.is_valid_amount(milestone.amount) {
        errors.add("amount", INVALID_MILESTONE_AMOUNT);
    }
    if !rules.is_valid_date(milestone.due_date.as_deref(), true) {
        errors.add("dueDate", INVALID_DUE_DATE);
    }

    errors
}

/// Validates each milestone on its own. The result holds one error map per
/// milestone, in the same order, empty for milestones that passed.
pub fn validate_proposal_milestones<R: Rules + ?Sized>(
    milestones: &[MilestoneForm],
    rules: &R,
) -> MilestonesValidation {
    let result: MilestonesValidation = milestones
        .iter()
        .map(|milestone| check_milestone(milestone, rules))
        .collect();

    if !result.is_valid() {
        let failing = result.errors().iter().filter(|e| !e.is_empty()).count();
        debug!("{} of {} milestone(s) rejected", failing, milestones.len());
    }
    result
}

pub fn validate_proposal_form<R: Rules + ?Sized>(
    values: &ProposalForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if is_blank(values.cover_letter.as_deref()) {
        errors.add("coverLetter", COVER_LETTER_REQUIRED);
    }

    if values.proposed_rate.is_some() && !rules.is_valid_amount(values.proposed_rate) {
        errors.add("proposedRate", INVALID_PROPOSED_RATE);
    }
    if values.proposed_budget.is_some() && !rules.is_valid_amount(values.proposed_budget) {
        errors.add("proposedBudget", INVALID_PROPOSED_BUDGET);
    }

    if !values.milestones.is_empty()
        && !validate_proposal_milestones(&values.milestones, rules).is_valid()
    {
        errors.add("milestones", INVALID_MILESTONES);
    }

    if let Some(attachments) = values.attachments.as_deref() {
        let uploads = rules.validate_file_uploads(Some(attachments));
        if let Some(error) = uploads.first_error() {
            errors.add("attachments", error);
        }
    }

    errors.finish("proposal")
}
