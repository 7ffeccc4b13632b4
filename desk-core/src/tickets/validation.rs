//! Draft validation helpers
//!
//! The request form is responsible for validating a draft before calling
//! [`TicketStore::create`](super::TicketStore::create); this module is the
//! reusable rule set for that caller. All field failures are collected into
//! a single validation error with per-field details, so the form can light
//! up every offending input at once.

use regex::Regex;
use shared::{AppError, AppResult, ProblemCategory, TicketDraft};
use std::sync::LazyLock;

// ── Text length limits ──────────────────────────────────────────────

/// Requester names and department
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Contact numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Problem details, comments, and the `Other` category detail
pub const MAX_TEXT_LEN: usize = 2000;

// ── Field shapes ────────────────────────────────────────────────────

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));

/// NNN-NNN-NNNN with optional parentheses and space/dash separators
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?(\d{3})\)?[- ]?(\d{3})[- ]?(\d{4})$").expect("valid phone regex")
});

/// Validate a form draft, collecting every field failure
///
/// Returns a single `ValidationFailed` error whose details map field names
/// (camelCase, as the form knows them) to messages.
pub fn validate_draft(draft: &TicketDraft) -> AppResult<()> {
    let mut failures: Vec<(&'static str, String)> = Vec::new();

    check_required_text(&mut failures, "firstName", &draft.first_name, "First name is required", MAX_NAME_LEN);
    check_required_text(&mut failures, "lastName", &draft.last_name, "Last name is required", MAX_NAME_LEN);

    // Department is optional on the form; only cap its length
    check_len(&mut failures, "department", &draft.department, MAX_NAME_LEN);

    if draft.email.trim().is_empty() {
        failures.push(("email", "Email is required".to_string()));
    } else if draft.email.len() > MAX_EMAIL_LEN || !EMAIL_RE.is_match(&draft.email) {
        failures.push(("email", "Email is invalid".to_string()));
    }

    if draft.contact_number.trim().is_empty() {
        failures.push(("contactNumber", "Contact number is required".to_string()));
    } else if draft.contact_number.len() > MAX_SHORT_TEXT_LEN
        || !PHONE_RE.is_match(&draft.contact_number)
    {
        failures.push(("contactNumber", "Please enter a valid phone number".to_string()));
    }

    if draft.problem_categories.is_empty() {
        failures.push(("problemCategories", "At least one category must be selected".to_string()));
    }

    if draft.problem_categories.contains(&ProblemCategory::Other)
        && draft.other_category_detail.trim().is_empty()
    {
        failures.push(("otherCategoryDetail", "Please specify the problem".to_string()));
    } else {
        check_len(&mut failures, "otherCategoryDetail", &draft.other_category_detail, MAX_TEXT_LEN);
    }

    check_required_text(&mut failures, "details", &draft.details, "Details are required", MAX_TEXT_LEN);
    check_len(&mut failures, "comments", &draft.comments, MAX_TEXT_LEN);

    if failures.is_empty() {
        return Ok(());
    }
    let mut err = AppError::validation("Ticket draft failed validation");
    for (field, message) in failures {
        err = err.with_detail(field, message);
    }
    Err(err)
}

fn check_required_text(
    failures: &mut Vec<(&'static str, String)>,
    field: &'static str,
    value: &str,
    required_msg: &str,
    max_len: usize,
) {
    if value.trim().is_empty() {
        failures.push((field, required_msg.to_string()));
    } else if value.len() > max_len {
        failures.push((
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
}

fn check_len(
    failures: &mut Vec<(&'static str, String)>,
    field: &'static str,
    value: &str,
    max_len: usize,
) {
    if value.len() > max_len {
        failures.push((
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
}
