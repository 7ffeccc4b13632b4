//! Status transition engine
//!
//! Pure functions mapping (ticket, change) to an updated ticket. Secondary
//! fields are derived here and nowhere else:
//!
//! - `resolved_by` is filled on the first transition into a settled status
//!   (via the injected [`TechnicianAssigner`]) and never cleared by a
//!   status change afterwards; only explicit reassignment touches it.
//! - `closed_at` is present exactly while the status is `Closed`.
//!
//! All functions are total over a valid ticket; none can fail.

use super::assigner::TechnicianAssigner;
use shared::{Ticket, TicketStatus, Timestamp};

/// Apply a status change, deriving `resolved_by` and `closed_at`
pub fn apply_status_change(
    ticket: Ticket,
    new_status: TicketStatus,
    now: Timestamp,
    assigner: &dyn TechnicianAssigner,
) -> Ticket {
    let mut updated = ticket;

    // First transition into Resolved/Closed picks a technician; an existing
    // assignment is sticky across every later status change.
    if new_status.is_settled() && updated.resolved_by.is_none() {
        updated.resolved_by = assigner.assign(&updated);
    }

    // Closing stamps the close time; any other target (including re-opening
    // a closed ticket) clears it.
    updated.closed_at = if new_status == TicketStatus::Closed {
        Some(now)
    } else {
        None
    };

    updated.status = new_status;
    updated
}

/// Explicitly set (or with an empty name, unset) the assigned technician
///
/// Override path independent of status; `closed_at` is not touched.
pub fn assign_technician(ticket: Ticket, name: &str) -> Ticket {
    let mut updated = ticket;
    updated.resolved_by = if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    };
    updated
}

/// Set the admin remarks verbatim
pub fn set_remarks(ticket: Ticket, text: &str) -> Ticket {
    let mut updated = ticket;
    updated.remarks = if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    };
    updated
}
