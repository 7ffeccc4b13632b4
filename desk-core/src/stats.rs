//! Dashboard statistics
//!
//! Aggregations backing the stat cards and the admin workload chart.
//! Pure reads over a ticket snapshot, re-derived on every render.

use serde::Serialize;
use shared::{Ticket, TicketStatus};
use std::collections::HashMap;

/// Stat card counts
///
/// `closed` tickets only show up in `total`, matching the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Count tickets per stat card
pub fn status_counts(tickets: &[Ticket]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for ticket in tickets {
        counts.total += 1;
        match ticket.status {
            TicketStatus::New => counts.new += 1,
            TicketStatus::InProgress => counts.in_progress += 1,
            TicketStatus::Resolved => counts.resolved += 1,
            TicketStatus::Closed => {}
        }
    }
    counts
}

/// One technician's bar in the workload chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianWorkload {
    pub name: String,
    /// Assigned tickets still open (New / In Progress)
    pub active: usize,
    /// Assigned tickets worked to completion (Resolved / Closed)
    pub resolved: usize,
}

impl TechnicianWorkload {
    pub fn total(&self) -> usize {
        self.active + self.resolved
    }
}

/// Per-technician workload, busiest first
///
/// Unassigned tickets are excluded. Technicians appear in first-seen order
/// before the stable sort, so ties keep a deterministic order.
pub fn technician_workload(tickets: &[Ticket]) -> Vec<TechnicianWorkload> {
    let mut rows: Vec<TechnicianWorkload> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for ticket in tickets {
        let Some(name) = ticket.resolved_by.as_deref() else {
            continue;
        };
        let at = *index.entry(name).or_insert_with(|| {
            rows.push(TechnicianWorkload {
                name: name.to_string(),
                active: 0,
                resolved: 0,
            });
            rows.len() - 1
        });
        if ticket.status.is_settled() {
            rows[at].resolved += 1;
        } else {
            rows[at].active += 1;
        }
    }

    rows.sort_by(|a, b| b.total().cmp(&a.total()));
    rows
}
