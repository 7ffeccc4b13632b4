//! In-memory ticket store
//!
//! Owns the ordered ticket collection (newest first). State lives in
//! process memory only and is lost when the process exits; every other
//! component works on read-only snapshots or pure-function results.

use super::assigner::TechnicianAssigner;
use super::transition;
use shared::{Ticket, TicketDraft, TicketStatus, Timestamp};
use tracing::{info, warn};

/// Ordered in-memory ticket collection with a monotonic id sequence
///
/// Ids are `TICKET-NNN` with a zero-padded counter that is never reused,
/// so ids stay unique even if the collection is seeded sparsely or later
/// gains a delete operation.
#[derive(Debug)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    next_seq: u64,
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore {
    /// Empty store; the first ticket becomes `TICKET-001`
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_seq: 1,
        }
    }

    /// Seed the store and resume the counter after the highest existing id
    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        let next_seq = tickets
            .iter()
            .filter_map(|t| t.id.strip_prefix("TICKET-"))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        Self { tickets, next_seq }
    }

    /// Create a ticket from a form draft
    ///
    /// Assigns the next id, stamps the submission time, forces status `New`
    /// and leaves the triage fields unset. The new ticket is prepended
    /// (newest first) and a clone returned to the caller.
    pub fn create(&mut self, draft: TicketDraft, requester_id: &str, now: Timestamp) -> Ticket {
        let id = format!("TICKET-{:03}", self.next_seq);
        self.next_seq += 1;

        let ticket = Ticket {
            id,
            requester_id: requester_id.to_string(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            department: draft.department,
            email: draft.email,
            contact_number: draft.contact_number,
            problem_categories: draft.problem_categories,
            other_category_detail: draft.other_category_detail,
            details: draft.details,
            comments: draft.comments,
            image_url: draft.image_url,
            status: TicketStatus::New,
            submitted_at: now,
            resolved_by: None,
            closed_at: None,
            remarks: None,
        };
        info!(ticket_id = %ticket.id, requester_id, "ticket created");
        self.tickets.insert(0, ticket.clone());
        ticket
    }

    /// Apply a pure transformation to the ticket matching `id`
    ///
    /// Collection order and every other ticket are untouched. A missing id
    /// (stale reference from a concurrent render) is a logged no-op.
    pub fn update<F>(&mut self, id: &str, patcher: F) -> bool
    where
        F: FnOnce(Ticket) -> Ticket,
    {
        match self.tickets.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = patcher(slot.clone());
                true
            }
            None => {
                warn!(ticket_id = %id, "update for unknown ticket ignored");
                false
            }
        }
    }

    /// Status-menu handler: run the transition engine on one ticket
    pub fn change_status(
        &mut self,
        id: &str,
        new_status: TicketStatus,
        now: Timestamp,
        assigner: &dyn TechnicianAssigner,
    ) -> bool {
        self.update(id, |t| {
            transition::apply_status_change(t, new_status, now, assigner)
        })
    }

    /// Technician-edit handler
    pub fn assign_technician(&mut self, id: &str, name: &str) -> bool {
        self.update(id, |t| transition::assign_technician(t, name))
    }

    /// Remarks-edit handler
    pub fn set_remarks(&mut self, id: &str, text: &str) -> bool {
        self.update(id, |t| transition::set_remarks(t, text))
    }

    /// Ticket by id
    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Read-only snapshot of the collection, newest first
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
