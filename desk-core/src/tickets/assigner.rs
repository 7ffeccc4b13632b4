//! Technician assignment strategies
//!
//! Auto-assignment on first resolution is an injected decision rather than
//! a hardwired random pick, so the transition engine stays deterministic
//! under test. The random roster pick the dashboard ships with is one
//! implementation of the strategy.

use shared::Ticket;

/// Decides which technician takes a ticket on first resolution
pub trait TechnicianAssigner {
    /// Pick a technician for the ticket, or `None` to leave it unassigned
    fn assign(&self, ticket: &Ticket) -> Option<String>;
}

/// Uniform random pick from a fixed roster
#[derive(Debug, Clone)]
pub struct RosterAssigner {
    roster: Vec<String>,
}

impl RosterAssigner {
    pub fn new(roster: Vec<String>) -> Self {
        Self { roster }
    }
}

impl TechnicianAssigner for RosterAssigner {
    fn assign(&self, _ticket: &Ticket) -> Option<String> {
        use rand::Rng;
        if self.roster.is_empty() {
            return None;
        }
        let idx = rand::thread_rng().gen_range(0..self.roster.len());
        Some(self.roster[idx].clone())
    }
}

/// Always assigns the same technician
///
/// Deterministic strategy for tests and single-technician desks.
#[derive(Debug, Clone)]
pub struct FixedAssigner(pub String);

impl TechnicianAssigner for FixedAssigner {
    fn assign(&self, _ticket: &Ticket) -> Option<String> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ProblemCategory, TicketStatus};

    fn test_ticket() -> Ticket {
        Ticket {
            id: "TICKET-001".to_string(),
            requester_id: "user-1".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            department: "Marketing".to_string(),
            email: "alice.j@example.com".to_string(),
            contact_number: "555-123-4567".to_string(),
            problem_categories: vec![ProblemCategory::Network],
            other_category_detail: String::new(),
            details: "No connectivity".to_string(),
            comments: String::new(),
            image_url: None,
            status: TicketStatus::New,
            submitted_at: 0,
            resolved_by: None,
            closed_at: None,
            remarks: None,
        }
    }

    #[test]
    fn test_roster_pick_is_from_roster() {
        let roster = vec!["John Doe".to_string(), "Jane Smith".to_string()];
        let assigner = RosterAssigner::new(roster.clone());
        for _ in 0..20 {
            let picked = assigner.assign(&test_ticket()).unwrap();
            assert!(roster.contains(&picked));
        }
    }

    #[test]
    fn test_empty_roster_assigns_nothing() {
        let assigner = RosterAssigner::new(Vec::new());
        assert_eq!(assigner.assign(&test_ticket()), None);
    }

    #[test]
    fn test_fixed_assigner() {
        let assigner = FixedAssigner("Jane Smith".to_string());
        assert_eq!(assigner.assign(&test_ticket()).as_deref(), Some("Jane Smith"));
    }
}
