//! Role gate
//!
//! Derives the subset of tickets a session may see. A pure projection,
//! re-derived on every render and never cached across mutations. This is
//! UI scoping, not access control; see [`UserRole`](shared::UserRole).

use crate::auth::Session;
use shared::Ticket;

/// Tickets visible to the session
///
/// Admins see everything; plain users only their own submissions.
pub fn visible_tickets(tickets: &[Ticket], session: &Session) -> Vec<Ticket> {
    if session.is_admin() {
        return tickets.to_vec();
    }
    tickets
        .iter()
        .filter(|t| t.requester_id == session.user().id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeskConfig;
    use shared::{ProblemCategory, TicketStatus};

    fn ticket(id: &str, requester_id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            requester_id: requester_id.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            department: "Marketing".to_string(),
            email: "alice.j@example.com".to_string(),
            contact_number: "555-123-4567".to_string(),
            problem_categories: vec![ProblemCategory::Phone],
            other_category_detail: String::new(),
            details: "dead handset".to_string(),
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
    fn test_user_sees_only_own_tickets() {
        let config = DeskConfig::default();
        let session = Session::new(config.current_user.clone());
        let tickets = vec![ticket("A", "user-1"), ticket("B", "user-2")];

        let visible = visible_tickets(&tickets, &session);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].requester_id, "user-1");
    }

    #[test]
    fn test_admin_sees_everything() {
        let config = DeskConfig::default();
        let mut session = Session::new(config.current_user.clone());
        session.login_admin("admin123", &config).unwrap();

        let tickets = vec![ticket("A", "user-1"), ticket("B", "user-2")];
        assert_eq!(visible_tickets(&tickets, &session).len(), 2);
    }

    #[test]
    fn test_admin_role_without_authentication_is_gated() {
        // A session can only hold the admin role via login, so a fresh
        // session stands in for "role claimed, secret check not passed".
        let config = DeskConfig::default();
        let mut session = Session::new(config.current_user.clone());
        assert!(session.login_admin("wrong", &config).is_err());

        let tickets = vec![ticket("A", "user-1"), ticket("B", "user-2")];
        assert_eq!(visible_tickets(&tickets, &session).len(), 1);
    }
}
