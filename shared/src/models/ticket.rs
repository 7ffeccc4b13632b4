//! Ticket Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Ticket lifecycle status
///
/// The serialized strings are part of the UI/CSV contract and must not change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TicketStatus {
    #[default]
    #[serde(rename = "New")]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Resolved")]
    Resolved,
    #[serde(rename = "Closed")]
    Closed,
}

impl TicketStatus {
    /// All statuses in dashboard menu order
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::New,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// Display label (same string the serialized form uses)
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    /// A ticket in this status has been worked to completion
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Problem category vocabulary
///
/// Fixed set shared with the request form's checkboxes; the serialized
/// strings are part of the UI/CSV contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProblemCategory {
    Computer,
    Network,
    Other,
    Email,
    Phone,
}

impl ProblemCategory {
    /// All categories in form checkbox order
    pub const ALL: [ProblemCategory; 5] = [
        ProblemCategory::Computer,
        ProblemCategory::Network,
        ProblemCategory::Other,
        ProblemCategory::Email,
        ProblemCategory::Phone,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Computer => "Computer",
            Self::Network => "Network",
            Self::Other => "Other",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }
}

impl std::fmt::Display for ProblemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ticket entity (one IT service request)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique id, `TICKET-NNN` (monotonic sequence, never reused)
    pub id: String,
    /// Identity that submitted the ticket; never mutated
    pub requester_id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub email: String,
    pub contact_number: String,
    /// At least one category; `Other` requires `other_category_detail`
    pub problem_categories: Vec<ProblemCategory>,
    pub other_category_detail: String,
    pub details: String,
    pub comments: String,
    /// Attachment as a `data:` URL, set at creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: TicketStatus,
    pub submitted_at: Timestamp,
    /// Technician name; set on first resolution or by explicit assignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    /// Present if and only if `status == Closed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<Timestamp>,
    /// Free-form admin annotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Ticket {
    /// Problem column text: joined categories, plus the `Other` detail when given
    ///
    /// `["Computer", "Other"]` with detail "printer on fire" renders as
    /// `"Computer, Other: printer on fire"`. Shared by the dashboard column,
    /// the search index, and the CSV export.
    pub fn problem_summary(&self) -> String {
        let joined = self
            .problem_categories
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ");
        if self.other_category_detail.is_empty() {
            joined
        } else {
            format!("{}: {}", joined, self.other_category_detail)
        }
    }
}

/// Create ticket payload (the request form's fields)
///
/// Everything the requester supplies; id, requester identity, status and
/// timestamps are assigned by the store at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub email: String,
    pub contact_number: String,
    pub problem_categories: Vec<ProblemCategory>,
    #[serde(default)]
    pub other_category_detail: String,
    pub details: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialized_strings() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let back: TicketStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(back, TicketStatus::InProgress);
    }

    #[test]
    fn test_status_labels_match_contract() {
        let labels: Vec<&str> = TicketStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["New", "In Progress", "Resolved", "Closed"]);
    }

    #[test]
    fn test_category_vocabulary() {
        let labels: Vec<&str> = ProblemCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Computer", "Network", "Other", "Email", "Phone"]);
    }

    #[test]
    fn test_problem_summary_with_other_detail() {
        let ticket = Ticket {
            id: "TICKET-001".to_string(),
            requester_id: "user-1".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            department: "Marketing".to_string(),
            email: "alice.j@example.com".to_string(),
            contact_number: "555-123-4567".to_string(),
            problem_categories: vec![ProblemCategory::Computer, ProblemCategory::Other],
            other_category_detail: "printer on fire".to_string(),
            details: "help".to_string(),
            comments: String::new(),
            image_url: None,
            status: TicketStatus::New,
            submitted_at: 0,
            resolved_by: None,
            closed_at: None,
            remarks: None,
        };
        assert_eq!(ticket.problem_summary(), "Computer, Other: printer on fire");
    }

    #[test]
    fn test_ticket_serializes_camel_case() {
        let ticket = Ticket {
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
            submitted_at: 1_785_974_400_000,
            resolved_by: None,
            closed_at: None,
            remarks: None,
        };
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["requesterId"], "user-1");
        assert_eq!(json["submittedAt"], 1_785_974_400_000_i64);
        // Unset options are omitted entirely
        assert!(json.get("closedAt").is_none());
    }
}
