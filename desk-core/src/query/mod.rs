//! Client-side query engine
//!
//! Pure filter + sort over a ticket snapshot. The engine never mutates its
//! input; it returns a freshly ordered collection for the dashboard table.
//!
//! Field access goes through an explicit stringification table
//! ([`TicketField::text`]) instead of reflecting over the struct, so search
//! and sort behavior is pinned down per field.

use serde::{Deserialize, Serialize};
use shared::{AppError, Ticket, Timestamp, util::format_locale_date};
use std::cmp::Ordering;
use std::str::FromStr;

/// One searchable / sortable ticket field
///
/// `FromStr` accepts the frontend's camelCase key names, so unknown sort
/// keys are rejected at the call boundary before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TicketField {
    Id,
    RequesterId,
    FirstName,
    LastName,
    Department,
    Email,
    ContactNumber,
    Problem,
    Details,
    Comments,
    ImageUrl,
    Status,
    SubmittedAt,
    ResolvedBy,
    ClosedAt,
    Remarks,
}

impl TicketField {
    /// Every field, in table column order; the search index iterates this
    pub const ALL: [TicketField; 16] = [
        TicketField::Id,
        TicketField::RequesterId,
        TicketField::FirstName,
        TicketField::LastName,
        TicketField::Department,
        TicketField::Email,
        TicketField::ContactNumber,
        TicketField::Problem,
        TicketField::Details,
        TicketField::Comments,
        TicketField::ImageUrl,
        TicketField::Status,
        TicketField::SubmittedAt,
        TicketField::ResolvedBy,
        TicketField::ClosedAt,
        TicketField::Remarks,
    ];

    /// Display text of the field for one ticket; `None` when the value is absent
    ///
    /// Timestamps render as locale dates and the problem field as the joined
    /// category summary, so searching matches what the table shows.
    pub fn text(&self, ticket: &Ticket) -> Option<String> {
        match self {
            Self::Id => Some(ticket.id.clone()),
            Self::RequesterId => Some(ticket.requester_id.clone()),
            Self::FirstName => Some(ticket.first_name.clone()),
            Self::LastName => Some(ticket.last_name.clone()),
            Self::Department => Some(ticket.department.clone()),
            Self::Email => Some(ticket.email.clone()),
            Self::ContactNumber => Some(ticket.contact_number.clone()),
            Self::Problem => Some(ticket.problem_summary()),
            Self::Details => Some(ticket.details.clone()),
            Self::Comments => Some(ticket.comments.clone()),
            Self::ImageUrl => ticket.image_url.clone(),
            Self::Status => Some(ticket.status.to_string()),
            Self::SubmittedAt => Some(format_locale_date(ticket.submitted_at)),
            Self::ResolvedBy => ticket.resolved_by.clone(),
            Self::ClosedAt => ticket.closed_at.map(format_locale_date),
            Self::Remarks => ticket.remarks.clone(),
        }
    }

    /// Comparison value for sorting; `None` when the value is absent
    ///
    /// Timestamps compare numerically, strings case-insensitively.
    fn sort_value(&self, ticket: &Ticket) -> Option<SortValue> {
        match self {
            Self::SubmittedAt => Some(SortValue::Millis(ticket.submitted_at)),
            Self::ClosedAt => ticket.closed_at.map(SortValue::Millis),
            _ => self.text(ticket).map(|s| SortValue::Text(s.to_lowercase())),
        }
    }
}

impl FromStr for TicketField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "id" => Self::Id,
            "requesterId" => Self::RequesterId,
            "firstName" => Self::FirstName,
            "lastName" => Self::LastName,
            "department" => Self::Department,
            "email" => Self::Email,
            "contactNumber" => Self::ContactNumber,
            "problem" | "problemCategories" => Self::Problem,
            "details" => Self::Details,
            "comments" => Self::Comments,
            "imageUrl" => Self::ImageUrl,
            "status" => Self::Status,
            "submittedAt" => Self::SubmittedAt,
            "resolvedBy" => Self::ResolvedBy,
            "closedAt" => Self::ClosedAt,
            "remarks" => Self::Remarks,
            _ => return Err(AppError::invalid_request(format!("unknown sort key: {s}"))),
        };
        Ok(field)
    }
}

/// Typed comparison value; each field yields exactly one variant
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Text(String),
    Millis(Timestamp),
}

/// Sort direction for a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Clicking an already-sorted header flips the direction
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Selected sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: TicketField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: TicketField, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

impl Default for SortSpec {
    /// The dashboard's initial state: newest submissions first
    fn default() -> Self {
        Self::new(TicketField::SubmittedAt, SortDirection::Descending)
    }
}

/// Filter and sort a ticket snapshot
///
/// - Filter: a ticket is retained iff any field's text contains
///   `filter_text`, case-insensitively. Empty text retains everything.
/// - Sort: stable by the selected field. Tickets whose field value is
///   absent always sort after present values, in both directions, and
///   compare equal among themselves; `None` keeps the incoming order.
pub fn query(tickets: &[Ticket], filter_text: &str, sort: Option<&SortSpec>) -> Vec<Ticket> {
    let needle = filter_text.to_lowercase();
    let mut rows: Vec<Ticket> = if needle.is_empty() {
        tickets.to_vec()
    } else {
        tickets
            .iter()
            .filter(|t| matches_filter(t, &needle))
            .cloned()
            .collect()
    };

    if let Some(spec) = sort {
        rows.sort_by(|a, b| {
            compare(
                spec.key.sort_value(a),
                spec.key.sort_value(b),
                spec.direction,
            )
        });
    }
    rows
}

fn matches_filter(ticket: &Ticket, needle: &str) -> bool {
    TicketField::ALL
        .iter()
        .any(|field| field.text(ticket).is_some_and(|s| s.to_lowercase().contains(needle)))
}

/// Null-last comparison; direction only applies between two present values
fn compare(a: Option<SortValue>, b: Option<SortValue>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(&b),
            SortDirection::Descending => b.cmp(&a),
        },
    }
}
