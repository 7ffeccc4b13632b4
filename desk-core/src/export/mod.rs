//! CSV export
//!
//! Projects a ticket snapshot into the spreadsheet the dashboard's Export
//! button downloads. Every data field is double-quoted with internal quotes
//! doubled, so the output round-trips through any standard CSV parser.

use shared::{Ticket, util::format_locale_date};

/// Export column headers, in order
pub const CSV_HEADERS: [&str; 11] = [
    "Ticket ID",
    "First Name",
    "Last Name",
    "Contact Number",
    "Department",
    "Problem",
    "Status",
    "Assigned To",
    "Date Raised",
    "Date Closed",
    "Remarks",
];

/// Quote one CSV field, doubling embedded quotes
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Project tickets into CSV text, one row per ticket in the given order
///
/// Absent values render as empty strings; dates as locale dates.
pub fn to_csv(tickets: &[Ticket]) -> String {
    let mut lines = Vec::with_capacity(tickets.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for ticket in tickets {
        let row = [
            csv_field(&ticket.id),
            csv_field(&ticket.first_name),
            csv_field(&ticket.last_name),
            csv_field(&ticket.contact_number),
            csv_field(&ticket.department),
            csv_field(&ticket.problem_summary()),
            csv_field(ticket.status.label()),
            csv_field(ticket.resolved_by.as_deref().unwrap_or("")),
            csv_field(&format_locale_date(ticket.submitted_at)),
            csv_field(&ticket.closed_at.map(format_locale_date).unwrap_or_default()),
            csv_field(ticket.remarks.as_deref().unwrap_or("")),
        ]
        .join(",");
        lines.push(row);
    }

    lines.join("\n")
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
            problem_categories: vec![ProblemCategory::Computer, ProblemCategory::Other],
            other_category_detail: "coffee in keyboard".to_string(),
            details: "Keys sticking".to_string(),
            comments: String::new(),
            image_url: None,
            status: TicketStatus::New,
            // 2026-08-06 UTC
            submitted_at: 1_785_974_400_000,
            resolved_by: None,
            closed_at: None,
            remarks: None,
        }
    }

    #[test]
    fn test_header_row() {
        let csv = to_csv(&[]);
        assert_eq!(
            csv,
            "Ticket ID,First Name,Last Name,Contact Number,Department,Problem,Status,Assigned To,Date Raised,Date Closed,Remarks"
        );
    }

    #[test]
    fn test_quotes_are_doubled() {
        let mut ticket = test_ticket();
        ticket.remarks = Some("Said \"hello\", fine".to_string());
        let csv = to_csv(&[ticket]);
        assert!(csv.ends_with("\"Said \"\"hello\"\", fine\""));
    }

    #[test]
    fn test_row_shape_and_absent_values() {
        let csv = to_csv(&[test_ticket()]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"TICKET-001\",\"Alice\",\"Johnson\",\"555-123-4567\",\"Marketing\",\
             \"Computer, Other: coffee in keyboard\",\"New\",\"\",\"8/6/2026\",\"\",\"\""
        );
    }

    #[test]
    fn test_closed_ticket_renders_close_date() {
        let mut ticket = test_ticket();
        ticket.status = TicketStatus::Closed;
        ticket.resolved_by = Some("Jane Smith".to_string());
        ticket.closed_at = Some(1_785_974_400_000 + 86_400_000);
        let csv = to_csv(&[ticket]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Closed\",\"Jane Smith\",\"8/6/2026\",\"8/7/2026\""));
    }

    #[test]
    fn test_round_trip_through_a_csv_parser() {
        // Minimal RFC 4180 field scanner, standing in for an external reader
        fn parse_row(row: &str) -> Vec<String> {
            let mut fields = Vec::new();
            let mut chars = row.chars().peekable();
            while chars.peek().is_some() {
                let mut field = String::new();
                if chars.peek() == Some(&'"') {
                    chars.next();
                    loop {
                        match chars.next() {
                            Some('"') if chars.peek() == Some(&'"') => {
                                chars.next();
                                field.push('"');
                            }
                            Some('"') | None => break,
                            Some(c) => field.push(c),
                        }
                    }
                    chars.next(); // consume separator
                } else {
                    while let Some(c) = chars.next() {
                        if c == ',' {
                            break;
                        }
                        field.push(c);
                    }
                }
                fields.push(field);
            }
            fields
        }

        let mut ticket = test_ticket();
        ticket.remarks = Some("Said \"hello\", fine".to_string());
        let csv = to_csv(&[ticket]);
        let row = csv.lines().nth(1).unwrap();
        let fields = parse_row(row);
        assert_eq!(fields.len(), CSV_HEADERS.len());
        assert_eq!(fields[10], "Said \"hello\", fine");
        assert_eq!(fields[5], "Computer, Other: coffee in keyboard");
    }
}
