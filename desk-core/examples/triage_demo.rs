//! End-to-end demo: submit, triage, search, export.
//!
//! ```bash
//! cargo run -p desk-core --example triage_demo
//! ```

use desk_core::{
    DeskConfig, RosterAssigner, Session, SortSpec, TicketStore, init_logger, query, status_counts,
    technician_workload, to_csv, validate_draft, visible_tickets,
};
use shared::{ProblemCategory, TicketDraft, TicketStatus, util::now_millis};

fn main() {
    init_logger();

    let config = DeskConfig::from_env();
    let assigner = RosterAssigner::new(config.technicians.clone());
    let mut session = Session::new(config.current_user.clone());
    let mut store = TicketStore::new();

    // Submit two requests as the signed-in user
    for (categories, detail, details) in [
        (vec![ProblemCategory::Network], "", "Wifi drops every few minutes"),
        (
            vec![ProblemCategory::Computer, ProblemCategory::Other],
            "coffee in keyboard",
            "Half the keys are sticking",
        ),
    ] {
        let draft = TicketDraft {
            first_name: config.current_user.first_name.clone(),
            last_name: config.current_user.last_name.clone(),
            department: config.current_user.department.clone(),
            email: config.current_user.email.clone(),
            contact_number: "555-123-4567".to_string(),
            problem_categories: categories,
            other_category_detail: detail.to_string(),
            details: details.to_string(),
            ..Default::default()
        };
        if let Err(err) = validate_draft(&draft) {
            eprintln!("draft rejected: {err}");
            continue;
        }
        store.create(draft, &session.user().id, now_millis());
    }

    // Triage as admin
    session
        .login_admin(&config.admin_secret, &config)
        .expect("demo secret");
    let first_id = store.tickets()[1].id.clone();
    store.change_status(&first_id, TicketStatus::Resolved, now_millis(), &assigner);
    store.set_remarks(&first_id, "Replaced the access point");

    // Dashboard reads
    let visible = visible_tickets(store.tickets(), &session);
    let rows = query(&visible, "wifi", Some(&SortSpec::default()));
    println!("matches for 'wifi': {}", rows.len());

    let counts = status_counts(&visible);
    println!(
        "total {} / new {} / in progress {} / resolved {}",
        counts.total, counts.new, counts.in_progress, counts.resolved
    );
    for row in technician_workload(&visible) {
        println!("{}: {} active, {} resolved", row.name, row.active, row.resolved);
    }

    println!("\n{}", to_csv(&visible));
}
