//! Desk Core - in-memory help-desk ticketing engine
//!
//! # 架构概述
//!
//! The engine behind a ticketing dashboard: an owned in-memory store plus
//! pure functions for everything the UI derives from it. State is lost on
//! process exit by design; there is no server, database, or background task.
//!
//! - **Store** (`tickets::store`): ordered ticket collection, monotonic ids
//! - **Transitions** (`tickets::transition`): status changes and the fields
//!   they derive (technician assignment, close timestamp)
//! - **Query** (`query`): case-insensitive any-field filter + stable
//!   single-key sort with nulls last
//! - **Export** (`export`): quoted CSV projection
//! - **View gate** (`view`): role-scoped visibility
//! - **Stats** (`stats`): stat cards and technician workload
//!
//! # 模块结构
//!
//! ```text
//! desk-core/src/
//! ├── core/          # 配置
//! ├── auth/          # 会话与管理员口令
//! ├── tickets/       # 存储、状态流转、派单、表单校验
//! ├── query/         # 过滤 + 排序
//! ├── export/        # CSV 导出
//! ├── stats.rs       # 仪表盘统计
//! ├── view.rs        # 角色可见性
//! └── utils/         # 日志、附件编码
//! ```
//!
//! # Example
//!
//! ```
//! use desk_core::{DeskConfig, Session, TicketStore, FixedAssigner};
//! use shared::{TicketDraft, TicketStatus, ProblemCategory, util::now_millis};
//!
//! let config = DeskConfig::default();
//! let mut store = TicketStore::new();
//! let session = Session::new(config.current_user.clone());
//!
//! let draft = TicketDraft {
//!     first_name: "Alice".into(),
//!     last_name: "Johnson".into(),
//!     department: "Marketing".into(),
//!     email: "alice.j@example.com".into(),
//!     contact_number: "555-123-4567".into(),
//!     problem_categories: vec![ProblemCategory::Network],
//!     details: "No connectivity".into(),
//!     ..Default::default()
//! };
//! let ticket = store.create(draft, &session.user().id, now_millis());
//! store.change_status(
//!     &ticket.id,
//!     TicketStatus::Resolved,
//!     now_millis(),
//!     &FixedAssigner("Jane Smith".into()),
//! );
//! ```

pub mod auth;
pub mod core;
pub mod export;
pub mod query;
pub mod stats;
pub mod tickets;
pub mod utils;
pub mod view;

// Re-export 公共类型
pub use auth::Session;
pub use core::DeskConfig;
pub use export::{CSV_HEADERS, to_csv};
pub use query::{SortDirection, SortSpec, TicketField, query};
pub use stats::{StatusCounts, TechnicianWorkload, status_counts, technician_workload};
pub use tickets::{
    FixedAssigner, RosterAssigner, TechnicianAssigner, TicketStore, apply_status_change,
    assign_technician, set_remarks, validate_draft,
};
pub use view::visible_tickets;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
