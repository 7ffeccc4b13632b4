//! Shared types for the help-desk core
//!
//! Common types used by the desk engine and its (excluded) UI callers:
//! ticket and session models, error types, timestamps, and utility helpers.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{ProblemCategory, SessionUser, Ticket, TicketDraft, TicketStatus, UserRole};
pub use types::Timestamp;
