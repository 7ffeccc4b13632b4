//! Unified error system for the help-desk core
//!
//! The engine itself is total over well-formed input; errors only arise at
//! the call boundary (draft validation, admin login, sort-key parsing).
//!
//! - [`ErrorCode`]: standardized error codes
//! - [`AppError`]: error type with code, message, and field-level details
//! - [`AppResult`]: convenience result alias
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("Ticket draft failed validation")
//!     .with_detail("email", "Email is invalid");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod codes;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
