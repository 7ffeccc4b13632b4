//! Session User Model

use serde::{Deserialize, Serialize};

/// Caller role for the view gate
///
/// A UI toggle, not a trust boundary: anyone holding the demo admin secret
/// can become `Admin`. Real deployments would replace this with a genuine
/// authentication/authorization layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// Simulated signed-in identity
///
/// Stands in for a directory/SSO lookup; tickets created in a session carry
/// this identity's `id` as `requester_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub email: String,
}
