//! Session and admin gate
//!
//! Tracks the caller's role and whether the admin secret check passed.
//! The secret is a demo gate only; see [`DeskConfig`](crate::core::DeskConfig).

use crate::core::DeskConfig;
use shared::{AppError, AppResult, SessionUser, UserRole};

/// One caller's session state
#[derive(Debug, Clone)]
pub struct Session {
    user: SessionUser,
    role: UserRole,
    admin_authenticated: bool,
}

impl Session {
    /// Start a session for the given identity, in the user role
    pub fn new(user: SessionUser) -> Self {
        Self {
            user,
            role: UserRole::User,
            admin_authenticated: false,
        }
    }

    /// The signed-in identity
    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    /// Current role
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Admin view requires both the role and a passed secret check
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin && self.admin_authenticated
    }

    /// Attempt to switch into the admin role
    ///
    /// On a wrong secret the session is left untouched and the caller gets
    /// the message the login modal displays.
    pub fn login_admin(&mut self, secret: &str, config: &DeskConfig) -> AppResult<()> {
        if secret != config.admin_secret {
            tracing::warn!(user_id = %self.user.id, "admin login rejected");
            return Err(AppError::invalid_credentials(
                "Incorrect password. Please try again.",
            ));
        }
        self.role = UserRole::Admin;
        self.admin_authenticated = true;
        tracing::info!(user_id = %self.user.id, "admin login accepted");
        Ok(())
    }

    /// Drop back to the user role
    pub fn logout(&mut self) {
        self.role = UserRole::User;
        self.admin_authenticated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn test_session() -> (Session, DeskConfig) {
        let config = DeskConfig::default();
        (Session::new(config.current_user.clone()), config)
    }

    #[test]
    fn test_new_session_is_plain_user() {
        let (session, _) = test_session();
        assert_eq!(session.role(), UserRole::User);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_login_with_correct_secret() {
        let (mut session, config) = test_session();
        session.login_admin("admin123", &config).unwrap();
        assert_eq!(session.role(), UserRole::Admin);
        assert!(session.is_admin());
    }

    #[test]
    fn test_login_with_wrong_secret_leaves_session_untouched() {
        let (mut session, config) = test_session();
        let err = session.login_admin("letmein", &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(session.role(), UserRole::User);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_logout_clears_admin() {
        let (mut session, config) = test_session();
        session.login_admin("admin123", &config).unwrap();
        session.logout();
        assert!(!session.is_admin());
        assert_eq!(session.role(), UserRole::User);
    }
}
