use shared::SessionUser;

/// Desk configuration - 演示环境的全部可配置项
///
/// Replaces the module-level demo constants (hardcoded admin password,
/// simulated current user, technician roster) with an explicit struct so
/// tests and embedders can substitute values.
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DESK_ADMIN_SECRET | admin123 | 管理员口令 (演示用) |
/// | DESK_TECHNICIANS | John Doe,Jane Smith,Peter Jones,Emily White | 技术员名单 (逗号分隔) |
///
/// The admin secret is a UI demo gate, not a trust boundary.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Shared secret gating the admin role toggle
    pub admin_secret: String,
    /// Simulated signed-in user (requester identity for new tickets)
    pub current_user: SessionUser,
    /// Technician roster for auto-assignment on first resolution
    pub technicians: Vec<String>,
}

impl DeskConfig {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let technicians = std::env::var("DESK_TECHNICIANS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.technicians);
        Self {
            admin_secret: std::env::var("DESK_ADMIN_SECRET").unwrap_or(defaults.admin_secret),
            current_user: defaults.current_user,
            technicians,
        }
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            admin_secret: "admin123".to_string(),
            current_user: SessionUser {
                id: "user-1".to_string(),
                first_name: "Alice".to_string(),
                last_name: "Johnson".to_string(),
                department: "Marketing".to_string(),
                email: "alice.j@example.com".to_string(),
            },
            technicians: vec![
                "John Doe".to_string(),
                "Jane Smith".to_string(),
                "Peter Jones".to_string(),
                "Emily White".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let config = DeskConfig::default();
        assert_eq!(config.technicians.len(), 4);
        assert_eq!(config.current_user.id, "user-1");
    }
}
