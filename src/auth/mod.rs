//! Authentication and authorization for the panel
//!
//! This module decides what a logged-in operator may see. The session
//! backend supplies a role plus a permission grant; route guards ask the
//! [`AccessControl`] facade whether a required permission passes and render
//! the protected view, a caller-supplied fallback, or the default
//! access-denied message accordingly.

pub mod grant;
pub mod resolver;
pub mod vocabulary;

// Re-export commonly used types
pub use grant::{ActionFlags, PermissionGrant};
pub use resolver::{RequiredPermission, resolve};
pub use vocabulary::{Action, Resource, ResourceKey};

use crate::config::AccessConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A logged-in operator's session as supplied by the auth backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Role name; `admin` (any casing) bypasses every check
    pub role: String,
    /// Permission grant in either canonical shape
    #[serde(default)]
    pub permissions: PermissionGrant,
}

impl AuthSession {
    pub fn new<S: Into<String>>(role: S, permissions: PermissionGrant) -> Self {
        Self {
            role: role.into(),
            permissions,
        }
    }
}

/// Authorization result for a single permission check
#[derive(Debug, Clone)]
pub struct AuthzResult {
    /// Whether authorization was successful
    pub allowed: bool,
    /// Permission that was checked
    pub required_permission: String,
    /// Reason for denial (if not allowed)
    pub reason: Option<String>,
}

/// What a route guard should render after a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected content
    Granted,
    /// Render the caller-supplied fallback view
    Fallback,
    /// Render the default access-denied message
    Denied,
}

/// Access control facade over the permission resolver
#[derive(Debug, Clone)]
pub struct AccessControl {
    /// Access control configuration
    config: AccessConfig,
}

impl AccessControl {
    /// Create a new access control facade
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Whether the role is an administrator.
    ///
    /// The literal `admin` role is always an administrator; additional roles
    /// can be granted the same standing through configuration.
    pub fn is_admin(&self, role: &str) -> bool {
        role.eq_ignore_ascii_case("admin")
            || self
                .config
                .admin_roles
                .iter()
                .any(|admin| admin.eq_ignore_ascii_case(role))
    }

    /// Check a single permission for a session
    pub fn check(&self, session: &AuthSession, required: &str) -> AuthzResult {
        if !self.config.enabled {
            return AuthzResult {
                allowed: true,
                required_permission: required.to_string(),
                reason: None,
            };
        }

        let allowed = self.is_admin(&session.role)
            || resolve(&session.permissions, &session.role, required);

        if !allowed {
            debug!(role = %session.role, required, "Permission denied");
        }

        AuthzResult {
            allowed,
            required_permission: required.to_string(),
            reason: if allowed {
                None
            } else {
                Some(format!("Missing permission: {}", required))
            },
        }
    }

    /// Check that every listed permission is granted
    pub fn check_all(&self, session: &AuthSession, required: &[&str]) -> bool {
        required.iter().all(|perm| self.check(session, perm).allowed)
    }

    /// Check that at least one listed permission is granted
    pub fn check_any(&self, session: &AuthSession, required: &[&str]) -> bool {
        required.iter().any(|perm| self.check(session, perm).allowed)
    }

    /// Route-guard decision for a protected view
    pub fn guard(&self, session: &AuthSession, required: &str, has_fallback: bool) -> GuardOutcome {
        if self.check(session, required).allowed {
            GuardOutcome::Granted
        } else if has_fallback {
            GuardOutcome::Fallback
        } else {
            GuardOutcome::Denied
        }
    }

    /// Access control configuration
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }
}
