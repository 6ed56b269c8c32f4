//! Custom test assertions
//!
//! Provides domain-specific assertions for testing segtrack-core components.

use segtrack_core::auth::AuthzResult;

/// Assertions for AuthzResult
pub trait AuthzResultAssertions {
    /// Assert the check passed
    fn assert_allowed(&self);

    /// Assert the check failed and carries a denial reason
    fn assert_denied(&self);
}

impl AuthzResultAssertions for AuthzResult {
    fn assert_allowed(&self) {
        assert!(
            self.allowed,
            "Expected '{}' to be allowed, got denial: {:?}",
            self.required_permission, self.reason
        );
    }

    fn assert_denied(&self) {
        assert!(
            !self.allowed,
            "Expected '{}' to be denied",
            self.required_permission
        );
        assert!(
            self.reason.is_some(),
            "Denied check for '{}' must carry a reason",
            self.required_permission
        );
    }
}

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, 1e-6_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left_val: f64 = ($left) as f64;
        let right_val: f64 = ($right) as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` (epsilon: `{:?}`)",
            left_val,
            right_val,
            diff,
            $epsilon
        );
    }};
}

/// Assert a collection contains an item matching a predicate
#[macro_export]
macro_rules! assert_contains {
    ($collection:expr, $predicate:expr) => {
        assert!(
            $collection.iter().any($predicate),
            "Collection does not contain expected item"
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use segtrack_core::auth::{AccessControl, AuthSession, PermissionGrant};
    use segtrack_core::config::AccessConfig;

    #[test]
    fn test_authz_assertions() {
        let control = AccessControl::new(&AccessConfig::default());
        let admin = AuthSession::new("admin", PermissionGrant::empty());
        control.check(&admin, "access:config").assert_allowed();

        let user = AuthSession::new("user", PermissionGrant::empty());
        control.check(&user, "access:config").assert_denied();
    }

    #[test]
    fn test_approx_eq_macro() {
        assert_approx_eq!(1.0, 1.0);
        assert_approx_eq!(1.0, 1.0000001);
        assert_approx_eq!(0.1 + 0.2, 0.3, 1e-10_f64);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_approx_eq_failure() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    fn test_contains_macro() {
        let items = [1, 2, 3, 4, 5];
        assert_contains!(items, |&x| x == 3);
    }
}
