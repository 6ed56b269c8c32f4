//! Permission resolution
//!
//! This module answers the one question the route guards ask: given a
//! session's grant and role, does a required-permission string pass? The
//! decision is pure: the same inputs always produce the same boolean, and
//! nothing in here can fail; unparseable input denies.

use crate::auth::grant::PermissionGrant;
use crate::auth::vocabulary::{Action, ResourceKey};
use once_cell::sync::Lazy;
use regex::Regex;

static ACCESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^access:(.+)$").expect("hard-coded pattern"));
static ACTION_RESOURCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(read|create|update|delete):(.+)$").expect("hard-coded pattern"));
static RESOURCE_ACTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+):(read|create|update|edit|delete|remove|export)$").expect("hard-coded pattern")
});

/// A required-permission string parsed into its canonical parts
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredPermission {
    pub resource: ResourceKey,
    pub action: Action,
}

impl RequiredPermission {
    /// Parse a required-permission string.
    ///
    /// Three shapes are accepted, tried in order with the first match
    /// winning: `access:<resource>` (read-equivalent), `<action>:<resource>`
    /// with the four base actions, and `<resource>:<action>` with the synonym
    /// tokens `edit` and `remove` folded in. Matching is case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();

        if let Some(caps) = ACCESS_PATTERN.captures(&normalized) {
            return Some(Self {
                resource: ResourceKey::canonicalize(&caps[1]),
                action: Action::Read,
            });
        }
        if let Some(caps) = ACTION_RESOURCE_PATTERN.captures(&normalized) {
            return Some(Self {
                resource: ResourceKey::canonicalize(&caps[2]),
                action: Action::from_token(&caps[1])?,
            });
        }
        if let Some(caps) = RESOURCE_ACTION_PATTERN.captures(&normalized) {
            return Some(Self {
                resource: ResourceKey::canonicalize(&caps[1]),
                action: Action::from_token(&caps[2])?,
            });
        }
        None
    }
}

/// Resolve a grant against a required permission.
///
/// The `admin` role passes unconditionally without inspecting the grant.
/// A scope-list grant matches by case-insensitive string comparison against
/// each entry; a structured grant matches by canonicalized resource key and
/// an explicit `true` action flag. Anything else denies.
pub fn resolve(grant: &PermissionGrant, role: &str, required: &str) -> bool {
    if role.eq_ignore_ascii_case("admin") {
        return true;
    }

    match grant {
        PermissionGrant::ScopeList(scopes) => {
            let wanted = required.trim();
            scopes.iter().any(|scope| scope.eq_ignore_ascii_case(wanted))
        }
        PermissionGrant::Structured(flags) => match RequiredPermission::parse(required) {
            Some(req) => flags
                .get(&req.resource)
                .map(|record| record.allows(req.action.as_str()))
                .unwrap_or(false),
            None => false,
        },
    }
}
