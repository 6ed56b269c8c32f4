//! Permission grant shapes
//!
//! The auth backend has shipped grants in three formats over time: a plain
//! array of scope strings, a structured resource-to-flags map, and a single
//! string holding either JSON or a whitespace/comma separated scope list.
//! The shape is decided once here, at the deserialization boundary, so the
//! resolver only ever sees the two clean variants.

use crate::auth::vocabulary::ResourceKey;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Action flags attached to one resource in a structured grant
///
/// Flag keys are kept literally as the backend sent them; only an explicit
/// boolean `true` grants the action. Non-boolean flag values are folded to
/// `false` rather than rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "HashMap<String, serde_json::Value>")]
pub struct ActionFlags(HashMap<String, bool>);

impl ActionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form used by fixtures: mark an action as granted.
    pub fn allow<S: Into<String>>(mut self, action: S) -> Self {
        self.0.insert(action.into(), true);
        self
    }

    /// Builder form used by fixtures: mark an action as explicitly denied.
    pub fn deny<S: Into<String>>(mut self, action: S) -> Self {
        self.0.insert(action.into(), false);
        self
    }

    /// Whether the given action is explicitly granted
    pub fn allows(&self, action: &str) -> bool {
        self.0.get(action).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, serde_json::Value>> for ActionFlags {
    fn from(raw: HashMap<String, serde_json::Value>) -> Self {
        Self(
            raw.into_iter()
                .map(|(action, value)| (action, value.as_bool().unwrap_or(false)))
                .collect(),
        )
    }
}

impl From<HashMap<String, bool>> for ActionFlags {
    fn from(flags: HashMap<String, bool>) -> Self {
        Self(flags)
    }
}

/// A user's permission grant, reduced to one of two canonical shapes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PermissionGrant {
    /// Ordered scope strings such as `"read:prestador"`
    ScopeList(Vec<String>),
    /// Resource name mapped to its action flags, keys canonicalized
    Structured(HashMap<ResourceKey, ActionFlags>),
}

impl PermissionGrant {
    /// Grant with no permissions at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PermissionGrant::ScopeList(scopes) => scopes.is_empty(),
            PermissionGrant::Structured(flags) => flags.is_empty(),
        }
    }

    /// Legacy format adapter for grants delivered as a single string.
    ///
    /// The string is first parsed strictly as JSON: an array becomes a scope
    /// list (non-string elements dropped), an object becomes a structured
    /// grant, and any other JSON value is an empty grant. If JSON parsing
    /// fails the raw string is split on whitespace/comma runs instead.
    /// Never fails; the worst malformed input degrades to an empty grant.
    pub fn from_raw(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(items)) => Self::ScopeList(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(scope) => Some(scope),
                        _ => None,
                    })
                    .collect(),
            ),
            Ok(serde_json::Value::Object(entries)) => Self::Structured(
                entries
                    .into_iter()
                    .map(|(resource, value)| {
                        (ResourceKey::canonicalize(&resource), flags_from_value(value))
                    })
                    .collect(),
            ),
            Ok(other) => {
                debug!(value = %other, "Scalar JSON grant treated as empty");
                Self::empty()
            }
            Err(_) => {
                debug!("Grant string is not JSON, splitting into scopes");
                let scopes: Vec<String> = raw
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                Self::ScopeList(scopes)
            }
        }
    }
}

impl Default for PermissionGrant {
    fn default() -> Self {
        Self::ScopeList(Vec::new())
    }
}

fn flags_from_value(value: serde_json::Value) -> ActionFlags {
    match value {
        serde_json::Value::Object(entries) => {
            ActionFlags::from(entries.into_iter().collect::<HashMap<String, serde_json::Value>>())
        }
        _ => ActionFlags::new(),
    }
}

impl<'de> Deserialize<'de> for PermissionGrant {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct GrantVisitor;

        impl<'de> Visitor<'de> for GrantVisitor {
            type Value = PermissionGrant;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scope list, a resource map, or a legacy grant string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(PermissionGrant::from_raw(value))
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut scopes = Vec::new();
                while let Some(item) = seq.next_element::<serde_json::Value>()? {
                    if let serde_json::Value::String(scope) = item {
                        scopes.push(scope);
                    }
                }
                Ok(PermissionGrant::ScopeList(scopes))
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut flags = HashMap::new();
                while let Some((resource, value)) = map.next_entry::<String, serde_json::Value>()? {
                    // Later duplicates of the same canonical key overwrite.
                    flags.insert(ResourceKey::canonicalize(&resource), flags_from_value(value));
                }
                Ok(PermissionGrant::Structured(flags))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(PermissionGrant::empty())
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(PermissionGrant::empty())
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
                Ok(PermissionGrant::empty())
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
                Ok(PermissionGrant::empty())
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
                Ok(PermissionGrant::empty())
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
                Ok(PermissionGrant::empty())
            }
        }

        deserializer.deserialize_any(GrantVisitor)
    }
}
