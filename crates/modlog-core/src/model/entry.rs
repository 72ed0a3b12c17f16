//! Audit log entry wire model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::OpaqueValue;

/// One before/after property diff within an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Wire property name, e.g. `permission_overwrites`
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<OpaqueValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<OpaqueValue>,
}

impl ChangeRecord {
    pub fn new(
        key: impl Into<String>,
        old_value: Option<OpaqueValue>,
        new_value: Option<OpaqueValue>,
    ) -> Self {
        Self {
            key: key.into(),
            old_value,
            new_value,
        }
    }
}

/// Auxiliary metadata bag attached to some entry kinds
///
/// Keys are the wire names (`count`, `channel_id`, `delete_member_days`, ...).
/// A JSON `null` is treated as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditLogOptions(BTreeMap<String, OpaqueValue>);

impl AuditLogOptions {
    pub fn get(&self, key: &str) -> Option<&OpaqueValue> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(OpaqueValue::is_null)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OpaqueValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<OpaqueValue>> FromIterator<(K, V)> for AuditLogOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One recorded administrative action
///
/// The id fields stay opaque so one malformed entry cannot reject the whole
/// page; they are coerced per entry at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    #[serde(default)]
    pub id: Option<OpaqueValue>,
    /// User who performed the action
    #[serde(default)]
    pub user_id: Option<OpaqueValue>,
    /// Raw action discriminator; see `ActionType::from_raw`
    pub action_type: i64,
    #[serde(default)]
    pub target_id: Option<OpaqueValue>,
    #[serde(default)]
    pub changes: Vec<ChangeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<AuditLogOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AuditLogEntry {
    /// Create a bare entry of the given kind
    pub fn new(action_type: i64) -> Self {
        Self {
            id: None,
            user_id: None,
            action_type,
            target_id: None,
            changes: Vec::new(),
            options: None,
            reason: None,
        }
    }
}
