//! Wire model - the fully materialized audit log handed over by the fetch layer

mod entry;
mod opaque;

pub use entry::{AuditLogEntry, AuditLogOptions, ChangeRecord};
pub use opaque::OpaqueValue;

use serde::{Deserialize, Serialize};

use crate::entities::{UserSnapshot, WebhookSnapshot};

/// One page of the audit log with its side tables
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuditLog {
    #[serde(default)]
    pub audit_log_entries: Vec<AuditLogEntry>,
    #[serde(default)]
    pub users: Vec<UserSnapshot>,
    #[serde(default)]
    pub webhooks: Vec<WebhookSnapshot>,
}
