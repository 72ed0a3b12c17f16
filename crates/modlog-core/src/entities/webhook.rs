//! Webhook snapshot - a webhook as shipped in the audit log side table

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Webhook kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum WebhookType {
    /// Posts messages through a token
    Incoming = 1,
    /// Relays messages from a followed announcement channel
    ChannelFollower = 2,
    /// Used by application interactions
    Application = 3,
}

impl WebhookType {
    /// Create a `WebhookType` from its wire value
    #[must_use]
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Incoming),
            2 => Some(Self::ChannelFollower),
            3 => Some(Self::Application),
            _ => None,
        }
    }
}

/// Read-only webhook record referenced by id from audit entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSnapshot {
    pub id: Snowflake,
    /// Raw wire type; see [`WebhookSnapshot::webhook_type`]
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub channel_id: Option<Snowflake>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl WebhookSnapshot {
    /// Typed webhook kind, `None` for kinds this library does not know yet
    pub fn webhook_type(&self) -> Option<WebhookType> {
        WebhookType::from_i64(i64::from(self.kind))
    }
}
