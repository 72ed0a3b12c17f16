//! Webhook action data

use serde::Serialize;

use crate::entities::{WebhookSnapshot, WebhookType};
use crate::value_objects::Snowflake;

/// A webhook creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookCreateData {
    pub webhook_id: Snowflake,
    /// Snapshot from the webhook side table, if shipped
    pub webhook: Option<WebhookSnapshot>,
    pub webhook_type: WebhookType,
    pub name: String,
    pub channel_id: Snowflake,
}

/// One side of a webhook update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WebhookInfo {
    pub name: Option<String>,
    pub channel_id: Option<Snowflake>,
    pub avatar_hash: Option<String>,
}

/// A webhook update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookUpdateData {
    pub webhook_id: Snowflake,
    pub webhook: Option<WebhookSnapshot>,
    pub before: WebhookInfo,
    pub after: WebhookInfo,
}

/// A webhook deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookDeleteData {
    pub webhook_id: Snowflake,
    pub channel_id: Snowflake,
    pub webhook_type: WebhookType,
    pub name: String,
    pub avatar_hash: Option<String>,
}
