//! Message moderation action data

use serde::Serialize;

use crate::entities::UserSnapshot;
use crate::value_objects::Snowflake;

/// Messages of one author deleted by a moderator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDeleteData {
    pub channel_id: Snowflake,
    pub message_count: i32,
    /// Author of the deleted messages
    pub target_id: Snowflake,
    pub target: Option<UserSnapshot>,
}

/// Messages bulk-deleted from a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBulkDeleteData {
    pub channel_id: Snowflake,
    pub message_count: i32,
}

/// A message pinned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePinData {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    /// Author of the pinned message
    pub target_id: Snowflake,
    pub target: Option<UserSnapshot>,
}

/// A message unpinned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageUnpinData {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub target_id: Snowflake,
    pub target: Option<UserSnapshot>,
}
