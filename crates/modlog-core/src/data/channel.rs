//! Channel action data

use serde::Serialize;

use crate::entities::{ChannelType, Overwrite};
use crate::value_objects::Snowflake;

/// A channel as it existed when it was created or deleted
///
/// Optional fields are `None` when the entry did not mention them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSnapshotData {
    pub channel_id: Snowflake,
    pub name: String,
    pub channel_type: ChannelType,
    /// Slow-mode delay in seconds
    pub slow_mode_interval: Option<i32>,
    pub nsfw: Option<bool>,
    pub bitrate: Option<i32>,
    pub overwrites: Vec<Overwrite>,
}

/// A channel creation
pub type ChannelCreateData = ChannelSnapshotData;

/// A channel deletion
pub type ChannelDeleteData = ChannelSnapshotData;

/// One side of a channel update
///
/// A `None` field means the property was not part of this change, not that it
/// stayed the same.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ChannelInfo {
    pub name: Option<String>,
    pub topic: Option<String>,
    pub slow_mode_interval: Option<i32>,
    pub nsfw: Option<bool>,
    pub bitrate: Option<i32>,
}

/// A channel update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelUpdateData {
    pub channel_id: Snowflake,
    pub before: ChannelInfo,
    pub after: ChannelInfo,
}
