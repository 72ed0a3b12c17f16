//! Invite action data

use serde::Serialize;

use crate::entities::UserSnapshot;
use crate::value_objects::Snowflake;

/// An invite as it existed when it was created or deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteSnapshotData {
    /// Seconds until the invite expires, `0` for never
    pub max_age: i32,
    pub code: String,
    /// Whether joined members are removed when they go offline
    pub temporary: bool,
    pub creator_id: Option<Snowflake>,
    /// `None` when no inviter was recorded or the user table has no match
    pub creator: Option<UserSnapshot>,
    pub channel_id: Snowflake,
    pub uses: i32,
    /// `0` for unlimited
    pub max_uses: i32,
}

/// An invite creation
pub type InviteCreateData = InviteSnapshotData;

/// An invite deletion
pub type InviteDeleteData = InviteSnapshotData;

/// One side of an invite update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InviteInfo {
    pub max_age: Option<i32>,
    pub code: Option<String>,
    pub temporary: Option<bool>,
    pub max_uses: Option<i32>,
    pub channel_id: Option<Snowflake>,
}

/// An invite update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteUpdateData {
    pub before: InviteInfo,
    pub after: InviteInfo,
}
