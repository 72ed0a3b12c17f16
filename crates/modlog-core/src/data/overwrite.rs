//! Permission overwrite action data

use serde::Serialize;

use crate::entities::{Overwrite, OverwritePermissions, PermissionTarget};
use crate::value_objects::Snowflake;

/// An overwrite added to a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverwriteCreateData {
    pub channel_id: Snowflake,
    pub overwrite: Overwrite,
    /// Role name at the time of the action, for role overwrites
    pub role_name: Option<String>,
}

/// An overwrite removed from a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverwriteDeleteData {
    pub channel_id: Snowflake,
    pub overwrite: Overwrite,
    pub role_name: Option<String>,
}

/// An overwrite whose allow/deny bits changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverwriteUpdateData {
    pub channel_id: Snowflake,
    pub target_id: Snowflake,
    pub target_type: PermissionTarget,
    pub role_name: Option<String>,
    pub old_permissions: OverwritePermissions,
    pub new_permissions: OverwritePermissions,
}
