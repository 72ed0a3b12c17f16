//! Role action data

use serde::Serialize;

use crate::value_objects::{Permissions, Snowflake};

/// Role properties mentioned by an entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RoleEditInfo {
    /// RGB color as an integer
    pub color: Option<u32>,
    pub mentionable: Option<bool>,
    /// Whether the role is displayed separately in the member list
    pub hoist: Option<bool>,
    pub name: Option<String>,
    pub permissions: Option<Permissions>,
}

/// A role creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCreateData {
    pub role_id: Snowflake,
    pub properties: RoleEditInfo,
}

/// A role deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDeleteData {
    pub role_id: Snowflake,
    pub properties: RoleEditInfo,
}

/// A role update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleUpdateData {
    pub role_id: Snowflake,
    pub before: RoleEditInfo,
    pub after: RoleEditInfo,
}
