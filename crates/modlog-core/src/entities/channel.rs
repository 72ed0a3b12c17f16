//! Channel types and permission overwrites referenced by channel audit entries

use serde::Serialize;

use crate::value_objects::{Permissions, Snowflake};

/// Channel type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ChannelType {
    /// Guild text channel
    Text = 0,
    /// Direct message between users
    Dm = 1,
    /// Guild voice channel
    Voice = 2,
    /// Group direct message
    Group = 3,
    /// Guild category for organizing channels
    Category = 4,
    /// Announcement channel
    News = 5,
    /// Store listing channel
    Store = 6,
    NewsThread = 10,
    PublicThread = 11,
    PrivateThread = 12,
    /// Stage voice channel
    Stage = 13,
}

impl ChannelType {
    /// Create a `ChannelType` from its wire value
    #[must_use]
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Text),
            1 => Some(Self::Dm),
            2 => Some(Self::Voice),
            3 => Some(Self::Group),
            4 => Some(Self::Category),
            5 => Some(Self::News),
            6 => Some(Self::Store),
            10 => Some(Self::NewsThread),
            11 => Some(Self::PublicThread),
            12 => Some(Self::PrivateThread),
            13 => Some(Self::Stage),
            _ => None,
        }
    }
}

/// What an overwrite applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum PermissionTarget {
    Role = 0,
    Member = 1,
}

impl PermissionTarget {
    /// Create from the numeric wire value
    #[must_use]
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Role),
            1 => Some(Self::Member),
            _ => None,
        }
    }

    /// Create from the legacy string wire value ("role" / "member")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "role" => Some(Self::Role),
            "member" => Some(Self::Member),
            _ => None,
        }
    }
}

/// Allowed and denied permission bits of one overwrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct OverwritePermissions {
    pub allow: Permissions,
    pub deny: Permissions,
}

impl OverwritePermissions {
    #[must_use]
    pub const fn new(allow: Permissions, deny: Permissions) -> Self {
        Self { allow, deny }
    }
}

/// A channel permission overwrite for one role or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Overwrite {
    pub target_id: Snowflake,
    pub target_type: PermissionTarget,
    pub permissions: OverwritePermissions,
}

impl Overwrite {
    #[must_use]
    pub const fn new(
        target_id: Snowflake,
        target_type: PermissionTarget,
        permissions: OverwritePermissions,
    ) -> Self {
        Self {
            target_id,
            target_type,
            permissions,
        }
    }
}
