//! Member moderation action data

use serde::Serialize;

use crate::entities::UserSnapshot;
use crate::value_objects::Snowflake;

/// A member removed from the guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KickData {
    pub target_id: Snowflake,
    /// `None` when the user side table has no snapshot for `target_id`
    pub target: Option<UserSnapshot>,
}

/// A member banned from the guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BanData {
    pub target_id: Snowflake,
    pub target: Option<UserSnapshot>,
}

/// A ban lifted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnbanData {
    pub target_id: Snowflake,
    pub target: Option<UserSnapshot>,
}

/// A bot account added to the guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotAddData {
    pub target_id: Snowflake,
    pub target: Option<UserSnapshot>,
}

/// Inactive members pruned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PruneData {
    /// Inactivity threshold in days
    pub prune_days: i32,
    pub members_removed: i32,
}

/// One side of a member update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MemberInfo {
    pub nickname: Option<String>,
    pub deaf: Option<bool>,
    pub mute: Option<bool>,
}

/// Nickname or voice state of a member changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberUpdateData {
    pub target_id: Snowflake,
    pub target: Option<UserSnapshot>,
    pub before: MemberInfo,
    pub after: MemberInfo,
}

/// A single role granted to or taken from a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRoleEditInfo {
    pub role_id: Snowflake,
    pub name: Option<String>,
    /// `true` when the role was added, `false` when removed
    pub added: bool,
}

/// Roles of a member changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRoleUpdateData {
    pub target_id: Snowflake,
    pub target: Option<UserSnapshot>,
    pub roles: Vec<MemberRoleEditInfo>,
}

/// Members moved to another voice channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberMoveData {
    pub channel_id: Snowflake,
    pub member_count: i32,
}

/// Members disconnected from voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDisconnectData {
    pub member_count: i32,
}
