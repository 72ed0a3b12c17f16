//! Guild action data

use serde::Serialize;

use crate::entities::{
    DefaultMessageNotifications, ExplicitContentFilterLevel, MfaLevel, UserSnapshot,
    VerificationLevel,
};
use crate::value_objects::Snowflake;

/// One side of a guild settings update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GuildInfo {
    pub name: Option<String>,
    /// AFK timeout in seconds
    pub afk_timeout: Option<i32>,
    pub afk_channel_id: Option<Snowflake>,
    pub icon_hash: Option<String>,
    pub verification_level: Option<VerificationLevel>,
    pub default_message_notifications: Option<DefaultMessageNotifications>,
    pub explicit_content_filter: Option<ExplicitContentFilterLevel>,
    pub mfa_level: Option<MfaLevel>,
    pub system_channel_id: Option<Snowflake>,
    pub owner_id: Option<Snowflake>,
    /// Owner resolved from the user side table, if shipped
    pub owner: Option<UserSnapshot>,
}

/// A guild settings update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuildUpdateData {
    pub before: GuildInfo,
    pub after: GuildInfo,
}
