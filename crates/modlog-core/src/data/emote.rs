//! Custom emoji action data

use serde::Serialize;

use crate::value_objects::Snowflake;

/// An emoji creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmoteCreateData {
    pub emote_id: Snowflake,
    pub name: String,
}

/// An emoji rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmoteUpdateData {
    pub emote_id: Snowflake,
    pub old_name: Option<String>,
    pub new_name: Option<String>,
}

/// An emoji deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmoteDeleteData {
    pub emote_id: Snowflake,
    pub name: String,
}
