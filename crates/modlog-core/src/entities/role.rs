//! Role reference as carried by member role update entries

use serde::Serialize;

use crate::value_objects::Snowflake;

/// A role mentioned by id and (usually) name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RoleRef {
    pub id: Snowflake,
    pub name: Option<String>,
}
