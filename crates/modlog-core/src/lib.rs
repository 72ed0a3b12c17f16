//! # modlog-core
//!
//! Domain layer containing the audit log wire model, value objects, referenced
//! entities, and the decoded action data types.
//! This crate has no decoding logic and no I/O.

pub mod data;
pub mod entities;
pub mod model;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use data::{ActionType, AuditLogData};
pub use entities::{
    ChannelType, Overwrite, OverwritePermissions, PermissionTarget, RoleRef, UserSnapshot,
    WebhookSnapshot, WebhookType,
};
pub use model::{AuditLog, AuditLogEntry, AuditLogOptions, ChangeRecord, OpaqueValue};
pub use value_objects::{Permissions, Snowflake, SnowflakeParseError};
