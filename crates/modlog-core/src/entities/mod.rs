//! Domain entities - platform objects referenced by audit entries

mod channel;
mod guild;
mod role;
mod user;
mod webhook;

pub use channel::{ChannelType, Overwrite, OverwritePermissions, PermissionTarget};
pub use guild::{DefaultMessageNotifications, ExplicitContentFilterLevel, MfaLevel, VerificationLevel};
pub use role::RoleRef;
pub use user::UserSnapshot;
pub use webhook::{WebhookSnapshot, WebhookType};
