//! Decoded action data - one strongly typed value per audit entry
//!
//! Every variant owns what it carries; nothing borrows from the `AuditLog` it
//! was decoded from.

mod action_type;
mod channel;
mod emote;
mod guild;
mod invite;
mod member;
mod message;
mod overwrite;
mod role;
mod webhook;

pub use action_type::ActionType;
pub use channel::{ChannelCreateData, ChannelDeleteData, ChannelInfo, ChannelSnapshotData, ChannelUpdateData};
pub use emote::{EmoteCreateData, EmoteDeleteData, EmoteUpdateData};
pub use guild::{GuildInfo, GuildUpdateData};
pub use invite::{InviteCreateData, InviteDeleteData, InviteInfo, InviteSnapshotData, InviteUpdateData};
pub use member::{
    BanData, BotAddData, KickData, MemberDisconnectData, MemberInfo, MemberMoveData,
    MemberRoleEditInfo, MemberRoleUpdateData, MemberUpdateData, PruneData, UnbanData,
};
pub use message::{MessageBulkDeleteData, MessageDeleteData, MessagePinData, MessageUnpinData};
pub use overwrite::{OverwriteCreateData, OverwriteDeleteData, OverwriteUpdateData};
pub use role::{RoleCreateData, RoleDeleteData, RoleEditInfo, RoleUpdateData};
pub use webhook::{WebhookCreateData, WebhookDeleteData, WebhookInfo, WebhookUpdateData};

use serde::Serialize;

use crate::model::AuditLogEntry;

/// All decodable action kinds, plus a forward-compatible fallback
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditLogData {
    // =========================================================================
    // Guild
    // =========================================================================
    GuildUpdated(GuildUpdateData),

    // =========================================================================
    // Channels
    // =========================================================================
    ChannelCreated(ChannelCreateData),
    ChannelUpdated(ChannelUpdateData),
    ChannelDeleted(ChannelDeleteData),
    OverwriteCreated(OverwriteCreateData),
    OverwriteUpdated(OverwriteUpdateData),
    OverwriteDeleted(OverwriteDeleteData),

    // =========================================================================
    // Members
    // =========================================================================
    Kick(KickData),
    Prune(PruneData),
    Ban(BanData),
    Unban(UnbanData),
    MemberUpdated(MemberUpdateData),
    MemberRoleUpdated(MemberRoleUpdateData),
    MemberMoved(MemberMoveData),
    MemberDisconnected(MemberDisconnectData),
    BotAdded(BotAddData),

    // =========================================================================
    // Roles
    // =========================================================================
    RoleCreated(RoleCreateData),
    RoleUpdated(RoleUpdateData),
    RoleDeleted(RoleDeleteData),

    // =========================================================================
    // Invites
    // =========================================================================
    InviteCreated(InviteCreateData),
    InviteUpdated(InviteUpdateData),
    InviteDeleted(InviteDeleteData),

    // =========================================================================
    // Webhooks
    // =========================================================================
    WebhookCreated(WebhookCreateData),
    WebhookUpdated(WebhookUpdateData),
    WebhookDeleted(WebhookDeleteData),

    // =========================================================================
    // Emojis
    // =========================================================================
    EmojiCreated(EmoteCreateData),
    EmojiUpdated(EmoteUpdateData),
    EmojiDeleted(EmoteDeleteData),

    // =========================================================================
    // Messages
    // =========================================================================
    MessageDeleted(MessageDeleteData),
    MessageBulkDeleted(MessageBulkDeleteData),
    MessagePinned(MessagePinData),
    MessageUnpinned(MessageUnpinData),

    /// A discriminator this library does not know; carries the raw entry
    Unknown(AuditLogEntry),
}

impl AuditLogData {
    /// The decoded kind, `None` for [`AuditLogData::Unknown`]
    pub fn action_type(&self) -> Option<ActionType> {
        let kind = match self {
            Self::GuildUpdated(_) => ActionType::GuildUpdated,
            Self::ChannelCreated(_) => ActionType::ChannelCreated,
            Self::ChannelUpdated(_) => ActionType::ChannelUpdated,
            Self::ChannelDeleted(_) => ActionType::ChannelDeleted,
            Self::OverwriteCreated(_) => ActionType::OverwriteCreated,
            Self::OverwriteUpdated(_) => ActionType::OverwriteUpdated,
            Self::OverwriteDeleted(_) => ActionType::OverwriteDeleted,
            Self::Kick(_) => ActionType::Kick,
            Self::Prune(_) => ActionType::Prune,
            Self::Ban(_) => ActionType::Ban,
            Self::Unban(_) => ActionType::Unban,
            Self::MemberUpdated(_) => ActionType::MemberUpdated,
            Self::MemberRoleUpdated(_) => ActionType::MemberRoleUpdated,
            Self::MemberMoved(_) => ActionType::MemberMoved,
            Self::MemberDisconnected(_) => ActionType::MemberDisconnected,
            Self::BotAdded(_) => ActionType::BotAdded,
            Self::RoleCreated(_) => ActionType::RoleCreated,
            Self::RoleUpdated(_) => ActionType::RoleUpdated,
            Self::RoleDeleted(_) => ActionType::RoleDeleted,
            Self::InviteCreated(_) => ActionType::InviteCreated,
            Self::InviteUpdated(_) => ActionType::InviteUpdated,
            Self::InviteDeleted(_) => ActionType::InviteDeleted,
            Self::WebhookCreated(_) => ActionType::WebhookCreated,
            Self::WebhookUpdated(_) => ActionType::WebhookUpdated,
            Self::WebhookDeleted(_) => ActionType::WebhookDeleted,
            Self::EmojiCreated(_) => ActionType::EmojiCreated,
            Self::EmojiUpdated(_) => ActionType::EmojiUpdated,
            Self::EmojiDeleted(_) => ActionType::EmojiDeleted,
            Self::MessageDeleted(_) => ActionType::MessageDeleted,
            Self::MessageBulkDeleted(_) => ActionType::MessageBulkDeleted,
            Self::MessagePinned(_) => ActionType::MessagePinned,
            Self::MessageUnpinned(_) => ActionType::MessageUnpinned,
            Self::Unknown(_) => return None,
        };
        Some(kind)
    }

    /// Tag name, matching the serialized `action` field
    pub fn kind(&self) -> &'static str {
        self.action_type().map_or("UNKNOWN", ActionType::name)
    }

    /// Check if this is the forward-compatible fallback
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}
