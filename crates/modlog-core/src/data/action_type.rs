//! Audit log action discriminators

use serde::{Serialize, Serializer};

/// Action kinds this library knows how to decode
///
/// The platform adds kinds independently of this library; an unlisted
/// discriminator is not an error, see `AuditLogData::Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ActionType {
    GuildUpdated = 1,

    ChannelCreated = 10,
    ChannelUpdated = 11,
    ChannelDeleted = 12,

    OverwriteCreated = 13,
    OverwriteUpdated = 14,
    OverwriteDeleted = 15,

    Kick = 20,
    Prune = 21,
    Ban = 22,
    Unban = 23,
    MemberUpdated = 24,
    MemberRoleUpdated = 25,
    MemberMoved = 26,
    MemberDisconnected = 27,
    BotAdded = 28,

    RoleCreated = 30,
    RoleUpdated = 31,
    RoleDeleted = 32,

    InviteCreated = 40,
    InviteUpdated = 41,
    InviteDeleted = 42,

    WebhookCreated = 50,
    WebhookUpdated = 51,
    WebhookDeleted = 52,

    EmojiCreated = 60,
    EmojiUpdated = 61,
    EmojiDeleted = 62,

    MessageDeleted = 72,
    MessageBulkDeleted = 73,
    MessagePinned = 74,
    MessageUnpinned = 75,
}

impl ActionType {
    /// Every known kind, in discriminator order
    pub const ALL: [ActionType; 32] = [
        Self::GuildUpdated,
        Self::ChannelCreated,
        Self::ChannelUpdated,
        Self::ChannelDeleted,
        Self::OverwriteCreated,
        Self::OverwriteUpdated,
        Self::OverwriteDeleted,
        Self::Kick,
        Self::Prune,
        Self::Ban,
        Self::Unban,
        Self::MemberUpdated,
        Self::MemberRoleUpdated,
        Self::MemberMoved,
        Self::MemberDisconnected,
        Self::BotAdded,
        Self::RoleCreated,
        Self::RoleUpdated,
        Self::RoleDeleted,
        Self::InviteCreated,
        Self::InviteUpdated,
        Self::InviteDeleted,
        Self::WebhookCreated,
        Self::WebhookUpdated,
        Self::WebhookDeleted,
        Self::EmojiCreated,
        Self::EmojiUpdated,
        Self::EmojiDeleted,
        Self::MessageDeleted,
        Self::MessageBulkDeleted,
        Self::MessagePinned,
        Self::MessageUnpinned,
    ];

    /// Create an `ActionType` from a raw discriminator
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_u16() == value)
    }

    /// Create an `ActionType` from the wire discriminator, which may be any integer
    #[must_use]
    pub fn from_raw(value: i64) -> Option<Self> {
        u16::try_from(value).ok().and_then(Self::from_u16)
    }

    /// Get the raw discriminator
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get the name of this action kind
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GuildUpdated => "GUILD_UPDATED",
            Self::ChannelCreated => "CHANNEL_CREATED",
            Self::ChannelUpdated => "CHANNEL_UPDATED",
            Self::ChannelDeleted => "CHANNEL_DELETED",
            Self::OverwriteCreated => "OVERWRITE_CREATED",
            Self::OverwriteUpdated => "OVERWRITE_UPDATED",
            Self::OverwriteDeleted => "OVERWRITE_DELETED",
            Self::Kick => "KICK",
            Self::Prune => "PRUNE",
            Self::Ban => "BAN",
            Self::Unban => "UNBAN",
            Self::MemberUpdated => "MEMBER_UPDATED",
            Self::MemberRoleUpdated => "MEMBER_ROLE_UPDATED",
            Self::MemberMoved => "MEMBER_MOVED",
            Self::MemberDisconnected => "MEMBER_DISCONNECTED",
            Self::BotAdded => "BOT_ADDED",
            Self::RoleCreated => "ROLE_CREATED",
            Self::RoleUpdated => "ROLE_UPDATED",
            Self::RoleDeleted => "ROLE_DELETED",
            Self::InviteCreated => "INVITE_CREATED",
            Self::InviteUpdated => "INVITE_UPDATED",
            Self::InviteDeleted => "INVITE_DELETED",
            Self::WebhookCreated => "WEBHOOK_CREATED",
            Self::WebhookUpdated => "WEBHOOK_UPDATED",
            Self::WebhookDeleted => "WEBHOOK_DELETED",
            Self::EmojiCreated => "EMOJI_CREATED",
            Self::EmojiUpdated => "EMOJI_UPDATED",
            Self::EmojiDeleted => "EMOJI_DELETED",
            Self::MessageDeleted => "MESSAGE_DELETED",
            Self::MessageBulkDeleted => "MESSAGE_BULK_DELETED",
            Self::MessagePinned => "MESSAGE_PINNED",
            Self::MessageUnpinned => "MESSAGE_UNPINNED",
        }
    }
}

impl Serialize for ActionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u16())
    }
}
