//! Dispatcher - routes each entry to the decoder for its action kind
//!
//! Decoding is total: an unknown discriminator becomes
//! [`AuditLogData::Unknown`], and a failing entry never stops the batch.

use chrono::{DateTime, Utc};
use modlog_core::{ActionType, AuditLog, AuditLogData, AuditLogEntry, OpaqueValue, Snowflake};
use tracing::{debug, info, instrument, warn};

use crate::coerce::coerce;
use crate::context::{DecodeContext, ReferencePolicy};
use crate::decoders::{channel, emote, guild, invite, member, message, overwrite, role, webhook};
use crate::error::{DecodeError, DecodeResult};

/// Decode a single entry
pub fn decode_entry(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> Result<AuditLogData, DecodeError> {
    let Some(action) = ActionType::from_raw(entry.action_type) else {
        debug!(action_type = entry.action_type, id = ?entry.id, "Unknown action type, keeping raw entry");
        return Ok(AuditLogData::Unknown(entry.clone()));
    };

    let data = match action {
        ActionType::GuildUpdated => AuditLogData::GuildUpdated(guild::guild_update(ctx, entry)?),

        ActionType::ChannelCreated => AuditLogData::ChannelCreated(channel::channel_create(ctx, entry)?),
        ActionType::ChannelUpdated => AuditLogData::ChannelUpdated(channel::channel_update(ctx, entry)?),
        ActionType::ChannelDeleted => AuditLogData::ChannelDeleted(channel::channel_delete(ctx, entry)?),
        ActionType::OverwriteCreated => {
            AuditLogData::OverwriteCreated(overwrite::overwrite_create(ctx, entry)?)
        }
        ActionType::OverwriteUpdated => {
            AuditLogData::OverwriteUpdated(overwrite::overwrite_update(ctx, entry)?)
        }
        ActionType::OverwriteDeleted => {
            AuditLogData::OverwriteDeleted(overwrite::overwrite_delete(ctx, entry)?)
        }

        ActionType::Kick => AuditLogData::Kick(member::kick(ctx, entry)?),
        ActionType::Prune => AuditLogData::Prune(member::prune(ctx, entry)?),
        ActionType::Ban => AuditLogData::Ban(member::ban(ctx, entry)?),
        ActionType::Unban => AuditLogData::Unban(member::unban(ctx, entry)?),
        ActionType::MemberUpdated => AuditLogData::MemberUpdated(member::member_update(ctx, entry)?),
        ActionType::MemberRoleUpdated => {
            AuditLogData::MemberRoleUpdated(member::member_role_update(ctx, entry)?)
        }
        ActionType::MemberMoved => AuditLogData::MemberMoved(member::member_move(ctx, entry)?),
        ActionType::MemberDisconnected => {
            AuditLogData::MemberDisconnected(member::member_disconnect(ctx, entry)?)
        }
        ActionType::BotAdded => AuditLogData::BotAdded(member::bot_add(ctx, entry)?),

        ActionType::RoleCreated => AuditLogData::RoleCreated(role::role_create(ctx, entry)?),
        ActionType::RoleUpdated => AuditLogData::RoleUpdated(role::role_update(ctx, entry)?),
        ActionType::RoleDeleted => AuditLogData::RoleDeleted(role::role_delete(ctx, entry)?),

        ActionType::InviteCreated => AuditLogData::InviteCreated(invite::invite_create(ctx, entry)?),
        ActionType::InviteUpdated => AuditLogData::InviteUpdated(invite::invite_update(ctx, entry)?),
        ActionType::InviteDeleted => AuditLogData::InviteDeleted(invite::invite_delete(ctx, entry)?),

        ActionType::WebhookCreated => AuditLogData::WebhookCreated(webhook::webhook_create(ctx, entry)?),
        ActionType::WebhookUpdated => AuditLogData::WebhookUpdated(webhook::webhook_update(ctx, entry)?),
        ActionType::WebhookDeleted => AuditLogData::WebhookDeleted(webhook::webhook_delete(ctx, entry)?),

        ActionType::EmojiCreated => AuditLogData::EmojiCreated(emote::emote_create(ctx, entry)?),
        ActionType::EmojiUpdated => AuditLogData::EmojiUpdated(emote::emote_update(ctx, entry)?),
        ActionType::EmojiDeleted => AuditLogData::EmojiDeleted(emote::emote_delete(ctx, entry)?),

        ActionType::MessageDeleted => AuditLogData::MessageDeleted(message::message_delete(ctx, entry)?),
        ActionType::MessageBulkDeleted => {
            AuditLogData::MessageBulkDeleted(message::message_bulk_delete(ctx, entry)?)
        }
        ActionType::MessagePinned => AuditLogData::MessagePinned(message::message_pin(ctx, entry)?),
        ActionType::MessageUnpinned => AuditLogData::MessageUnpinned(message::message_unpin(ctx, entry)?),
    };

    Ok(data)
}

/// One decoded entry with the envelope fields every kind shares
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedEntry {
    pub id: Option<Snowflake>,
    /// User who performed the action
    pub user_id: Option<Snowflake>,
    pub reason: Option<String>,
    /// Raw discriminator, kept even when decoding fails
    pub action_type: i64,
    pub data: Result<AuditLogData, DecodeError>,
}

impl DecodedEntry {
    pub fn is_ok(&self) -> bool {
        self.data.is_ok()
    }

    /// When the action happened, read from the entry id
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.id.map(Snowflake::created_at)
    }

    /// Kind name for display; falls back to `UNKNOWN`
    pub fn kind(&self) -> &'static str {
        ActionType::from_raw(self.action_type).map_or("UNKNOWN", ActionType::name)
    }
}

/// Read an optional envelope id; a malformed one fails its entry
fn envelope_id(raw: Option<&OpaqueValue>, field: &'static str) -> DecodeResult<Option<Snowflake>> {
    raw.map(coerce::<Snowflake>)
        .transpose()
        .map_err(|err| DecodeError::mismatch(field, err))
}

/// Decode one entry together with its envelope fields
fn decode_envelope(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodedEntry {
    let id = envelope_id(entry.id.as_ref(), "id");
    let user_id = envelope_id(entry.user_id.as_ref(), "user_id");

    let data = match (&id, &user_id) {
        (Err(err), _) | (_, Err(err)) => Err(err.clone()),
        _ => decode_entry(ctx, entry),
    };

    if let Err(err) = &data {
        warn!(
            id = ?entry.id,
            action_type = entry.action_type,
            code = err.code(),
            error = %err,
            "Failed to decode audit log entry"
        );
    }

    DecodedEntry {
        id: id.ok().flatten(),
        user_id: user_id.ok().flatten(),
        reason: entry.reason.clone(),
        action_type: entry.action_type,
        data,
    }
}

/// Decode every entry of a page against its side tables
#[instrument(skip(log), fields(entries = log.audit_log_entries.len()))]
pub fn decode_all(log: &AuditLog, policy: ReferencePolicy) -> Vec<DecodedEntry> {
    let ctx = DecodeContext::new(log).with_policy(policy);
    decode_entries(&ctx, &log.audit_log_entries)
}

/// Decode a slice of entries with one shared context, preserving order
pub fn decode_entries(ctx: &DecodeContext<'_>, entries: &[AuditLogEntry]) -> Vec<DecodedEntry> {
    let decoded: Vec<DecodedEntry> = entries
        .iter()
        .map(|entry| decode_envelope(ctx, entry))
        .collect();

    let failed = decoded.iter().filter(|entry| !entry.is_ok()).count();
    info!(
        total = decoded.len(),
        failed,
        policy = ctx.policy().as_str(),
        "Audit log page decoded"
    );

    decoded
}
