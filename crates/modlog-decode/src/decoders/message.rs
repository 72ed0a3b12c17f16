//! Message moderation decoders
//!
//! Counts and channels come from the options bag. A change that happens to
//! share a name with an option is never consulted.

use modlog_core::data::{MessageBulkDeleteData, MessageDeleteData, MessagePinData, MessageUnpinData};
use modlog_core::{ActionType, AuditLogEntry};

use super::{target_id, target_user};
use crate::context::DecodeContext;
use crate::error::DecodeResult;
use crate::lookup::Options;

pub fn message_delete(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<MessageDeleteData> {
    let action = ActionType::MessageDeleted;
    let options = Options::new(action, entry);
    let (target_id, target) = target_user(ctx, action, entry)?;

    Ok(MessageDeleteData {
        channel_id: options.require("channel_id")?,
        message_count: options.require("count")?,
        target_id,
        target,
    })
}

pub fn message_bulk_delete(
    _ctx: &DecodeContext<'_>,
    entry: &AuditLogEntry,
) -> DecodeResult<MessageBulkDeleteData> {
    let action = ActionType::MessageBulkDeleted;
    let options = Options::new(action, entry);

    Ok(MessageBulkDeleteData {
        channel_id: target_id(action, entry)?,
        message_count: options.require("count")?,
    })
}

pub fn message_pin(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<MessagePinData> {
    let action = ActionType::MessagePinned;
    let options = Options::new(action, entry);
    let (target_id, target) = target_user(ctx, action, entry)?;

    Ok(MessagePinData {
        channel_id: options.require("channel_id")?,
        message_id: options.require("message_id")?,
        target_id,
        target,
    })
}

pub fn message_unpin(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<MessageUnpinData> {
    let action = ActionType::MessageUnpinned;
    let options = Options::new(action, entry);
    let (target_id, target) = target_user(ctx, action, entry)?;

    Ok(MessageUnpinData {
        channel_id: options.require("channel_id")?,
        message_id: options.require("message_id")?,
        target_id,
        target,
    })
}
