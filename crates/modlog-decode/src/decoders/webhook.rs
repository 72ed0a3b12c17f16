//! Webhook decoders
//!
//! Webhook snapshots are looked up leniently; the decoded value never fails
//! because the webhook table is incomplete.

use modlog_core::data::{WebhookCreateData, WebhookDeleteData, WebhookInfo, WebhookUpdateData};
use modlog_core::{ActionType, AuditLogEntry};

use super::target_id;
use crate::context::DecodeContext;
use crate::error::DecodeResult;
use crate::lookup::{Changes, Side};

pub fn webhook_create(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<WebhookCreateData> {
    let action = ActionType::WebhookCreated;
    let webhook_id = target_id(action, entry)?;
    let changes = Changes::new(action, entry);

    Ok(WebhookCreateData {
        webhook_id,
        webhook: ctx.find_webhook(webhook_id),
        webhook_type: changes.require_new("type")?,
        name: changes.require_new("name")?,
        channel_id: changes.require_new("channel_id")?,
    })
}

pub fn webhook_update(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<WebhookUpdateData> {
    let action = ActionType::WebhookUpdated;
    let webhook_id = target_id(action, entry)?;
    let changes = Changes::new(action, entry);

    Ok(WebhookUpdateData {
        webhook_id,
        webhook: ctx.find_webhook(webhook_id),
        before: webhook_info(&changes, Side::Old)?,
        after: webhook_info(&changes, Side::New)?,
    })
}

fn webhook_info(changes: &Changes<'_>, side: Side) -> DecodeResult<WebhookInfo> {
    Ok(WebhookInfo {
        name: changes.value(side, "name")?,
        channel_id: changes.value(side, "channel_id")?,
        avatar_hash: changes.value(side, "avatar_hash")?,
    })
}

pub fn webhook_delete(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<WebhookDeleteData> {
    let action = ActionType::WebhookDeleted;
    let changes = Changes::new(action, entry);

    Ok(WebhookDeleteData {
        webhook_id: target_id(action, entry)?,
        channel_id: changes.require_old("channel_id")?,
        webhook_type: changes.require_old("type")?,
        name: changes.require_old("name")?,
        avatar_hash: changes.old_value("avatar_hash")?,
    })
}
