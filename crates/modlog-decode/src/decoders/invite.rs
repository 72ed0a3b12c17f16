//! Invite create / update / delete decoders
//!
//! Creation facts only exist on the new side, deletion facts only on the old
//! side. The inviter is looked up leniently: an unknown inviter is `None`,
//! never an error.

use modlog_core::data::{InviteCreateData, InviteDeleteData, InviteInfo, InviteSnapshotData, InviteUpdateData};
use modlog_core::{ActionType, AuditLogEntry, Snowflake};

use crate::context::DecodeContext;
use crate::error::DecodeResult;
use crate::lookup::{Changes, Side};

pub fn invite_create(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<InviteCreateData> {
    snapshot(ctx, ActionType::InviteCreated, entry, Side::New)
}

pub fn invite_delete(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<InviteDeleteData> {
    snapshot(ctx, ActionType::InviteDeleted, entry, Side::Old)
}

fn snapshot(
    ctx: &DecodeContext<'_>,
    action: ActionType,
    entry: &AuditLogEntry,
    side: Side,
) -> DecodeResult<InviteSnapshotData> {
    let changes = Changes::new(action, entry);
    let creator_id: Option<Snowflake> = changes.value(side, "inviter_id")?;

    Ok(InviteSnapshotData {
        max_age: changes.require(side, "max_age")?,
        code: changes.require(side, "code")?,
        temporary: changes.require(side, "temporary")?,
        creator_id,
        creator: creator_id.and_then(|id| ctx.find_user(id)),
        channel_id: changes.require(side, "channel_id")?,
        uses: changes.require(side, "uses")?,
        max_uses: changes.require(side, "max_uses")?,
    })
}

pub fn invite_update(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<InviteUpdateData> {
    let changes = Changes::new(ActionType::InviteUpdated, entry);

    Ok(InviteUpdateData {
        before: invite_info(&changes, Side::Old)?,
        after: invite_info(&changes, Side::New)?,
    })
}

fn invite_info(changes: &Changes<'_>, side: Side) -> DecodeResult<InviteInfo> {
    Ok(InviteInfo {
        max_age: changes.value(side, "max_age")?,
        code: changes.value(side, "code")?,
        temporary: changes.value(side, "temporary")?,
        max_uses: changes.value(side, "max_uses")?,
        channel_id: changes.value(side, "channel_id")?,
    })
}
