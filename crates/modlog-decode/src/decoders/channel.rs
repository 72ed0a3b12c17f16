//! Channel create / update / delete decoders

use modlog_core::data::{ChannelCreateData, ChannelDeleteData, ChannelInfo, ChannelSnapshotData, ChannelUpdateData};
use modlog_core::{ActionType, AuditLogEntry};

use super::target_id;
use crate::context::DecodeContext;
use crate::error::DecodeResult;
use crate::lookup::{Changes, Side};

pub fn channel_create(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<ChannelCreateData> {
    snapshot(ActionType::ChannelCreated, entry, Side::New)
}

pub fn channel_delete(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<ChannelDeleteData> {
    snapshot(ActionType::ChannelDeleted, entry, Side::Old)
}

/// A created channel only has new values, a deleted one only old values
fn snapshot(action: ActionType, entry: &AuditLogEntry, side: Side) -> DecodeResult<ChannelSnapshotData> {
    let changes = Changes::new(action, entry);

    // A new channel without overwrites may omit the change entirely.
    let overwrites = match side {
        Side::New => changes.value(side, "permission_overwrites")?.unwrap_or_default(),
        Side::Old => changes.require(side, "permission_overwrites")?,
    };

    Ok(ChannelSnapshotData {
        channel_id: target_id(action, entry)?,
        name: changes.require(side, "name")?,
        channel_type: changes.require(side, "type")?,
        slow_mode_interval: changes.value(side, "rate_limit_per_user")?,
        nsfw: changes.value(side, "nsfw")?,
        bitrate: changes.value(side, "bitrate")?,
        overwrites,
    })
}

pub fn channel_update(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<ChannelUpdateData> {
    let action = ActionType::ChannelUpdated;
    let changes = Changes::new(action, entry);

    Ok(ChannelUpdateData {
        channel_id: target_id(action, entry)?,
        before: channel_info(&changes, Side::Old)?,
        after: channel_info(&changes, Side::New)?,
    })
}

fn channel_info(changes: &Changes<'_>, side: Side) -> DecodeResult<ChannelInfo> {
    Ok(ChannelInfo {
        name: changes.value(side, "name")?,
        topic: changes.value(side, "topic")?,
        slow_mode_interval: changes.value(side, "rate_limit_per_user")?,
        nsfw: changes.value(side, "nsfw")?,
        bitrate: changes.value(side, "bitrate")?,
    })
}
