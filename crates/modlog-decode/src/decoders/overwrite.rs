//! Channel permission overwrite decoders
//!
//! The channel is the entry target; the role or member the overwrite applies
//! to is named by the `id` and `type` options, with `role_name` added for
//! role overwrites.

use modlog_core::data::{OverwriteCreateData, OverwriteDeleteData, OverwriteUpdateData};
use modlog_core::{
    ActionType, AuditLogEntry, Overwrite, OverwritePermissions, PermissionTarget, Permissions,
    Snowflake,
};

use super::target_id;
use crate::context::DecodeContext;
use crate::error::DecodeResult;
use crate::lookup::{Changes, Options, Side};

pub fn overwrite_create(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<OverwriteCreateData> {
    let (channel_id, overwrite, role_name) = snapshot(ActionType::OverwriteCreated, entry, Side::New)?;
    Ok(OverwriteCreateData {
        channel_id,
        overwrite,
        role_name,
    })
}

pub fn overwrite_delete(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<OverwriteDeleteData> {
    let (channel_id, overwrite, role_name) = snapshot(ActionType::OverwriteDeleted, entry, Side::Old)?;
    Ok(OverwriteDeleteData {
        channel_id,
        overwrite,
        role_name,
    })
}

/// Who the overwrite applies to, read from the options
struct OverwriteTarget {
    id: Snowflake,
    kind: PermissionTarget,
    role_name: Option<String>,
}

fn overwrite_target(action: ActionType, entry: &AuditLogEntry) -> DecodeResult<OverwriteTarget> {
    let options = Options::new(action, entry);
    Ok(OverwriteTarget {
        id: options.require("id")?,
        kind: options.require("type")?,
        role_name: options.get("role_name")?,
    })
}

fn snapshot(
    action: ActionType,
    entry: &AuditLogEntry,
    side: Side,
) -> DecodeResult<(Snowflake, Overwrite, Option<String>)> {
    let channel_id = target_id(action, entry)?;
    let target = overwrite_target(action, entry)?;
    let changes = Changes::new(action, entry);

    let permissions = OverwritePermissions::new(
        changes.require(side, "allow")?,
        changes.require(side, "deny")?,
    );

    Ok((
        channel_id,
        Overwrite::new(target.id, target.kind, permissions),
        target.role_name,
    ))
}

pub fn overwrite_update(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<OverwriteUpdateData> {
    let action = ActionType::OverwriteUpdated;
    let channel_id = target_id(action, entry)?;
    let target = overwrite_target(action, entry)?;
    let changes = Changes::new(action, entry);

    Ok(OverwriteUpdateData {
        channel_id,
        target_id: target.id,
        target_type: target.kind,
        role_name: target.role_name,
        old_permissions: permissions(&changes, Side::Old)?,
        new_permissions: permissions(&changes, Side::New)?,
    })
}

/// An update only lists the bits that moved; an untouched side is empty
fn permissions(changes: &Changes<'_>, side: Side) -> DecodeResult<OverwritePermissions> {
    let allow: Option<Permissions> = changes.value(side, "allow")?;
    let deny: Option<Permissions> = changes.value(side, "deny")?;
    Ok(OverwritePermissions::new(
        allow.unwrap_or_default(),
        deny.unwrap_or_default(),
    ))
}
