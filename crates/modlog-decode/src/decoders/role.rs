//! Role decoders

use modlog_core::data::{RoleCreateData, RoleDeleteData, RoleEditInfo, RoleUpdateData};
use modlog_core::{ActionType, AuditLogEntry};

use super::target_id;
use crate::context::DecodeContext;
use crate::error::DecodeResult;
use crate::lookup::{Changes, Side};

pub fn role_create(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<RoleCreateData> {
    let action = ActionType::RoleCreated;
    let changes = Changes::new(action, entry);

    Ok(RoleCreateData {
        role_id: target_id(action, entry)?,
        properties: role_info(&changes, Side::New)?,
    })
}

pub fn role_update(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<RoleUpdateData> {
    let action = ActionType::RoleUpdated;
    let changes = Changes::new(action, entry);

    Ok(RoleUpdateData {
        role_id: target_id(action, entry)?,
        before: role_info(&changes, Side::Old)?,
        after: role_info(&changes, Side::New)?,
    })
}

pub fn role_delete(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<RoleDeleteData> {
    let action = ActionType::RoleDeleted;
    let changes = Changes::new(action, entry);

    Ok(RoleDeleteData {
        role_id: target_id(action, entry)?,
        properties: role_info(&changes, Side::Old)?,
    })
}

fn role_info(changes: &Changes<'_>, side: Side) -> DecodeResult<RoleEditInfo> {
    Ok(RoleEditInfo {
        color: changes.value(side, "color")?,
        mentionable: changes.value(side, "mentionable")?,
        hoist: changes.value(side, "hoist")?,
        name: changes.value(side, "name")?,
        permissions: changes.value(side, "permissions")?,
    })
}
