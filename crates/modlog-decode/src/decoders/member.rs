//! Member moderation decoders

use modlog_core::data::{
    BanData, BotAddData, KickData, MemberDisconnectData, MemberInfo, MemberMoveData,
    MemberRoleEditInfo, MemberRoleUpdateData, MemberUpdateData, PruneData, UnbanData,
};
use modlog_core::{ActionType, AuditLogEntry, RoleRef};

use super::target_user;
use crate::context::DecodeContext;
use crate::error::DecodeResult;
use crate::lookup::{Changes, Options, Side};

pub fn kick(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<KickData> {
    let (target_id, target) = target_user(ctx, ActionType::Kick, entry)?;
    Ok(KickData { target_id, target })
}

pub fn ban(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<BanData> {
    let (target_id, target) = target_user(ctx, ActionType::Ban, entry)?;
    Ok(BanData { target_id, target })
}

pub fn unban(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<UnbanData> {
    let (target_id, target) = target_user(ctx, ActionType::Unban, entry)?;
    Ok(UnbanData { target_id, target })
}

pub fn bot_add(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<BotAddData> {
    let (target_id, target) = target_user(ctx, ActionType::BotAdded, entry)?;
    Ok(BotAddData { target_id, target })
}

pub fn prune(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<PruneData> {
    let options = Options::new(ActionType::Prune, entry);

    Ok(PruneData {
        prune_days: options.require("delete_member_days")?,
        members_removed: options.require("members_removed")?,
    })
}

pub fn member_update(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<MemberUpdateData> {
    let action = ActionType::MemberUpdated;
    let (target_id, target) = target_user(ctx, action, entry)?;
    let changes = Changes::new(action, entry);

    Ok(MemberUpdateData {
        target_id,
        target,
        before: member_info(&changes, Side::Old)?,
        after: member_info(&changes, Side::New)?,
    })
}

fn member_info(changes: &Changes<'_>, side: Side) -> DecodeResult<MemberInfo> {
    Ok(MemberInfo {
        nickname: changes.value(side, "nick")?,
        deaf: changes.value(side, "deaf")?,
        mute: changes.value(side, "mute")?,
    })
}

/// Added roles come first, then removed roles, each in wire order
pub fn member_role_update(
    ctx: &DecodeContext<'_>,
    entry: &AuditLogEntry,
) -> DecodeResult<MemberRoleUpdateData> {
    let action = ActionType::MemberRoleUpdated;
    let (target_id, target) = target_user(ctx, action, entry)?;
    let changes = Changes::new(action, entry);

    let added: Vec<RoleRef> = changes.new_value("$add")?.unwrap_or_default();
    let removed: Vec<RoleRef> = changes.new_value("$remove")?.unwrap_or_default();

    let roles = added
        .into_iter()
        .map(|role| (role, true))
        .chain(removed.into_iter().map(|role| (role, false)))
        .map(|(role, added)| MemberRoleEditInfo {
            role_id: role.id,
            name: role.name,
            added,
        })
        .collect();

    Ok(MemberRoleUpdateData {
        target_id,
        target,
        roles,
    })
}

pub fn member_move(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<MemberMoveData> {
    let options = Options::new(ActionType::MemberMoved, entry);

    Ok(MemberMoveData {
        channel_id: options.require("channel_id")?,
        member_count: options.require("count")?,
    })
}

pub fn member_disconnect(
    _ctx: &DecodeContext<'_>,
    entry: &AuditLogEntry,
) -> DecodeResult<MemberDisconnectData> {
    let options = Options::new(ActionType::MemberDisconnected, entry);

    Ok(MemberDisconnectData {
        member_count: options.require("count")?,
    })
}
