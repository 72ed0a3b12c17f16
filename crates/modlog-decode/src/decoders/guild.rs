//! Guild settings decoder

use modlog_core::data::{GuildInfo, GuildUpdateData};
use modlog_core::{ActionType, AuditLogEntry, Snowflake};

use crate::context::DecodeContext;
use crate::error::DecodeResult;
use crate::lookup::{Changes, Side};

pub fn guild_update(ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<GuildUpdateData> {
    let changes = Changes::new(ActionType::GuildUpdated, entry);

    Ok(GuildUpdateData {
        before: guild_info(ctx, &changes, Side::Old)?,
        after: guild_info(ctx, &changes, Side::New)?,
    })
}

fn guild_info(ctx: &DecodeContext<'_>, changes: &Changes<'_>, side: Side) -> DecodeResult<GuildInfo> {
    let owner_id: Option<Snowflake> = changes.value(side, "owner_id")?;

    Ok(GuildInfo {
        name: changes.value(side, "name")?,
        afk_timeout: changes.value(side, "afk_timeout")?,
        afk_channel_id: changes.value(side, "afk_channel_id")?,
        icon_hash: changes.value(side, "icon_hash")?,
        verification_level: changes.value(side, "verification_level")?,
        default_message_notifications: changes.value(side, "default_message_notifications")?,
        explicit_content_filter: changes.value(side, "explicit_content_filter")?,
        mfa_level: changes.value(side, "mfa_level")?,
        system_channel_id: changes.value(side, "system_channel_id")?,
        owner_id,
        owner: owner_id.and_then(|id| ctx.find_user(id)),
    })
}
