//! Custom emoji decoders

use modlog_core::data::{EmoteCreateData, EmoteDeleteData, EmoteUpdateData};
use modlog_core::{ActionType, AuditLogEntry};

use super::target_id;
use crate::context::DecodeContext;
use crate::error::DecodeResult;
use crate::lookup::Changes;

pub fn emote_create(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<EmoteCreateData> {
    let action = ActionType::EmojiCreated;
    let changes = Changes::new(action, entry);

    Ok(EmoteCreateData {
        emote_id: target_id(action, entry)?,
        name: changes.require_new("name")?,
    })
}

pub fn emote_update(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<EmoteUpdateData> {
    let action = ActionType::EmojiUpdated;
    let changes = Changes::new(action, entry);
    changes.require_change("name")?;

    Ok(EmoteUpdateData {
        emote_id: target_id(action, entry)?,
        old_name: changes.old_value("name")?,
        new_name: changes.new_value("name")?,
    })
}

pub fn emote_delete(_ctx: &DecodeContext<'_>, entry: &AuditLogEntry) -> DecodeResult<EmoteDeleteData> {
    let action = ActionType::EmojiDeleted;
    let changes = Changes::new(action, entry);

    Ok(EmoteDeleteData {
        emote_id: target_id(action, entry)?,
        name: changes.require_old("name")?,
    })
}
