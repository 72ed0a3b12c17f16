//! Per-action decoders
//!
//! Each decoder is a pure function of the decode context and one entry. They
//! are public so callers that already know the kind can skip dispatch.

pub mod channel;
pub mod emote;
pub mod guild;
pub mod invite;
pub mod member;
pub mod message;
pub mod overwrite;
pub mod role;
pub mod webhook;

use modlog_core::{ActionType, AuditLogEntry, Snowflake, UserSnapshot};

use crate::coerce::coerce;
use crate::context::DecodeContext;
use crate::error::{DecodeError, DecodeResult};

/// The entry's target id, which this action kind requires
fn target_id(action: ActionType, entry: &AuditLogEntry) -> DecodeResult<Snowflake> {
    let raw = entry
        .target_id
        .as_ref()
        .ok_or_else(|| DecodeError::missing(action, "target_id"))?;
    coerce(raw).map_err(|err| DecodeError::mismatch("target_id", err))
}

/// The entry's target id resolved against the user table
fn target_user(
    ctx: &DecodeContext<'_>,
    action: ActionType,
    entry: &AuditLogEntry,
) -> DecodeResult<(Snowflake, Option<UserSnapshot>)> {
    let id = target_id(action, entry)?;
    let user = ctx.resolve_target(id)?;
    Ok((id, user))
}
