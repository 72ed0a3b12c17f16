//! Test fixtures and data generators
//!
//! Every known action kind has one well-formed raw entry. The ids are chosen
//! so the side tables below resolve every reference.

use modlog_core::ActionType;
use serde_json::{json, Value};

/// Target user present in the user table
pub const TARGET_USER_ID: i64 = 5;
/// Inviter present in the user table
pub const INVITER_ID: i64 = 42;
/// Guild owner present in the user table
pub const OWNER_ID: i64 = 10;
/// Webhook present in the webhook table
pub const WEBHOOK_ID: i64 = 600;
pub const CHANNEL_ID: i64 = 300;
pub const ROLE_ID: i64 = 301;

/// Entry id used for a kind's fixture
pub fn entry_id(kind: ActionType) -> i64 {
    9000 + i64::from(kind.as_u16())
}

/// User side table shared by all fixtures
pub fn users() -> Value {
    json!([
        {"id": TARGET_USER_ID.to_string(), "username": "spammer", "discriminator": "1337"},
        {"id": INVITER_ID.to_string(), "username": "recruiter", "discriminator": "0042", "bot": false},
        {"id": OWNER_ID.to_string(), "username": "owner", "discriminator": "0001", "avatar": "a1b2"}
    ])
}

/// Webhook side table shared by all fixtures
pub fn webhooks() -> Value {
    json!([
        {"id": WEBHOOK_ID.to_string(), "type": 1, "name": "deploy-bot", "channel_id": CHANNEL_ID.to_string()}
    ])
}

fn changes(kind: ActionType) -> Value {
    let channel = CHANNEL_ID.to_string();
    match kind {
        ActionType::GuildUpdated => json!([
            {"key": "name", "old_value": "Old Guild", "new_value": "New Guild"},
            {"key": "owner_id", "old_value": OWNER_ID.to_string(), "new_value": INVITER_ID.to_string()}
        ]),
        ActionType::ChannelCreated => json!([
            {"key": "name", "new_value": "general"},
            {"key": "type", "new_value": 0},
            {"key": "permission_overwrites", "new_value": []}
        ]),
        ActionType::ChannelUpdated => json!([
            {"key": "topic", "old_value": "A", "new_value": "B"}
        ]),
        ActionType::ChannelDeleted => json!([
            {"key": "name", "old_value": "general"},
            {"key": "type", "old_value": 0},
            {"key": "permission_overwrites", "old_value": [
                {"id": ROLE_ID.to_string(), "type": 0, "allow": "1024", "deny": "0"}
            ]}
        ]),
        ActionType::OverwriteCreated => json!([
            {"key": "allow", "new_value": "1024"},
            {"key": "deny", "new_value": "0"}
        ]),
        ActionType::OverwriteUpdated => json!([
            {"key": "deny", "old_value": "0", "new_value": "2048"}
        ]),
        ActionType::OverwriteDeleted => json!([
            {"key": "allow", "old_value": "1024"},
            {"key": "deny", "old_value": "0"}
        ]),
        ActionType::MemberUpdated => json!([
            {"key": "nick", "old_value": "spam", "new_value": "reformed"}
        ]),
        ActionType::MemberRoleUpdated => json!([
            {"key": "$add", "new_value": [{"id": ROLE_ID.to_string(), "name": "Muted"}]}
        ]),
        ActionType::RoleCreated => json!([
            {"key": "name", "new_value": "Muted"},
            {"key": "permissions", "new_value": "0"}
        ]),
        ActionType::RoleUpdated => json!([
            {"key": "color", "old_value": 0, "new_value": 15_158_332}
        ]),
        ActionType::RoleDeleted => json!([
            {"key": "name", "old_value": "Muted"}
        ]),
        ActionType::InviteCreated => json!([
            {"key": "code", "new_value": "FTqNnyS"},
            {"key": "channel_id", "new_value": channel},
            {"key": "inviter_id", "new_value": INVITER_ID.to_string()},
            {"key": "uses", "new_value": 0},
            {"key": "max_uses", "new_value": 0},
            {"key": "max_age", "new_value": 86400},
            {"key": "temporary", "new_value": false}
        ]),
        ActionType::InviteUpdated => json!([
            {"key": "max_uses", "old_value": 0, "new_value": 10}
        ]),
        ActionType::InviteDeleted => json!([
            {"key": "code", "old_value": "FTqNnyS"},
            {"key": "channel_id", "old_value": channel},
            {"key": "inviter_id", "old_value": INVITER_ID.to_string()},
            {"key": "uses", "old_value": 7},
            {"key": "max_uses", "old_value": 0},
            {"key": "max_age", "old_value": 86400},
            {"key": "temporary", "old_value": false}
        ]),
        ActionType::WebhookCreated => json!([
            {"key": "type", "new_value": 1},
            {"key": "name", "new_value": "deploy-bot"},
            {"key": "channel_id", "new_value": channel}
        ]),
        ActionType::WebhookUpdated => json!([
            {"key": "avatar_hash", "new_value": "f00d"}
        ]),
        ActionType::WebhookDeleted => json!([
            {"key": "type", "old_value": 1},
            {"key": "name", "old_value": "deploy-bot"},
            {"key": "channel_id", "old_value": channel}
        ]),
        ActionType::EmojiCreated => json!([{"key": "name", "new_value": "wave"}]),
        ActionType::EmojiUpdated => json!([{"key": "name", "old_value": "wave", "new_value": "hello"}]),
        ActionType::EmojiDeleted => json!([{"key": "name", "old_value": "hello"}]),
        _ => json!([]),
    }
}

fn target_id(kind: ActionType) -> Option<i64> {
    match kind {
        ActionType::GuildUpdated => Some(900),
        ActionType::ChannelCreated
        | ActionType::ChannelUpdated
        | ActionType::ChannelDeleted
        | ActionType::OverwriteCreated
        | ActionType::OverwriteUpdated
        | ActionType::OverwriteDeleted
        | ActionType::MessageBulkDeleted => Some(CHANNEL_ID),
        ActionType::Kick
        | ActionType::Ban
        | ActionType::Unban
        | ActionType::MemberUpdated
        | ActionType::MemberRoleUpdated
        | ActionType::BotAdded
        | ActionType::MessageDeleted
        | ActionType::MessagePinned
        | ActionType::MessageUnpinned => Some(TARGET_USER_ID),
        ActionType::RoleCreated | ActionType::RoleUpdated | ActionType::RoleDeleted => Some(ROLE_ID),
        ActionType::WebhookCreated | ActionType::WebhookUpdated | ActionType::WebhookDeleted => {
            Some(WEBHOOK_ID)
        }
        ActionType::EmojiCreated | ActionType::EmojiUpdated | ActionType::EmojiDeleted => Some(77),
        ActionType::Prune
        | ActionType::MemberMoved
        | ActionType::MemberDisconnected
        | ActionType::InviteCreated
        | ActionType::InviteUpdated
        | ActionType::InviteDeleted => None,
    }
}

fn options(kind: ActionType) -> Value {
    let channel = CHANNEL_ID.to_string();
    match kind {
        ActionType::OverwriteCreated | ActionType::OverwriteUpdated | ActionType::OverwriteDeleted => {
            json!({"id": ROLE_ID.to_string(), "type": "0", "role_name": "Muted"})
        }
        ActionType::Prune => json!({"delete_member_days": "7", "members_removed": "12"}),
        ActionType::MemberMoved => json!({"channel_id": channel, "count": "2"}),
        ActionType::MemberDisconnected => json!({"count": "3"}),
        ActionType::MessageDeleted => json!({"channel_id": channel, "count": "4"}),
        ActionType::MessageBulkDeleted => json!({"count": "25"}),
        ActionType::MessagePinned | ActionType::MessageUnpinned => {
            json!({"channel_id": channel, "message_id": "4567"})
        }
        _ => Value::Null,
    }
}

/// A well-formed raw entry for the given kind
pub fn entry_for(kind: ActionType) -> Value {
    let mut entry = json!({
        "id": entry_id(kind).to_string(),
        "user_id": OWNER_ID.to_string(),
        "action_type": kind.as_u16(),
        "changes": changes(kind),
        "reason": format!("fixture {}", kind.name()),
    });

    if let Some(target) = target_id(kind) {
        entry["target_id"] = json!(target.to_string());
    }
    let options = options(kind);
    if !options.is_null() {
        entry["options"] = options;
    }

    entry
}

/// A page with the given entries and the shared side tables
pub fn page(entries: Vec<Value>) -> Value {
    json!({
        "audit_log_entries": entries,
        "users": users(),
        "webhooks": webhooks(),
    })
}

/// A page holding one fixture entry per known kind, in discriminator order
pub fn full_page() -> Value {
    page(ActionType::ALL.iter().map(|kind| entry_for(*kind)).collect())
}
