//! End-to-end decoding tests
//!
//! Run with: cargo test -p integration-tests --test decode_tests

use integration_tests::{
    decode_page, entry_for, entry_id, expect_data, expect_error_code, full_page, page, parse_page,
    CHANNEL_ID, INVITER_ID, OWNER_ID, ROLE_ID, TARGET_USER_ID, WEBHOOK_ID,
};
use modlog_core::{
    ActionType, AuditLogData, ChannelType, OpaqueValue, OverwritePermissions, PermissionTarget,
    Permissions, Snowflake, WebhookType,
};
use modlog_decode::{decode_entry, DecodeContext, ReferencePolicy};
use serde_json::json;

// ============================================================================
// Every Kind
// ============================================================================

#[test]
fn test_every_known_kind_decodes() {
    let decoded = decode_page(full_page(), ReferencePolicy::Strict).unwrap();
    assert_eq!(decoded.len(), ActionType::ALL.len());

    for (kind, entry) in ActionType::ALL.iter().zip(&decoded) {
        let data = expect_data(entry).unwrap();
        assert_eq!(data.action_type(), Some(*kind), "wrong variant for {kind}");
        assert_eq!(entry.id, Some(Snowflake::new(entry_id(*kind))));
        assert_eq!(entry.action_type, i64::from(kind.as_u16()));
        assert_eq!(entry.user_id, Some(Snowflake::new(OWNER_ID)));
        assert_eq!(entry.reason.as_deref(), Some(format!("fixture {}", kind.name()).as_str()));
    }
}

fn id(raw: i64) -> Snowflake {
    Snowflake::new(raw)
}

/// Compare a decoded payload with the values its fixture carries
#[allow(clippy::too_many_lines)]
fn assert_fixture_fields(data: &AuditLogData) {
    let target = Some(id(TARGET_USER_ID));

    match data {
        AuditLogData::GuildUpdated(d) => {
            assert_eq!(d.before.name.as_deref(), Some("Old Guild"));
            assert_eq!(d.after.name.as_deref(), Some("New Guild"));
            assert_eq!(d.before.owner_id, Some(id(OWNER_ID)));
            assert_eq!(d.before.owner.as_ref().map(|u| u.id), Some(id(OWNER_ID)));
            assert_eq!(d.after.owner.as_ref().map(|u| u.id), Some(id(INVITER_ID)));
            assert_eq!(d.after.afk_timeout, None);
        }
        AuditLogData::ChannelCreated(d) => {
            assert_eq!(d.channel_id, id(CHANNEL_ID));
            assert_eq!(d.name, "general");
            assert_eq!(d.channel_type, ChannelType::Text);
            assert!(d.overwrites.is_empty());
            assert_eq!(d.nsfw, None);
        }
        AuditLogData::ChannelUpdated(d) => {
            assert_eq!(d.channel_id, id(CHANNEL_ID));
            assert_eq!(d.before.topic.as_deref(), Some("A"));
            assert_eq!(d.after.topic.as_deref(), Some("B"));
        }
        AuditLogData::ChannelDeleted(d) => {
            assert_eq!(d.name, "general");
            assert_eq!(d.overwrites.len(), 1);
            assert_eq!(d.overwrites[0].target_id, id(ROLE_ID));
            assert_eq!(d.overwrites[0].permissions.allow, Permissions::VIEW_CHANNEL);
        }
        AuditLogData::OverwriteCreated(d) => {
            assert_eq!(d.channel_id, id(CHANNEL_ID));
            assert_eq!(d.overwrite.target_id, id(ROLE_ID));
            assert_eq!(d.overwrite.target_type, PermissionTarget::Role);
            assert_eq!(
                d.overwrite.permissions,
                OverwritePermissions::new(Permissions::VIEW_CHANNEL, Permissions::empty())
            );
            assert_eq!(d.role_name.as_deref(), Some("Muted"));
        }
        AuditLogData::OverwriteUpdated(d) => {
            assert_eq!(d.target_id, id(ROLE_ID));
            assert_eq!(d.old_permissions, OverwritePermissions::default());
            assert_eq!(d.new_permissions.deny, Permissions::SEND_MESSAGES);
            assert_eq!(d.new_permissions.allow, Permissions::empty());
            assert_eq!(d.role_name.as_deref(), Some("Muted"));
        }
        AuditLogData::OverwriteDeleted(d) => {
            assert_eq!(d.overwrite.permissions.allow, Permissions::VIEW_CHANNEL);
            assert_eq!(d.role_name.as_deref(), Some("Muted"));
        }
        AuditLogData::Kick(d) => {
            assert_eq!(Some(d.target_id), target);
            assert_eq!(d.target.as_ref().map(|u| u.id), target);
        }
        AuditLogData::Ban(d) => assert_eq!(d.target.as_ref().map(|u| u.id), target),
        AuditLogData::Unban(d) => assert_eq!(d.target.as_ref().map(|u| u.id), target),
        AuditLogData::BotAdded(d) => assert_eq!(d.target.as_ref().map(|u| u.id), target),
        AuditLogData::Prune(d) => {
            assert_eq!(d.prune_days, 7);
            assert_eq!(d.members_removed, 12);
        }
        AuditLogData::MemberUpdated(d) => {
            assert_eq!(Some(d.target_id), target);
            assert_eq!(d.before.nickname.as_deref(), Some("spam"));
            assert_eq!(d.after.nickname.as_deref(), Some("reformed"));
            assert_eq!(d.after.deaf, None);
        }
        AuditLogData::MemberRoleUpdated(d) => {
            assert_eq!(d.target.as_ref().map(|u| u.id), target);
            assert_eq!(d.roles.len(), 1);
            assert_eq!(d.roles[0].role_id, id(ROLE_ID));
            assert_eq!(d.roles[0].name.as_deref(), Some("Muted"));
            assert!(d.roles[0].added);
        }
        AuditLogData::MemberMoved(d) => {
            assert_eq!(d.channel_id, id(CHANNEL_ID));
            assert_eq!(d.member_count, 2);
        }
        AuditLogData::MemberDisconnected(d) => assert_eq!(d.member_count, 3),
        AuditLogData::RoleCreated(d) => {
            assert_eq!(d.role_id, id(ROLE_ID));
            assert_eq!(d.properties.name.as_deref(), Some("Muted"));
            assert_eq!(d.properties.permissions, Some(Permissions::empty()));
        }
        AuditLogData::RoleUpdated(d) => {
            assert_eq!(d.before.color, Some(0));
            assert_eq!(d.after.color, Some(15_158_332));
            assert_eq!(d.after.name, None);
        }
        AuditLogData::RoleDeleted(d) => {
            assert_eq!(d.properties.name.as_deref(), Some("Muted"));
        }
        AuditLogData::InviteCreated(d) => {
            assert_eq!(d.code, "FTqNnyS");
            assert_eq!(d.channel_id, id(CHANNEL_ID));
            assert_eq!(d.creator_id, Some(id(INVITER_ID)));
            assert_eq!(d.creator.as_ref().map(|u| u.username.as_str()), Some("recruiter"));
            assert_eq!(d.uses, 0);
            assert_eq!(d.max_uses, 0);
            assert_eq!(d.max_age, 86400);
            assert!(!d.temporary);
        }
        AuditLogData::InviteUpdated(d) => {
            assert_eq!(d.before.max_uses, Some(0));
            assert_eq!(d.after.max_uses, Some(10));
            assert_eq!(d.after.code, None);
        }
        AuditLogData::InviteDeleted(d) => {
            assert_eq!(d.code, "FTqNnyS");
            assert_eq!(d.uses, 7);
            assert_eq!(d.max_age, 86400);
        }
        AuditLogData::WebhookCreated(d) => {
            assert_eq!(d.webhook_id, id(WEBHOOK_ID));
            assert!(d.webhook.is_some());
            assert_eq!(d.webhook_type, WebhookType::Incoming);
            assert_eq!(d.name, "deploy-bot");
            assert_eq!(d.channel_id, id(CHANNEL_ID));
        }
        AuditLogData::WebhookUpdated(d) => {
            assert!(d.webhook.is_some());
            assert_eq!(d.before.avatar_hash, None);
            assert_eq!(d.after.avatar_hash.as_deref(), Some("f00d"));
        }
        AuditLogData::WebhookDeleted(d) => {
            assert_eq!(d.webhook_id, id(WEBHOOK_ID));
            assert_eq!(d.webhook_type, WebhookType::Incoming);
            assert_eq!(d.name, "deploy-bot");
            assert_eq!(d.channel_id, id(CHANNEL_ID));
            assert_eq!(d.avatar_hash, None);
        }
        AuditLogData::EmojiCreated(d) => {
            assert_eq!(d.emote_id, id(77));
            assert_eq!(d.name, "wave");
        }
        AuditLogData::EmojiUpdated(d) => {
            assert_eq!(d.old_name.as_deref(), Some("wave"));
            assert_eq!(d.new_name.as_deref(), Some("hello"));
        }
        AuditLogData::EmojiDeleted(d) => assert_eq!(d.name, "hello"),
        AuditLogData::MessageDeleted(d) => {
            assert_eq!(d.channel_id, id(CHANNEL_ID));
            assert_eq!(d.message_count, 4);
            assert_eq!(d.target.as_ref().map(|u| u.id), target);
        }
        AuditLogData::MessageBulkDeleted(d) => {
            assert_eq!(d.channel_id, id(CHANNEL_ID));
            assert_eq!(d.message_count, 25);
        }
        AuditLogData::MessagePinned(d) => {
            assert_eq!(d.channel_id, id(CHANNEL_ID));
            assert_eq!(d.message_id, id(4567));
            assert_eq!(Some(d.target_id), target);
        }
        AuditLogData::MessageUnpinned(d) => {
            assert_eq!(d.message_id, id(4567));
            assert_eq!(d.target.as_ref().map(|u| u.id), target);
        }
        AuditLogData::Unknown(entry) => panic!("fixture decoded as unknown: {entry:?}"),
    }
}

#[test]
fn test_every_kind_reproduces_fixture_fields() {
    let decoded = decode_page(full_page(), ReferencePolicy::Strict).unwrap();

    for entry in &decoded {
        assert_fixture_fields(expect_data(entry).unwrap());
    }
}

#[test]
fn test_every_kind_serializes_with_its_tag() {
    let decoded = decode_page(full_page(), ReferencePolicy::Lenient).unwrap();

    for entry in &decoded {
        let data = expect_data(entry).unwrap();
        let json = serde_json::to_value(data).unwrap();
        assert_eq!(json["action"], data.kind());
    }
}

#[test]
fn test_decoding_is_deterministic() {
    let log = parse_page(full_page()).unwrap();
    let ctx = DecodeContext::new(&log);

    for entry in &log.audit_log_entries {
        assert_eq!(decode_entry(&ctx, entry), decode_entry(&ctx, entry));
    }
}

// ============================================================================
// Forward Compatibility
// ============================================================================

#[test]
fn test_unknown_kind_carries_raw_entry() {
    let raw = json!({"id": "1", "action_type": 143, "target_id": "5", "options": {"x": "y"}});
    let decoded = decode_page(page(vec![raw]), ReferencePolicy::Strict).unwrap();

    let data = expect_data(&decoded[0]).unwrap();
    let AuditLogData::Unknown(entry) = data else {
        panic!("expected unknown, got {}", data.kind());
    };
    assert_eq!(entry.action_type, 143);
    assert_eq!(entry.target_id, Some(OpaqueValue::from("5")));
    assert!(entry.options.is_some());
}

// ============================================================================
// Batch Isolation
// ============================================================================

#[test]
fn test_malformed_entry_leaves_neighbours_decoded() {
    let mut broken = entry_for(ActionType::ChannelDeleted);
    broken["changes"][0]["old_value"] = json!(17);

    let decoded = decode_page(
        page(vec![
            entry_for(ActionType::Kick),
            broken,
            entry_for(ActionType::EmojiUpdated),
        ]),
        ReferencePolicy::Lenient,
    )
    .unwrap();

    assert!(matches!(expect_data(&decoded[0]).unwrap(), AuditLogData::Kick(_)));
    assert_eq!(expect_error_code(&decoded[1]).unwrap(), "TYPE_MISMATCH");
    assert_eq!(decoded[1].data.as_ref().unwrap_err().field(), Some("name"));
    assert!(matches!(
        expect_data(&decoded[2]).unwrap(),
        AuditLogData::EmojiUpdated(_)
    ));
}

#[test]
fn test_malformed_ids_fail_only_their_entry() {
    let mut ban = entry_for(ActionType::Ban);
    ban["target_id"] = json!("not-a-snowflake");
    let mut kick = entry_for(ActionType::Kick);
    kick["user_id"] = json!("-5");

    let decoded = decode_page(
        page(vec![
            entry_for(ActionType::Kick),
            ban,
            kick,
            json!({"id": "77", "action_type": 70000}),
            entry_for(ActionType::EmojiUpdated),
        ]),
        ReferencePolicy::Strict,
    )
    .unwrap();
    assert_eq!(decoded.len(), 5);

    assert!(matches!(expect_data(&decoded[0]).unwrap(), AuditLogData::Kick(_)));

    assert_eq!(expect_error_code(&decoded[1]).unwrap(), "TYPE_MISMATCH");
    assert_eq!(decoded[1].data.as_ref().unwrap_err().field(), Some("target_id"));
    assert_eq!(decoded[1].id, Some(Snowflake::new(entry_id(ActionType::Ban))));

    assert_eq!(expect_error_code(&decoded[2]).unwrap(), "TYPE_MISMATCH");
    assert_eq!(decoded[2].data.as_ref().unwrap_err().field(), Some("user_id"));
    assert_eq!(decoded[2].user_id, None);

    assert!(expect_data(&decoded[3]).unwrap().is_unknown());
    assert_eq!(decoded[3].action_type, 70000);

    assert!(matches!(
        expect_data(&decoded[4]).unwrap(),
        AuditLogData::EmojiUpdated(_)
    ));
}

// ============================================================================
// Reference Resolution
// ============================================================================

#[test]
fn test_kick_target_policy() {
    let mut kick = entry_for(ActionType::Kick);
    kick["target_id"] = json!("123456");

    let lenient = decode_page(page(vec![kick.clone()]), ReferencePolicy::Lenient).unwrap();
    let AuditLogData::Kick(data) = expect_data(&lenient[0]).unwrap() else {
        panic!("expected kick");
    };
    assert_eq!(data.target_id, Snowflake::new(123_456));
    assert_eq!(data.target, None);

    let strict = decode_page(page(vec![kick]), ReferencePolicy::Strict).unwrap();
    assert_eq!(expect_error_code(&strict[0]).unwrap(), "UNRESOLVED_REFERENCE");
}

#[test]
fn test_kick_resolves_snapshot() {
    let decoded = decode_page(page(vec![entry_for(ActionType::Kick)]), ReferencePolicy::Strict).unwrap();
    let AuditLogData::Kick(data) = expect_data(&decoded[0]).unwrap() else {
        panic!("expected kick");
    };

    let target = data.target.as_ref().unwrap();
    assert_eq!(target.id, Snowflake::new(TARGET_USER_ID));
    assert_eq!(target.tag(), "spammer#1337");
}

#[test]
fn test_invite_creator_is_lenient_under_strict_policy() {
    let mut invite = entry_for(ActionType::InviteCreated);
    invite["changes"][2]["new_value"] = json!("777");

    let decoded = decode_page(page(vec![invite]), ReferencePolicy::Strict).unwrap();
    let AuditLogData::InviteCreated(data) = expect_data(&decoded[0]).unwrap() else {
        panic!("expected invite");
    };
    assert_eq!(data.creator_id, Some(Snowflake::new(777)));
    assert_eq!(data.creator, None);
}

#[test]
fn test_invite_creator_resolved() {
    let decoded = decode_page(page(vec![entry_for(ActionType::InviteDeleted)]), ReferencePolicy::Lenient).unwrap();
    let AuditLogData::InviteDeleted(data) = expect_data(&decoded[0]).unwrap() else {
        panic!("expected invite");
    };
    assert_eq!(data.uses, 7);
    assert_eq!(data.creator.as_ref().map(|u| u.id), Some(Snowflake::new(INVITER_ID)));
}

// ============================================================================
// Options Only
// ============================================================================

#[test]
fn test_message_delete_reads_options_not_changes() {
    let mut delete = entry_for(ActionType::MessageDeleted);
    delete["changes"] = json!([{"key": "count", "new_value": 999}]);

    let decoded = decode_page(page(vec![delete]), ReferencePolicy::Lenient).unwrap();
    let AuditLogData::MessageDeleted(data) = expect_data(&decoded[0]).unwrap() else {
        panic!("expected message delete");
    };
    assert_eq!(data.message_count, 4);
}

// ============================================================================
// Output Shape
// ============================================================================

#[test]
fn test_channel_update_output_shape() {
    let decoded = decode_page(page(vec![entry_for(ActionType::ChannelUpdated)]), ReferencePolicy::Lenient).unwrap();
    let json = serde_json::to_value(expect_data(&decoded[0]).unwrap()).unwrap();

    assert_eq!(json["action"], "CHANNEL_UPDATED");
    assert_eq!(json["channel_id"], "300");
    assert_eq!(json["before"]["topic"], "A");
    assert_eq!(json["after"]["topic"], "B");
    assert_eq!(json["before"]["name"], serde_json::Value::Null);
}
