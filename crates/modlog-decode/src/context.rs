//! Decode context - side-table indexes shared by every decoder call
//!
//! Built once per audit log page and borrowed immutably by all decoders, so a
//! batch can be split across threads without coordination.

use std::collections::HashMap;

use modlog_core::{AuditLog, Snowflake, UserSnapshot, WebhookSnapshot};

use crate::error::{DecodeError, DecodeResult};

/// What to do when an entry's target user is missing from the user table
///
/// Only target users are affected. Secondary references (invite creators,
/// guild owners, webhooks) always resolve to `None` when unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Decode with `target: None`
    #[default]
    Lenient,
    /// Fail the entry with `DecodeError::UnresolvedReference`
    Strict,
}

impl ReferencePolicy {
    /// Parse from a case-insensitive name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

/// Read-only lookup tables for one decode pass
#[derive(Debug, Clone)]
pub struct DecodeContext<'a> {
    users: HashMap<Snowflake, &'a UserSnapshot>,
    webhooks: HashMap<Snowflake, &'a WebhookSnapshot>,
    policy: ReferencePolicy,
}

impl<'a> DecodeContext<'a> {
    /// Index the side tables of an audit log page
    pub fn new(log: &'a AuditLog) -> Self {
        Self::from_tables(&log.users, &log.webhooks)
    }

    /// Index explicit side tables; the first snapshot wins on duplicate ids
    pub fn from_tables(users: &'a [UserSnapshot], webhooks: &'a [WebhookSnapshot]) -> Self {
        let mut user_index = HashMap::with_capacity(users.len());
        for user in users {
            user_index.entry(user.id).or_insert(user);
        }

        let mut webhook_index = HashMap::with_capacity(webhooks.len());
        for webhook in webhooks {
            webhook_index.entry(webhook.id).or_insert(webhook);
        }

        Self {
            users: user_index,
            webhooks: webhook_index,
            policy: ReferencePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ReferencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    pub fn user(&self, id: Snowflake) -> Option<&'a UserSnapshot> {
        self.users.get(&id).copied()
    }

    pub fn webhook(&self, id: Snowflake) -> Option<&'a WebhookSnapshot> {
        self.webhooks.get(&id).copied()
    }

    /// Clone a user snapshot out of the table, `None` if unmatched
    pub fn find_user(&self, id: Snowflake) -> Option<UserSnapshot> {
        self.user(id).cloned()
    }

    /// Clone a webhook snapshot out of the table, `None` if unmatched
    pub fn find_webhook(&self, id: Snowflake) -> Option<WebhookSnapshot> {
        self.webhook(id).cloned()
    }

    /// Resolve an entry's target user according to the reference policy
    pub fn resolve_target(&self, id: Snowflake) -> DecodeResult<Option<UserSnapshot>> {
        match (self.find_user(id), self.policy) {
            (Some(user), _) => Ok(Some(user)),
            (None, ReferencePolicy::Lenient) => Ok(None),
            (None, ReferencePolicy::Strict) => {
                Err(DecodeError::UnresolvedReference { table: "users", id })
            }
        }
    }
}
