//! Test helpers for integration tests
//!
//! Decoding shortcuts and assertions over decoded entries.

use anyhow::{Context, Result};
use modlog_core::{AuditLog, AuditLogData};
use modlog_decode::{decode_all, DecodedEntry, ReferencePolicy};
use serde_json::Value;

/// Parse a raw page
pub fn parse_page(raw: Value) -> Result<AuditLog> {
    serde_json::from_value(raw).context("fixture is not a valid audit log page")
}

/// Parse and decode a raw page
pub fn decode_page(raw: Value, policy: ReferencePolicy) -> Result<Vec<DecodedEntry>> {
    let log = parse_page(raw)?;
    Ok(decode_all(&log, policy))
}

/// Unwrap the decoded data or fail with the entry's error
pub fn expect_data(entry: &DecodedEntry) -> Result<&AuditLogData> {
    entry
        .data
        .as_ref()
        .map_err(|e| anyhow::anyhow!("entry {:?} ({}) failed: {e}", entry.id, entry.kind()))
}

/// Error code of a failed entry
pub fn expect_error_code(entry: &DecodedEntry) -> Result<&'static str> {
    match &entry.data {
        Ok(data) => anyhow::bail!("entry {:?} decoded as {}", entry.id, data.kind()),
        Err(e) => Ok(e.code()),
    }
}
