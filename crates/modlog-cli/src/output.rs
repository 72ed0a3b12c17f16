//! JSON line rendering of decoded entries

use modlog_decode::DecodedEntry;
use serde_json::{json, Value};

/// One output record: `data` on success, `error` and `code` on failure
pub fn render(entry: &DecodedEntry) -> Result<Value, serde_json::Error> {
    let id = entry.id.map(|id| id.to_string());
    let created_at = entry.created_at().map(|at| at.to_rfc3339());

    let record = match &entry.data {
        Ok(data) => json!({
            "id": id,
            "action": data.kind(),
            "created_at": created_at,
            "data": serde_json::to_value(data)?,
        }),
        Err(err) => json!({
            "id": id,
            "action": entry.kind(),
            "created_at": created_at,
            "error": err.to_string(),
            "code": err.code(),
        }),
    };

    Ok(record)
}
