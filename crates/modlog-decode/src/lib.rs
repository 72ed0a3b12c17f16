//! # modlog-decode
//!
//! Decode layer turning raw audit log entries into typed action data.
//!
//! ```text
//! AuditLog ──► DecodeContext ──► dispatcher ──► decoders ──► AuditLogData
//!                (side tables)                  (lookup + coerce)
//! ```

pub mod coerce;
pub mod context;
pub mod decoders;
pub mod dispatcher;
pub mod error;
pub mod lookup;

pub use coerce::{coerce, FromOpaque};
pub use context::{DecodeContext, ReferencePolicy};
pub use dispatcher::{decode_all, decode_entries, decode_entry, DecodedEntry};
pub use error::{CoerceError, DecodeError, DecodeResult};
pub use lookup::{find_change, Changes, Options, Side};
