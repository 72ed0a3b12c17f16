//! Change and option lookup
//!
//! Lookup is by wire name, never by position. A missing change or option is
//! a normal outcome; only the `require*` accessors turn it into an error.

use modlog_core::{ActionType, AuditLogEntry, AuditLogOptions, ChangeRecord, OpaqueValue};

use crate::coerce::{coerce, FromOpaque};
use crate::error::{DecodeError, DecodeResult};

/// Find the first change with exactly this property name
pub fn find_change<'a>(changes: &'a [ChangeRecord], name: &str) -> Option<&'a ChangeRecord> {
    changes.iter().find(|change| change.key == name)
}

/// Which side of a diff to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl Side {
    fn pick(self, change: &ChangeRecord) -> Option<&OpaqueValue> {
        match self {
            Self::Old => change.old_value.as_ref(),
            Self::New => change.new_value.as_ref(),
        }
    }
}

fn coerce_field<T: FromOpaque>(field: &'static str, value: &OpaqueValue) -> DecodeResult<T> {
    coerce(value).map_err(|source| DecodeError::mismatch(field, source))
}

/// Typed view over one entry's change list
#[derive(Debug, Clone, Copy)]
pub struct Changes<'a> {
    action: ActionType,
    changes: &'a [ChangeRecord],
}

impl<'a> Changes<'a> {
    pub fn new(action: ActionType, entry: &'a AuditLogEntry) -> Self {
        Self {
            action,
            changes: &entry.changes,
        }
    }

    pub fn find(&self, name: &str) -> Option<&'a ChangeRecord> {
        find_change(self.changes, name)
    }

    /// Read one side of a change; `Ok(None)` if the change or that side is absent
    pub fn value<T: FromOpaque>(&self, side: Side, name: &'static str) -> DecodeResult<Option<T>> {
        self.find(name)
            .and_then(|change| side.pick(change))
            .map(|value| coerce_field(name, value))
            .transpose()
    }

    /// Read one side of a change that must be present
    pub fn require<T: FromOpaque>(&self, side: Side, name: &'static str) -> DecodeResult<T> {
        self.value(side, name)?
            .ok_or_else(|| DecodeError::missing(self.action, name))
    }

    /// Require the change itself to exist without reading either side
    pub fn require_change(&self, name: &'static str) -> DecodeResult<&'a ChangeRecord> {
        self.find(name)
            .ok_or_else(|| DecodeError::missing(self.action, name))
    }

    #[inline]
    pub fn old_value<T: FromOpaque>(&self, name: &'static str) -> DecodeResult<Option<T>> {
        self.value(Side::Old, name)
    }

    #[inline]
    pub fn new_value<T: FromOpaque>(&self, name: &'static str) -> DecodeResult<Option<T>> {
        self.value(Side::New, name)
    }

    #[inline]
    pub fn require_old<T: FromOpaque>(&self, name: &'static str) -> DecodeResult<T> {
        self.require(Side::Old, name)
    }

    #[inline]
    pub fn require_new<T: FromOpaque>(&self, name: &'static str) -> DecodeResult<T> {
        self.require(Side::New, name)
    }
}

/// Typed view over one entry's options bag
#[derive(Debug, Clone, Copy)]
pub struct Options<'a> {
    action: ActionType,
    options: Option<&'a AuditLogOptions>,
}

impl<'a> Options<'a> {
    pub fn new(action: ActionType, entry: &'a AuditLogEntry) -> Self {
        Self {
            action,
            options: entry.options.as_ref(),
        }
    }

    pub fn get<T: FromOpaque>(&self, name: &'static str) -> DecodeResult<Option<T>> {
        self.options
            .and_then(|options| options.get(name))
            .map(|value| coerce_field(name, value))
            .transpose()
    }

    pub fn require<T: FromOpaque>(&self, name: &'static str) -> DecodeResult<T> {
        self.get(name)?
            .ok_or_else(|| DecodeError::missing(self.action, name))
    }
}
