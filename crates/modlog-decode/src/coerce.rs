//! Value coercion - turning an [`OpaqueValue`] into a concrete type
//!
//! Integers also accept a decimal string, because the platform encodes
//! option values and snowflakes that way. Booleans and strings only accept
//! their own shape.

use modlog_core::entities::{
    ChannelType, DefaultMessageNotifications, ExplicitContentFilterLevel, MfaLevel, Overwrite,
    OverwritePermissions, PermissionTarget, RoleRef, VerificationLevel, WebhookType,
};
use modlog_core::{OpaqueValue, Permissions, Snowflake};

use crate::error::CoerceError;

/// Types that can be read out of an opaque value
pub trait FromOpaque: Sized {
    /// Human-readable shape name used in mismatch errors
    const EXPECTED: &'static str;

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError>;
}

/// Coerce a value into `T`
pub fn coerce<T: FromOpaque>(value: &OpaqueValue) -> Result<T, CoerceError> {
    T::from_opaque(value)
}

fn mismatch(expected: &'static str, value: &OpaqueValue) -> CoerceError {
    CoerceError::TypeMismatch {
        expected,
        found: value.kind(),
    }
}

fn integer(value: &OpaqueValue, expected: &'static str) -> Result<i64, CoerceError> {
    match value {
        OpaqueValue::Integer(i) => Ok(*i),
        OpaqueValue::String(s) => s.parse::<i64>().map_err(|_| mismatch(expected, value)),
        other => Err(mismatch(expected, other)),
    }
}

fn narrow<T: TryFrom<i64>>(value: &OpaqueValue, expected: &'static str) -> Result<T, CoerceError> {
    let wide = integer(value, expected)?;
    T::try_from(wide).map_err(|_| CoerceError::OutOfRange {
        expected,
        value: wide.to_string(),
    })
}

fn field<'v>(
    value: &'v OpaqueValue,
    name: &'static str,
    expected: &'static str,
) -> Result<&'v OpaqueValue, CoerceError> {
    match value {
        OpaqueValue::Object(_) => value
            .field(name)
            .filter(|v| !v.is_null())
            .ok_or(CoerceError::MissingField {
                expected,
                field: name,
            }),
        other => Err(mismatch(expected, other)),
    }
}

impl FromOpaque for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        integer(value, Self::EXPECTED)
    }
}

impl FromOpaque for i32 {
    const EXPECTED: &'static str = "32-bit integer";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        narrow(value, Self::EXPECTED)
    }
}

impl FromOpaque for u32 {
    const EXPECTED: &'static str = "unsigned 32-bit integer";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        narrow(value, Self::EXPECTED)
    }
}

impl FromOpaque for bool {
    const EXPECTED: &'static str = "bool";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        match value {
            OpaqueValue::Bool(b) => Ok(*b),
            other => Err(mismatch(Self::EXPECTED, other)),
        }
    }
}

impl FromOpaque for String {
    const EXPECTED: &'static str = "string";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        match value {
            OpaqueValue::String(s) => Ok(s.clone()),
            other => Err(mismatch(Self::EXPECTED, other)),
        }
    }
}

impl FromOpaque for Snowflake {
    const EXPECTED: &'static str = "snowflake";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        let raw = integer(value, Self::EXPECTED)?;
        if raw < 0 {
            return Err(CoerceError::OutOfRange {
                expected: Self::EXPECTED,
                value: raw.to_string(),
            });
        }
        Ok(Snowflake::new(raw))
    }
}

impl FromOpaque for Permissions {
    const EXPECTED: &'static str = "permission bits";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        match value {
            OpaqueValue::Integer(i) => {
                u64::try_from(*i)
                    .map(Permissions::from_raw)
                    .map_err(|_| CoerceError::OutOfRange {
                        expected: Self::EXPECTED,
                        value: i.to_string(),
                    })
            }
            OpaqueValue::String(s) => {
                Permissions::parse(s).map_err(|_| mismatch(Self::EXPECTED, value))
            }
            other => Err(mismatch(Self::EXPECTED, other)),
        }
    }
}

/// Enumerations read through their underlying integer
macro_rules! from_opaque_enum {
    ($($ty:ty => $expected:literal),+ $(,)?) => {
        $(
            impl FromOpaque for $ty {
                const EXPECTED: &'static str = $expected;

                fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
                    let raw = integer(value, Self::EXPECTED)?;
                    <$ty>::from_i64(raw).ok_or_else(|| CoerceError::OutOfRange {
                        expected: Self::EXPECTED,
                        value: raw.to_string(),
                    })
                }
            }
        )+
    };
}

from_opaque_enum! {
    ChannelType => "channel type",
    WebhookType => "webhook type",
    VerificationLevel => "verification level",
    DefaultMessageNotifications => "notification level",
    ExplicitContentFilterLevel => "explicit content filter level",
    MfaLevel => "mfa level",
}

impl FromOpaque for PermissionTarget {
    const EXPECTED: &'static str = "overwrite target type";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        if let OpaqueValue::String(name) = value {
            if let Some(target) = PermissionTarget::from_name(name) {
                return Ok(target);
            }
        }
        let raw = integer(value, Self::EXPECTED)?;
        PermissionTarget::from_i64(raw).ok_or_else(|| CoerceError::OutOfRange {
            expected: Self::EXPECTED,
            value: raw.to_string(),
        })
    }
}

impl FromOpaque for Overwrite {
    const EXPECTED: &'static str = "overwrite";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        let target_id = coerce(field(value, "id", Self::EXPECTED)?)?;
        let target_type = coerce(field(value, "type", Self::EXPECTED)?)?;
        let allow = coerce(field(value, "allow", Self::EXPECTED)?)?;
        let deny = coerce(field(value, "deny", Self::EXPECTED)?)?;
        Ok(Overwrite::new(
            target_id,
            target_type,
            OverwritePermissions::new(allow, deny),
        ))
    }
}

impl FromOpaque for RoleRef {
    const EXPECTED: &'static str = "role reference";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        let id = coerce(field(value, "id", Self::EXPECTED)?)?;
        let name = value.field("name").map(coerce::<Option<String>>).transpose()?.flatten();
        Ok(RoleRef { id, name })
    }
}

impl<T: FromOpaque> FromOpaque for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        match value {
            OpaqueValue::Array(items) => items.iter().map(T::from_opaque).collect(),
            other => Err(mismatch(Self::EXPECTED, other)),
        }
    }
}

impl<T: FromOpaque> FromOpaque for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_opaque(value: &OpaqueValue) -> Result<Self, CoerceError> {
        match value {
            OpaqueValue::Null => Ok(None),
            other => T::from_opaque(other).map(Some),
        }
    }
}
