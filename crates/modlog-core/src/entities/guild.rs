//! Guild-level setting enums carried by guild update entries

use serde::Serialize;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Create from the numeric wire value
            #[must_use]
            pub fn from_i64(value: i64) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

wire_enum! {
    /// Verification required before members can talk
    pub enum VerificationLevel {
        None = 0,
        /// Verified email
        Low = 1,
        /// Registered for longer than five minutes
        Medium = 2,
        /// Member of the guild for longer than ten minutes
        High = 3,
        /// Verified phone number
        Extreme = 4,
    }
}

wire_enum! {
    /// Default notification setting for new members
    pub enum DefaultMessageNotifications {
        AllMessages = 0,
        MentionsOnly = 1,
    }
}

wire_enum! {
    /// Which members get their media scanned
    pub enum ExplicitContentFilterLevel {
        Disabled = 0,
        MembersWithoutRoles = 1,
        AllMembers = 2,
    }
}

wire_enum! {
    /// Two-factor requirement for moderation actions
    pub enum MfaLevel {
        None = 0,
        Elevated = 1,
    }
}
