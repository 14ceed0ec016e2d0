//! Typed identifier newtypes backed by store row ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the raw row identifier.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Room`](crate::room::Room).
    RoomId
);

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    ///
    /// Doubles as the external handle that correlates a device to its
    /// measurement rows.
    DeviceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_wrapped_value() {
        let id = DeviceId::new(21);
        assert_eq!(id.value(), 21);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = RoomId::new(7);
        let text = id.to_string();
        let parsed: RoomId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = DeviceId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        let parsed: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_text() {
        let result = RoomId::from_str("not-a-number");
        assert!(result.is_err());
    }

    #[test]
    fn should_convert_from_raw_i64() {
        let id: DeviceId = 9.into();
        assert_eq!(id, DeviceId::new(9));
    }

    #[test]
    fn should_order_by_wrapped_value() {
        assert!(RoomId::new(1) < RoomId::new(2));
    }
}
