//! Single numeric field of a version (major, minor, patch, rc or beta)

use std::fmt;

/// An unsigned version number component.
///
/// Stored as `u64` so every decimal that fits in the text form is
/// representable. The narrowing accessors behave exactly like `as` casts:
/// `VersionComponent::new(300).as_u8()` is `44`, `VersionComponent::new(u64::MAX).as_i64()`
/// is `-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionComponent(u64);

impl VersionComponent {
    pub const ZERO: VersionComponent = VersionComponent(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns true if this component equals `value`
    pub const fn is(self, value: u64) -> bool {
        self.0 == value
    }

    pub const fn as_u8(self) -> u8 {
        self.0 as u8
    }

    pub const fn as_u16(self) -> u16 {
        self.0 as u16
    }

    pub const fn as_u32(self) -> u32 {
        self.0 as u32
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub const fn as_i8(self) -> i8 {
        self.0 as i8
    }

    pub const fn as_i16(self) -> i16 {
        self.0 as i16
    }

    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }

    pub const fn as_i64(self) -> i64 {
        self.0 as i64
    }
}

impl From<u64> for VersionComponent {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<VersionComponent> for u64 {
    fn from(component: VersionComponent) -> Self {
        component.0
    }
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
