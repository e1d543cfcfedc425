//! Version equality and ordering
//!
//! Versions order lexicographically on `(major, minor, patch, rc, beta)`.
//! For both qualifiers an absent qualifier orders before any present one,
//! and two present qualifiers compare numerically:
//!
//! ```text
//! 1.2.3 < 1.2.3b0 < 1.2.3b1 < 1.2.3-rc0 < 1.2.3-rc0b0 < 1.2.3-rc1 < 1.2.4
//! ```
//!
//! Every named relation takes either a [`Version`] or raw text; text is
//! parsed with [`Version::parse`] first.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::version::Version;
use crate::version::component::VersionComponent;

/// Anything that can stand in for a version in a comparison
pub trait AsVersion {
    fn as_version(&self) -> Cow<'_, Version>;
}

impl AsVersion for Version {
    fn as_version(&self) -> Cow<'_, Version> {
        Cow::Borrowed(self)
    }
}

impl AsVersion for str {
    fn as_version(&self) -> Cow<'_, Version> {
        Cow::Owned(Version::parse(self))
    }
}

impl AsVersion for String {
    fn as_version(&self) -> Cow<'_, Version> {
        Cow::Owned(Version::parse(self))
    }
}

impl<T: AsVersion + ?Sized> AsVersion for &T {
    fn as_version(&self) -> Cow<'_, Version> {
        (**self).as_version()
    }
}

/// Absent qualifier first, then present ones by number
fn compare_qualifier(
    left: Option<VersionComponent>,
    right: Option<VersionComponent>,
) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => left.cmp(&right),
    }
}

impl Version {
    /// Precedence of `self` relative to `other`. The first differing field
    /// decides.
    fn precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| compare_qualifier(self.rc, other.rc))
            .then_with(|| compare_qualifier(self.beta, other.beta))
    }

    /// True when every field matches, qualifier presence included:
    /// `1.2.3-rc0` never equals `1.2.3`.
    pub fn equals<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        let other = other.as_version();
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.rc == other.rc
            && self.beta == other.beta
    }

    pub fn less_than<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.precedence(&other.as_version()) == Ordering::Less
    }

    pub fn less_or_equal<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.equals(other) || self.less_than(other)
    }

    /// Defined as `other.less_than(self)`
    pub fn greater_than<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        other.as_version().less_than(self)
    }

    pub fn greater_or_equal<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.equals(other) || self.greater_than(other)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Version {}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.equals(other)
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        self.equals(*other)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence(other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialOrd<&str> for Version {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        Some(self.precedence(&Version::parse(other)))
    }
}

// The memoized text is derived from these fields, so it is left out.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.rc.hash(state);
        self.beta.hash(state);
    }
}
