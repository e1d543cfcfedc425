//! Version value type with release-candidate and beta qualifiers
//!
//! Text form is `MAJOR.MINOR.PATCH[-rcN][bM]`:
//!
//! ```text
//! 0.0.0          plain release
//! 1.4.2-rc1      release candidate 1
//! 0.2.21b2       beta 2
//! 0.3.33-rc2b3   beta 3 of release candidate 2
//! ```
//!
//! # Modules
//!
//! - [`component`]: `VersionComponent`, a single numeric field
//! - [`compare`]: equality and ordering, against versions or raw text
//! - [`error`]: error returned by the strict parser
//! - `parse`: text carving and canonical formatting

pub mod compare;
pub mod component;
pub mod error;
mod parse;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::component::VersionComponent;
use crate::version::error::MalformedVersionText;

/// A parsed version.
///
/// Values are immutable. The canonical text is computed on first use and
/// kept for the lifetime of the value.
#[derive(Clone, Default)]
pub struct Version {
    major: VersionComponent,
    minor: VersionComponent,
    patch: VersionComponent,
    rc: Option<VersionComponent>,
    beta: Option<VersionComponent>,
    serialized: OnceLock<String>,
}

impl Version {
    /// Parse version text, never failing.
    ///
    /// Unparseable numbers become `0`, and text with fewer than two `.`
    /// separators becomes `0.0.0`. Qualifier markers are kept even when
    /// their number is unreadable, so `"1.2.3-rc"` parses as `1.2.3-rc0`.
    ///
    /// Use [`Version::try_parse`] to reject malformed text instead.
    pub fn parse(text: &str) -> Self {
        parse::parse_lenient(text)
    }

    /// Parse version text, rejecting anything outside
    /// `MAJOR.MINOR.PATCH[-rcN][bM]`.
    pub fn try_parse(text: &str) -> Result<Self, MalformedVersionText> {
        parse::parse_strict(text)
    }

    pub(crate) fn from_parts(
        major: VersionComponent,
        minor: VersionComponent,
        patch: VersionComponent,
        rc: Option<VersionComponent>,
        beta: Option<VersionComponent>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            rc,
            beta,
            serialized: OnceLock::new(),
        }
    }

    pub fn major(&self) -> VersionComponent {
        self.major
    }

    pub fn minor(&self) -> VersionComponent {
        self.minor
    }

    pub fn patch(&self) -> VersionComponent {
        self.patch
    }

    /// Release candidate number, zero when this is not a release candidate
    pub fn rc(&self) -> VersionComponent {
        self.rc.unwrap_or_default()
    }

    /// Beta number, zero when this is not a beta
    pub fn beta(&self) -> VersionComponent {
        self.beta.unwrap_or_default()
    }

    pub fn rc_component(&self) -> Option<VersionComponent> {
        self.rc
    }

    pub fn beta_component(&self) -> Option<VersionComponent> {
        self.beta
    }

    pub fn is_release_candidate(&self) -> bool {
        self.rc.is_some()
    }

    pub fn is_beta(&self) -> bool {
        self.beta.is_some()
    }

    pub fn major_is(&self, value: u64) -> bool {
        self.major.is(value)
    }

    pub fn minor_is(&self, value: u64) -> bool {
        self.minor.is(value)
    }

    pub fn patch_is(&self, value: u64) -> bool {
        self.patch.is(value)
    }

    /// False when this is not a release candidate, even for `0`
    pub fn rc_is(&self, value: u64) -> bool {
        self.rc.is_some_and(|rc| rc.is(value))
    }

    /// False when this is not a beta, even for `0`
    pub fn beta_is(&self, value: u64) -> bool {
        self.beta.is_some_and(|beta| beta.is(value))
    }

    /// Canonical text, e.g. `"0.3.33-rc2b3"`
    pub fn as_str(&self) -> &str {
        self.serialized.get_or_init(|| parse::format_version(self))
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Version")
            .field("major", &self.major)
            .field("minor", &self.minor)
            .field("patch", &self.patch)
            .field("rc", &self.rc)
            .field("beta", &self.beta)
            .finish()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = MalformedVersionText;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl From<&str> for Version {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Version {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

/// Rebuilds from the canonical text of `other`, so the copy goes through
/// the same parser as every other value.
impl From<&Version> for Version {
    fn from(other: &Version) -> Self {
        Self::parse(other.as_str())
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a version string like 1.2.3-rc1b2")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::try_parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
