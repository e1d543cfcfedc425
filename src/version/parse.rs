//! Conversion between version text and [`Version`]
//!
//! Accepted text is `MAJOR.MINOR.PATCH[-rcN][bM]`, every number an unsigned
//! decimal. Fields are carved left to right:
//! - `major` up to the first `.`, `minor` up to the next `.`
//! - the remaining tail is split on `-rc` (when present) and then on the
//!   first `b` that follows it
//!
//! Two entry points share the carving:
//! - [`parse_lenient`] never fails; bad numbers become `0` and text without
//!   two dots becomes `0.0.0`
//! - [`parse_strict`] reports the first defect as [`MalformedVersionText`]

use std::fmt::Write;

use tracing::debug;

use crate::version::Version;
use crate::version::component::VersionComponent;
use crate::version::error::{ComponentKind, MalformedVersionText};

const FIELD_SEPARATOR: char = '.';
const RC_MARKER: &str = "-rc";
const BETA_MARKER: char = 'b';

/// Raw text of each field, before numeric conversion
#[derive(Debug, PartialEq, Eq)]
struct Segments<'a> {
    major: &'a str,
    minor: &'a str,
    patch: &'a str,
    rc: Option<&'a str>,
    beta: Option<&'a str>,
}

/// Split text into field segments.
///
/// Returns the component after which a `.` was expected when the text has
/// fewer than two separators.
fn split_segments(text: &str) -> Result<Segments<'_>, ComponentKind> {
    let (major, rest) = text
        .split_once(FIELD_SEPARATOR)
        .ok_or(ComponentKind::Major)?;
    let (minor, tail) = rest
        .split_once(FIELD_SEPARATOR)
        .ok_or(ComponentKind::Minor)?;

    // beta only ever follows patch or the rc number, never precedes -rc
    let (patch, rc, beta) = match tail.split_once(RC_MARKER) {
        Some((patch, qualifiers)) => match qualifiers.split_once(BETA_MARKER) {
            Some((rc, beta)) => (patch, Some(rc), Some(beta)),
            None => (patch, Some(qualifiers), None),
        },
        None => match tail.split_once(BETA_MARKER) {
            Some((patch, beta)) => (patch, None, Some(beta)),
            None => (tail, None, None),
        },
    };

    Ok(Segments {
        major,
        minor,
        patch,
        rc,
        beta,
    })
}

/// Convert one segment to a component. Only ASCII digits are accepted, so
/// signs and whitespace that `u64::from_str` would tolerate are rejected.
fn parse_component(
    text: &str,
    component: ComponentKind,
    segment: &str,
) -> Result<VersionComponent, MalformedVersionText> {
    if segment.is_empty() {
        return Err(MalformedVersionText::EmptyComponent {
            text: text.to_string(),
            component,
        });
    }

    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedVersionText::InvalidComponent {
            text: text.to_string(),
            component,
            segment: segment.to_string(),
        });
    }

    segment
        .parse::<u64>()
        .map(VersionComponent::new)
        .map_err(|_| MalformedVersionText::ComponentOverflow {
            text: text.to_string(),
            component,
            segment: segment.to_string(),
        })
}

/// Parse version text, substituting zero for anything unparseable.
pub(crate) fn parse_lenient(text: &str) -> Version {
    let segments = match split_segments(text) {
        Ok(segments) => segments,
        Err(component) => {
            debug!(
                "Version text {:?} has no '.' after the {} component, using 0.0.0",
                text, component
            );
            return Version::default();
        }
    };

    let or_zero = |component: ComponentKind, segment: &str| {
        parse_component(text, component, segment).unwrap_or_else(|err| {
            debug!("{}, using 0", err);
            VersionComponent::ZERO
        })
    };

    Version::from_parts(
        or_zero(ComponentKind::Major, segments.major),
        or_zero(ComponentKind::Minor, segments.minor),
        or_zero(ComponentKind::Patch, segments.patch),
        segments.rc.map(|rc| or_zero(ComponentKind::Rc, rc)),
        segments.beta.map(|beta| or_zero(ComponentKind::Beta, beta)),
    )
}

/// Parse version text, failing on the first malformed field.
pub(crate) fn parse_strict(text: &str) -> Result<Version, MalformedVersionText> {
    let segments =
        split_segments(text).map_err(|component| MalformedVersionText::MissingSeparator {
            text: text.to_string(),
            component,
        })?;

    let major = parse_component(text, ComponentKind::Major, segments.major)?;
    let minor = parse_component(text, ComponentKind::Minor, segments.minor)?;
    let patch = parse_component(text, ComponentKind::Patch, segments.patch)?;
    let rc = segments
        .rc
        .map(|rc| parse_component(text, ComponentKind::Rc, rc))
        .transpose()?;
    let beta = segments
        .beta
        .map(|beta| parse_component(text, ComponentKind::Beta, beta))
        .transpose()?;

    Ok(Version::from_parts(major, minor, patch, rc, beta))
}

/// Canonical text of a version
pub(crate) fn format_version(version: &Version) -> String {
    let mut out = format!(
        "{}.{}.{}",
        version.major(),
        version.minor(),
        version.patch()
    );

    // Writing into a String cannot fail
    if let Some(rc) = version.rc_component() {
        let _ = write!(out, "{}{}", RC_MARKER, rc);
    }
    if let Some(beta) = version.beta_component() {
        let _ = write!(out, "{}{}", BETA_MARKER, beta);
    }

    out
}
