//! Version strings with release-candidate and beta qualifiers
//!
//! ```
//! use rc_version::Version;
//!
//! let version = Version::parse("1.4.2-rc1");
//! assert!(version.is_release_candidate());
//! assert_eq!(version.rc().as_u64(), 1);
//! assert!(version.less_than("1.4.2-rc2"));
//! assert_eq!(version.to_string(), "1.4.2-rc1");
//! ```
//!
//! See [`version`] for the accepted text format and ordering rules.

pub mod version;

pub use version::Version;
pub use version::compare::AsVersion;
pub use version::component::VersionComponent;
pub use version::error::{ComponentKind, MalformedVersionText};
