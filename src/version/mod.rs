mod dayz_version;
mod file_version;

use std::cmp::Ordering;

pub use dayz_version::{DayZVersion, ParseVersionError};
use derive_more::Display;
pub use file_version::FileVersion;

/// The outcome of checking a local game version against a server's.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum VersionMatch {
    #[display("Local version is older than the server's")]
    LocalOlder,
    #[display("Local version is newer than the server's")]
    LocalNewer,
    #[display("Local version matches the server's")]
    SameVersion,
    /// The versions could not be compared because one of them could not be determined.
    /// [`compare`] never returns this.
    #[display("Version check failed")]
    Fail,
}

impl VersionMatch {
    #[inline]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::SameVersion)
    }
}

/// Classifies `local` against `remote`.
#[must_use]
pub fn compare(local: DayZVersion, remote: DayZVersion) -> VersionMatch {
    match local.cmp(&remote) {
        Ordering::Less => VersionMatch::LocalOlder,
        Ordering::Greater => VersionMatch::LocalNewer,
        Ordering::Equal => VersionMatch::SameVersion,
    }
}
