use std::{num::ParseIntError, str::FromStr};

use derive_more::Display;
use thiserror::Error;

/// A `major.minor.patch` game version, as reported by servers and derived from executables.
///
/// Ordering compares `major`, then `minor`, then `patch`, numerically.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[display("{major}.{minor}.{patch}")]
pub struct DayZVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u64,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ParseVersionError {
    #[error("DayZ version cannot have more than {} parts", DayZVersion::MAX_PARTS)]
    TooManyParts,
    #[error(transparent)]
    InvalidPart(#[from] ParseIntError),
}

impl DayZVersion {
    const SEPARATOR: char = '.';

    const MAX_PARTS: usize = 3;

    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for DayZVersion {
    type Err = ParseVersionError;

    /// Parses one to three dot-separated numbers. Missing parts are zero, so `1.2` is `1.2.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(Self::SEPARATOR);

        let major = parts.next().unwrap_or_default().parse::<u32>()?;
        let minor = parts.next().map_or(Ok(0), u32::from_str)?;
        let patch = parts.next().map_or(Ok(0), u64::from_str)?;

        if parts.next().is_some() {
            return Err(ParseVersionError::TooManyParts);
        }

        Ok(Self::new(major, minor, patch))
    }
}
