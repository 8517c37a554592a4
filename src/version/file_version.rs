use derive_more::Display;

use super::DayZVersion;

/// The four 16-bit parts read from an executable's version resource.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash)]
#[display("{major}.{minor}.{build}.{revision}")]
pub struct FileVersion {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl FileVersion {
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Folds this version into the three-part form the game reports to server browsers.
    ///
    /// The patch is the decimal digits of `build` followed by the decimal digits of `revision`,
    /// so `1.27.1590.40` becomes `1.27.159040`. Distinct pairs can fold to the same patch
    /// (`1` + `23` and `12` + `3` are both `123`).
    #[must_use]
    pub const fn dayz_version(self) -> DayZVersion {
        DayZVersion {
            major: self.major as u32,
            minor: self.minor as u32,
            patch: concat_decimal(self.build, self.revision),
        }
    }
}

const fn concat_decimal(high: u16, low: u16) -> u64 {
    let digits = match low.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    };

    high as u64 * 10_u64.pow(digits) + low as u64
}
