mod standard_fields_32;
mod standard_fields_64;

use std::fmt;

pub use standard_fields_32::StandardFields32;
pub use standard_fields_64::StandardFields64;

/// Standard COFF fields at the start of the optional header, in their `PE32` or `PE32+` layout.
///
/// The variant is chosen by the [`Magic`] that opens the optional header. `PE32+` drops
/// `BaseOfData`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StandardFields {
    Pe32(StandardFields32),
    Pe64(StandardFields64),
}

impl StandardFields {
    #[inline]
    pub const fn magic(&self) -> Magic {
        match self {
            Self::Pe32(_) => Magic::Pe32,
            Self::Pe64(_) => Magic::Pe64,
        }
    }

    /// The combined size of all code sections.
    #[inline]
    pub const fn size_of_code(&self) -> u32 {
        match self {
            Self::Pe32(pe32) => pe32.size_of_code(),
            Self::Pe64(pe64) => pe64.size_of_code(),
        }
    }

    /// The entry point relative to the image base, or zero for a DLL without one.
    #[inline]
    pub const fn address_of_entry_point(&self) -> u32 {
        match self {
            Self::Pe32(pe32) => pe32.address_of_entry_point(),
            Self::Pe64(pe64) => pe64.address_of_entry_point(),
        }
    }

    #[inline]
    pub const fn base_of_code(&self) -> u32 {
        match self {
            Self::Pe32(pe32) => pe32.base_of_code(),
            Self::Pe64(pe64) => pe64.base_of_code(),
        }
    }

    /// The RVA of the data section. Absent in `PE32+`.
    #[inline]
    pub const fn base_of_data(&self) -> Option<u32> {
        match self {
            Self::Pe32(pe32) => Some(pe32.base_of_data()),
            Self::Pe64(_) => None,
        }
    }
}

impl From<StandardFields32> for StandardFields {
    #[inline]
    fn from(fields: StandardFields32) -> Self {
        Self::Pe32(fields)
    }
}

impl From<StandardFields64> for StandardFields {
    #[inline]
    fn from(fields: StandardFields64) -> Self {
        Self::Pe64(fields)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Magic {
    #[doc(alias = "IMAGE_NT_OPTIONAL_HDR32_MAGIC")]
    Pe32,
    #[doc(alias = "IMAGE_NT_OPTIONAL_HDR64_MAGIC")]
    Pe64,
}

impl Magic {
    const PE32: u16 = 0x10B;
    const PE64: u16 = 0x20B;

    #[inline]
    pub const fn value(self) -> u16 {
        match self {
            Self::Pe32 => Self::PE32,
            Self::Pe64 => Self::PE64,
        }
    }
}

impl TryFrom<u16> for Magic {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            Self::PE32 => Ok(Self::Pe32),
            Self::PE64 => Ok(Self::Pe64),
            unknown => Err(unknown),
        }
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pe32 => f.write_str("PE32"),
            Self::Pe64 => f.write_str("PE32+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Magic, StandardFields32, StandardFields64};

    #[test]
    fn standard_fields_sizes() {
        assert_eq!(size_of::<StandardFields32>(), 28);
        assert_eq!(size_of::<StandardFields64>(), 24);
    }

    #[rstest]
    #[case(0x10B, Ok(Magic::Pe32))]
    #[case(0x20B, Ok(Magic::Pe64))]
    #[case(0x107, Err(0x107))]
    #[case(0x0000, Err(0x0000))]
    fn magic_from_value(#[case] value: u16, #[case] expected: Result<Magic, u16>) {
        assert_eq!(Magic::try_from(value), expected);
    }
}
