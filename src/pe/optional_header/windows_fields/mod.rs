mod windows_fields_32;
mod windows_fields_64;

pub use windows_fields_32::WindowsFields32;
pub use windows_fields_64::WindowsFields64;

/// Windows-specific optional header fields in the layout matching the image's
/// [`StandardFields`](super::StandardFields).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WindowsFields {
    Pe32(WindowsFields32),
    Pe64(WindowsFields64),
}

impl WindowsFields {
    /// The preferred load address of the image, widened to 64 bits for `PE32`.
    #[inline]
    pub const fn image_base(&self) -> u64 {
        match self {
            Self::Pe32(pe32) => pe32.image_base() as u64,
            Self::Pe64(pe64) => pe64.image_base(),
        }
    }

    #[inline]
    pub const fn section_alignment(&self) -> u32 {
        match self {
            Self::Pe32(pe32) => pe32.section_alignment(),
            Self::Pe64(pe64) => pe64.section_alignment(),
        }
    }

    #[inline]
    pub const fn file_alignment(&self) -> u32 {
        match self {
            Self::Pe32(pe32) => pe32.file_alignment(),
            Self::Pe64(pe64) => pe64.file_alignment(),
        }
    }

    #[inline]
    pub const fn size_of_image(&self) -> u32 {
        match self {
            Self::Pe32(pe32) => pe32.size_of_image(),
            Self::Pe64(pe64) => pe64.size_of_image(),
        }
    }

    #[inline]
    pub const fn subsystem(&self) -> u16 {
        match self {
            Self::Pe32(pe32) => pe32.subsystem(),
            Self::Pe64(pe64) => pe64.subsystem(),
        }
    }

    /// The number of data directory entries that follow the Windows fields.
    #[doc(alias = "NumberOfRvaAndSizes")]
    #[inline]
    pub const fn number_of_rva_and_sizes(&self) -> u32 {
        match self {
            Self::Pe32(pe32) => pe32.number_of_rva_and_sizes(),
            Self::Pe64(pe64) => pe64.number_of_rva_and_sizes(),
        }
    }
}

impl From<WindowsFields32> for WindowsFields {
    #[inline]
    fn from(fields: WindowsFields32) -> Self {
        Self::Pe32(fields)
    }
}

impl From<WindowsFields64> for WindowsFields {
    #[inline]
    fn from(fields: WindowsFields64) -> Self {
        Self::Pe64(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::{WindowsFields32, WindowsFields64};

    #[test]
    fn windows_fields_sizes() {
        assert_eq!(size_of::<WindowsFields32>(), 68);
        assert_eq!(size_of::<WindowsFields64>(), 88);
    }
}
