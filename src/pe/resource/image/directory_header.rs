use zerocopy::{FromBytes, Immutable, KnownLayout, LittleEndian, U16, U32};

/// In `winnt.h`, it's `IMAGE_RESOURCE_DIRECTORY`. The header shared by the root and every
/// subdirectory of the resource tree.
///
/// The header is followed by `number_of_name_entries` named entries and then
/// `number_of_id_entries` numbered entries.
#[doc(alias("IMAGE_RESOURCE_DIRECTORY"))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct ImageResourceDirectory {
    characteristics: U32<LittleEndian>,
    time_date_stamp: U32<LittleEndian>,
    major_version: U16<LittleEndian>,
    minor_version: U16<LittleEndian>,
    number_of_name_entries: U16<LittleEndian>,
    number_of_id_entries: U16<LittleEndian>,
}

impl ImageResourceDirectory {
    #[inline]
    pub const fn characteristics(&self) -> u32 {
        self.characteristics.get()
    }

    #[inline]
    pub const fn time_date_stamp(&self) -> u32 {
        self.time_date_stamp.get()
    }

    #[inline]
    pub const fn major_version(&self) -> u16 {
        self.major_version.get()
    }

    #[inline]
    pub const fn minor_version(&self) -> u16 {
        self.minor_version.get()
    }

    #[inline]
    pub const fn number_of_name_entries(&self) -> u16 {
        self.number_of_name_entries.get()
    }

    #[inline]
    pub const fn number_of_id_entries(&self) -> u16 {
        self.number_of_id_entries.get()
    }

    /// The total number of entries following this header.
    #[inline]
    pub const fn number_of_entries(&self) -> u32 {
        self.number_of_name_entries() as u32 + self.number_of_id_entries() as u32
    }
}
