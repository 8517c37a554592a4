use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, LittleEndian, U32};

/// In `winnt.h`, it's `IMAGE_RESOURCE_DIRECTORY_ENTRY`.
///
/// The high bit of the second word tells what the low 31 bits point to, relative to the start
/// of the resource tree: another [`ImageResourceDirectory`] when set, an
/// [`ImageResourceDataEntry`] when clear.
///
/// [`ImageResourceDirectory`]: super::ImageResourceDirectory
/// [`ImageResourceDataEntry`]: super::ImageResourceDataEntry
#[doc(alias("IMAGE_RESOURCE_DIRECTORY_ENTRY"))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct ImageResourceDirectoryEntry {
    name_or_id: U32<LittleEndian>,
    data_or_subdirectory: U32<LittleEndian>,
}

impl ImageResourceDirectoryEntry {
    const IS_DIRECTORY_MASK: u32 = 1 << 31;

    /// The resource type, name or language id of this entry. Named entries have the high bit set
    /// and so compare greater than every numeric id.
    #[inline]
    pub const fn name_or_id(self) -> u32 {
        self.name_or_id.get()
    }

    #[inline]
    const fn data_or_subdirectory(self) -> u32 {
        self.data_or_subdirectory.get()
    }

    /// Returns true if the entry points to a subdirectory.
    #[inline]
    pub const fn is_table(self) -> bool {
        self.data_or_subdirectory() & Self::IS_DIRECTORY_MASK != 0
    }

    /// Returns the offset of the subdirectory or data entry from the start of the resource tree.
    #[inline]
    pub const fn data_offset(self) -> u32 {
        self.data_or_subdirectory() & !Self::IS_DIRECTORY_MASK
    }
}
