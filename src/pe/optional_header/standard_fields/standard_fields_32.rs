use zerocopy::{FromBytes, Immutable, KnownLayout, LittleEndian, U16, U32};

/// Standard COFF fields of a `PE32` image, a prefix of `IMAGE_OPTIONAL_HEADER32`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct StandardFields32 {
    #[doc(alias = "Magic")]
    magic: U16<LittleEndian>,
    #[doc(alias = "MajorLinkerVersion")]
    major_linker_version: u8,
    #[doc(alias = "MinorLinkerVersion")]
    minor_linker_version: u8,
    #[doc(alias = "SizeOfCode")]
    size_of_code: U32<LittleEndian>,
    #[doc(alias = "SizeOfInitializedData")]
    size_of_initialized_data: U32<LittleEndian>,
    #[doc(alias = "SizeOfUninitializedData")]
    size_of_uninitialized_data: U32<LittleEndian>,
    #[doc(alias = "AddressOfEntryPoint")]
    address_of_entry_point: U32<LittleEndian>,
    #[doc(alias = "BaseOfCode")]
    base_of_code: U32<LittleEndian>,
    #[doc(alias = "BaseOfData")]
    base_of_data: U32<LittleEndian>,
}

impl StandardFields32 {
    #[inline]
    pub const fn magic(&self) -> u16 {
        self.magic.get()
    }

    #[inline]
    pub const fn size_of_code(&self) -> u32 {
        self.size_of_code.get()
    }

    #[inline]
    pub const fn address_of_entry_point(&self) -> u32 {
        self.address_of_entry_point.get()
    }

    #[inline]
    pub const fn base_of_code(&self) -> u32 {
        self.base_of_code.get()
    }

    #[inline]
    pub const fn base_of_data(&self) -> u32 {
        self.base_of_data.get()
    }
}
