use zerocopy::{FromBytes, Immutable, KnownLayout, LittleEndian, U16, U32};

/// Windows-specific fields of a `PE32` image, also known as the "NT additional fields".
///
/// Addresses and stack/heap sizes are 32 bits wide here and 64 bits wide in
/// [`WindowsFields64`](super::WindowsFields64).
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct WindowsFields32 {
    #[doc(alias = "ImageBase")]
    image_base: U32<LittleEndian>,
    #[doc(alias = "SectionAlignment")]
    section_alignment: U32<LittleEndian>,
    #[doc(alias = "FileAlignment")]
    file_alignment: U32<LittleEndian>,
    #[doc(alias = "MajorOperatingSystemVersion")]
    major_operating_system_version: U16<LittleEndian>,
    #[doc(alias = "MinorOperatingSystemVersion")]
    minor_operating_system_version: U16<LittleEndian>,
    #[doc(alias = "MajorImageVersion")]
    major_image_version: U16<LittleEndian>,
    #[doc(alias = "MinorImageVersion")]
    minor_image_version: U16<LittleEndian>,
    #[doc(alias = "MajorSubsystemVersion")]
    major_subsystem_version: U16<LittleEndian>,
    #[doc(alias = "MinorSubsystemVersion")]
    minor_subsystem_version: U16<LittleEndian>,
    #[doc(alias = "Win32VersionValue")]
    win32_version_value: U32<LittleEndian>,
    #[doc(alias = "SizeOfImage")]
    size_of_image: U32<LittleEndian>,
    #[doc(alias = "SizeOfHeaders")]
    size_of_headers: U32<LittleEndian>,
    #[doc(alias = "CheckSum")]
    check_sum: U32<LittleEndian>,
    #[doc(alias = "Subsystem")]
    subsystem: U16<LittleEndian>,
    #[doc(alias = "DllCharacteristics")]
    dll_characteristics: U16<LittleEndian>,
    #[doc(alias = "SizeOfStackReserve")]
    size_of_stack_reserve: U32<LittleEndian>,
    #[doc(alias = "SizeOfStackCommit")]
    size_of_stack_commit: U32<LittleEndian>,
    #[doc(alias = "SizeOfHeapReserve")]
    size_of_heap_reserve: U32<LittleEndian>,
    #[doc(alias = "SizeOfHeapCommit")]
    size_of_heap_commit: U32<LittleEndian>,
    #[doc(alias = "LoaderFlags")]
    loader_flags: U32<LittleEndian>,
    #[doc(alias = "NumberOfRvaAndSizes")]
    number_of_rva_and_sizes: U32<LittleEndian>,
}

impl WindowsFields32 {
    #[inline]
    pub const fn image_base(&self) -> u32 {
        self.image_base.get()
    }

    #[inline]
    pub const fn section_alignment(&self) -> u32 {
        self.section_alignment.get()
    }

    #[inline]
    pub const fn file_alignment(&self) -> u32 {
        self.file_alignment.get()
    }

    #[inline]
    pub const fn size_of_image(&self) -> u32 {
        self.size_of_image.get()
    }

    #[inline]
    pub const fn subsystem(&self) -> u16 {
        self.subsystem.get()
    }

    #[inline]
    pub const fn number_of_rva_and_sizes(&self) -> u32 {
        self.number_of_rva_and_sizes.get()
    }
}
