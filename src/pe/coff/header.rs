use zerocopy::{FromBytes, Immutable, KnownLayout, LittleEndian, U16, U32};

use super::CoffCharacteristics;

/// In `winnt.h`, it's `IMAGE_FILE_HEADER`.
///
/// The COFF header directly follows the `PE\0\0` signature and is itself followed by the
/// optional header. All fields are little-endian.
#[doc(alias("IMAGE_FILE_HEADER"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct CoffHeader {
    #[doc(alias("Machine"))]
    machine: U16<LittleEndian>,

    #[doc(alias("NumberOfSections"))]
    number_of_sections: U16<LittleEndian>,

    #[doc(alias("TimeDateStamp"))]
    time_date_stamp: U32<LittleEndian>,

    #[doc(alias("PointerToSymbolTable"))]
    pointer_to_symbol_table: U32<LittleEndian>,

    #[doc(alias("NumberOfSymbols"))]
    number_of_symbols: U32<LittleEndian>,

    #[doc(alias("SizeOfOptionalHeader"))]
    size_of_optional_header: U16<LittleEndian>,

    #[doc(alias("Characteristics"))]
    characteristics: CoffCharacteristics,
}

impl CoffHeader {
    /// The machine type the image targets, such as [`IMAGE_FILE_MACHINE_AMD64`].
    ///
    /// [`IMAGE_FILE_MACHINE_AMD64`]: crate::pe::IMAGE_FILE_MACHINE_AMD64
    #[doc(alias("machine_type"))]
    #[inline]
    pub const fn machine(&self) -> u16 {
        self.machine.get()
    }

    /// The number of entries in the section table that follows the optional header.
    #[inline]
    pub const fn number_of_sections(&self) -> u16 {
        self.number_of_sections.get()
    }

    /// Seconds since the Unix epoch at which the linker produced the image.
    #[doc(alias("timestamp"))]
    #[inline]
    pub const fn time_date_stamp(&self) -> u32 {
        self.time_date_stamp.get()
    }

    /// The size of the optional header in bytes. Executables always have one.
    #[inline]
    pub const fn size_of_optional_header(&self) -> u16 {
        self.size_of_optional_header.get()
    }

    #[inline]
    pub const fn characteristics(&self) -> CoffCharacteristics {
        self.characteristics
    }
}
