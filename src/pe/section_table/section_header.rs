use std::fmt;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, LittleEndian, U16, U32};

use crate::{pe::PeError, read::decode_ascii};

#[derive(Copy, Clone, Eq, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct SectionHeader {
    name: [u8; 8],
    virtual_size: U32<LittleEndian>,
    virtual_address: U32<LittleEndian>,
    size_of_raw_data: U32<LittleEndian>,
    pointer_to_raw_data: U32<LittleEndian>,
    pointer_to_relocations: U32<LittleEndian>,
    pointer_to_line_numbers: U32<LittleEndian>,
    number_of_relocations: U16<LittleEndian>,
    number_of_line_numbers: U16<LittleEndian>,
    characteristics: U32<LittleEndian>,
}

impl SectionHeader {
    /// The section name with its NUL padding removed.
    ///
    /// # Errors
    ///
    /// Returns [`PeError::NonAsciiSectionName`] if the name contains a byte outside ASCII.
    pub fn name(&self) -> Result<&str, PeError> {
        decode_ascii(&self.name).map_err(|_| PeError::NonAsciiSectionName(self.name))
    }

    #[inline]
    pub const fn raw_name(&self) -> [u8; 8] {
        self.name
    }

    #[inline]
    pub const fn virtual_size(&self) -> u32 {
        self.virtual_size.get()
    }

    #[inline]
    pub const fn virtual_address(&self) -> u32 {
        self.virtual_address.get()
    }

    #[inline]
    pub const fn size_of_raw_data(&self) -> u32 {
        self.size_of_raw_data.get()
    }

    #[inline]
    pub const fn pointer_to_raw_data(&self) -> u32 {
        self.pointer_to_raw_data.get()
    }

    #[inline]
    pub const fn characteristics(&self) -> u32 {
        self.characteristics.get()
    }

    /// Translates an RVA that lies in this section to a file offset.
    ///
    /// This is `rva - virtual_address + pointer_to_raw_data`, which only holds when the address
    /// belongs to this section.
    ///
    /// # Errors
    ///
    /// Returns [`PeError::InvalidRva`] if `rva` lies below the section or the offset overflows.
    pub fn file_offset(&self, rva: u32) -> Result<u32, PeError> {
        rva.checked_sub(self.virtual_address())
            .and_then(|relative| relative.checked_add(self.pointer_to_raw_data()))
            .ok_or(PeError::InvalidRva(rva))
    }
}

impl fmt::Debug for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("Name", &String::from_utf8_lossy(&self.name).trim_end_matches('\0'))
            .field("VirtualSize", &self.virtual_size())
            .field("VirtualAddress", &self.virtual_address())
            .field("SizeOfRawData", &self.size_of_raw_data())
            .field("PointerToRawData", &self.pointer_to_raw_data())
            .field("Characteristics", &self.characteristics())
            .finish_non_exhaustive()
    }
}
