use zerocopy::{FromBytes, Immutable, KnownLayout, LittleEndian, U32};

// A leaf of the resource tree. Unlike the offsets inside the tree, the data address is an RVA and
// has to be translated through the section table before it can be used as a file offset.

#[doc(alias("IMAGE_RESOURCE_DATA_ENTRY"))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct ImageResourceDataEntry {
    /// RVA of the data.
    data_rva: U32<LittleEndian>,
    size: U32<LittleEndian>,
    codepage: U32<LittleEndian>,
    reserved: U32<LittleEndian>,
}

impl ImageResourceDataEntry {
    #[doc(alias("OffsetToData"))]
    #[inline]
    pub const fn data_rva(&self) -> u32 {
        self.data_rva.get()
    }

    #[inline]
    pub const fn size(&self) -> u32 {
        self.size.get()
    }

    #[inline]
    pub const fn codepage(&self) -> u32 {
        self.codepage.get()
    }

    #[inline]
    pub const fn reserved(&self) -> u32 {
        self.reserved.get()
    }
}
