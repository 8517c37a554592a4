use std::io::Cursor;

use super::{IMAGE_FILE_MACHINE_AMD64, IMAGE_FILE_MACHINE_I386, optional_header::Magic};

/// Builds a `VS_VERSIONINFO` block with the real `VS_FIXEDFILEINFO` layout: the key, two bytes of
/// padding and then the fixed info, each version as `[major, minor, build, revision]`.
pub fn version_info_block(file_version: [u16; 4], product_version: [u16; 4]) -> Vec<u8> {
    const FIXED_FILE_INFO_LENGTH: u16 = 52;

    let high_low = |high: u16, low: u16| (u32::from(high) << 16) | u32::from(low);

    let mut block = Vec::new();
    block.extend(0_u16.to_le_bytes());
    block.extend(FIXED_FILE_INFO_LENGTH.to_le_bytes());
    block.extend(0_u16.to_le_bytes());
    for unit in "VS_VERSION_INFO\0".encode_utf16() {
        block.extend(unit.to_le_bytes());
    }
    block.extend([0; 2]);

    for word in [
        0xFEEF_04BD,
        0x0001_0000,
        high_low(file_version[0], file_version[1]),
        high_low(file_version[2], file_version[3]),
        high_low(product_version[0], product_version[1]),
        high_low(product_version[2], product_version[3]),
        0x3F,
        0,
        0x0004_0004,
        1,
        0,
        0,
        0,
    ] {
        block.extend(u32::to_le_bytes(word));
    }

    let length = block.len() as u16;
    block[..2].copy_from_slice(&length.to_le_bytes());
    block
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum LanguageTable {
    Single,
    Empty,
    Cyclic,
}

/// A minimal PE image holding a `.text` section and a `.rsrc` section with one version resource.
///
/// The resource tree always has the same shape: a root table, a name table with id 1, a language
/// table with id 1033 and a data entry pointing at the version block.
#[derive(Clone, Debug)]
pub struct PeFixture {
    magic: Magic,
    number_of_rva_and_sizes: u32,
    resource_section: bool,
    resource_directory_rva: u32,
    root_ids: Vec<u32>,
    language_table: LanguageTable,
    data_rva: u32,
    file_version: [u16; 4],
    product_version: [u16; 4],
    version_words: Option<[u32; 4]>,
}

impl PeFixture {
    const PE_OFFSET: usize = 0x80;

    const SECTION_ALIGNMENT: u32 = 0x1000;

    const TEXT_SECTION_OFFSET: u32 = 0x200;

    pub const RESOURCE_SECTION_OFFSET: usize = 0x400;

    const RESOURCE_SECTION_RVA: u32 = 0x2000;

    const RESOURCE_SECTION_SIZE: u32 = 0x200;

    // Offsets inside the resource tree
    pub const NAME_TABLE: u32 = 0x80;
    pub const LANGUAGE_TABLE: u32 = 0x98;
    pub const DATA_ENTRY: u32 = 0xB0;
    pub const VERSION_BLOCK: u32 = 0xC0;

    const SUBDIRECTORY: u32 = 1 << 31;

    fn new(magic: Magic) -> Self {
        Self {
            magic,
            number_of_rva_and_sizes: 16,
            resource_section: true,
            resource_directory_rva: Self::RESOURCE_SECTION_RVA,
            root_ids: vec![3, 14, 16, 24],
            language_table: LanguageTable::Single,
            data_rva: Self::RESOURCE_SECTION_RVA + Self::VERSION_BLOCK,
            file_version: [1, 0, 0, 0],
            product_version: [1, 0, 0, 0],
            version_words: None,
        }
    }

    pub fn pe32() -> Self {
        Self::new(Magic::Pe32)
    }

    pub fn pe64() -> Self {
        Self::new(Magic::Pe64)
    }

    pub fn number_of_rva_and_sizes(mut self, count: u32) -> Self {
        self.number_of_rva_and_sizes = count;
        self
    }

    pub fn without_resource_section(mut self) -> Self {
        self.resource_section = false;
        self
    }

    pub fn resource_directory_rva(mut self, rva: u32) -> Self {
        self.resource_directory_rva = rva;
        self
    }

    /// Sets the ids of the root entries, in file order. Ids with the high bit set are written as
    /// named entries, which must come first.
    pub fn root_ids<I: Into<Vec<u32>>>(mut self, ids: I) -> Self {
        self.root_ids = ids.into();
        self
    }

    pub fn empty_language_table(mut self) -> Self {
        self.language_table = LanguageTable::Empty;
        self
    }

    /// Points the language table's only entry back at the name table.
    pub fn cyclic_language_table(mut self) -> Self {
        self.language_table = LanguageTable::Cyclic;
        self
    }

    pub fn data_rva(mut self, rva: u32) -> Self {
        self.data_rva = rva;
        self
    }

    pub fn version(mut self, file_version: [u16; 4], product_version: [u16; 4]) -> Self {
        self.file_version = file_version;
        self.product_version = product_version;
        self
    }

    /// Overwrites the four words read after the fixed file info signature.
    pub fn version_words(mut self, words: [u32; 4]) -> Self {
        self.version_words = Some(words);
        self
    }

    pub fn cursor(&self) -> Cursor<Vec<u8>> {
        Cursor::new(self.build())
    }

    pub fn build(&self) -> Vec<u8> {
        let mut image = vec![0; Self::RESOURCE_SECTION_OFFSET];

        // DOS header
        image[..2].copy_from_slice(b"MZ");
        image[0x3C..0x40].copy_from_slice(&(Self::PE_OFFSET as u32).to_le_bytes());

        let mut headers = Vec::new();
        headers.extend(b"PE\0\0");
        self.write_coff_header(&mut headers);
        self.write_optional_header(&mut headers);
        self.write_section_table(&mut headers);
        image[Self::PE_OFFSET..Self::PE_OFFSET + headers.len()].copy_from_slice(&headers);

        image.extend(self.resource_tree());
        image
    }

    const fn standard_fields_size(&self) -> usize {
        match self.magic {
            Magic::Pe32 => 28,
            Magic::Pe64 => 24,
        }
    }

    const fn windows_fields_size(&self) -> usize {
        match self.magic {
            Magic::Pe32 => 68,
            Magic::Pe64 => 88,
        }
    }

    fn write_coff_header(&self, out: &mut Vec<u8>) {
        let machine = match self.magic {
            Magic::Pe32 => IMAGE_FILE_MACHINE_I386,
            Magic::Pe64 => IMAGE_FILE_MACHINE_AMD64,
        };
        let number_of_sections: u16 = if self.resource_section { 2 } else { 1 };
        let size_of_optional_header = self.standard_fields_size()
            + self.windows_fields_size()
            + self.number_of_rva_and_sizes as usize * 8;

        out.extend(machine.to_le_bytes());
        out.extend(number_of_sections.to_le_bytes());
        out.extend(0x6500_0000_u32.to_le_bytes());
        out.extend(0_u32.to_le_bytes());
        out.extend(0_u32.to_le_bytes());
        out.extend((size_of_optional_header as u16).to_le_bytes());
        out.extend(0x0022_u16.to_le_bytes());
    }

    fn write_optional_header(&self, out: &mut Vec<u8>) {
        let start = out.len();
        out.extend(self.magic.value().to_le_bytes());
        out.resize(start + self.standard_fields_size(), 0);

        // Everything but the directory count is irrelevant to the reader
        let start = out.len();
        out.resize(start + self.windows_fields_size() - 4, 0);
        out.extend(self.number_of_rva_and_sizes.to_le_bytes());

        for index in 0..self.number_of_rva_and_sizes {
            let (virtual_address, size) = if index == 2 {
                (self.resource_directory_rva, Self::RESOURCE_SECTION_SIZE)
            } else {
                (0, 0)
            };
            out.extend(virtual_address.to_le_bytes());
            out.extend(size.to_le_bytes());
        }
    }

    fn write_section_table(&self, out: &mut Vec<u8>) {
        Self::write_section_header(
            out,
            *b".text\0\0\0",
            Self::SECTION_ALIGNMENT,
            Self::TEXT_SECTION_OFFSET,
        );

        if self.resource_section {
            Self::write_section_header(
                out,
                *b".rsrc\0\0\0",
                Self::RESOURCE_SECTION_RVA,
                Self::RESOURCE_SECTION_OFFSET as u32,
            );
        }
    }

    fn write_section_header(out: &mut Vec<u8>, name: [u8; 8], rva: u32, offset: u32) {
        out.extend(name);
        out.extend(Self::RESOURCE_SECTION_SIZE.to_le_bytes());
        out.extend(rva.to_le_bytes());
        out.extend(Self::RESOURCE_SECTION_SIZE.to_le_bytes());
        out.extend(offset.to_le_bytes());
        out.extend([0; 12]);
        out.extend(0x4000_0040_u32.to_le_bytes());
    }

    fn resource_tree(&self) -> Vec<u8> {
        let mut tree = vec![0; Self::RESOURCE_SECTION_SIZE as usize];

        let named = self
            .root_ids
            .iter()
            .filter(|id| **id & Self::SUBDIRECTORY != 0)
            .count();
        let root_entries = self
            .root_ids
            .iter()
            .map(|&id| (id, Self::SUBDIRECTORY | Self::NAME_TABLE))
            .collect::<Vec<_>>();
        Self::write_table(&mut tree, 0, named, &root_entries);

        Self::write_table(
            &mut tree,
            Self::NAME_TABLE,
            0,
            &[(1, Self::SUBDIRECTORY | Self::LANGUAGE_TABLE)],
        );

        let language_entries: &[(u32, u32)] = match self.language_table {
            LanguageTable::Single => &[(1033, Self::DATA_ENTRY)],
            LanguageTable::Empty => &[],
            LanguageTable::Cyclic => &[(1033, Self::SUBDIRECTORY | Self::NAME_TABLE)],
        };
        Self::write_table(&mut tree, Self::LANGUAGE_TABLE, 0, language_entries);

        let mut block = version_info_block(self.file_version, self.product_version);
        if let Some(words) = self.version_words {
            for (index, word) in words.into_iter().enumerate() {
                let offset = 46 + index * size_of::<u32>();
                block[offset..offset + size_of::<u32>()].copy_from_slice(&word.to_le_bytes());
            }
        }

        let data_entry = [self.data_rva, block.len() as u32, 0, 0];
        let mut offset = Self::DATA_ENTRY as usize;
        for field in data_entry {
            tree[offset..offset + 4].copy_from_slice(&field.to_le_bytes());
            offset += 4;
        }

        let start = Self::VERSION_BLOCK as usize;
        tree[start..start + block.len()].copy_from_slice(&block);
        tree
    }

    fn write_table(tree: &mut [u8], offset: u32, named: usize, entries: &[(u32, u32)]) {
        let mut table = Vec::new();
        table.extend([0; 12]);
        table.extend((named as u16).to_le_bytes());
        table.extend(((entries.len() - named) as u16).to_le_bytes());
        for &(name_or_id, data_or_subdirectory) in entries {
            table.extend(name_or_id.to_le_bytes());
            table.extend(data_or_subdirectory.to_le_bytes());
        }

        let offset = offset as usize;
        tree[offset..offset + table.len()].copy_from_slice(&table);
    }
}
