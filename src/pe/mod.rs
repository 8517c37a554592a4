mod coff;
mod error;
#[cfg(test)]
pub(crate) mod fixture;
pub mod optional_header;
pub mod resource;
mod section_table;
pub mod version_info;

use std::{
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
    path::Path,
};

pub use coff::{CoffCharacteristics, CoffHeader};
pub use error::PeError;
pub use optional_header::OptionalHeader;
use optional_header::DataDirectory;
use resource::{EntryScan, ResourceDirectory, SectionReader};
pub use section_table::{SectionHeader, SectionTable};
use tracing::debug;
use zerocopy::LE;

use crate::{
    read::ReadBytesExt,
    version::{DayZVersion, FileVersion},
};

pub const IMAGE_FILE_MACHINE_I386: u16 = 0x014C;
pub const IMAGE_FILE_MACHINE_AMD64: u16 = 0x8664;

/// The headers of a PE image, decoded up to and including the section table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pe {
    pub coff_header: CoffHeader,
    pub optional_header: OptionalHeader,
    pub section_table: SectionTable,
}

impl Pe {
    /// Offset of `e_lfanew` in the DOS header.
    const PE_POINTER_OFFSET: u64 = 0x3C;

    const SIGNATURE: &'static str = "PE";

    pub fn read_from<R>(mut reader: R) -> Result<Self, PeError>
    where
        R: Read + Seek,
    {
        reader.seek(SeekFrom::Start(Self::PE_POINTER_OFFSET))?;
        let pe_offset = reader.read_i16::<LE>()?;
        let pe_offset = u64::try_from(pe_offset).map_err(|_| PeError::InvalidPeOffset(pe_offset))?;
        debug!(pe_offset);

        reader.seek(SeekFrom::Start(pe_offset))?;
        Self::read_signature(&mut reader)?;

        let coff_header = reader.read_t::<CoffHeader>()?;
        debug!(?coff_header);

        let optional_header = OptionalHeader::read_from(&mut reader)?;

        let section_table = SectionTable::read_from(&mut reader, coff_header)?;

        Ok(Self {
            coff_header,
            optional_header,
            section_table,
        })
    }

    fn read_signature<R: Read>(mut reader: R) -> Result<(), PeError> {
        match reader.read_ascii::<4>() {
            Ok(signature) if signature == Self::SIGNATURE => Ok(()),
            Err(error) if error.kind() != io::ErrorKind::InvalidData => Err(error.into()),
            _ => Err(PeError::MissingPeHeader),
        }
    }

    /// Returns the resource entry of the data directory table.
    ///
    /// # Errors
    ///
    /// Returns [`PeError::NoDataDirectory`] if the table is too short to hold one.
    pub fn resource_table(&self) -> Result<&DataDirectory, PeError> {
        self.optional_header
            .data_directories
            .resource_table()
            .ok_or(PeError::NoDataDirectory)
    }

    #[inline]
    pub fn resource_section(&self) -> Result<&SectionHeader, PeError> {
        self.section_table.resource_section()
    }

    /// Reads the version resource of the image that `reader` holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no resource section or resource directory, if its
    /// resource tree has no version resource, or if the version resource itself is malformed.
    pub fn file_version<R>(&self, mut reader: R, scan: EntryScan) -> Result<FileVersion, PeError>
    where
        R: Read + Seek,
    {
        let section = self.resource_section()?;
        let resource_table = self.resource_table()?;

        let root_offset = section.file_offset(resource_table.virtual_address())?;
        let section_end =
            u64::from(section.pointer_to_raw_data()) + u64::from(section.size_of_raw_data());
        debug!(
            rva = resource_table.virtual_address(),
            root_offset, "Found resource directory"
        );

        let section_reader = SectionReader::new(
            &mut reader,
            root_offset.into(),
            section_end.saturating_sub(root_offset.into()),
        )?;
        let data_entry = ResourceDirectory::new(section_reader).find_version(scan)?;

        let data_offset = section.file_offset(data_entry.data_rva())?;
        reader.seek(SeekFrom::Start(data_offset.into()))?;

        version_info::read_version_info(reader)
    }
}

/// Reads the file version of the executable at `path`, scanning its resource root in id order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not hold a readable version resource.
pub fn read_file_version<P: AsRef<Path>>(path: P) -> Result<FileVersion, PeError> {
    read_file_version_with(path, EntryScan::default())
}

pub fn read_file_version_with<P: AsRef<Path>>(
    path: P,
    scan: EntryScan,
) -> Result<FileVersion, PeError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading file version");

    let mut reader = BufReader::new(File::open(path)?);
    let pe = Pe::read_from(&mut reader)?;
    pe.file_version(&mut reader, scan)
}

/// Reads the version of the executable at `path` in the form servers report it.
///
/// # Errors
///
/// Returns the same errors as [`read_file_version`].
pub fn read_dayz_version<P: AsRef<Path>>(path: P) -> Result<DayZVersion, PeError> {
    read_dayz_version_with(path, EntryScan::default())
}

pub fn read_dayz_version_with<P: AsRef<Path>>(
    path: P,
    scan: EntryScan,
) -> Result<DayZVersion, PeError> {
    read_file_version_with(path, scan).map(FileVersion::dayz_version)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use tempfile::NamedTempFile;

    use super::{
        IMAGE_FILE_MACHINE_AMD64, IMAGE_FILE_MACHINE_I386, Pe, PeError, fixture::PeFixture,
        optional_header::Magic, read_dayz_version, read_file_version, read_file_version_with,
        resource::EntryScan,
    };
    use crate::version::{DayZVersion, FileVersion};

    fn file_version(fixture: &PeFixture, scan: EntryScan) -> Result<FileVersion, PeError> {
        let mut reader = fixture.cursor();
        let pe = Pe::read_from(&mut reader)?;
        pe.file_version(&mut reader, scan)
    }

    #[rstest]
    #[case::pe32(PeFixture::pe32(), Magic::Pe32, IMAGE_FILE_MACHINE_I386)]
    #[case::pe64(PeFixture::pe64(), Magic::Pe64, IMAGE_FILE_MACHINE_AMD64)]
    fn headers(#[case] fixture: PeFixture, #[case] magic: Magic, #[case] machine: u16) {
        let pe = Pe::read_from(fixture.cursor()).unwrap();

        assert_eq!(pe.optional_header.magic(), magic);
        assert_eq!(pe.coff_header.machine(), machine);
        assert_eq!(pe.optional_header.data_directories.len(), 16);
        assert_eq!(pe.resource_section().unwrap().name().unwrap(), ".rsrc");
        assert_eq!(pe.resource_table().unwrap().virtual_address(), 0x2000);
    }

    #[rstest]
    #[case::pe32(PeFixture::pe32())]
    #[case::pe64(PeFixture::pe64())]
    fn reads_version(#[case] fixture: PeFixture) {
        let fixture = fixture.version([1, 27, 1590, 40], [1, 27, 1590, 40]);

        assert_eq!(
            file_version(&fixture, EntryScan::Sorted).unwrap(),
            FileVersion::new(1, 27, 1590, 40)
        );
    }

    #[rstest]
    #[case::pe32(PeFixture::pe32())]
    #[case::pe64(PeFixture::pe64())]
    fn raw_version_words(#[case] fixture: PeFixture) {
        let fixture =
            fixture.version_words([0x0001_0002, 0x0000_0007, 0x0000_0000, 0x0009_0000]);

        let version = file_version(&fixture, EntryScan::Sorted).unwrap();

        assert_eq!(version.minor, 1);
        assert_eq!(version.major, 7);
        assert_eq!(version.build, 0);
        assert_eq!(version.revision, 9);
    }

    #[test]
    fn missing_resource_section() {
        let fixture = PeFixture::pe64().without_resource_section();

        let error = file_version(&fixture, EntryScan::Sorted).unwrap_err();

        assert!(matches!(error, PeError::NoResourceSection));
        assert_eq!(error.to_string(), "no root resource node found");
    }

    #[test]
    fn no_data_directories() {
        let fixture = PeFixture::pe32().number_of_rva_and_sizes(0);

        let error = Pe::read_from(fixture.cursor()).unwrap_err();

        assert!(matches!(error, PeError::NoDataDirectory));
        assert_eq!(error.to_string(), "no data resource directory");
    }

    #[test]
    fn data_directories_end_before_resource_table() {
        let fixture = PeFixture::pe64().number_of_rva_and_sizes(2);

        let error = file_version(&fixture, EntryScan::Sorted).unwrap_err();

        assert!(matches!(error, PeError::NoDataDirectory));
    }

    #[test]
    fn zero_resource_directory_rva() {
        let fixture = PeFixture::pe32().resource_directory_rva(0);

        let error = file_version(&fixture, EntryScan::Sorted).unwrap_err();

        assert!(matches!(error, PeError::InvalidRva(0)));
    }

    #[test]
    fn zero_data_rva() {
        let fixture = PeFixture::pe32().data_rva(0);

        let error = file_version(&fixture, EntryScan::Sorted).unwrap_err();

        assert!(matches!(error, PeError::InvalidRva(0)));
    }

    #[test]
    fn negative_pe_offset() {
        let mut image = PeFixture::pe32().build();
        image[0x3C..0x3E].copy_from_slice(&(-2_i16).to_le_bytes());

        let error = Pe::read_from(std::io::Cursor::new(image)).unwrap_err();

        assert!(matches!(error, PeError::InvalidPeOffset(-2)));
    }

    #[rstest]
    #[case::wrong_signature(*b"NE\0\0")]
    #[case::non_ascii(*b"P\xC9\0\0")]
    #[case::zeroed([0; 4])]
    fn missing_pe_header(#[case] signature: [u8; 4]) {
        let mut image = PeFixture::pe64().build();
        image[0x80..0x84].copy_from_slice(&signature);

        let error = Pe::read_from(std::io::Cursor::new(image)).unwrap_err();

        assert!(matches!(error, PeError::MissingPeHeader));
        assert_eq!(error.to_string(), "missing PE header data");
    }

    #[test]
    fn unknown_magic() {
        let mut image = PeFixture::pe32().build();
        image[0x98..0x9A].copy_from_slice(&0x107_u16.to_le_bytes());

        let error = Pe::read_from(std::io::Cursor::new(image)).unwrap_err();

        assert!(matches!(error, PeError::UnknownOptionalHeaderMagic(0x107)));
    }

    #[test]
    fn sorted_scan_stops_past_version() {
        let fixture = PeFixture::pe64().root_ids([3, 24, 16]);

        let error = file_version(&fixture, EntryScan::Sorted).unwrap_err();

        assert!(matches!(error, PeError::NoVersionInfo));
        assert_eq!(error.to_string(), "no version info node found");
    }

    #[test]
    fn exhaustive_scan_finds_unsorted_version() {
        let fixture = PeFixture::pe64()
            .root_ids([3, 24, 16])
            .version([1, 26, 1585, 93], [1, 26, 1585, 93]);

        assert_eq!(
            file_version(&fixture, EntryScan::Exhaustive).unwrap(),
            FileVersion::new(1, 26, 1585, 93)
        );
    }

    #[test]
    fn named_root_entry_needs_exhaustive_scan() {
        let fixture = PeFixture::pe32().root_ids([0x8000_0100, 3, 16]);

        assert!(matches!(
            file_version(&fixture, EntryScan::Sorted),
            Err(PeError::NoVersionInfo)
        ));
        assert!(file_version(&fixture, EntryScan::Exhaustive).is_ok());
    }

    #[rstest]
    #[case::sorted(EntryScan::Sorted)]
    #[case::exhaustive(EntryScan::Exhaustive)]
    fn no_version_resource(#[case] scan: EntryScan) {
        let fixture = PeFixture::pe32().root_ids([3, 14, 24]);

        assert!(matches!(
            file_version(&fixture, scan),
            Err(PeError::NoVersionInfo)
        ));
    }

    #[test]
    fn empty_subdirectory() {
        let fixture = PeFixture::pe64().empty_language_table();

        let error = file_version(&fixture, EntryScan::Sorted).unwrap_err();

        assert!(matches!(
            error,
            PeError::EmptyResourceDirectory(offset) if offset == PeFixture::LANGUAGE_TABLE
        ));
    }

    #[test]
    fn cyclic_subdirectories() {
        let fixture = PeFixture::pe64().cyclic_language_table();

        let error = file_version(&fixture, EntryScan::Sorted).unwrap_err();

        assert!(matches!(error, PeError::ResourceTreeTooDeep(8)));
    }

    #[rstest]
    #[case::dos_header(0x30)]
    #[case::before_pe_signature(0x82)]
    #[case::optional_header(0xA0)]
    #[case::section_table(0x1A0)]
    #[case::resource_root(PeFixture::RESOURCE_SECTION_OFFSET + 0x08)]
    #[case::resource_subdirectory(PeFixture::RESOURCE_SECTION_OFFSET + PeFixture::NAME_TABLE as usize + 4)]
    #[case::version_block(PeFixture::RESOURCE_SECTION_OFFSET + PeFixture::VERSION_BLOCK as usize + 50)]
    fn truncated(#[case] length: usize) {
        let image = PeFixture::pe64().build();
        let mut reader = std::io::Cursor::new(image[..length].to_vec());

        let error = Pe::read_from(&mut reader)
            .and_then(|pe| pe.file_version(&mut reader, EntryScan::Sorted))
            .unwrap_err();

        assert!(matches!(error, PeError::TruncatedFile), "{error:?}");
    }

    #[test]
    fn reading_twice_is_identical() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&PeFixture::pe64().version([1, 27, 1590, 40], [1, 27, 1590, 40]).build())
            .unwrap();

        let first = read_file_version(file.path()).unwrap();
        let second = read_file_version(file.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            read_dayz_version(file.path()).unwrap(),
            DayZVersion::new(1, 27, 159_040)
        );
    }

    #[test]
    fn missing_file() {
        let directory = tempfile::tempdir().unwrap();

        let error =
            read_file_version_with(directory.path().join("DayZ_x64.exe"), EntryScan::Exhaustive)
                .unwrap_err();

        assert!(matches!(error, PeError::Io(error) if error.kind() == std::io::ErrorKind::NotFound));
    }
}
