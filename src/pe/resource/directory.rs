use std::io::{Read, Seek, SeekFrom};

use tracing::{debug, trace};

use super::{
    EntryScan, ImageResourceDataEntry, ImageResourceDirectory, ImageResourceDirectoryEntry,
    ResourceDirectoryTable, ResourceType, SectionReader,
};
use crate::{pe::PeError, read::ReadBytesExt};

/// Walks a resource tree whose root sits at offset 0 of a [`SectionReader`].
pub struct ResourceDirectory<R: Read + Seek> {
    reader: SectionReader<R>,
}

impl<R: Read + Seek> ResourceDirectory<R> {
    /// Subdirectory levels below the root followed before the tree is considered cyclic.
    pub const MAX_DEPTH: usize = 8;

    #[inline]
    pub const fn new(reader: SectionReader<R>) -> Self {
        Self { reader }
    }

    #[inline]
    pub const fn reader_mut(&mut self) -> &mut SectionReader<R> {
        &mut self.reader
    }

    #[inline]
    pub fn into_inner(self) -> SectionReader<R> {
        self.reader
    }

    /// Finds the data entry of the version resource.
    ///
    /// Below the root, the first entry of every subdirectory is taken, which selects the first
    /// name and then the first language.
    ///
    /// # Errors
    ///
    /// Returns [`PeError::NoVersionInfo`] if the root has no version entry,
    /// [`PeError::EmptyResourceDirectory`] if a subdirectory on the way down has no entries and
    /// [`PeError::ResourceTreeTooDeep`] if the subdirectories nest deeper than
    /// [`Self::MAX_DEPTH`].
    pub fn find_version(&mut self, scan: EntryScan) -> Result<ImageResourceDataEntry, PeError> {
        let root_entry = self.find_root_entry(ResourceType::Version, scan)?;
        let leaf = self.descend(root_entry)?;

        self.reader.seek(SeekFrom::Start(leaf.data_offset().into()))?;
        let data_entry = self.reader.read_t::<ImageResourceDataEntry>()?;
        debug!(
            offset = leaf.data_offset(),
            rva = data_entry.data_rva(),
            size = data_entry.size(),
            "Found version data entry"
        );

        Ok(data_entry)
    }

    fn find_root_entry(
        &mut self,
        resource_type: ResourceType,
        scan: EntryScan,
    ) -> Result<ImageResourceDirectoryEntry, PeError> {
        self.reader.seek(SeekFrom::Start(0))?;
        let header = self.reader.read_t::<ImageResourceDirectory>()?;
        debug!(entries = header.number_of_entries(), ?scan, "Read root resource directory");

        for _ in 0..header.number_of_entries() {
            let entry = self.reader.read_t::<ImageResourceDirectoryEntry>()?;

            if entry.name_or_id() == resource_type.id() {
                return Ok(entry);
            }

            if scan == EntryScan::Sorted && entry.name_or_id() > resource_type.id() {
                debug!(id = entry.name_or_id(), "Passed {resource_type} in sorted root directory");
                return Err(PeError::NoVersionInfo);
            }

            match ResourceType::from_id(entry.name_or_id()) {
                Some(skipped) => trace!(?skipped, "Skipping root resource entry"),
                None => trace!(id = entry.name_or_id(), "Skipping root resource entry"),
            }
        }

        Err(PeError::NoVersionInfo)
    }

    fn descend(
        &mut self,
        mut entry: ImageResourceDirectoryEntry,
    ) -> Result<ImageResourceDirectoryEntry, PeError> {
        let mut depth = 0;

        while entry.is_table() {
            depth += 1;
            if depth > Self::MAX_DEPTH {
                return Err(PeError::ResourceTreeTooDeep(Self::MAX_DEPTH));
            }

            let offset = entry.data_offset();
            self.reader.seek(SeekFrom::Start(offset.into()))?;
            let table = ResourceDirectoryTable::read_from(&mut self.reader)?;

            entry = *table
                .first_entry()
                .ok_or(PeError::EmptyResourceDirectory(offset))?;
            trace!(depth, offset, id = entry.name_or_id(), "Descended into resource subdirectory");
        }

        Ok(entry)
    }
}
