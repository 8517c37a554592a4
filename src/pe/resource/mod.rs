mod directory;
mod image;
mod resource_types;
mod section_reader;

use std::io;

pub use directory::ResourceDirectory;
pub use image::{ImageResourceDataEntry, ImageResourceDirectory, ImageResourceDirectoryEntry};
pub use resource_types::ResourceType;
pub use section_reader::SectionReader;
use zerocopy::FromBytes;

/// How the entries of the root resource directory are searched for the version type.
///
/// The format orders id entries ascending, so a sorted scan can stop at the first id past the
/// one it wants. Some tools write the root out of order; an exhaustive scan still finds the
/// version resource in those files.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum EntryScan {
    /// Stop with [`PeError::NoVersionInfo`](super::PeError::NoVersionInfo) at the first id
    /// greater than the one being searched for.
    #[default]
    Sorted,
    /// Look at every root entry before giving up.
    Exhaustive,
}

/// A resource directory header together with all of its entries, named entries first.
#[derive(Clone, Debug)]
pub struct ResourceDirectoryTable {
    pub header: ImageResourceDirectory,
    name_entries: Vec<ImageResourceDirectoryEntry>,
    id_entries: Vec<ImageResourceDirectoryEntry>,
}

impl ResourceDirectoryTable {
    /// Reads a directory header and the `name + id` entries that directly follow it.
    pub fn read_from<R>(mut src: R) -> io::Result<Self>
    where
        R: io::Read,
    {
        let header = ImageResourceDirectory::read_from_io(&mut src)?;

        let read_entries = |src: &mut R, count: u16| {
            (0..count)
                .map(|_| ImageResourceDirectoryEntry::read_from_io(&mut *src))
                .collect::<io::Result<Vec<_>>>()
        };
        let name_entries = read_entries(&mut src, header.number_of_name_entries())?;
        let id_entries = read_entries(&mut src, header.number_of_id_entries())?;

        Ok(Self {
            header,
            name_entries,
            id_entries,
        })
    }

    #[inline]
    pub fn id_entries(&self) -> impl Iterator<Item = &ImageResourceDirectoryEntry> {
        self.id_entries.iter()
    }

    #[inline]
    pub fn name_entries(&self) -> impl Iterator<Item = &ImageResourceDirectoryEntry> {
        self.name_entries.iter()
    }

    /// Iterates over every entry in file order.
    pub fn entries(&self) -> impl Iterator<Item = &ImageResourceDirectoryEntry> {
        self.name_entries().chain(self.id_entries())
    }

    #[inline]
    pub fn first_entry(&self) -> Option<&ImageResourceDirectoryEntry> {
        self.entries().next()
    }
}
