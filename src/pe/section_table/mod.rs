mod section_header;

use std::{io, slice};

pub use section_header::SectionHeader;

use super::{CoffHeader, PeError};
use crate::read::ReadBytesExt;

#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct SectionTable(Vec<SectionHeader>);

impl SectionTable {
    /// The name of the section holding the resource tree.
    pub const RESOURCE_SECTION: &'static str = ".rsrc";

    #[inline]
    pub fn sections(&self) -> &[SectionHeader] {
        &self.0
    }

    pub fn read_from<R>(mut src: R, coff_header: CoffHeader) -> io::Result<Self>
    where
        R: io::Read,
    {
        let mut sections = Vec::with_capacity(coff_header.number_of_sections().into());

        for _ in 0..coff_header.number_of_sections() {
            sections.push(src.read_t::<SectionHeader>()?);
        }

        Ok(Self(sections))
    }

    /// Returns the first section, in file order, whose name is exactly `name`.
    ///
    /// Names are decoded one section at a time up to the match.
    ///
    /// # Errors
    ///
    /// Returns [`PeError::NonAsciiSectionName`] if a section before the match has a non-ASCII
    /// name.
    pub fn find(&self, name: &str) -> Result<Option<&SectionHeader>, PeError> {
        for section in self {
            if section.name()? == name {
                return Ok(Some(section));
            }
        }

        Ok(None)
    }

    /// Returns the `.rsrc` section.
    ///
    /// # Errors
    ///
    /// Returns [`PeError::NoResourceSection`] if the image has no `.rsrc` section.
    pub fn resource_section(&self) -> Result<&SectionHeader, PeError> {
        self.find(Self::RESOURCE_SECTION)?
            .ok_or(PeError::NoResourceSection)
    }
}

impl<'table> IntoIterator for &'table SectionTable {
    type Item = &'table SectionHeader;

    type IntoIter = slice::Iter<'table, SectionHeader>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
