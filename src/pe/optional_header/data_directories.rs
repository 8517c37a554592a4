use std::{io, slice};

use super::DataDirectory;
use crate::read::ReadBytesExt;

/// The data directory table that closes the optional header, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct DataDirectories(Vec<DataDirectory>);

impl DataDirectories {
    const RESOURCE_TABLE: usize = 2;

    /// The number of entries a linker normally emits.
    const DEFAULT_COUNT: usize = 16;

    /// Reads `len` consecutive directories from `src`.
    ///
    /// The table is filled one entry at a time so that a corrupt count fails on the first short
    /// read instead of reserving memory for it.
    pub fn read_from<R>(mut src: R, len: u32) -> io::Result<Self>
    where
        R: io::Read,
    {
        let mut data_directories = Vec::with_capacity(Self::DEFAULT_COUNT);

        for _ in 0..len {
            data_directories.push(src.read_t::<DataDirectory>()?);
        }

        Ok(Self(data_directories))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&DataDirectory> {
        self.0.get(index)
    }

    #[inline]
    pub fn resource_table(&self) -> Option<&DataDirectory> {
        self.get(Self::RESOURCE_TABLE)
    }
}

impl<'directories> IntoIterator for &'directories DataDirectories {
    type Item = &'directories DataDirectory;

    type IntoIter = slice::Iter<'directories, DataDirectory>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
