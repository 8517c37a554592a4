mod data_directories;
mod data_directory;
mod standard_fields;
mod windows_fields;

use std::io::{Read, Seek, SeekFrom};

pub use data_directories::DataDirectories;
pub use data_directory::DataDirectory;
pub use standard_fields::{Magic, StandardFields, StandardFields32, StandardFields64};
use tracing::debug;
pub use windows_fields::{WindowsFields, WindowsFields32, WindowsFields64};

use super::PeError;
use crate::read::ReadBytesExt;

/// The optional header of an image: standard fields, Windows-specific fields and data
/// directories. The 32-bit and 64-bit layouts are told apart once, by the leading [`Magic`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionalHeader {
    pub standard_fields: StandardFields,
    pub windows_fields: WindowsFields,
    pub data_directories: DataDirectories,
}

impl OptionalHeader {
    pub fn read_from<R>(mut src: R) -> Result<Self, PeError>
    where
        R: Read + Seek,
    {
        // Peek the magic to determine whether the image is PE32 or PE32+
        let magic = Magic::peek_from(&mut src)?;

        debug!(?magic);

        let (standard_fields, windows_fields) = match magic {
            Magic::Pe32 => (
                StandardFields::from(src.read_t::<StandardFields32>()?),
                WindowsFields::from(src.read_t::<WindowsFields32>()?),
            ),
            Magic::Pe64 => (
                StandardFields::from(src.read_t::<StandardFields64>()?),
                WindowsFields::from(src.read_t::<WindowsFields64>()?),
            ),
        };

        let number_of_rva_and_sizes = windows_fields.number_of_rva_and_sizes();
        if number_of_rva_and_sizes < 1 {
            return Err(PeError::NoDataDirectory);
        }

        let data_directories = DataDirectories::read_from(&mut src, number_of_rva_and_sizes)?;

        Ok(Self {
            standard_fields,
            windows_fields,
            data_directories,
        })
    }

    #[inline]
    pub const fn magic(&self) -> Magic {
        self.standard_fields.magic()
    }
}

impl Magic {
    /// Reads the magic without consuming it, leaving `src` at the start of the standard fields.
    fn peek_from<R>(mut src: R) -> Result<Self, PeError>
    where
        R: Read + Seek,
    {
        let raw = src.read_u16::<zerocopy::LE>()?;
        src.seek(SeekFrom::Current(-(size_of::<u16>() as i64)))?;
        Self::try_from(raw).map_err(PeError::UnknownOptionalHeaderMagic)
    }
}
