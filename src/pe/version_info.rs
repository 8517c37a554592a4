use std::io::Read;

use tracing::debug;
use zerocopy::{FromBytes, Immutable, KnownLayout, LE, LittleEndian, U16};

use super::PeError;
use crate::{read::ReadBytesExt, version::FileVersion};

/// The key every `VS_VERSIONINFO` block starts with.
pub const VS_VERSION_INFO_KEY: &str = "VS_VERSION_INFO";

/// The eight bytes read right after the key.
///
/// These are the two bytes of alignment padding, the `0xFEEF04BD` signature of
/// `VS_FIXEDFILEINFO` and the low half of its struct version, so the value doubles as a check that
/// the block uses the padded layout the version words are read from.
pub const FIXED_FILE_INFO_SIGNATURE: u64 = 0xFEEF_04BD_0000;

/// The fixed part of the header that starts every block in a version resource.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct VsHeader {
    length: U16<LittleEndian>,
    value_length: U16<LittleEndian>,
    r#type: U16<LittleEndian>,
}

impl VsHeader {
    /// The length of the whole block including its children.
    #[inline]
    pub const fn length(&self) -> u16 {
        self.length.get()
    }

    #[inline]
    pub const fn value_length(&self) -> u16 {
        self.value_length.get()
    }

    /// 1 for text data, 0 for binary data.
    #[inline]
    pub const fn r#type(&self) -> u16 {
        self.r#type.get()
    }
}

/// Reads a [`FileVersion`] from a `VS_VERSIONINFO` block at the current position of `src`.
///
/// # Errors
///
/// Returns [`PeError::InvalidVersionInfoKey`] if the block is not keyed `VS_VERSION_INFO`,
/// [`PeError::InvalidFixedFileInfoSignature`] if the signature doesn't match and
/// [`PeError::TruncatedFile`] if the block is cut short.
pub fn read_version_info<R: Read>(mut src: R) -> Result<FileVersion, PeError> {
    let header = src.read_t::<VsHeader>()?;
    debug!(?header);

    let key = src.read_utf16::<32>()?;
    if key != VS_VERSION_INFO_KEY {
        return Err(PeError::InvalidVersionInfoKey(key));
    }

    let signature = src.read_u64::<LE>()?;
    if signature != FIXED_FILE_INFO_SIGNATURE {
        return Err(PeError::InvalidFixedFileInfoSignature(signature));
    }

    let mut words = [0; 4];
    for word in &mut words {
        *word = src.read_u32::<LE>()?;
    }

    let version = file_version_from_words(words);
    debug!(%version, "Read file version");

    Ok(version)
}

/// Extracts the version from the four words that follow the signature.
///
/// The words sit two bytes past the `VS_FIXEDFILEINFO` fields, so each 16-bit part is taken from
/// whichever half of a word it landed in. The revision comes from the low half of
/// `dwProductVersionLS`.
#[must_use]
pub const fn file_version_from_words(words: [u32; 4]) -> FileVersion {
    FileVersion {
        major: (words[1] & 0xFFFF) as u16,
        minor: ((words[0] >> 16) & 0xFFFF) as u16,
        build: (words[2] & 0xFFFF) as u16,
        revision: ((words[3] >> 16) & 0xFFFF) as u16,
    }
}
