use std::io;

use thiserror::Error;

/// A structural expectation of the PE file that was not met.
#[derive(Error, Debug)]
pub enum PeError {
    #[error("PE header offset {0} is negative")]
    InvalidPeOffset(i16),
    #[error("missing PE header data")]
    MissingPeHeader,
    #[error("unknown optional header magic {0:#06X}")]
    UnknownOptionalHeaderMagic(u16),
    #[error("no data resource directory")]
    NoDataDirectory,
    #[error("no root resource node found")]
    NoResourceSection,
    #[error("section name {0:02X?} is not ASCII")]
    NonAsciiSectionName([u8; 8]),
    #[error("address {0:#X} lies outside the resource section")]
    InvalidRva(u32),
    #[error("no version info node found")]
    NoVersionInfo,
    #[error("resource directory at offset {0:#X} has no entries")]
    EmptyResourceDirectory(u32),
    #[error("resource directory nesting exceeds {0} levels")]
    ResourceTreeTooDeep(usize),
    #[error("header identifier {0:?} != 'VS_VERSION_INFO'")]
    InvalidVersionInfoKey(String),
    #[error("VS_VERSION_INFO signature {0:#X} != '0xFEEF04BD0000'")]
    InvalidFixedFileInfoSignature(u64),
    #[error("file ended before a complete record could be read")]
    TruncatedFile,
    #[error("{0}")]
    Decode(String),
    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for PeError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof => Self::TruncatedFile,
            io::ErrorKind::InvalidData => Self::Decode(error.to_string()),
            _ => Self::Io(error),
        }
    }
}
