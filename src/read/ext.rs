use std::io::{Error, ErrorKind, Read, Result};

use zerocopy::{ByteOrder, FromBytes, I16, U16, U32, U64};

/// Extends [`Read`] with fixed-width record reads.
///
/// Every method reads exactly the number of bytes its type occupies. A stream that ends early
/// yields an error of kind [`ErrorKind::UnexpectedEof`], as [`Read::read_exact`] does.
///
/// The integer readers take an explicit byte order, which for PE structures is always
/// [`LittleEndian`](zerocopy::LittleEndian).
pub trait ReadBytesExt: Read {
    /// Read a type that implements [`FromBytes`] from the underlying reader.
    ///
    /// # Errors
    ///
    /// This method returns the same errors as [`Read::read_exact`].
    #[inline]
    fn read_t<T: FromBytes>(&mut self) -> Result<T> {
        T::read_from_io(self)
    }

    /// Reads an unsigned 16-bit integer from the underlying reader.
    ///
    /// # Errors
    ///
    /// This method returns the same errors as [`Read::read_exact`].
    #[inline]
    fn read_u16<T: ByteOrder>(&mut self) -> Result<u16> {
        U16::<T>::read_from_io(self).map(U16::get)
    }

    /// Reads a signed 16-bit integer from the underlying reader.
    ///
    /// # Errors
    ///
    /// This method returns the same errors as [`Read::read_exact`].
    #[inline]
    fn read_i16<T: ByteOrder>(&mut self) -> Result<i16> {
        I16::<T>::read_from_io(self).map(I16::get)
    }

    /// Reads an unsigned 32-bit integer from the underlying reader.
    ///
    /// # Errors
    ///
    /// This method returns the same errors as [`Read::read_exact`].
    #[inline]
    fn read_u32<T: ByteOrder>(&mut self) -> Result<u32> {
        U32::<T>::read_from_io(self).map(U32::get)
    }

    /// Reads an unsigned 64-bit integer from the underlying reader.
    ///
    /// # Errors
    ///
    /// This method returns the same errors as [`Read::read_exact`].
    #[inline]
    fn read_u64<T: ByteOrder>(&mut self) -> Result<u64> {
        U64::<T>::read_from_io(self).map(U64::get)
    }

    /// Reads an `N` byte ASCII field and trims its trailing NUL padding.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Read::read_exact`], or an error of kind
    /// [`ErrorKind::InvalidData`] if any byte of the field is not ASCII.
    fn read_ascii<const N: usize>(&mut self) -> Result<String> {
        let mut buf = [0; N];
        self.read_exact(&mut buf)?;
        decode_ascii(&buf).map(str::to_owned)
    }

    /// Reads an `N` byte UTF-16LE field and trims its trailing NUL code units.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Read::read_exact`], or an error of kind
    /// [`ErrorKind::InvalidData`] if the field is not valid UTF-16.
    fn read_utf16<const N: usize>(&mut self) -> Result<String> {
        let mut buf = [0; N];
        self.read_exact(&mut buf)?;

        let units = buf
            .chunks_exact(size_of::<u16>())
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));

        char::decode_utf16(units)
            .collect::<std::result::Result<String, _>>()
            .map(|text| text.trim_end_matches('\0').to_owned())
            .map_err(|err| Error::new(ErrorKind::InvalidData, err))
    }
}

/// All types that implement `Read` get methods defined in `ReadBytesExt` for free.
impl<R: Read + ?Sized> ReadBytesExt for R {}

/// Decodes a fixed-width ASCII field, dropping trailing NUL padding.
///
/// # Errors
///
/// Returns an error of kind [`ErrorKind::InvalidData`] if the field contains a non-ASCII byte.
pub fn decode_ascii(field: &[u8]) -> Result<&str> {
    if !field.is_ascii() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("Non-ASCII byte in fixed-width field {field:02X?}"),
        ));
    }

    std::str::from_utf8(field)
        .map(|text| text.trim_end_matches('\0'))
        .map_err(|err| Error::new(ErrorKind::InvalidData, err))
}
