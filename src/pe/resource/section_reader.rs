use std::{
    cmp, fmt,
    io::{self, Read, Seek, SeekFrom},
};

/// A window over the resource tree inside the `.rsrc` section.
///
/// Offsets stored inside the tree are relative to its root, so every seek on this reader is
/// taken from the root rather than from the start of the file. Reads stop at the end of the raw
/// section data instead of running into whatever follows it in the file.
pub struct SectionReader<R> {
    inner: R,
    start: u64,
    length: u64,
    position: u64,
}

impl<R: Read + Seek> SectionReader<R> {
    /// Creates a reader whose offset 0 is `start` in `inner`, positioned at offset 0.
    pub fn new(mut inner: R, start: u64, length: u64) -> io::Result<Self> {
        inner.seek(SeekFrom::Start(start))?;

        Ok(Self {
            inner,
            start,
            length,
            position: 0,
        })
    }

    #[inline]
    pub const fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    pub const fn remaining(&self) -> u64 {
        self.length.saturating_sub(self.position)
    }

    /// Returns the absolute offset of the tree root in the underlying reader.
    #[inline]
    pub const fn start(&self) -> u64 {
        self.start
    }

    #[inline]
    pub const fn len(&self) -> u64 {
        self.length
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Gives back the underlying reader, left wherever the last read or seek put it.
    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> Read for SectionReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.remaining();
        if remaining == 0 {
            return Ok(0);
        }

        let to_read = cmp::min(buf.len() as u64, remaining) as usize;
        let bytes_read = self.inner.read(&mut buf[..to_read])?;

        self.position += bytes_read as u64;
        Ok(bytes_read)
    }
}

impl<R: Read + Seek> Seek for SectionReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => offset,
            SeekFrom::End(offset) => self.length.saturating_add_signed(offset),
            SeekFrom::Current(offset) => self.position.saturating_add_signed(offset),
        };

        // Anything past the end reads as EOF
        let position = cmp::min(target, self.length);

        self.inner.seek(SeekFrom::Start(self.start + position))?;
        self.position = position;
        Ok(self.position)
    }
}

impl<R> fmt::Debug for SectionReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionReader")
            .field("start", &self.start)
            .field("length", &self.length)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
