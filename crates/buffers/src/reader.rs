//! Binary buffer reader with cursor tracking.

use std::str;

use crate::BufferError;

/// A little-endian reader over a borrowed byte slice.
///
/// The reader keeps a cursor and only ever advances it on a successful
/// read, so a failed read leaves the position untouched.
///
/// # Example
///
/// ```
/// use gd_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.try_u8(), Ok(0x01));
/// assert_eq!(reader.try_u16(), Ok(0x0302));
/// assert_eq!(reader.pos(), 3);
/// ```
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader over the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor position from the start of the slice.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Checks that `n` more bytes are available from the cursor.
    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.data.len() - self.pos < n {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Advances the cursor by `n` bytes without reading them.
    pub fn skip(&mut self, n: usize) -> Result<(), BufferError> {
        self.check(n)?;
        self.pos += n;
        Ok(())
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.data[self.pos];
        self.pos += 1;
        Ok(val)
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn try_i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.try_u8()? as i8)
    }

    /// Reads an unsigned 16-bit little-endian integer.
    #[inline]
    pub fn try_u16(&mut self) -> Result<u16, BufferError> {
        self.check(2)?;
        let val = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(val)
    }

    /// Reads a signed 16-bit little-endian integer.
    #[inline]
    pub fn try_i16(&mut self) -> Result<i16, BufferError> {
        Ok(self.try_u16()? as i16)
    }

    /// Reads an unsigned 32-bit little-endian integer.
    #[inline]
    pub fn try_u32(&mut self) -> Result<u32, BufferError> {
        self.check(4)?;
        let bytes: [u8; 4] = self.data[self.pos..self.pos + 4].try_into().unwrap();
        self.pos += 4;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Reads a signed 32-bit little-endian integer.
    #[inline]
    pub fn try_i32(&mut self) -> Result<i32, BufferError> {
        Ok(self.try_u32()? as i32)
    }

    /// Reads an unsigned 64-bit little-endian integer.
    #[inline]
    pub fn try_u64(&mut self) -> Result<u64, BufferError> {
        self.check(8)?;
        let bytes: [u8; 8] = self.data[self.pos..self.pos + 8].try_into().unwrap();
        self.pos += 8;
        Ok(u64::from_le_bytes(bytes))
    }

    /// Reads a signed 64-bit little-endian integer.
    #[inline]
    pub fn try_i64(&mut self) -> Result<i64, BufferError> {
        Ok(self.try_u64()? as i64)
    }

    /// Reads a 32-bit little-endian IEEE 754 float.
    #[inline]
    pub fn try_f32(&mut self) -> Result<f32, BufferError> {
        Ok(f32::from_bits(self.try_u32()?))
    }

    /// Reads a 64-bit little-endian IEEE 754 float.
    #[inline]
    pub fn try_f64(&mut self) -> Result<f64, BufferError> {
        Ok(f64::from_bits(self.try_u64()?))
    }

    /// Reads `size` raw bytes and advances the cursor.
    pub fn try_buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let start = self.pos;
        self.pos += size;
        Ok(&self.data[start..self.pos])
    }

    /// Reads a UTF-8 string of `size` bytes.
    pub fn try_utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        self.check(size)?;
        let bytes = &self.data[self.pos..self.pos + size];
        let s = str::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8)?;
        self.pos += size;
        Ok(s)
    }
}
