//! Binary buffer writer backed by a growable byte vector.

/// A little-endian writer that appends to an owned buffer.
///
/// # Example
///
/// ```
/// use gd_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// assert_eq!(writer.into_vec(), [0x01, 0x03, 0x02]);
/// ```
#[derive(Default)]
pub struct Writer {
    data: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the writer and returns the accumulated bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.data.push(val);
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.data.push(val as u8);
    }

    /// Writes an unsigned 16-bit integer (little-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a signed 16-bit integer (little-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a signed 64-bit integer (little-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a 32-bit IEEE 754 float (little-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a 64-bit IEEE 754 float (little-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a byte slice verbatim.
    pub fn buf(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        self.data.extend_from_slice(bytes);
        bytes.len()
    }

    /// Writes `count` zero bytes.
    pub fn pad(&mut self, count: usize) {
        self.data.resize(self.data.len() + count, 0);
    }
}
