/*
# Bits Reader Module

 Byte and bit level helpers shared by the two duration readers.

 Key components:
 - Slice readers: `read_i32_be_at()` for big-endian atom fields, `read_synchsafe_u32()`
   for ID3v2 tag sizes
 - BitReader: MSB-first bit reading with error accumulation, used to unpack
   MPEG audio frame headers
*/

use std::io::{self, Read};

/// Read a 32-bit big endian signed value at `offset` in `data`.
pub fn read_i32_be_at(data: &[u8], offset: usize) -> Option<i32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Decode a 4-byte synchsafe integer (7 significant bits per byte).
///
/// Returns `None` if fewer than 4 bytes are given or any byte has its high bit set.
pub fn read_synchsafe_u32(data: &[u8]) -> Option<u32> {
    let bytes = data.get(..4)?;
    if bytes.iter().any(|b| b & 0x80 != 0) {
        return None;
    }
    Some(
        (u32::from(bytes[0]) << 21)
            | (u32::from(bytes[1]) << 14)
            | (u32::from(bytes[2]) << 7)
            | u32::from(bytes[3]),
    )
}

/// `BitReader` reads bits from an underlying reader and accumulates the first
/// error that occurs.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    rd: R,
    err: Option<io::Error>,
    n: u32,
    value: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` that starts accumulating errors.
    pub fn new(rd: R) -> Self {
        Self {
            rd,
            err: None,
            n: 0,
            value: 0,
        }
    }

    /// Return the accumulated error if any.
    pub fn acc_error(&self) -> Option<&io::Error> {
        self.err.as_ref()
    }

    /// Read `n` bits (at most 32) and return them as the lowest bits of a `u32`.
    /// If an error has occurred, 0 is returned.
    pub fn read(&mut self, n: u32) -> u32 {
        if self.err.is_some() {
            return 0;
        }
        while self.n < n {
            let mut buf = [0u8; 1];
            match self.rd.read_exact(&mut buf) {
                Ok(()) => {
                    self.value = (self.value << 8) | u64::from(buf[0]);
                    self.n += 8;
                }
                Err(e) => {
                    self.err = Some(e);
                    return 0;
                }
            }
        }
        let value = (self.value >> (self.n - n)) as u32;
        self.n -= n;
        self.value &= (1u64 << self.n) - 1;
        value
    }

    /// Read a single bit interpreted as a boolean flag.
    pub fn read_flag(&mut self) -> bool {
        self.read(1) == 1
    }

    /// Skip `n` bits.
    pub fn skip(&mut self, n: u32) {
        let _ = self.read(n);
    }
}
