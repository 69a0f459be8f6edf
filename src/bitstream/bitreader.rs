//! BitReader: reads the packed bitstream produced by BitWriter.
//!
//! Every read is bounds-checked. Running off the end of the buffer is how a foreign or damaged
//! stream shows itself, so it is reported as `LzpError::CorruptStream` rather than a panic.
//!
//! The lookahead predicates count whole bytes left after the working byte. The stream has no
//! length field, so they are the only way to tell token data from trailing pad bits.

use crate::error::{LzpError, Result};

/// Reads an LZP1 bitstream held in memory.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    /// Index of the working byte.
    cursor: usize,
    /// Count of unread bits in the working byte (8 only before the first read of that byte).
    unread: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            unread: 8,
        }
    }

    fn byte_at(&self, index: usize) -> Result<u8> {
        self.buffer
            .get(index)
            .copied()
            .ok_or(LzpError::CorruptStream)
    }

    /// Return the next bit, *true* for 1. Moves to the next byte first if the working byte is
    /// used up.
    pub fn read_flag(&mut self) -> Result<bool> {
        if self.unread == 0 {
            self.byte_at(self.cursor + 1)?;
            self.cursor += 1;
            self.unread = 8;
        }
        let byte = self.byte_at(self.cursor)?;
        self.unread -= 1;
        Ok(byte >> self.unread & 1 == 1)
    }

    /// Return the next 8 bits as a byte: the unread bits of the working byte followed by the
    /// leading bits of the next one. Always advances exactly one byte, so the bit alignment is
    /// unchanged.
    pub fn read_byte(&mut self) -> Result<u8> {
        let current = self.byte_at(self.cursor)? as u16;
        let next = self.byte_at(self.cursor + 1)? as u16;
        self.cursor += 1;
        Ok(((current << 8 | next) >> self.unread) as u8)
    }

    /// Return the next `width` bits (at most 32), most significant first.
    pub fn read_bits(&mut self, width: u32) -> Result<u32> {
        let mut value = 0_u32;
        for _ in 0..width {
            value = value << 1 | self.read_flag()? as u32;
        }
        Ok(value)
    }

    /// At least one whole byte follows the working byte.
    pub fn can_read_byte(&self) -> bool {
        self.cursor + 1 < self.buffer.len()
    }

    /// At least two whole bytes follow the working byte.
    pub fn can_read_two_bytes(&self) -> bool {
        self.cursor + 2 < self.buffer.len()
    }

    /// There is at least one more bit left, real or padding.
    pub fn can_read_flag(&self) -> bool {
        self.can_read_byte() || self.unread > 0
    }

    /// True when nothing but 1-valued pad bits is left unread.
    pub fn only_padding_left(&self) -> bool {
        if self.can_read_byte() {
            return false;
        }
        if self.unread == 0 {
            return true;
        }
        let mask = ((1_u16 << self.unread) - 1) as u8;
        matches!(self.buffer.get(self.cursor), Some(&byte) if byte & mask == mask)
    }

    /// Debugging function. Report current position in the buffer as [byte.bit].
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, 8 - self.unread)
    }
}
