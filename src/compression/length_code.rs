//! Cascading variable-width code for match lengths (minimum value 1).
//!
//! Length 1 is the single bit `0`. Anything longer is a `1` followed by `length - 2` spread over
//! segments of 2, 3, 5, 8, 8, 8... bits. A segment of all 1s is an escape marker: the value did
//! not fit, its capacity is subtracted and the next segment follows. Short matches cost 3 bits and
//! there is no upper bound.
//!
//! The writer pads the final byte with 1s, which reads back as escape markers, never as a short
//! length.

use crate::bitstream::{bitreader::BitReader, bitwriter::BitWriter};
use crate::error::Result;

/// Leading segment widths. Every segment after these is `REPEAT_WIDTH` bits.
const SEGMENT_WIDTHS: [u32; 3] = [2, 3, 5];
const REPEAT_WIDTH: u32 = 8;

fn segment_widths() -> impl Iterator<Item = u32> {
    SEGMENT_WIDTHS
        .into_iter()
        .chain(std::iter::repeat(REPEAT_WIDTH))
}

/// All-ones value of a segment, also the amount an escape adds to the length.
fn capacity(width: u32) -> usize {
    (1 << width) - 1
}

/// Encode `length` (1 or more) onto the stream.
pub fn write_length(bw: &mut BitWriter, length: usize) {
    debug_assert!(length >= 1, "match lengths start at 1");
    if length == 1 {
        bw.write_flag(false);
        return;
    }
    bw.write_flag(true);

    let mut remaining = length - 2;
    for width in segment_widths() {
        let cap = capacity(width);
        if remaining < cap {
            bw.write_bits(remaining as u32, width);
            return;
        }
        bw.write_bits(cap as u32, width);
        remaining -= cap;
    }
}

/// Decode a length written by `write_length`.
pub fn read_length(br: &mut BitReader<'_>) -> Result<usize> {
    if !br.read_flag()? {
        return Ok(1);
    }
    let mut length = 1;
    for width in segment_widths() {
        let cap = capacity(width);
        let segment = br.read_bits(width)? as usize;
        if segment != cap {
            return Ok(length + segment + 1);
        }
        length += cap;
    }
    unreachable!("segment widths never run out")
}
