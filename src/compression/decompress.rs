use crate::bitstream::bitreader::BitReader;
use crate::error::{LzpError, Result};

use super::context::{hash_before, MatchTable, CONTEXT_LEN};
use super::token::{Token, TokenReader};
use super::MIN_INPUT_LEN;

/// How much checking `decompress_with` does beyond staying inside the buffer.
///
/// The format has no checksum either way; these are best-effort checks that every stream made by
/// `compress` passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verification {
    /// Only out-of-bounds reads are errors. A match on a never-recorded context copies from
    /// position 0, as a zero-filled table would.
    #[default]
    Lenient,
    /// Also reject matches on never-recorded contexts, and anything but 1-valued pad bits after
    /// the last token.
    Strict,
}

/// Decompress an LZP1 stream with `Verification::Lenient`.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    decompress_with(input, Verification::Lenient)
}

/// Decompress an LZP1 stream (at least 4 bytes).
///
/// The match table is rebuilt from the bytes already produced, so the decoder sees exactly the
/// table the compressor had when it wrote each token.
pub fn decompress_with(input: &[u8], verification: Verification) -> Result<Vec<u8>> {
    if input.len() < MIN_INPUT_LEN {
        return Err(LzpError::InvalidInput { len: input.len() });
    }

    let mut br = BitReader::new(input);
    let mut output = Vec::with_capacity(input.len() * 2);
    for _ in 0..CONTEXT_LEN {
        output.push(br.read_byte()?);
    }

    let mut table = MatchTable::new();
    let mut tokens = TokenReader::new(br);
    while let Some(token) = tokens.next_token()? {
        match token {
            Token::TwoLiterals(first, second) => {
                push_literal(&mut output, &mut table, first);
                push_literal(&mut output, &mut table, second);
            }
            Token::LiteralThenMatch(literal, length) => {
                push_literal(&mut output, &mut table, literal);
                copy_match(&mut output, &mut table, length, verification)?;
            }
            Token::Match(length) => copy_match(&mut output, &mut table, length, verification)?,
            Token::TrailingLiteral(literal) => output.push(literal),
        }
    }

    if verification == Verification::Strict && !tokens.reader().only_padding_left() {
        return Err(LzpError::CorruptStream);
    }
    Ok(output)
}

/// Append a literal, recording its position under the context before it.
fn push_literal(output: &mut Vec<u8>, table: &mut MatchTable, literal: u8) {
    let pos = output.len();
    table.insert(hash_before(output, pos), pos);
    output.push(literal);
}

/// Append `length` bytes copied from the predicted position. Source and destination are the same
/// buffer and may overlap, so the copy goes a byte at a time.
fn copy_match(
    output: &mut Vec<u8>,
    table: &mut MatchTable,
    length: usize,
    verification: Verification,
) -> Result<()> {
    let pos = output.len();
    let source = match table.replace(hash_before(output, pos), pos) {
        Some(source) => source,
        None if verification == Verification::Strict => return Err(LzpError::CorruptStream),
        None => 0,
    };
    output.reserve(length);
    for i in source..source + length {
        let byte = output[i];
        output.push(byte);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::compress;

    #[test]
    fn too_short_test() {
        assert_eq!(decompress(b""), Err(LzpError::InvalidInput { len: 0 }));
        assert_eq!(decompress(b"abc"), Err(LzpError::InvalidInput { len: 3 }));
    }

    #[test]
    fn lone_trailing_literal_test() {
        let out = decompress(&[0x41, 0x42, 0x43, 0xA2, 0x7F]).unwrap();
        assert_eq!(out, vec![0x41, 0x42, 0x43, 0x44]);
    }

    #[test]
    fn overlapping_copy_test() {
        let data = [7_u8; 1000];
        let packed = compress(&data).unwrap();
        assert!(packed.len() < 16);
        assert_eq!(decompress(&packed).unwrap(), data.to_vec());
    }

    #[test]
    fn text_round_trip_test() {
        let text = "It was the best of times, it was the worst of times, it was the age of wisdom, \
                    it was the age of foolishness, it was the epoch of belief."
            .as_bytes();
        let packed = compress(text).unwrap();
        assert!(packed.len() < text.len());
        assert_eq!(decompress(&packed).unwrap(), text);
        assert_eq!(decompress_with(&packed, Verification::Strict).unwrap(), text);
    }

    #[test]
    fn unrecorded_context_test() {
        // Seed "abc" then a Match of 2 on a context nothing recorded: 00 100 + pad
        let stream = [b'a', b'b', b'c', 0b0010_0111];
        assert_eq!(
            decompress(&stream).unwrap(),
            b"abcab".to_vec(),
            "lenient mode copies from position 0"
        );
        assert_eq!(
            decompress_with(&stream, Verification::Strict),
            Err(LzpError::CorruptStream)
        );
    }

    #[test]
    fn bad_padding_test() {
        // Trailing literal 0x44 with zero padding instead of ones
        let stream = [0x41, 0x42, 0x43, 0xA2, 0x00];
        assert_eq!(decompress(&stream).unwrap(), vec![0x41, 0x42, 0x43, 0x44]);
        assert_eq!(
            decompress_with(&stream, Verification::Strict),
            Err(LzpError::CorruptStream)
        );
    }

    #[test]
    fn truncated_stream_test() {
        let text = b"abcabcabcabcabcabcabcabc, then something else entirely".to_vec();
        let packed = compress(&text).unwrap();
        let cut = &packed[..packed.len() - 3];
        match decompress(cut) {
            Ok(out) => assert_ne!(out, text),
            Err(err) => assert_eq!(err, LzpError::CorruptStream),
        }
    }
}
