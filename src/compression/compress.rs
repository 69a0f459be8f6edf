use crate::bitstream::bitwriter::BitWriter;
use crate::error::{LzpError, Result};

use super::context::{hash_before, MatchTable, CONTEXT_LEN};
use super::token::Token;
use super::MIN_INPUT_LEN;

/// Compress `input` (at least 4 bytes) into an LZP1 stream.
///
/// The first three bytes are written raw as the seed context. From there each step looks up the
/// context hash of the current position: a confirmed prediction becomes a Match, otherwise the
/// byte is taken as a literal and the next position gets the same test (LiteralThenMatch or
/// TwoLiterals). A single byte left over at the end is written as a trailing literal.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() < MIN_INPUT_LEN {
        return Err(LzpError::InvalidInput { len: input.len() });
    }

    let mut table = MatchTable::new();
    let mut bw = BitWriter::new(input.len());
    input[..CONTEXT_LEN]
        .iter()
        .for_each(|&byte| bw.write_literal(byte));

    let last = input.len() - 1;
    let mut cur = CONTEXT_LEN;
    while cur < last {
        let predicted = table.replace(hash_before(input, cur), cur);
        if let Some(source) = confirmed(input, cur, predicted) {
            let length = match_length(input, cur, source);
            Token::Match(length).write(&mut bw);
            cur += length;
            continue;
        }

        let literal = input[cur];
        cur += 1;
        let predicted = table.replace(hash_before(input, cur), cur);
        match confirmed(input, cur, predicted) {
            Some(source) => {
                let length = match_length(input, cur, source);
                Token::LiteralThenMatch(literal, length).write(&mut bw);
                cur += length;
            }
            None => {
                // The second literal's context is hashed when the loop comes back around
                Token::TwoLiterals(literal, input[cur]).write(&mut bw);
                cur += 1;
            }
        }
    }

    if cur == last {
        Token::TrailingLiteral(input[last]).write(&mut bw);
    }
    Ok(bw.finish())
}

/// The predicted position, if there is one and its byte really matches (hashes collide).
fn confirmed(input: &[u8], cur: usize, predicted: Option<usize>) -> Option<usize> {
    predicted.filter(|&pos| input[pos] == input[cur])
}

/// Count of bytes from `cur` that repeat the bytes from `source`. The runs may overlap.
fn match_length(input: &[u8], cur: usize, source: usize) -> usize {
    input[cur..]
        .iter()
        .zip(&input[source..])
        .take_while(|(a, b)| a == b)
        .count()
}
