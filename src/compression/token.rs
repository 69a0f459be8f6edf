use crate::bitstream::{bitreader::BitReader, bitwriter::BitWriter};
use crate::error::Result;

use super::length_code::{read_length, write_length};

/// One encoded step of an LZP1 stream. Match lengths say how many bytes to copy from the
/// position the match table predicts; the token itself carries no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `1` + literal + literal
    TwoLiterals(u8, u8),
    /// `01` + literal + length
    LiteralThenMatch(u8, usize),
    /// `00` + length
    Match(usize),
    /// `1` + literal, only as the very last token
    TrailingLiteral(u8),
}

impl Token {
    /// Put the token's bits on the stream.
    pub fn write(&self, bw: &mut BitWriter) {
        match *self {
            Token::Match(length) => {
                bw.write_flag(false);
                bw.write_flag(false);
                write_length(bw, length);
            }
            Token::LiteralThenMatch(literal, length) => {
                bw.write_flag(false);
                bw.write_flag(true);
                bw.write_literal(literal);
                write_length(bw, length);
            }
            Token::TwoLiterals(first, second) => {
                bw.write_flag(true);
                bw.write_literal(first);
                bw.write_literal(second);
            }
            Token::TrailingLiteral(literal) => {
                bw.write_flag(true);
                bw.write_literal(literal);
            }
        }
    }
}

/// Parses tokens off a BitReader positioned just after the seed bytes.
///
/// The stream has no end marker. A `1` flag with fewer than two whole bytes behind it is either
/// the trailing literal (one whole byte left) or padding (none left), and either way the stream
/// ends there.
pub struct TokenReader<'a> {
    br: BitReader<'a>,
    done: bool,
}

impl<'a> TokenReader<'a> {
    pub fn new(br: BitReader<'a>) -> Self {
        Self { br, done: false }
    }

    /// Return the next token, or None at the end of the stream.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if self.done {
            return Ok(None);
        }
        if self.br.can_read_flag() {
            if !self.br.read_flag()? {
                let token = if self.br.read_flag()? {
                    let literal = self.br.read_byte()?;
                    Token::LiteralThenMatch(literal, read_length(&mut self.br)?)
                } else {
                    Token::Match(read_length(&mut self.br)?)
                };
                return Ok(Some(token));
            }
            if self.br.can_read_two_bytes() {
                let first = self.br.read_byte()?;
                let second = self.br.read_byte()?;
                return Ok(Some(Token::TwoLiterals(first, second)));
            }
        }
        self.done = true;
        if self.br.can_read_byte() {
            return Ok(Some(Token::TrailingLiteral(self.br.read_byte()?)));
        }
        Ok(None)
    }

    /// The underlying reader, for checks after the last token.
    pub fn reader(&self) -> &BitReader<'a> {
        &self.br
    }
}
