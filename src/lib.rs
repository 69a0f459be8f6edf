//! Rust version of the LZP1 byte-stream compressor.
//!
//! Version 0.1.0
//!
//! LZP1 predicts each byte from a hash of the three bytes before it and encodes confirmed
//! predictions as match lengths, packed into a bitstream with a cascading variable-length code.
//! Whole inputs are compressed in memory; there is no streaming mode.
//!
//! The codec is two pure functions:
//!
//! ```
//! let data = b"abracadabra abracadabra abracadabra";
//! let packed = lzp::compress(data).unwrap();
//! assert_eq!(lzp::decompress(&packed).unwrap(), data);
//! ```
//!
//! The format carries no magic number or checksum, so `decompress` cannot always tell foreign
//! data from a real stream. `decompress_with(.., Verification::Strict)` adds the checks that are
//! possible without changing the format.
//!
//! Basic usage of the command line tool to compress a file is as follows:
//!
//! `$> lzp -z test.txt`
//!
//! This will compress the file and create the file test.txt.lzp.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod tools;

pub use compression::compress::compress;
pub use compression::decompress::{decompress, decompress_with, Verification};
pub use error::{LzpError, Result};
