//! The bitstream module forms the I/O subsystem of the LZP1 codec.
//!
//! An LZP1 stream mixes single flag bits, raw literal bytes and variable-length integers with no
//! byte alignment between them. Bits are packed most-significant-first within each byte.
//!
//! The stream carries no length field and no end marker. The writer pads the last partial byte
//! with 1s, and the reader exposes whole-byte lookahead predicates so the decoder can tell real
//! token data from pad bits before it interprets a flag.
//!
//! This I/O subsystem works on fully materialised in-memory buffers. It is not intended for
//! more general use.
//!
pub mod bitreader;
pub mod bitwriter;
