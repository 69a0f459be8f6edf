//! The compression module holds the LZP1 codec itself.
//!
//! LZP1 predicts each byte from the three bytes before it:
//! - Context hash: the three preceding bytes are hashed to 16 bits.
//! - Match table: one slot per hash, holding the position that followed the most recent context
//!   with that hash.
//! - Tokens: a prediction that holds becomes a match length, otherwise bytes go out as literals.
//! - Length code: match lengths use a cascading variable-width code.
//!
//! The decompressor never receives the table. It rebuilds it from the bytes it has already
//! written, updating it at exactly the points where the compressor did, so the two stay in step
//! bit for bit. Both directions use a fresh table per call and share no state, so independent
//! calls may run on separate threads.
//!
//! The wire format is the three seed bytes followed by packed tokens, with no header, length or
//! checksum.
//!

pub mod compress;
pub mod context;
pub mod decompress;
pub mod length_code;
pub mod token;

/// Shortest input either direction accepts.
pub const MIN_INPUT_LEN: usize = context::CONTEXT_LEN + 1;
