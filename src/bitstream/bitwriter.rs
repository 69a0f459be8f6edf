/// Packs flags and literal bytes into a growable byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Output buffer used to write the bitstream.
    output: Vec<u8>,
    /// Partial byte waiting to be pushed to the output buffer.
    working: u8,
    /// Count of bits already placed in the working byte (0-7).
    bits_busy: u8,
}

impl BitWriter {
    /// Create a new BitWriter with an output buffer of size specified. The input length is a
    /// good guess for the compressor.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            working: 0,
            bits_busy: 0,
        }
    }

    /// Put a full byte on the stream at the current bit alignment. The alignment is the same
    /// after the call as before it.
    pub fn write_literal(&mut self, byte: u8) {
        if self.bits_busy == 0 {
            self.output.push(byte);
            return;
        }
        // The head of the byte completes the working byte, the tail starts the next one
        self.output.push(self.working | (byte >> self.bits_busy));
        self.working = byte << (8 - self.bits_busy);
    }

    /// Put a single bit on the stream.
    pub fn write_flag(&mut self, bit: bool) {
        self.bits_busy += 1;
        if bit {
            self.working |= 1 << (8 - self.bits_busy);
        }
        if self.bits_busy == 8 {
            self.output.push(self.working);
            self.working = 0;
            self.bits_busy = 0;
        }
    }

    /// Put the low `width` bits of `value` on the stream, most significant first.
    pub fn write_bits(&mut self, value: u32, width: u32) {
        for shift in (0..width).rev() {
            self.write_flag(value >> shift & 1 == 1);
        }
    }

    /// Count of bits written so far, including the pending partial byte.
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.bits_busy as usize
    }

    /// Flushes the pending partial byte, padding its unused low bits with 1s, and returns the
    /// finished stream.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_busy > 0 {
            let pad = (1_u8 << (8 - self.bits_busy)) - 1;
            self.output.push(self.working | pad);
        }
        self.output
    }
}
