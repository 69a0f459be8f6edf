/// Number of bytes of context used to predict the next byte.
pub const CONTEXT_LEN: usize = 3;
/// One slot per possible 16 bit context hash.
pub const TABLE_SIZE: usize = u16::MAX as usize + 1;

const UNSET: isize = -1;

/// Hash the three context bytes x, y, z (oldest first) down to 16 bits.
/// Collisions are accepted; they are never chained.
pub fn context_hash(x: u8, y: u8, z: u8) -> u16 {
    ((((x as u32) << 8) + z as u32) ^ ((y as u32) << 4)) as u16
}

/// Hash of the three bytes immediately before `pos`. `pos` must be at least 3.
pub fn hash_before(data: &[u8], pos: usize) -> u16 {
    context_hash(data[pos - 3], data[pos - 2], data[pos - 1])
}

/// Flat table of the position that followed the most recent context with each hash.
pub struct MatchTable {
    slots: Vec<isize>,
}

impl MatchTable {
    /// Create a table with every slot unset.
    pub fn new() -> Self {
        Self {
            slots: vec![UNSET; TABLE_SIZE],
        }
    }

    /// Record `pos` for `hash`, returning the position it replaces (None if the slot was unset).
    pub fn replace(&mut self, hash: u16, pos: usize) -> Option<usize> {
        let previous = std::mem::replace(&mut self.slots[hash as usize], pos as isize);
        usize::try_from(previous).ok()
    }

    /// Record `pos` for `hash`.
    pub fn insert(&mut self, hash: u16, pos: usize) {
        self.slots[hash as usize] = pos as isize;
    }
}

impl Default for MatchTable {
    fn default() -> Self {
        Self::new()
    }
}
