//! Move-To-Front encoder/decoder.
//!
//! Sequential search over 256 entries plus a shift-to-front on each hit. Sequential
//! search is fine here: BWT output clusters repeats, which keeps frequently seen bytes
//! near the front of the list.

const ALPHABET_SIZE: usize = 256;

/// A move-to-front symbol table, reinitialized to the identity permutation per block:
/// no state crosses block boundaries.
pub struct Mtf {
    table: [u8; ALPHABET_SIZE],
}

impl Default for Mtf {
    fn default() -> Self {
        Self::new()
    }
}

impl Mtf {
    /// Creates a table with symbols in ascending order (the identity permutation).
    pub fn new() -> Self {
        let mut table = [0u8; ALPHABET_SIZE];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Mtf { table }
    }

    /// Moves the symbol at `pos` to the front, shifting the prefix right by one.
    fn promote(&mut self, pos: usize, symbol: u8) {
        for j in (1..=pos).rev() {
            self.table[j] = self.table[j - 1];
        }
        self.table[0] = symbol;
    }

    /// MTF-encodes `data` in place: each byte is replaced by its rank in the current
    /// symbol table, and the table is updated as if that byte had just been seen.
    pub fn encode(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            let symbol = *byte;
            let pos = self
                .table
                .iter()
                .position(|&s| s == symbol)
                .expect("MTF table is always a permutation of 0..256");
            self.promote(pos, symbol);
            *byte = pos as u8;
        }
    }

    /// MTF-decodes `data` in place: the inverse of [`Mtf::encode`] given an identical
    /// initial table.
    pub fn decode(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            let pos = *byte as usize;
            let symbol = self.table[pos];
            self.promote(pos, symbol);
            *byte = symbol;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_is_identity() {
        let original = b"teeesst_mtf".to_vec();
        let mut encoded = original.clone();
        Mtf::new().encode(&mut encoded);
        let mut decoded = encoded.clone();
        Mtf::new().decode(&mut decoded);
        assert_eq!(decoded, original);
    }

    #[test]
    fn empty_input() {
        let mut data: Vec<u8> = Vec::new();
        Mtf::new().encode(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn classic_case_ranks() {
        // L = "rdarcaaaabb", produced by the BWT of "abracadabra".
        // Ranks computed against a 256-entry identity list: 'r' (0x72) and 'd' (0x65)
        // are at their own byte value the first time they're seen, then move to the
        // front and stay cheap on their repeats.
        let mut data = b"rdarcaaaabb".to_vec();
        Mtf::new().encode(&mut data);
        assert_eq!(
            data,
            vec![0x72, 0x65, 0x63, 0x02, 0x65, 0x02, 0x00, 0x00, 0x00, 0x65, 0x00]
        );
        let mut decoded = data;
        Mtf::new().decode(&mut decoded);
        assert_eq!(decoded, b"rdarcaaaabb");
    }

    #[test]
    fn round_trip_on_random_data() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x1234_5678_9abc);
        for _ in 0..100 {
            let len = rng.gen_range(0..400);
            let original: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let mut encoded = original.clone();
            Mtf::new().encode(&mut encoded);
            let mut decoded = encoded;
            Mtf::new().decode(&mut decoded);
            assert_eq!(decoded, original);
        }
    }
}
