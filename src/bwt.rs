//! BWT forward and inverse transform for a single in-memory block.
//!
//! Forward transform consumes the permutation produced by [`crate::sort::sort_rotations`]
//! and derives the last column and primary index. Inverse transform rebuilds the
//! original block from `(index, last_column)` in `O(n)` using the LF-mapping: a count
//! pass, a predecessor pass, a cumulative prefix-sum pass, and a backward walk.

use crate::sort::sort_rotations;

/// Forward-transforms `block`, returning `(primary_index, last_column)`.
///
/// `block` must be non-empty; the empty case is handled one level up, at the block
/// I/O boundary, since an empty block is never written to the wire at all.
pub fn forward(block: &[u8]) -> (usize, Vec<u8>) {
    let n = block.len();
    debug_assert!(n > 0, "forward() requires a non-empty block");

    let pi = sort_rotations(block);

    let mut last = vec![0u8; n];
    let mut index = 0usize;
    for (i, &p) in pi.iter().enumerate() {
        if p != 0 {
            last[i] = block[p - 1];
        } else {
            last[i] = block[n - 1];
            index = i;
        }
    }
    (index, last)
}

/// Reverses the BWT, reconstructing the original block from its last column and
/// primary index. Returns a descriptive error string (not [`crate::error::CodecError`]
/// directly, since this module has no notion of "which block ordinal" — the caller in
/// `block.rs` attaches that) if `index` is out of bounds.
pub fn inverse(index: usize, last: &[u8]) -> Result<Vec<u8>, String> {
    let n = last.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if index >= n {
        return Err(format!(
            "primary index {index} out of bounds for block of length {n}"
        ));
    }

    // Count pass: occurrences of each byte in `last`.
    let mut count = [0usize; 256];
    for &b in last {
        count[b as usize] += 1;
    }

    // Predecessor pass: pred[i] = number of earlier positions j < i with last[j] == last[i].
    let mut pred = vec![0usize; n];
    let mut seen = [0usize; 256];
    for (i, &b) in last.iter().enumerate() {
        pred[i] = seen[b as usize];
        seen[b as usize] += 1;
    }

    // Cumulative pass: count[b] becomes the number of bytes strictly less than b.
    let mut sum = 0;
    for c in count.iter_mut() {
        let f = *c;
        *c = sum;
        sum += f;
    }

    // Walk the LF-mapping backwards from `index`.
    let mut out = vec![0u8; n];
    let mut i = index;
    for j in (0..n).rev() {
        out[j] = last[i];
        i = pred[i] + count[last[i] as usize];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_textbook_case() {
        let (index, last) = forward(b"abracadabra");
        assert_eq!(index, 2);
        assert_eq!(&last, b"rdarcaaaabb");
        let restored = inverse(index, &last).unwrap();
        assert_eq!(restored, b"abracadabra");
    }

    #[test]
    fn single_byte() {
        let (index, last) = forward(b"X");
        assert_eq!(index, 0);
        assert_eq!(&last, b"X");
        assert_eq!(inverse(index, &last).unwrap(), b"X");
    }

    #[test]
    fn all_equal_any_index_decodes() {
        let block = b"AAAAA";
        let (_, last) = forward(block);
        assert_eq!(&last, block);
        for candidate in 0..block.len() {
            assert_eq!(inverse(candidate, &last).unwrap(), block);
        }
    }

    #[test]
    fn out_of_bounds_index_is_an_error() {
        let (_, last) = forward(b"abracadabra");
        assert!(inverse(last.len(), &last).is_err());
        assert!(inverse(last.len() + 10, &last).is_err());
    }

    #[test]
    fn last_column_is_a_permutation_of_the_block() {
        let block = b"mississippi";
        let (_, last) = forward(block);
        let mut a = block.to_vec();
        let mut b = last.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn round_trip_on_random_blocks() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(0xA5A5_5A5A);
        for _ in 0..200 {
            let len = rng.gen_range(1..500);
            let block: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let (index, last) = forward(&block);
            assert_eq!(inverse(index, &last).unwrap(), block);
        }
    }
}
