//! A block-oriented, lossless Burrows-Wheeler Transform codec with optional
//! Move-To-Front post-coding.
//!
//! The transform reorders the bytes of a fixed-size block so that runs of similar
//! context are brought together, which makes the output far more compressible by a
//! downstream entropy coder. It does not itself shrink data, and blocks are processed
//! atomically: there is no streaming within a block.
//!
//! ```
//! use std::io::Cursor;
//!
//! let input: &[u8] = b"abracadabra";
//! let mut encoded = Vec::new();
//! bwtc::forward_transform(&mut Cursor::new(input), &mut encoded, false).unwrap();
//!
//! let mut decoded = Vec::new();
//! bwtc::inverse_transform(&mut Cursor::new(&encoded), &mut decoded, false).unwrap();
//! assert_eq!(decoded, input);
//! ```

pub mod block;
pub mod bwt;
pub mod error;
pub mod mtf;
pub mod sort;

pub use block::{forward_transform, inverse_transform, BLOCK_SIZE};
pub use error::{CodecError, Result};
