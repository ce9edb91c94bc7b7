//! Block I/O framing and the public `forward_transform`/`inverse_transform` entry
//! points that drive the sort, BWT and MTF stages over an opaque byte source and sink.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, error};

use crate::bwt;
use crate::error::{CodecError, Result};
use crate::mtf::Mtf;

/// Default block size: 4096 bytes. Not carried on the wire; the decoder recovers each
/// block's length from the number of payload bytes actually read.
pub const BLOCK_SIZE: usize = 4096;

/// Rejects a block size that can never produce a valid stream (zero bytes per block
/// would never advance the reader, looping forever).
fn check_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 {
        return Err(CodecError::InvalidArgument("block size must be nonzero"));
    }
    Ok(())
}

/// Reads up to `buf.len()` bytes from `source`, looping over short reads (a single
/// `Read::read` call is allowed to return fewer bytes than requested even when more
/// data remains, e.g. for pipes). Returns the number of bytes actually read; `0` means
/// the source is exhausted.
pub fn read_block<R: Read>(source: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match source.read(&mut buf[total..])? {
            0 => break,
            n => total += n,
        }
    }
    Ok(total)
}

/// Writes the per-block header (`index`, little-endian `i32`) followed immediately by
/// the payload bytes `last`.
pub fn write_block<W: Write>(sink: &mut W, index: i32, last: &[u8]) -> std::io::Result<()> {
    sink.write_i32::<LittleEndian>(index)?;
    sink.write_all(last)
}

/// Reads one block header. Returns `Ok(None)` on a clean end of stream (zero bytes
/// read before any header byte), or `Err(Format)` if the stream ends partway through
/// the header.
pub fn read_header<R: Read>(source: &mut R, block: usize) -> Result<Option<i32>> {
    let mut buf = [0u8; 4];
    let n = read_block(source, &mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    if n < 4 {
        return Err(CodecError::Format {
            block,
            reason: "truncated header".to_string(),
        });
    }
    Ok(Some((&buf[..]).read_i32::<LittleEndian>()?))
}

/// Reads the payload following a successfully read header. A payload of zero bytes is
/// a format error: the encoder never writes a header for an empty block, so reading
/// one back with nothing after it can only mean truncation or corruption.
pub fn read_payload<R: Read>(source: &mut R, buf: &mut [u8], block: usize) -> Result<usize> {
    let n = read_block(source, buf)?;
    if n == 0 {
        return Err(CodecError::Format {
            block,
            reason: "header with no payload bytes".to_string(),
        });
    }
    Ok(n)
}

/// Forward-transforms `source`, writing BWT (optionally MTF-post-coded) blocks to
/// `sink` until `source` is exhausted. Reads `source` in [`BLOCK_SIZE`]-byte chunks.
pub fn forward_transform<R: Read, W: Write>(
    source: &mut R,
    sink: &mut W,
    use_mtf: bool,
) -> Result<()> {
    forward_transform_with_block_size(source, sink, use_mtf, BLOCK_SIZE)
}

/// Like [`forward_transform`], but reads `source` in caller-chosen `block_size` chunks
/// instead of [`BLOCK_SIZE`]. Rejects `block_size == 0` with `CodecError::InvalidArgument`.
pub fn forward_transform_with_block_size<R: Read, W: Write>(
    source: &mut R,
    sink: &mut W,
    use_mtf: bool,
    block_size: usize,
) -> Result<()> {
    check_block_size(block_size)?;
    let mut buf = vec![0u8; block_size];
    let mut ordinal = 0usize;

    loop {
        let n = read_block(source, &mut buf)?;
        if n == 0 {
            break;
        }
        let data = &buf[..n];

        let (index, mut last) = bwt::forward(data);
        if use_mtf {
            Mtf::new().encode(&mut last);
        }

        debug!("block {ordinal}: encoded {n} bytes, primary index {index}");
        write_block(sink, index as i32, &last)?;
        ordinal += 1;
    }

    Ok(())
}

/// Inverse-transforms `source` (a stream produced by [`forward_transform`] with the
/// same `use_mtf` setting), writing the recovered bytes to `sink`.
pub fn inverse_transform<R: Read, W: Write>(
    source: &mut R,
    sink: &mut W,
    use_mtf: bool,
) -> Result<()> {
    inverse_transform_with_block_size(source, sink, use_mtf, BLOCK_SIZE)
}

/// Like [`inverse_transform`], but sized to decode a stream written with a caller-chosen
/// `block_size` (which must match the `block_size` used to produce it). Rejects
/// `block_size == 0` with `CodecError::InvalidArgument`.
pub fn inverse_transform_with_block_size<R: Read, W: Write>(
    source: &mut R,
    sink: &mut W,
    use_mtf: bool,
    block_size: usize,
) -> Result<()> {
    check_block_size(block_size)?;
    let mut buf = vec![0u8; block_size];
    let mut ordinal = 0usize;

    loop {
        let index = match read_header(source, ordinal)? {
            None => break,
            Some(index) => index,
        };
        let n = match read_payload(source, &mut buf, ordinal) {
            Ok(n) => n,
            Err(e) => {
                error!("block {ordinal}: {e}");
                return Err(e);
            }
        };
        let mut last = buf[..n].to_vec();

        if use_mtf {
            Mtf::new().decode(&mut last);
        }

        if index < 0 {
            let e = CodecError::Format {
                block: ordinal,
                reason: format!("primary index {index} is negative"),
            };
            error!("block {ordinal}: {e}");
            return Err(e);
        }
        let index = index as usize;

        let restored = bwt::inverse(index, &last).map_err(|reason| CodecError::Format {
            block: ordinal,
            reason,
        });
        let restored = match restored {
            Ok(v) => v,
            Err(e) => {
                error!("block {ordinal}: {e}");
                return Err(e);
            }
        };

        debug!("block {ordinal}: decoded {n} bytes back to {} bytes", restored.len());
        sink.write_all(&restored)?;
        ordinal += 1;
    }

    Ok(())
}
