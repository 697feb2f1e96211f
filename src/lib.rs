#![forbid(unsafe_code)]

//! A one-shot encoder for the Xpress-Huffman compressed stream format
//! used by certain Microsoft system interfaces (WIM archives,
//! hibernation files). This crate only encodes: it hands you bytes a
//! conforming Xpress-Huffman decoder can turn back into your input,
//! bit-exactly, but it does not ship a decoder itself.
//!
//! The encoder is a pure function of its input: no files, no sockets,
//! no shared state between calls. Compression proceeds in fixed 64 KiB
//! chunks, each with its own canonical Huffman code table, sliding a
//! single LZ77 dictionary across chunk boundaries so repeats spanning a
//! boundary are still found.

mod bitstream;
mod chunk;
mod dictionary;
mod error;
mod huffman;
mod lz77;
mod sort;

use dictionary::Dictionary;
use huffman::NUM_SYMBOLS;

pub use error::EncodeError;

/// Exact byte count written for an empty input: 256 header bytes (all
/// zero except the byte packing symbol 256's length, set to 1) followed
/// by a 4-byte bitstream body.
pub const MIN_DATA: usize = 260;

/// An upper bound on the compressed size of an input of `input_len`
/// bytes. Sizing an output buffer with this guarantees `compress_into`
/// never reports [`EncodeError::OutputTooSmall`] for that input.
pub fn max_compressed_len(input_len: usize) -> usize {
    input_len + 34 + 258 + 258 * (input_len / chunk::CHUNK_SIZE)
}

fn try_alloc_scratch() -> Result<Vec<u8>, EncodeError> {
    let mut v = Vec::new();
    v.try_reserve_exact(chunk::SCRATCH_CAPACITY).map_err(|_| EncodeError::OutOfMemory)?;
    v.resize(chunk::SCRATCH_CAPACITY, 0);
    Ok(v)
}

/// Compresses `input` into `output`, returning the number of bytes
/// written. `output` is never grown; if it is too small for the given
/// input, returns [`EncodeError::OutputTooSmall`] (size it with
/// [`max_compressed_len`] to guarantee this never happens).
pub fn compress_into(input: &[u8], output: &mut [u8]) -> Result<usize, EncodeError> {
    let mut dict = Dictionary::new()?;
    let mut scratch = try_alloc_scratch()?;
    let mut counts = [0u32; NUM_SYMBOLS];

    let mut in_pos = 0usize;
    let mut out_pos = 0usize;

    loop {
        let remaining = input.len() - in_pos;
        let chunk_len = remaining.min(chunk::CHUNK_SIZE);
        let is_last = in_pos + chunk_len >= input.len();

        dict.fill(input, in_pos);
        out_pos = chunk::encode_chunk(
            input, in_pos, chunk_len, is_last, &dict, &mut scratch, &mut counts, output, out_pos,
        )?;

        in_pos += chunk_len;
        if is_last {
            break;
        }
    }

    Ok(out_pos)
}

/// Compresses `input`, returning a freshly allocated, exactly-sized
/// `Vec` holding the compressed stream.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let cap = max_compressed_len(input.len());
    let mut output = vec![0u8; cap];
    let len = compress_into(input, &mut output)?;
    output.truncate(len);
    Ok(output)
}
