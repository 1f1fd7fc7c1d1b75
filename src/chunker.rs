//! Fixed-size partitioning of a page height into ordered chunk descriptors.
//!
//! The split is arithmetic: callers pass an estimated total height, not a
//! measured one, and every descriptor later receives the same undivided
//! image payload. See `api::routes` for where the payload is attached.

/// Height of a single chunk in pixels. Chosen to stay under downstream
/// design-tool import limits.
pub const MAX_CHUNK_HEIGHT: u32 = 4096;

/// A chunk descriptor: 1-based sequence number and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpec {
    pub number: u32,
    pub height: u32,
}

/// Splits `[0, total_height)` into ordered chunks of at most
/// `max_chunk_height` pixels, with no gaps or overlaps.
///
/// The offset advances by `max_chunk_height` each iteration rather than by
/// the emitted height; the two only differ on the final chunk, where the
/// loop condition terminates either way.
pub fn partition(total_height: u32, max_chunk_height: u32) -> Vec<ChunkSpec> {
    let mut chunks = Vec::new();
    let mut offset = 0;
    let mut number = 1;

    while offset < total_height {
        chunks.push(ChunkSpec {
            number,
            height: max_chunk_height.min(total_height - offset),
        });
        offset += max_chunk_height;
        number += 1;
    }

    chunks
}
