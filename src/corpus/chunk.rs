//! Chunk numbering.

use crate::config::CHUNK_ID_WIDTH;

/// Zero-padded identifier of chunk `n` (`0` → `"0000000"`).
pub fn folder_id(n: usize) -> String {
    format!("{:0width$}", n, width = CHUNK_ID_WIDTH)
}

/// Number of chunks of `size` needed for `len` items.
pub fn chunk_count(len: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    len.div_ceil(size)
}

/// Splits `items` into numbered chunks of at most `size` items.
pub fn numbered_chunks<T>(items: &[T], size: usize) -> impl Iterator<Item = (usize, &[T])> {
    items.chunks(size.max(1)).enumerate()
}
