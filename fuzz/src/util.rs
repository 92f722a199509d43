use std::mem;

/// Reinterprets `data` as native-endian `i32`s. Trailing bytes that don't fill a whole value are
/// ignored.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(mem::size_of::<i32>())
        .map(|chunk| i32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
