// NOTE: assembly is spelled out byte by byte instead of transmuting/reading unaligned u64s. this
// keeps it const and makes the byte order independent of the host; byte 0 always ends up in the
// least significant position.

/// reads 8 bytes starting at `offset` as a little-endian u64.
#[inline(always)]
pub const fn load_u64(bytes: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
        bytes[offset + 4],
        bytes[offset + 5],
        bytes[offset + 6],
        bytes[offset + 7],
    ])
}

/// reads whatever is left after `offset` (0 to 7 bytes) as a little-endian u64; missing high
/// bytes are zero.
#[inline(always)]
pub const fn load_tail(bytes: &[u8], offset: usize) -> u64 {
    debug_assert!(bytes.len() - offset < 8);

    let mut k: u64 = 0;
    // NOTE: while is used because for loops and ranges don't work in const fns.
    let mut i = bytes.len();
    while i > offset {
        i -= 1;
        k = (k << 8) | bytes[i] as u64;
    }
    k
}
