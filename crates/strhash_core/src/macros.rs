/// hash a string literal at compile time.
///
/// ```
/// const PLAYER: u64 = strhash_core::strhash!("player_name");
///
/// match strhash_core::hash_str("player_name") {
///     PLAYER => {}
///     _ => unreachable!(),
/// }
/// ```
#[macro_export]
macro_rules! strhash {
    ($s:expr) => {{
        const OUT: u64 = $crate::hash::hash_str($s);
        OUT
    }};
}

/// hash a byte string literal at compile time.
#[macro_export]
macro_rules! bytehash {
    ($b:expr) => {{
        const OUT: u64 = $crate::hash::hash_bytes($b);
        OUT
    }};
}
