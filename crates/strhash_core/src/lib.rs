#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! fixed-output 64-bit non-cryptographic hash for byte sequences, null-terminated strings and
//! length-delimited strings.
//!
//! every function that does the actual hashing is a `const fn`, the same body runs at compile time
//! and at run time. use [`strhash!`] / [`bytehash!`] to force compile-time evaluation at the call
//! site.
//!
//! not suitable for anything security related; no resistance against crafted collisions.

pub mod error;
pub mod hash;
pub mod load;
mod macros;
pub mod mix;

pub use error::{Error, Result};
pub use hash::{
    hash_bytes, hash_cstr, hash_cstr_ptr, hash_nul_terminated, hash_raw, hash_str,
    try_hash_cstr_bytes, try_hash_raw, StrHash,
};
