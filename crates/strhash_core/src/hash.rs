use std::ffi::{c_char, CStr, CString};

use crate::error::{Error, Result};
use crate::load::{load_tail, load_u64};
use crate::mix::mix;

const BLOCK_LEN: usize = 8;

/// hash a byte sequence.
///
/// the length seeds the state, every full 8 byte block gets mixed in, and the 0 to 7 tail bytes
/// are mixed in last, always, even when there are none.
#[inline]
pub const fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut seed = bytes.len() as u64;

    // NOTE: while is used because for loops and ranges don't work in const fns.
    let mut offset = 0;
    while bytes.len() - offset >= BLOCK_LEN {
        seed = mix(seed, load_u64(bytes, offset));
        offset += BLOCK_LEN;
    }

    mix(seed, load_tail(bytes, offset))
}

/// hash `len` bytes starting at `data`.
///
/// # Safety
///
/// `data` must be valid for reads of `len` bytes. `data` may only be null if `len` is 0; this is
/// checked in debug builds only.
#[inline]
pub unsafe fn hash_raw(data: *const u8, len: usize) -> u64 {
    debug_assert!(len == 0 || !data.is_null(), "data pointer must not be null");
    if len == 0 {
        return hash_bytes(&[]);
    }
    // SAFETY: validity of data for len bytes is the caller's contract.
    hash_bytes(unsafe { std::slice::from_raw_parts(data, len) })
}

/// same as [`hash_raw`], but reports a null `data` with non-zero `len` instead of treating it as
/// a contract violation.
///
/// # Safety
///
/// if `data` is non-null it must be valid for reads of `len` bytes.
pub unsafe fn try_hash_raw(data: *const u8, len: usize) -> Result<u64> {
    if len > 0 && data.is_null() {
        return Err(Error::NullData { len });
    }
    // SAFETY: null with non-zero length is ruled out above, the rest is the caller's contract.
    Ok(unsafe { hash_raw(data, len) })
}

/// hash a string, all of its bytes, embedded zeros included.
#[inline]
pub const fn hash_str(s: &str) -> u64 {
    hash_bytes(s.as_bytes())
}

/// hash a c string, excluding the terminator.
#[inline]
pub const fn hash_cstr(s: &CStr) -> u64 {
    hash_bytes(s.to_bytes())
}

/// hash bytes up to (not including) the first zero byte. a slice without a zero byte is hashed
/// whole; the scan never goes past the end of the slice.
#[inline]
pub const fn hash_nul_terminated(bytes: &[u8]) -> u64 {
    let mut len = 0;
    while len < bytes.len() && bytes[len] != 0 {
        len += 1;
    }
    hash_bytes(bytes.split_at(len).0)
}

/// hash bytes up to the first zero byte, failing if there is none.
pub fn try_hash_cstr_bytes(bytes: &[u8]) -> Result<u64> {
    CStr::from_bytes_until_nul(bytes)
        .map(hash_cstr)
        .map_err(|_| Error::MissingNulTerminator { len: bytes.len() })
}

/// hash a nul-terminated c string.
///
/// # Safety
///
/// `ptr` must be non-null (checked in debug builds only) and point to a nul-terminated string,
/// see [`CStr::from_ptr`].
#[inline]
pub unsafe fn hash_cstr_ptr(ptr: *const c_char) -> u64 {
    debug_assert!(!ptr.is_null(), "string pointer must not be null");
    // SAFETY: the caller guarantees a valid nul-terminated string.
    hash_cstr(unsafe { CStr::from_ptr(ptr) })
}

// ----

/// hashing of owned and borrowed string-like values.
///
/// length-delimited types hash all of their bytes; c strings stop at the terminator.
pub trait StrHash {
    fn str_hash(&self) -> u64;
}

impl StrHash for str {
    #[inline]
    fn str_hash(&self) -> u64 {
        hash_str(self)
    }
}

impl StrHash for String {
    #[inline]
    fn str_hash(&self) -> u64 {
        hash_str(self)
    }
}

impl StrHash for [u8] {
    #[inline]
    fn str_hash(&self) -> u64 {
        hash_bytes(self)
    }
}

impl StrHash for Vec<u8> {
    #[inline]
    fn str_hash(&self) -> u64 {
        hash_bytes(self)
    }
}

impl StrHash for CStr {
    #[inline]
    fn str_hash(&self) -> u64 {
        hash_cstr(self)
    }
}

impl StrHash for CString {
    #[inline]
    fn str_hash(&self) -> u64 {
        hash_cstr(self)
    }
}

impl<T: StrHash + ?Sized> StrHash for &T {
    #[inline]
    fn str_hash(&self) -> u64 {
        (**self).str_hash()
    }
}
