// own crate re-exports
pub use strhash_core::*;
