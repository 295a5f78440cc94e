//! SHA-256 content fingerprints for files, in-memory buffers, and seekable
//! streams.
//!
//! Every entry point reads its input in [`CHUNK_SIZE`] blocks and returns the
//! digest as a 64-character lowercase hex string, so equal content hashes the
//! same no matter where it came from.

mod error;
mod hashing;

pub use error::HashError;
pub use hashing::{hash_bytes, hash_file, hash_stream, FileHasher, CHUNK_SIZE};

/// Crate version reported by the library and the `grch` binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
