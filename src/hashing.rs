//! SHA-256 helpers for files, byte buffers, and seekable streams.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::HashError;

/// Block length used when reading files and streams.
pub const CHUNK_SIZE: usize = 4096;

/// Running digest for a single hashing call.
struct Accumulator {
    hasher: Sha256,
    bytes: u64,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            hasher: Sha256::new(),
            bytes: 0,
        }
    }

    fn update(&mut self, chunk: &[u8]) {
        self.hasher.update(chunk);
        self.bytes += chunk.len() as u64;
    }

    fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

/// Feed `reader` into a fresh accumulator until it reports end of input.
fn digest_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<Accumulator> {
    let mut acc = Accumulator::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        acc.update(&buffer[..read]);
    }
    Ok(acc)
}

/// Hash raw bytes and return a lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut acc = Accumulator::new();
    acc.update(data);
    acc.finish()
}

/// Hash a file in [`CHUNK_SIZE`] reads and return a lowercase hex string.
///
/// A missing path yields [`HashError::NotFound`]; every other I/O failure is
/// returned unchanged as [`HashError::Io`].
pub fn hash_file(path: impl AsRef<Path>) -> Result<String, HashError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|err| HashError::from_io(path, err))?;
    let acc = digest_reader(&mut file)?;
    debug!(path = %path.display(), bytes = acc.bytes, "hashed file");
    Ok(acc.finish())
}

/// Hash an entire stream from its start and return a lowercase hex string.
///
/// The stream is seeked back to the position it had on entry before this
/// returns, on the error path as well. When both the digest and the restore
/// fail, the digest error is the one returned.
pub fn hash_stream<S: Read + Seek + ?Sized>(stream: &mut S) -> io::Result<String> {
    let origin = stream.stream_position()?;
    let digested = rewind_and_digest(stream);
    let restored = stream.seek(SeekFrom::Start(origin));
    match (digested, restored) {
        (Ok(acc), Ok(_)) => {
            debug!(position = origin, bytes = acc.bytes, "hashed stream");
            Ok(acc.finish())
        }
        (Ok(_), Err(err)) => Err(err),
        (Err(err), Ok(_)) => Err(err),
        (Err(err), Err(restore_err)) => {
            warn!(
                position = origin,
                error = %restore_err,
                "failed to restore stream position after read error"
            );
            Err(err)
        }
    }
}

fn rewind_and_digest<S: Read + Seek + ?Sized>(stream: &mut S) -> io::Result<Accumulator> {
    stream.rewind()?;
    digest_reader(stream)
}

/// Stateless handle exposing the three hashing entry points as methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileHasher;

impl FileHasher {
    pub fn new() -> Self {
        Self
    }

    /// See [`hash_file`].
    pub fn hash_file(&self, path: impl AsRef<Path>) -> Result<String, HashError> {
        hash_file(path)
    }

    /// See [`hash_bytes`].
    pub fn hash_bytes(&self, data: &[u8]) -> String {
        hash_bytes(data)
    }

    /// See [`hash_stream`].
    pub fn hash_stream<S: Read + Seek + ?Sized>(&self, stream: &mut S) -> io::Result<String> {
        hash_stream(stream)
    }
}
