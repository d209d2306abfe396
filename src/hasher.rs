use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use crate::error::HashError;
use crate::registry::Accumulator;

/// Chunk size for streaming reads. Large enough to amortize syscall
/// overhead, small enough to bound memory for arbitrarily large files.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Stream a reader into an accumulator in fixed-size chunks until EOF.
/// The chunk size only affects I/O batching, never the resulting digest.
pub fn hash_reader<R: Read>(
    mut reader: R,
    mut accumulator: Box<dyn Accumulator>,
    chunk_size: usize,
) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; chunk_size];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        accumulator.update(&buf[..n]);
    }
    Ok(accumulator.finalize())
}

/// Hash a file's contents, returning the lowercase hex digest.
/// Open and read failures carry the offending path; the file itself is
/// never mutated.
pub fn hash_file(path: &Path, accumulator: Box<dyn Accumulator>) -> Result<String, HashError> {
    let file = File::open(path).map_err(|e| access_error(path, e))?;
    let digest =
        hash_reader(file, accumulator, DEFAULT_CHUNK_SIZE).map_err(|e| access_error(path, e))?;
    Ok(hex::encode(digest))
}

/// Map an open/read failure onto the error taxonomy, keeping not-found and
/// permission-denied distinct from the pre-validation checks.
pub fn access_error(path: &Path, err: io::Error) -> HashError {
    match err.kind() {
        ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{AlgorithmProvider, BuiltinAlgorithms};
    use std::io::Cursor;
    use std::io::Write;

    const SHA256_EMPTY: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn acc(name: &str) -> Box<dyn crate::registry::Accumulator> {
        BuiltinAlgorithms.resolve(name).unwrap()
    }

    #[test]
    fn empty_file_matches_the_known_sha256_vector() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let digest = hash_file(file.path(), acc("sha256")).unwrap();
        assert_eq!(digest, SHA256_EMPTY);
    }

    #[test]
    fn hashing_the_same_file_twice_is_deterministic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"the quick brown fox").unwrap();
        let first = hash_file(file.path(), acc("sha512")).unwrap();
        let second = hash_file(file.path(), acc("sha512")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn digest_is_independent_of_chunk_size() {
        let data = vec![0xabu8; 10_000];
        let mut digests = Vec::new();
        for chunk_size in [1, 7, 1024, DEFAULT_CHUNK_SIZE, 64 * 1024] {
            let digest = hash_reader(Cursor::new(&data), acc("blake3"), chunk_size).unwrap();
            digests.push(hex::encode(digest));
        }
        assert!(digests.windows(2).all(|p| p[0] == p[1]), "{digests:?}");
    }

    #[test]
    fn open_failure_on_missing_path_names_the_path() {
        let err = hash_file(std::path::Path::new("no-such-file.bin"), acc("sha256")).unwrap_err();
        match err {
            HashError::NotFound(p) => assert_eq!(p.to_str(), Some("no-such-file.bin")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        struct Flaky {
            hiccuped: bool,
            data: Cursor<Vec<u8>>,
        }
        impl Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.hiccuped {
                    self.hiccuped = true;
                    return Err(io::Error::new(ErrorKind::Interrupted, "eintr"));
                }
                self.data.read(buf)
            }
        }

        let flaky = Flaky {
            hiccuped: false,
            data: Cursor::new(b"interrupted stream".to_vec()),
        };
        let digest = hash_reader(flaky, acc("sha256"), 8).unwrap();
        let straight = hash_reader(Cursor::new(b"interrupted stream"), acc("sha256"), 8).unwrap();
        assert_eq!(digest, straight);
    }

    #[test]
    fn mid_stream_read_failures_propagate() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(ErrorKind::BrokenPipe, "gone"))
            }
        }
        let err = hash_reader(Broken, acc("sha256"), 512).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    }
}
