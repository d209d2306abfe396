use sha2::Digest;

use crate::error::HashError;

/// Stateful hash accumulator: ingest bytes incrementally, finalize once.
/// Finalization consumes the accumulator so it cannot be reused.
pub trait Accumulator {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Adapter for any RustCrypto `Digest` implementation.
struct DigestAccumulator<D: Digest>(D);

impl<D: Digest> Accumulator for DigestAccumulator<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

/// BLAKE3 ships its own hasher type rather than a `Digest` impl.
struct Blake3Accumulator(blake3::Hasher);

impl Accumulator for Blake3Accumulator {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().as_bytes().to_vec()
    }
}

/// Source of hash accumulators. Injectable so tests can swap in a fixed
/// fake registry instead of the built-in algorithm set.
pub trait AlgorithmProvider {
    /// Return a ready-to-use accumulator for `name`, or reject it.
    fn resolve(&self, name: &str) -> Result<Box<dyn Accumulator>, HashError>;

    /// All supported names, sorted ascending, no duplicates.
    fn names(&self) -> Vec<&'static str>;
}

// Kept in ascending order; `names()` returns it as-is.
const ALGORITHM_NAMES: &[&str] = &[
    "blake2b", "blake2s", "blake3", "md5", "sha1", "sha224", "sha256",
    "sha3-224", "sha3-256", "sha3-384", "sha3-512", "sha384", "sha512",
];

/// The built-in registry, backed by the RustCrypto digest crates plus BLAKE3.
pub struct BuiltinAlgorithms;

impl AlgorithmProvider for BuiltinAlgorithms {
    fn resolve(&self, name: &str) -> Result<Box<dyn Accumulator>, HashError> {
        // Case-insensitive, and tolerant of hashlib-style "sha3_256".
        let normalized = name.to_ascii_lowercase().replace('_', "-");
        Ok(match normalized.as_str() {
            "md5" => Box::new(DigestAccumulator(md5::Md5::new())),
            "sha1" => Box::new(DigestAccumulator(sha1::Sha1::new())),
            "sha224" => Box::new(DigestAccumulator(sha2::Sha224::new())),
            "sha256" => Box::new(DigestAccumulator(sha2::Sha256::new())),
            "sha384" => Box::new(DigestAccumulator(sha2::Sha384::new())),
            "sha512" => Box::new(DigestAccumulator(sha2::Sha512::new())),
            "sha3-224" => Box::new(DigestAccumulator(sha3::Sha3_224::new())),
            "sha3-256" => Box::new(DigestAccumulator(sha3::Sha3_256::new())),
            "sha3-384" => Box::new(DigestAccumulator(sha3::Sha3_384::new())),
            "sha3-512" => Box::new(DigestAccumulator(sha3::Sha3_512::new())),
            "blake2b" => Box::new(DigestAccumulator(blake2::Blake2b512::new())),
            "blake2s" => Box::new(DigestAccumulator(blake2::Blake2s256::new())),
            "blake3" => Box::new(Blake3Accumulator(blake3::Hasher::new())),
            _ => return Err(HashError::UnsupportedAlgorithm(name.to_string())),
        })
    }

    fn names(&self) -> Vec<&'static str> {
        ALGORITHM_NAMES.to_vec()
    }
}

#[cfg(test)]
impl std::fmt::Debug for dyn Accumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Accumulator")
    }
}
