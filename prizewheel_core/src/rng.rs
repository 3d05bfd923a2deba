use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::{Digest, Sha256};

// Every source yields a unit value in [0,1); the selector scales it to [0,100).
// Deterministic sources take the first 32 bits of a SHA-256 based digest as a
// big-endian u32 and divide by 2^32, so any runtime can reproduce the draw.

pub type HmacSha256 = Hmac<Sha256>;

/// Capability handed to the selector: "given nothing, produce a number in [0,1)".
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

pub fn derive_hash_hex(input: &[u8]) -> String {
    hex::encode(Sha256::digest(input))
}

/// Maps the first four bytes (big-endian) to [0,1). Shorter input is zero padded.
pub fn unit_from_bytes(bytes: &[u8]) -> f64 {
    let mut word = [0u8; 4];
    let n = bytes.len().min(4);
    word[..n].copy_from_slice(&bytes[..n]);
    let v = u32::from_be_bytes(word);
    (v as f64) / (u32::MAX as f64 + 1.0)
}

/// Uniform draw from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Test-only reproducible draw: SHA-256 of the seed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededDraw {
    seed: String,
}

impl SeededDraw {
    pub fn new(seed: impl Into<String>) -> Self {
        Self { seed: seed.into() }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn digest(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&Sha256::digest(self.seed.as_bytes()));
        out
    }
}

impl RandomSource for SeededDraw {
    fn next_unit(&self) -> f64 {
        unit_from_bytes(&self.digest())
    }
}

/// Provably-fair draw: HMAC-SHA256(server_seed, "client_seed:nonce").
///
/// Publish `server_seed_hash_hex()` before the spin and reveal the server
/// seed afterwards; anyone can then recompute the draw.
pub struct ProvablyFairDraw {
    pub server_seed: String, // secret until revealed
    pub client_seed: String,
    pub nonce: u64,
}

impl ProvablyFairDraw {
    pub fn new(server_seed: impl Into<String>, client_seed: impl Into<String>, nonce: u64) -> Self {
        Self {
            server_seed: server_seed.into(),
            client_seed: client_seed.into(),
            nonce,
        }
    }

    pub fn server_seed_hash_hex(&self) -> String {
        derive_hash_hex(self.server_seed.as_bytes())
    }

    pub fn hmac_bytes(&self) -> [u8; 32] {
        let mut mac = HmacSha256::new_from_slice(self.server_seed.as_bytes())
            .expect("HMAC accepts keys of any length");
        let msg = format!("{}:{}", self.client_seed, self.nonce);
        mac.update(msg.as_bytes());
        let res = mac.finalize().into_bytes();
        let mut out = [0u8; 32];
        out.copy_from_slice(&res);
        out
    }
}

impl RandomSource for ProvablyFairDraw {
    fn next_unit(&self) -> f64 {
        unit_from_bytes(&self.hmac_bytes())
    }
}

/// Returns the wrapped value unchanged; used for replays and boundary tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDraw(pub f64);

impl RandomSource for FixedDraw {
    fn next_unit(&self) -> f64 {
        self.0
    }
}
