use lobsim_ports::RandomSource;
use rand::{RngCore, SeedableRng};

/// 2^32, the divisor that maps a `u32` output onto `[0, 1)`
const U32_RANGE: f64 = 4_294_967_296.0;

/// Reduce an arbitrary integer seed to a usable 32-bit generator seed
///
/// Keeps the low 32 bits (two's complement for negatives). A result of 0 is
/// coerced to 1 so no run starts from the all-zero state.
pub fn normalize_seed(seed: i64) -> u32 {
    match seed as u32 {
        0 => 1,
        s => s,
    }
}

/// Mulberry32: a 32-bit add-then-xorshift-multiply generator
///
/// All arithmetic is wrapping `u32`, so the output stream is identical to any
/// other implementation of the same algorithm given the same seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    seed: u32,
    state: u32,
}

impl Mulberry32 {
    /// Weyl-sequence increment added to the state before every draw
    pub const INCREMENT: u32 = 0x6d2b_79f5;

    /// Create a generator from a 32-bit seed
    pub fn new(seed: u32) -> Self {
        Self { seed, state: seed }
    }

    /// Create a generator from any integer seed via [`normalize_seed`]
    pub fn from_seed_value(seed: i64) -> Self {
        Self::new(normalize_seed(seed))
    }

    /// The seed this generator was built from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Rewind to the start of the stream
    pub fn reset(&mut self) {
        self.state = self.seed;
    }

    /// Next raw 32-bit output
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let t = self.state;
        let mut x = (t ^ (t >> 15)).wrapping_mul(1 | t);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(61 | x));
        x ^ (x >> 14)
    }
}

impl RandomSource for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / U32_RANGE
    }

    fn name(&self) -> &str {
        "Mulberry32"
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_raw());
        let hi = u64::from(self.next_raw());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Keeps the low 32 bits of `state` rather than hashing it, so
    /// `seed_from_u64(42)` and `new(42)` produce the same stream.
    fn seed_from_u64(state: u64) -> Self {
        Self::from_seed_value(state as i64)
    }
}
