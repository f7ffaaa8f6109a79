//! Uniform random source used by rarity draws and enchantment rolls

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

/// Source of uniform floats in `[0, 1)`
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Process-wide generator shared between worker threads
///
/// Each draw locks the inner generator, so concurrent callers consume
/// distinct slices of one stream.
#[derive(Debug)]
pub struct SharedRng {
    inner: Mutex<ChaCha8Rng>,
}

impl SharedRng {
    pub fn from_entropy() -> Self {
        SharedRng {
            inner: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        SharedRng {
            inner: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Draw one uniform value through a shared reference
    pub fn draw(&self) -> f64 {
        let mut handle = self;
        handle.gen::<f64>()
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        // A poisoned lock still holds a valid generator state
        let mut rng = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut rng)
    }
}

impl RngCore for &SharedRng {
    fn next_u32(&mut self) -> u32 {
        self.with_rng(|rng| rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        self.with_rng(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.with_rng(|rng| rng.fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.with_rng(|rng| rng.try_fill_bytes(dest))
    }
}

/// Replays a fixed list of uniform values, then repeats the last one
///
/// Useful for host-side replays and for pinning a draw in tests.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        ScriptedSource { values, position: 0 }
    }

    /// How many values have been consumed
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self
            .values
            .get(self.position)
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(0.0);
        self.position += 1;
        value
    }
}
