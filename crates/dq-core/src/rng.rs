//! Random number sources
//!
//! Every random decision made by the generator and the element manager is
//! drawn through [`RandomSource`], so a caller controls the whole stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Upper bound used when a source returns 1.0 or more.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON;

/// A source of uniformly distributed floats in `[0, 1)`.
///
/// Implemented for plain closures, so `|| 0.5` is a valid source.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Next value, clamped into `[0, 1)` whatever the source returned.
    fn unit(&mut self) -> f64 {
        let value = self.next_f64();
        if value.is_nan() || value < 0.0 {
            0.0
        } else if value >= 1.0 {
            BELOW_ONE
        } else {
            value
        }
    }

    /// `floor(unit() * len)`, i.e. an index into a slice of `len` items.
    ///
    /// Returns 0 if `len` is 0.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.unit() * len as f64) as usize).min(len - 1)
    }

    /// `floor(unit() * (max + 1))`, a count in `0..=max`.
    fn count_up_to(&mut self, max: u32) -> u32 {
        self.index(max as usize + 1) as u32
    }

    /// A roll in `[0, 100)` for walking percentage tables.
    fn percent_roll(&mut self) -> f64 {
        self.unit() * 100.0
    }

    /// Choose a random element from a slice
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            items.get(self.index(items.len()))
        }
    }
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Seeded game random number generator
///
/// Wraps ChaCha8Rng for reproducible dungeons.
/// Note: RNG state is not serialized - restoring yields a fresh stream from the seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// An empty script always yields 0.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
