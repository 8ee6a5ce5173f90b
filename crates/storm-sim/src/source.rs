//! Injected sources of randomness and time.
//!
//! The simulation never reads the wall clock or a global RNG directly, so
//! tests can replace both and step ticks deterministically.

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform samples in [0, 1).
pub trait JitterSource {
    fn unit(&mut self) -> f64;

    /// Uniform sample centered on zero: `(unit - 0.5) * width`,
    /// i.e. U(-width/2, width/2).
    fn jitter(&mut self, width: f64) -> f64 {
        (self.unit() - 0.5) * width
    }
}

/// Seeded ChaCha jitter. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct ChaChaJitter {
    rng: ChaCha8Rng,
}

impl ChaChaJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for ChaChaJitter {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedJitter {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedJitter {
    /// An empty script behaves as a constant 0.5 (zero jitter).
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl JitterSource for ScriptedJitter {
    fn unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
