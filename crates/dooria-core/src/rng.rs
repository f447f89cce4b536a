//! Seeded randomness for carving and exit selection

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Randomness source handed to `generate`
///
/// Callers own one per generation run, so two mazes built from the same seed
/// come out identical and parallel runs never share a stream.
#[derive(Debug, Clone)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

// A maze is reproducible from its seed alone, so that is all we write out
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
        u64::deserialize(deserializer).map(GameRng::new)
    }
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        let stream = ChaCha8Rng::seed_from_u64(seed);
        Self { stream, seed }
    }

    /// Fresh seed from the thread RNG; log `seed()` to replay the maze
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..n`, or 0 when `n` is 0
    pub fn rn2(&mut self, n: usize) -> usize {
        match n {
            0 => 0,
            _ => self.stream.gen_range(0..n),
        }
    }

    /// Uniform pick among carving candidates
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let pick = self.rn2(items.len());
        items.get(pick)
    }

    /// Fisher-Yates; taking a prefix afterwards gives a uniform subset
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rn2(i + 1);
            items.swap(i, j);
        }
    }
}
