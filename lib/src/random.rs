//! Randomness and noise context
//!
//! Everything random in a run flows through one [`Random`] value, so a run is
//! fully determined by its seeds. Attribute draws (palette, color, character)
//! and keep/drop draws use separate streams: the retained subset can change
//! without disturbing the attributes, and vice versa.

use crate::symbols::WeightedSet;
use noise::{NoiseFn, Simplex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Mixed into the main seed when no filter seed is given
const FILTER_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct Random {
    seed: u64,
    filter_seed: u64,
    rng: StdRng,
    filter_rng: StdRng,
    simplex: Simplex,
}

impl Random {
    /// Seed every stream from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_filter_seed(seed, seed ^ FILTER_SALT)
    }

    /// Seed attributes and noise from `seed`, keep/drop draws from `filter_seed`
    pub fn with_filter_seed(seed: u64, filter_seed: u64) -> Self {
        // Simplex takes a 32-bit seed, fold the high half in
        let noise_seed = (seed as u32) ^ ((seed >> 32) as u32);
        Self {
            seed,
            filter_seed,
            rng: StdRng::seed_from_u64(seed),
            filter_rng: StdRng::seed_from_u64(filter_seed),
            simplex: Simplex::new(noise_seed),
        }
    }

    /// Build from optional seeds, drawing a fresh seed when none is given
    pub fn from_seeds(seed: Option<u64>, filter_seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        match filter_seed {
            Some(filter_seed) => Self::with_filter_seed(seed, filter_seed),
            None => Self::new(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn filter_seed(&self) -> u64 {
        self.filter_seed
    }

    /// Uniform float in [0, 1)
    pub fn value(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform pick from a slice, `None` when it is empty
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..items.len());
        items.get(index)
    }

    /// Weighted pick, `None` when the set is empty
    pub fn weighted<'a, T>(&mut self, set: &'a WeightedSet<T>) -> Option<&'a T> {
        let unit = self.value();
        set.select(unit)
    }

    /// Coherent 2D simplex noise in roughly [-1, 1]
    ///
    /// Coordinates are multiplied by `frequency` before sampling, so higher
    /// frequencies vary faster across the unit square.
    pub fn noise2d(&self, x: f64, y: f64, frequency: f64) -> f64 {
        self.simplex.get([x * frequency, y * frequency])
    }

    /// Keep/drop coin with success probability `probability`
    pub fn keep(&mut self, probability: f64) -> bool {
        self.filter_rng.random::<f64>() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Random::new(7);
        let mut b = Random::new(7);
        for _ in 0..100 {
            assert_eq!(a.value(), b.value());
        }
        assert_eq!(a.noise2d(0.3, 0.7, 2.0), b.noise2d(0.3, 0.7, 2.0));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = Random::new(1);
        let mut b = Random::new(2);
        let a: Vec<f64> = (0..8).map(|_| a.value()).collect();
        let b: Vec<f64> = (0..8).map(|_| b.value()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_value_range() {
        let mut random = Random::new(42);
        for _ in 0..10_000 {
            let v = random.value();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_pick() {
        let mut random = Random::new(3);
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(items.contains(random.pick(&items).unwrap()));
        }
        let empty: [&str; 0] = [];
        assert_eq!(random.pick(&empty), None);
    }

    #[test]
    fn test_noise_is_coherent() {
        let random = Random::new(11);
        let here = random.noise2d(0.5, 0.5, 1.0);
        let near = random.noise2d(0.5001, 0.5, 1.0);
        assert!((here - near).abs() < 0.01);
        assert!(here.abs() <= 1.0);
    }

    #[test]
    fn test_noise_frequency_scales_coordinates() {
        let random = Random::new(5);
        assert_eq!(random.noise2d(0.25, 0.4, 2.0), random.noise2d(0.5, 0.8, 1.0));
    }

    #[test]
    fn test_filter_stream_is_independent() {
        let mut a = Random::with_filter_seed(9, 100);
        let mut b = Random::with_filter_seed(9, 200);

        // Draining the filter stream does not move the attribute stream
        for _ in 0..50 {
            a.keep(0.5);
        }
        for _ in 0..10 {
            assert_eq!(a.value(), b.value());
        }
    }

    #[test]
    fn test_keep_extremes() {
        let mut random = Random::new(0);
        assert!((0..100).all(|_| random.keep(1.0)));
        assert!((0..100).all(|_| !random.keep(0.0)));
    }

    #[test]
    fn test_from_seeds() {
        let random = Random::from_seeds(Some(12), None);
        assert_eq!(random.seed(), 12);
        assert_eq!(random.filter_seed(), 12 ^ FILTER_SALT);

        let random = Random::from_seeds(Some(12), Some(34));
        assert_eq!(random.filter_seed(), 34);
    }
}
