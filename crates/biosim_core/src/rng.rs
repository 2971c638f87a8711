//! The single stream of random draws every stochastic decision consumes.
//!
//! The world owns one `RandomSource` and threads it through each phase, so the
//! order of draws is explicit. Tests swap in `ScriptedDraws` to force outcomes.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform index in `0..n`. `n` must be positive.
    fn below(&mut self, n: usize) -> usize;

    /// Fisher-Yates shuffle driven by `below`.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl RandomSource for ChaCha8Rng {
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// A deterministic source replaying fixed values, then a fallback.
///
/// `below` answers are clamped into range so a script written for one grid
/// size never panics on another.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    uniforms: VecDeque<f64>,
    indices: VecDeque<usize>,
    fallback: f64,
    uniform_draws: usize,
    index_draws: usize,
}

impl ScriptedDraws {
    /// Every uniform draw returns `value`; every index draw returns 0.
    pub fn constant(value: f64) -> Self {
        Self {
            fallback: value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_uniforms<I: IntoIterator<Item = f64>>(mut self, values: I) -> Self {
        self.uniforms.extend(values);
        self
    }

    #[must_use]
    pub fn with_indices<I: IntoIterator<Item = usize>>(mut self, values: I) -> Self {
        self.indices.extend(values);
        self
    }

    /// Number of uniform draws consumed so far.
    pub fn uniform_draws(&self) -> usize {
        self.uniform_draws
    }

    /// Number of index draws consumed so far, shuffles included.
    pub fn index_draws(&self) -> usize {
        self.index_draws
    }
}

impl RandomSource for ScriptedDraws {
    fn uniform(&mut self) -> f64 {
        self.uniform_draws += 1;
        self.uniforms.pop_front().unwrap_or(self.fallback)
    }

    fn below(&mut self, n: usize) -> usize {
        self.index_draws += 1;
        self.indices.pop_front().unwrap_or(0).min(n.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_scripted_replays_then_falls_back() {
        let mut draws = ScriptedDraws::constant(0.9).with_uniforms([0.1, 0.2]);
        assert_eq!(draws.uniform(), 0.1);
        assert_eq!(draws.uniform(), 0.2);
        assert_eq!(draws.uniform(), 0.9);
        assert_eq!(draws.uniform_draws(), 3);
    }

    #[test]
    fn test_scripted_index_is_clamped() {
        let mut draws = ScriptedDraws::constant(0.0).with_indices([7]);
        assert_eq!(draws.below(4), 3);
        assert_eq!(draws.below(4), 0);
    }

    #[test]
    fn test_chacha_uniform_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.below(4) < 4);
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation_and_reproducible() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();
        ChaCha8Rng::seed_from_u64(3).shuffle(&mut a);
        ChaCha8Rng::seed_from_u64(3).shuffle(&mut b);
        assert_eq!(a, b);
        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}
