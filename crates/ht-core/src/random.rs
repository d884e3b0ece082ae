//! Injectable randomness.
//!
//! Every resolver draws through [`RandomSource`] instead of a concrete RNG.
//! Any `rand` generator is a source (sessions use a seeded `StdRng`), and
//! [`ScriptedSource`] replays a fixed sequence so tests can assert exact
//! outcomes.

use rand::{Rng, RngCore};

/// A stream of uniform draws in `[0, 1)` plus the derived helpers the
/// game rules use.
///
/// All helpers consume exactly one draw, so a scripted sequence maps
/// one-to-one onto the decisions a resolver makes.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// True with the given probability (`draw < probability`).
    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize {
        let draw = self.next_unit();
        if len == 0 {
            return 0;
        }
        ((draw * len as f64) as usize).min(len - 1)
    }

    /// Uniform integer in `low..=high`.
    fn int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        let draw = self.next_unit();
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as f64;
        low + ((draw * span) as i64).min(high - low)
    }

    /// Uniform element of a slice, or `None` if it is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let i = self.index(items.len());
        items.get(i)
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A source that replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Replay `values` in order, starting over after the last one.
    /// Values are clamped into `[0, 1)`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values
            .into_iter()
            .map(|v| v.clamp(0.0, 0.999_999))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Always return the same draw.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scripted_cycles() {
        let mut src = ScriptedSource::new([0.1, 0.9]);
        assert_eq!(src.next_unit(), 0.1);
        assert_eq!(src.next_unit(), 0.9);
        assert_eq!(src.next_unit(), 0.1);
        assert_eq!(src.consumed(), 3);
    }

    #[test]
    fn scripted_clamps() {
        let mut src = ScriptedSource::new([1.5, -2.0]);
        assert!(src.next_unit() < 1.0);
        assert_eq!(src.next_unit(), 0.0);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut src = ScriptedSource::new(Vec::new());
        assert_eq!(src.next_unit(), 0.0);
    }

    #[test]
    fn chance_is_strictly_below() {
        let mut src = ScriptedSource::constant(0.5);
        assert!(!src.chance(0.5));
        assert!(src.chance(0.51));
    }

    #[test]
    fn index_bounds() {
        let mut src = ScriptedSource::new([0.0, 0.999_999, 0.5]);
        assert_eq!(src.index(4), 0);
        assert_eq!(src.index(4), 3);
        assert_eq!(src.index(4), 2);
        assert_eq!(src.index(0), 0);
    }

    #[test]
    fn int_inclusive_covers_both_ends() {
        let mut src = ScriptedSource::new([0.0, 0.999_999]);
        assert_eq!(src.int_inclusive(0, 10), 0);
        assert_eq!(src.int_inclusive(0, 10), 10);
        assert_eq!(src.int_inclusive(5, 5), 5);
    }

    #[test]
    fn pick_empty_is_none() {
        let mut src = ScriptedSource::constant(0.3);
        let empty: [u8; 0] = [];
        assert!(src.pick(&empty).is_none());
        assert_eq!(src.pick(&["a", "b", "c"]), Some(&"a"));
    }

    #[test]
    fn std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
            let n = rng.int_inclusive(-5, 5);
            assert!((-5..=5).contains(&n));
        }
    }
}
