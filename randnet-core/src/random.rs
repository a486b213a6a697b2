//! Random draw sources used to seed node values and degree targets.
//!
//! The [`RandomSource`] trait is the only boundary between the network model
//! and its randomness. [`SeededRandom`] is the production implementation;
//! tests substitute scripted doubles to pin exact behaviour.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Poisson, StandardNormal};

use crate::error::{DrawError, is_valid_mean};

/// Supplies the three draw types the network model consumes.
///
/// # Examples
/// ```
/// use randnet_core::{DrawError, RandomSource};
///
/// /// Always draws the lowest admissible value.
/// struct Floor;
///
/// impl RandomSource for Floor {
///     fn normal(&mut self, out: &mut [f64]) { out.fill(0.0); }
///     fn poisson(&mut self, out: &mut [usize], _mean: f64) -> Result<(), DrawError> {
///         out.fill(0);
///         Ok(())
///     }
///     fn uniform_int(&mut self, low: usize, _high: usize) -> usize { low }
/// }
///
/// let mut source = Floor;
/// assert_eq!(source.uniform_int(3, 9), 3);
/// ```
pub trait RandomSource {
    /// Fills every element of `out` with an independent standard-normal draw.
    fn normal(&mut self, out: &mut [f64]);

    /// Fills every element of `out` with an independent Poisson draw of the
    /// given mean.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidMean`] when `mean` is negative, NaN, infinite
    /// or too large to sample.
    fn poisson(&mut self, out: &mut [usize], mean: f64) -> Result<(), DrawError>;

    /// Returns one integer drawn uniformly from the inclusive range
    /// `[low, high]`. Callers guarantee `low <= high`.
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn normal(&mut self, out: &mut [f64]) {
        (**self).normal(out);
    }

    fn poisson(&mut self, out: &mut [usize], mean: f64) -> Result<(), DrawError> {
        (**self).poisson(out, mean)
    }

    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        (**self).uniform_int(low, high)
    }
}

/// [`RandomSource`] backed by a [`SmallRng`].
///
/// Two sources built from the same seed produce identical draw sequences.
///
/// # Examples
/// ```
/// use randnet_core::{RandomSource, SeededRandom};
///
/// let mut a = SeededRandom::new(7);
/// let mut b = SeededRandom::new(7);
/// assert_eq!(a.uniform_int(0, 100), b.uniform_int(0, 100));
/// ```
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Creates a source whose draws are fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn normal(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.rng.sample(StandardNormal);
        }
    }

    fn poisson(&mut self, out: &mut [usize], mean: f64) -> Result<(), DrawError> {
        if !is_valid_mean(mean) {
            return Err(DrawError::InvalidMean { mean });
        }
        // `Poisson::new` rejects a zero rate; every draw is zero anyway.
        if mean == 0.0 {
            out.fill(0);
            return Ok(());
        }
        let dist = Poisson::new(mean).map_err(|_| DrawError::InvalidMean { mean })?;
        for slot in out.iter_mut() {
            let draw: f64 = dist.sample(&mut self.rng);
            // Poisson draws are non-negative integers; the cast saturates.
            *slot = draw as usize;
        }
        Ok(())
    }

    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}
