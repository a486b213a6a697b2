//! Shared test utilities for `randnet-core`.

use std::collections::VecDeque;

use proptest::test_runner::Config as ProptestConfig;
use randnet_test_support::property_test_profile::ProptestRunProfile;

use crate::{error::DrawError, random::RandomSource};

/// Builds a standard proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`RandomSource`] replaying queued draws in order.
///
/// Exhausted queues fall back to `0.0` for normals, `0` for Poisson draws and
/// `low` for uniform draws. Every uniform request is recorded so tests can
/// assert the probe ranges the wiring algorithm asked for.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedRandom {
    normals: VecDeque<f64>,
    poissons: VecDeque<usize>,
    uniforms: VecDeque<usize>,
    uniform_requests: Vec<(usize, usize)>,
    poisson_means: Vec<f64>,
}

impl ScriptedRandom {
    #[must_use]
    pub(crate) fn with_normals(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.normals.extend(draws);
        self
    }

    #[must_use]
    pub(crate) fn with_poissons(mut self, draws: impl IntoIterator<Item = usize>) -> Self {
        self.poissons.extend(draws);
        self
    }

    #[must_use]
    pub(crate) fn with_uniforms(mut self, draws: impl IntoIterator<Item = usize>) -> Self {
        self.uniforms.extend(draws);
        self
    }

    /// Inclusive ranges passed to [`RandomSource::uniform_int`] so far.
    #[must_use]
    pub(crate) fn uniform_requests(&self) -> &[(usize, usize)] {
        &self.uniform_requests
    }

    /// Means passed to [`RandomSource::poisson`] so far.
    #[must_use]
    pub(crate) fn poisson_means(&self) -> &[f64] {
        &self.poisson_means
    }
}

impl RandomSource for ScriptedRandom {
    fn normal(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.normals.pop_front().unwrap_or(0.0);
        }
    }

    fn poisson(&mut self, out: &mut [usize], mean: f64) -> Result<(), DrawError> {
        self.poisson_means.push(mean);
        for slot in out.iter_mut() {
            *slot = self.poissons.pop_front().unwrap_or(0);
        }
        Ok(())
    }

    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.uniform_requests.push((low, high));
        self.uniforms.pop_front().unwrap_or(low)
    }
}
