use randnet_core::{DrawError, RandomSource};

/// Source that hands out fixed normals, fixed Poisson targets and always
/// probes the lowest admissible index.
#[derive(Clone, Debug)]
pub struct FixedSource {
    normal: f64,
    degree: usize,
}

impl FixedSource {
    #[must_use]
    pub fn new(normal: f64, degree: usize) -> Self {
        Self { normal, degree }
    }
}

impl RandomSource for FixedSource {
    fn normal(&mut self, out: &mut [f64]) {
        out.fill(self.normal);
    }

    fn poisson(&mut self, out: &mut [usize], mean: f64) -> Result<(), DrawError> {
        if !(mean.is_finite() && mean >= 0.0) {
            return Err(DrawError::InvalidMean { mean });
        }
        out.fill(self.degree);
        Ok(())
    }

    fn uniform_int(&mut self, low: usize, _high: usize) -> usize {
        low
    }
}
