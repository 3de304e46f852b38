//! Smith-Watson-Topper mean stress correction

use super::{undefined, MeanStressCorrection};
use crate::error::FatigueResult;
use crate::material::MaterialProperties;

/// Smith-Watson-Topper parameter
///
/// `σa,eq = sqrt(σmax * σa)` with `σmax = σm + σa`. Needs no material constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmithWatsonTopper;

impl MeanStressCorrection for SmithWatsonTopper {
    fn name(&self) -> &'static str {
        "SWT"
    }

    fn correct(
        &self,
        amplitude: f64,
        mean: f64,
        _material: &MaterialProperties,
    ) -> FatigueResult<f64> {
        if mean <= 0.0 {
            return Ok(amplitude);
        }

        let max_stress = mean + amplitude;
        if max_stress <= 0.0 {
            return Ok(amplitude);
        }

        let product = max_stress * amplitude;
        if product < 0.0 {
            return Err(undefined(
                self.name(),
                amplitude,
                mean,
                "negative product of maximum stress and amplitude",
            ));
        }

        Ok(product.sqrt())
    }
}
