//! Gerber mean stress correction

use super::{undefined, MeanStressCorrection};
use crate::error::FatigueResult;
use crate::material::MaterialProperties;

/// Parabolic Gerber relation
///
/// `σa,eq = σa / (1 - (σm / σUTS)²)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Gerber;

impl MeanStressCorrection for Gerber {
    fn name(&self) -> &'static str {
        "Gerber"
    }

    fn correct(
        &self,
        amplitude: f64,
        mean: f64,
        material: &MaterialProperties,
    ) -> FatigueResult<f64> {
        if mean <= 0.0 {
            return Ok(amplitude);
        }

        let uts = material.ultimate_tensile_strength();
        if mean >= uts {
            return Err(undefined(
                self.name(),
                amplitude,
                mean,
                &format!("mean stress reaches the ultimate tensile strength {uts}"),
            ));
        }

        Ok(amplitude / (1.0 - (mean / uts).powi(2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gerber_tensile_mean() {
        let mat = MaterialProperties::new("Steel", 500.0, 350.0, 210_000.0, 0.3).unwrap();
        let eq = Gerber.correct(100.0, 50.0, &mat).unwrap();
        assert_relative_eq!(eq, 101.010_101_01, epsilon = 1e-6);
        assert!(Gerber.correct(100.0, 500.0, &mat).is_err());
    }
}
