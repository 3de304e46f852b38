//! Goodman mean stress correction

use super::{undefined, MeanStressCorrection};
use crate::error::FatigueResult;
use crate::material::MaterialProperties;

/// Linear Goodman relation
///
/// `σa,eq = σa / (1 - σm / σUTS)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Goodman;

impl MeanStressCorrection for Goodman {
    fn name(&self) -> &'static str {
        "Goodman"
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

        Ok(amplitude / (1.0 - mean / uts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FatigueError;
    use approx::assert_relative_eq;

    fn material() -> MaterialProperties {
        MaterialProperties::new("Steel", 500.0, 350.0, 210_000.0, 0.3).unwrap()
    }

    #[test]
    fn test_goodman_tensile_mean() {
        let eq = Goodman.correct(100.0, 50.0, &material()).unwrap();
        assert_relative_eq!(eq, 111.111_111_111, epsilon = 1e-6);
    }

    #[test]
    fn test_goodman_mean_at_uts_is_domain_error() {
        let err = Goodman.correct(100.0, 500.0, &material()).unwrap_err();
        assert!(matches!(err, FatigueError::Domain { correction: "Goodman", index: None, .. }));
        assert!(Goodman.correct(100.0, 750.0, &material()).is_err());
    }
}
