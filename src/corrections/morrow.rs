//! Morrow mean stress correction

use super::{undefined, MeanStressCorrection};
use crate::error::{FatigueError, FatigueResult};
use crate::material::MaterialProperties;

/// Morrow relation, Goodman with the fatigue strength coefficient σf'
/// in place of the ultimate tensile strength
///
/// `σa,eq = σa / (1 - σm / σf')`
#[derive(Debug, Clone, Copy, Default)]
pub struct Morrow;

impl Morrow {
    fn coefficient(&self, material: &MaterialProperties) -> FatigueResult<f64> {
        material
            .fatigue_strength_coefficient()
            .ok_or(FatigueError::MissingParameter {
                correction: "Morrow",
                parameter: "fatigue_strength_coefficient",
            })
    }
}

impl MeanStressCorrection for Morrow {
    fn name(&self) -> &'static str {
        "Morrow"
    }

    fn validate(&self, material: &MaterialProperties) -> FatigueResult<()> {
        self.coefficient(material).map(|_| ())
    }

    fn correct(
        &self,
        amplitude: f64,
        mean: f64,
        material: &MaterialProperties,
    ) -> FatigueResult<f64> {
        let sf = self.coefficient(material)?;
        if mean <= 0.0 {
            return Ok(amplitude);
        }

        if mean >= sf {
            return Err(undefined(
                self.name(),
                amplitude,
                mean,
                &format!("mean stress reaches the fatigue strength coefficient {sf}"),
            ));
        }

        Ok(amplitude / (1.0 - mean / sf))
    }
}
