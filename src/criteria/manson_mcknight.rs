//! Manson-McKnight equivalent stress criterion

use super::EqStressCriterion;
use crate::corrections::MeanStressCorrection;
use crate::error::FatigueResult;
use crate::material::MaterialProperties;
use crate::math::{manson_mcknight_reduction, Mat, Vec as StressVec};
use crate::model::FEModel;

/// Manson-McKnight criterion
///
/// Reduces the min/max stress tensors of each point to a signed equivalent
/// mean and an equivalent amplitude, then corrects the amplitude for the mean.
///
/// The min/max pair comes from the model's stress envelope. A model without
/// an envelope is reduced globally: every component of the min tensor is the
/// smallest value of the whole stress tensor table, every component of the
/// max tensor the largest.
#[derive(Debug, Clone, Copy, Default)]
pub struct MansonMcKnight;

/// Min and max tensors filled with the smallest and largest value of `tensor`
fn global_extremes(tensor: &Mat) -> (Mat, Mat) {
    let (n, cols) = tensor.shape();
    if tensor.is_empty() {
        return (Mat::zeros(n, cols), Mat::zeros(n, cols));
    }
    let min = tensor.iter().copied().fold(f64::INFINITY, f64::min);
    let max = tensor.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (Mat::from_element(n, cols, min), Mat::from_element(n, cols, max))
}

impl EqStressCriterion for MansonMcKnight {
    fn name(&self) -> &'static str {
        "Manson-McKnight"
    }

    fn calculate_eq_stress(
        &self,
        fe_model: &FEModel,
        material: &MaterialProperties,
        correction: &dyn MeanStressCorrection,
    ) -> FatigueResult<StressVec> {
        let (eq_mean, eq_amp) = match fe_model.stress_envelope() {
            Some(envelope) => {
                log::debug!("{}: using attached stress envelope", self.name());
                manson_mcknight_reduction(&envelope.min, &envelope.max)?
            }
            None => {
                let (min, max) = global_extremes(&fe_model.stress_tensor());
                log::warn!(
                    "{}: model has no stress envelope, using global table extremes",
                    self.name()
                );
                manson_mcknight_reduction(&min, &max)?
            }
        };

        log::debug!("{}: applying {} correction", self.name(), correction.name());
        correction.eq_amplitude(&eq_amp, &eq_mean, material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrections::{Goodman, SmithWatsonTopper};
    use crate::error::FatigueError;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn material() -> MaterialProperties {
        MaterialProperties::new("Steel", 500.0, 350.0, 210_000.0, 0.3).unwrap()
    }

    fn model(stress: Mat) -> FEModel {
        FEModel::new(vec![], vec![], Mat::zeros(0, 3), stress, HashMap::new()).unwrap()
    }

    #[test]
    fn test_envelope_with_goodman() {
        let min = Mat::from_row_slice(2, 6, &[0.0; 12]);
        let max = Mat::from_row_slice(
            2,
            6,
            &[
                200.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
                -200.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            ],
        );
        let fe = model(max.clone()).with_stress_envelope(min, max).unwrap();

        let eq = MansonMcKnight.calculate_eq_stress(&fe, &material(), &Goodman).unwrap();

        let invariant = 0.5 * 20000.0_f64.sqrt();
        // tensile mean is penalised, compressive mean is not
        assert_relative_eq!(eq[0], invariant / (1.0 - invariant / 500.0), epsilon = 1e-9);
        assert_relative_eq!(eq[1], invariant, epsilon = 1e-12);
    }

    #[test]
    fn test_global_extremes_without_envelope() {
        let stress = Mat::from_row_slice(
            2,
            6,
            &[
                100.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
                -100.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            ],
        );
        let fe = model(stress);

        let eq = MansonMcKnight.calculate_eq_stress(&fe, &material(), &Goodman).unwrap();

        // min tensor all -100, max tensor all 100: zero mean, amplitude tensor all 100
        let amplitude = 0.5 * (6.0 * 3.0 * 100.0_f64.powi(2)).sqrt();
        assert_relative_eq!(amplitude, 212.132, epsilon = 1e-3);
        assert_relative_eq!(eq[0], amplitude, epsilon = 1e-9);
        assert_relative_eq!(eq[1], amplitude, epsilon = 1e-9);
    }

    #[test]
    fn test_global_extremes_match_filled_envelope() {
        let stress = Mat::from_row_slice(
            2,
            6,
            &[
                120.0, 30.0, -10.0, 15.0, 0.0, 5.0, //
                60.0, 60.0, 0.0, 0.0, 25.0, 0.0,
            ],
        );
        let implicit = model(stress.clone());
        let explicit = model(stress)
            .with_stress_envelope(Mat::from_element(2, 6, -10.0), Mat::from_element(2, 6, 120.0))
            .unwrap();

        let a = MansonMcKnight
            .calculate_eq_stress(&implicit, &material(), &SmithWatsonTopper)
            .unwrap();
        let b = MansonMcKnight
            .calculate_eq_stress(&explicit, &material(), &SmithWatsonTopper)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_evaluation_is_bit_identical() {
        let stress = Mat::from_row_slice(1, 6, &[80.0, -20.0, 35.0, 12.0, -7.0, 3.0]);
        let fe = model(stress);

        let first = MansonMcKnight.calculate_eq_stress(&fe, &material(), &Goodman).unwrap();
        let second = MansonMcKnight.calculate_eq_stress(&fe, &material(), &Goodman).unwrap();
        assert_eq!(first.as_slice(), second.as_slice());
    }

    #[test]
    fn test_domain_error_propagates() {
        let stress = Mat::from_row_slice(1, 6, &[0.0, 0.0, 2400.0, 0.0, 0.0, 0.0]);
        let err = MansonMcKnight
            .calculate_eq_stress(&model(stress), &material(), &Goodman)
            .unwrap_err();
        assert!(matches!(err, FatigueError::Domain { index: Some(0), .. }));
    }
}
