//! Dang Van critical plane criterion

use super::EqStressCriterion;
use crate::corrections::MeanStressCorrection;
use crate::error::{FatigueError, FatigueResult};
use crate::material::MaterialProperties;
use crate::math::{dang_van_reduction, Vec as StressVec};
use crate::model::FEModel;

/// Dang Van criterion, `tau_max + alpha * p` with the shear term
/// approximated by `sqrt(J2)`
///
/// The hydrostatic term already accounts for the mean stress, so the
/// supplied correction is validated against the material but not applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DangVan {
    /// Hydrostatic stress sensitivity
    pub alpha: f64,
    /// Pure shear fatigue limit
    pub tau_limit: f64,
}

impl DangVan {
    pub fn new(alpha: f64, tau_limit: f64) -> Self {
        Self { alpha, tau_limit }
    }

    /// Ratio of the equivalent stress to the shear fatigue limit per point
    pub fn utilization(&self, eq_stress: &StressVec) -> FatigueResult<StressVec> {
        if !(self.tau_limit.is_finite() && self.tau_limit > 0.0) {
            return Err(FatigueError::InvalidInput(format!(
                "Dang Van shear fatigue limit must be positive, got {}",
                self.tau_limit
            )));
        }
        Ok(eq_stress / self.tau_limit)
    }

    /// Points whose equivalent stress exceeds the shear fatigue limit
    pub fn exceeds_limit(&self, eq_stress: &StressVec) -> Vec<bool> {
        eq_stress.iter().map(|&eq| eq > self.tau_limit).collect()
    }
}

impl EqStressCriterion for DangVan {
    fn name(&self) -> &'static str {
        "Dang Van"
    }

    fn column_label(&self, _correction: &dyn MeanStressCorrection) -> String {
        self.name().to_string()
    }

    fn calculate_eq_stress(
        &self,
        fe_model: &FEModel,
        material: &MaterialProperties,
        correction: &dyn MeanStressCorrection,
    ) -> FatigueResult<StressVec> {
        correction.validate(material)?;
        log::debug!(
            "{}: mean stress carried by hydrostatic term, {} correction not applied",
            self.name(),
            correction.name()
        );
        dang_van_reduction(&fe_model.stress_tensor(), self.alpha, self.tau_limit)
    }
}
