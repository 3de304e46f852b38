//! Equivalent stress criteria
//!
//! A criterion reduces the stress field of an [`FEModel`] to one equivalent
//! stress per evaluation point, applying a mean stress correction where the
//! criterion separates mean and amplitude. Criteria never mutate the model.

mod dang_van;
mod manson_mcknight;

use serde::{Deserialize, Serialize};

use crate::corrections::MeanStressCorrection;
use crate::error::FatigueResult;
use crate::material::MaterialProperties;
use crate::math::Vec as StressVec;
use crate::model::FEModel;

pub use dang_van::DangVan;
pub use manson_mcknight::MansonMcKnight;

/// An equivalent stress criterion
pub trait EqStressCriterion {
    /// Display name of the criterion
    fn name(&self) -> &'static str;

    /// Label of the result column written for this criterion and correction
    fn column_label(&self, correction: &dyn MeanStressCorrection) -> String {
        format!("{}/{}", self.name(), correction.name())
    }

    /// Equivalent stress for every row of the model's stress table
    fn calculate_eq_stress(
        &self,
        fe_model: &FEModel,
        material: &MaterialProperties,
        correction: &dyn MeanStressCorrection,
    ) -> FatigueResult<StressVec>;
}

/// Selectable equivalent stress criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CriterionKind {
    MansonMcKnight,
    DangVan {
        /// Hydrostatic stress sensitivity
        alpha: f64,
        /// Pure shear fatigue limit
        tau_limit: f64,
    },
}

impl Default for CriterionKind {
    fn default() -> Self {
        Self::MansonMcKnight
    }
}

impl CriterionKind {
    /// The criterion implementing this variant
    pub fn criterion(self) -> Box<dyn EqStressCriterion> {
        match self {
            CriterionKind::MansonMcKnight => Box::new(MansonMcKnight),
            CriterionKind::DangVan { alpha, tau_limit } => Box::new(DangVan::new(alpha, tau_limit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_builds_matching_criterion() {
        assert_eq!(CriterionKind::default().criterion().name(), "Manson-McKnight");

        let kind: CriterionKind =
            serde_json::from_str(r#"{"DangVan": {"alpha": 0.3, "tau_limit": 180.0}}"#).unwrap();
        assert_eq!(kind, CriterionKind::DangVan { alpha: 0.3, tau_limit: 180.0 });
        assert_eq!(kind.criterion().name(), "Dang Van");
    }
}
