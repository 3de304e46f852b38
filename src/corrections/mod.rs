//! Mean stress corrections
//!
//! A correction turns a stress amplitude acting together with a mean stress
//! into the fully reversed amplitude of equal damage. Every variant leaves
//! the amplitude unchanged when the mean stress is zero or compressive; the
//! check is made per point for array inputs.

mod gerber;
mod goodman;
mod morrow;
mod swt;

use serde::{Deserialize, Serialize};

use crate::error::{FatigueError, FatigueResult};
use crate::material::MaterialProperties;
use crate::math::{self, Vec as StressVec};

pub use gerber::Gerber;
pub use goodman::Goodman;
pub use morrow::Morrow;
pub use swt::SmithWatsonTopper;

/// A mean stress correction method
pub trait MeanStressCorrection {
    /// Display name of the method
    fn name(&self) -> &'static str;

    /// Check that the material carries every constant the method needs
    fn validate(&self, _material: &MaterialProperties) -> FatigueResult<()> {
        Ok(())
    }

    /// Corrected amplitude for a single amplitude/mean pair
    fn correct(
        &self,
        amplitude: f64,
        mean: f64,
        material: &MaterialProperties,
    ) -> FatigueResult<f64>;

    /// Corrected amplitude for every evaluation point
    ///
    /// Domain errors report the index of the offending point.
    fn eq_amplitude(
        &self,
        amplitude: &StressVec,
        mean: &StressVec,
        material: &MaterialProperties,
    ) -> FatigueResult<StressVec> {
        math::check_same_len("stress amplitude and mean stress", amplitude, mean)?;
        self.validate(material)?;

        let mut corrected = StressVec::zeros(amplitude.len());
        for (i, (&amp, &m)) in amplitude.iter().zip(mean.iter()).enumerate() {
            corrected[i] = self.correct(amp, m, material).map_err(|e| e.at_point(i))?;
        }
        Ok(corrected)
    }
}

/// Build the domain error for a correction whose formula has no finite value
pub(crate) fn undefined(
    correction: &'static str,
    amplitude: f64,
    mean: f64,
    reason: &str,
) -> FatigueError {
    FatigueError::Domain {
        correction,
        index: None,
        amplitude,
        mean,
        reason: reason.to_string(),
    }
}

/// Selectable mean stress correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrectionKind {
    Goodman,
    Gerber,
    /// Smith-Watson-Topper
    Swt,
    Morrow,
}

impl Default for CorrectionKind {
    fn default() -> Self {
        Self::Goodman
    }
}

impl CorrectionKind {
    /// The correction implementing this variant
    pub fn correction(self) -> &'static dyn MeanStressCorrection {
        match self {
            CorrectionKind::Goodman => &Goodman,
            CorrectionKind::Gerber => &Gerber,
            CorrectionKind::Swt => &SmithWatsonTopper,
            CorrectionKind::Morrow => &Morrow,
        }
    }
}
