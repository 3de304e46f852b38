//! Stress-life methods and analysis options

use serde::{Deserialize, Serialize};

use crate::corrections::{CorrectionKind, MeanStressCorrection};
use crate::criteria::{CriterionKind, EqStressCriterion};
use crate::error::{FatigueError, FatigueResult};
use crate::loads::LoadCase;
use crate::material::MaterialProperties;
use crate::model::FEModel;

/// Stress-life method to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLifeMethodKind {
    /// Equivalent stress from stress invariants
    StressInvariant,
}

impl Default for StressLifeMethodKind {
    fn default() -> Self {
        Self::StressInvariant
    }
}

/// Options for an equivalent stress analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Stress-life method
    pub method: StressLifeMethodKind,
    /// Equivalent stress criterion
    pub criterion: CriterionKind,
    /// Mean stress correction
    pub correction: CorrectionKind,
    /// Reject NaN/infinite equivalent stresses before writing them to the model
    pub check_finite: bool,
    /// Enable logging/progress output
    pub log: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            method: StressLifeMethodKind::StressInvariant,
            criterion: CriterionKind::MansonMcKnight,
            correction: CorrectionKind::Goodman,
            check_finite: true,
            log: false,
        }
    }
}

impl AnalysisOptions {
    /// Manson-McKnight criterion with the given correction
    pub fn manson_mcknight(correction: CorrectionKind) -> Self {
        Self {
            correction,
            ..Self::default()
        }
    }

    /// Dang Van criterion
    pub fn dang_van(alpha: f64, tau_limit: f64) -> Self {
        Self {
            criterion: CriterionKind::DangVan { alpha, tau_limit },
            ..Self::default()
        }
    }

    /// Parse options from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> FatigueResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Enable logging
    pub fn with_logging(mut self) -> Self {
        self.log = true;
        self
    }

    /// Write non-finite results to the model instead of failing
    pub fn without_finite_check(mut self) -> Self {
        self.check_finite = false;
        self
    }

    /// Select the stress-life method
    pub fn with_method(mut self, method: StressLifeMethodKind) -> Self {
        self.method = method;
        self
    }

    /// The stress-life method these options select
    pub fn stress_life_method(&self) -> Box<dyn StressLifeMethod> {
        match self.method {
            StressLifeMethodKind::StressInvariant => Box::new(StressInvariant {
                check_finite: self.check_finite,
                log: self.log,
            }),
        }
    }
}

/// A stress-life fatigue method
pub trait StressLifeMethod {
    fn name(&self) -> &'static str;

    /// Evaluate the criterion with the correction and append the result to the
    /// model's stress table as a new column
    fn eq_stress(
        &self,
        material: &MaterialProperties,
        fe_model: &mut FEModel,
        criterion: &dyn EqStressCriterion,
        correction: &dyn MeanStressCorrection,
        load_case: Option<&LoadCase>,
    ) -> FatigueResult<()>;
}

/// Stress invariant method
///
/// Appends one column per call, labelled by
/// [`EqStressCriterion::column_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressInvariant {
    pub check_finite: bool,
    pub log: bool,
}

impl Default for StressInvariant {
    fn default() -> Self {
        Self {
            check_finite: true,
            log: false,
        }
    }
}

impl StressLifeMethod for StressInvariant {
    fn name(&self) -> &'static str {
        "StressInvariant"
    }

    fn eq_stress(
        &self,
        material: &MaterialProperties,
        fe_model: &mut FEModel,
        criterion: &dyn EqStressCriterion,
        correction: &dyn MeanStressCorrection,
        load_case: Option<&LoadCase>,
    ) -> FatigueResult<()> {
        if let Some(case) = load_case {
            case.check_aligned(fe_model.num_points())?;
            log::debug!("Load case '{}' passed through", case.name);
        }

        if self.log {
            log::info!(
                "{}: {} with {} correction on {} points, material '{}'",
                self.name(),
                criterion.name(),
                correction.name(),
                fe_model.num_points(),
                material.name()
            );
        }

        let eq_stress = criterion.calculate_eq_stress(fe_model, material, correction)?;

        if self.check_finite {
            let non_finite = eq_stress.iter().enumerate().find(|(_, v)| !v.is_finite());
            if let Some((index, &value)) = non_finite {
                return Err(FatigueError::NonFiniteResult {
                    criterion: criterion.name(),
                    index,
                    value,
                });
            }
        }

        let label = criterion.column_label(correction);
        fe_model.add_labeled_stress_column(&label, &eq_stress)?;

        if self.log {
            if let Some(summary) = fe_model.eq_stress_summary(&label) {
                log::info!(
                    "{}: max {:.3} at point {}, mean {:.3}",
                    label,
                    summary.max,
                    summary.max_point,
                    summary.mean
                );
            }
        }
        Ok(())
    }
}

/// Run the method, criterion and correction selected by `options`
pub fn run(
    material: &MaterialProperties,
    fe_model: &mut FEModel,
    options: &AnalysisOptions,
    load_case: Option<&LoadCase>,
) -> FatigueResult<()> {
    let method = options.stress_life_method();
    let criterion = options.criterion.criterion();
    let correction = options.correction.correction();
    method.eq_stress(material, fe_model, criterion.as_ref(), correction, load_case)
}
