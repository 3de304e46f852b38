//! Fatigue Solver - equivalent stresses for stress-life fatigue analysis
//!
//! This library turns multiaxial stress tensors from a finite element model
//! into one equivalent stress per evaluation point, supporting:
//! - Manson-McKnight criterion (signed von Mises mean, von Mises amplitude)
//! - Dang Van criterion (sqrt(J2) shear plus hydrostatic term)
//! - Goodman, Gerber, Smith-Watson-Topper and Morrow mean stress corrections
//!
//! Stress tensors use the component order `[Sxx, Syy, Szz, Sxy, Syz, Szx]`.
//!
//! ## Example
//! ```rust
//! use std::collections::HashMap;
//! use fatigue_solver::prelude::*;
//!
//! let material = MaterialProperties::new("Steel", 500.0, 350.0, 210_000.0, 0.3).unwrap();
//!
//! // One evaluation point cycling between zero and a uniaxial 200 MPa
//! let max = Mat::from_row_slice(1, 6, &[200.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
//! let min = Mat::zeros(1, 6);
//! let mut model = FEModel::new(vec![], vec![], Mat::zeros(0, 3), max.clone(), HashMap::new())
//!     .unwrap()
//!     .with_stress_envelope(min, max)
//!     .unwrap();
//!
//! run(&material, &mut model, &AnalysisOptions::manson_mcknight(CorrectionKind::Goodman), None)
//!     .unwrap();
//!
//! let eq = model.column_by_label("Manson-McKnight/Goodman").unwrap();
//! assert!(eq[0] > 0.0);
//! ```

pub mod analysis;
pub mod corrections;
pub mod criteria;
pub mod error;
pub mod loads;
pub mod material;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        run, AnalysisOptions, StressInvariant, StressLifeMethod, StressLifeMethodKind,
    };
    pub use crate::corrections::{
        CorrectionKind, Gerber, Goodman, MeanStressCorrection, Morrow, SmithWatsonTopper,
    };
    pub use crate::criteria::{CriterionKind, DangVan, EqStressCriterion, MansonMcKnight};
    pub use crate::error::{FatigueError, FatigueResult};
    pub use crate::loads::{LoadCase, LoadValue};
    pub use crate::material::MaterialProperties;
    pub use crate::math::{dang_van_reduction, manson_mcknight_reduction, Mat};
    pub use crate::model::{FEModel, StressEnvelope};
    pub use crate::results::EqStressSummary;
}
