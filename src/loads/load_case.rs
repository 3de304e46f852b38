//! Load cases

use serde::{Deserialize, Serialize};

use crate::error::{FatigueError, FatigueResult};

/// A load quantity given either once for the whole model or per evaluation point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoadValue {
    Scalar(f64),
    Array(Vec<f64>),
}

impl LoadValue {
    /// Number of points for array values, `None` for scalars
    pub fn point_count(&self) -> Option<usize> {
        match self {
            LoadValue::Scalar(_) => None,
            LoadValue::Array(values) => Some(values.len()),
        }
    }

    /// Value at an evaluation point; scalars apply to every point
    pub fn at(&self, point: usize) -> Option<f64> {
        match self {
            LoadValue::Scalar(value) => Some(*value),
            LoadValue::Array(values) => values.get(point).copied(),
        }
    }
}

impl From<f64> for LoadValue {
    fn from(value: f64) -> Self {
        LoadValue::Scalar(value)
    }
}

impl From<Vec<f64>> for LoadValue {
    fn from(values: Vec<f64>) -> Self {
        LoadValue::Array(values)
    }
}

/// A named cyclic load: stress amplitude, mean stress and number of cycles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Name of the load case
    pub name: String,
    pub stress_amplitude: LoadValue,
    pub mean_stress: LoadValue,
    pub cycles: LoadValue,
}

impl LoadCase {
    /// Create a new load case
    pub fn new(
        name: &str,
        stress_amplitude: impl Into<LoadValue>,
        mean_stress: impl Into<LoadValue>,
        cycles: impl Into<LoadValue>,
    ) -> Self {
        Self {
            name: name.to_string(),
            stress_amplitude: stress_amplitude.into(),
            mean_stress: mean_stress.into(),
            cycles: cycles.into(),
        }
    }

    /// Check that every array member has one entry per evaluation point
    pub fn check_aligned(&self, num_points: usize) -> FatigueResult<()> {
        let members = [
            ("stress_amplitude", &self.stress_amplitude),
            ("mean_stress", &self.mean_stress),
            ("cycles", &self.cycles),
        ];
        for (field, value) in members {
            if let Some(len) = value.point_count() {
                if len != num_points {
                    return Err(FatigueError::ShapeMismatch(format!(
                        "load case '{}': {} has {} values, model has {} points",
                        self.name, field, len, num_points
                    )));
                }
            }
        }
        Ok(())
    }
}
