//! Result types for equivalent stress evaluation

use serde::{Deserialize, Serialize};

/// Statistics of one equivalent stress column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqStressSummary {
    /// Label of the summarised column
    pub label: String,
    /// Maximum equivalent stress
    pub max: f64,
    /// Evaluation point (row) holding the maximum
    pub max_point: usize,
    /// Minimum equivalent stress
    pub min: f64,
    /// Arithmetic mean over all points
    pub mean: f64,
    /// Number of evaluation points
    pub num_points: usize,
}

impl EqStressSummary {
    /// Summarise a column of values; `None` for an empty column
    pub fn from_values<I>(label: &str, values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut summary: Option<Self> = None;
        let mut sum = 0.0;

        for (i, value) in values.into_iter().enumerate() {
            sum += value;
            let s = summary.get_or_insert_with(|| Self {
                label: label.to_string(),
                max: value,
                max_point: i,
                min: value,
                mean: 0.0,
                num_points: 0,
            });
            if value > s.max {
                s.max = value;
                s.max_point = i;
            }
            s.min = s.min.min(value);
            s.num_points += 1;
        }

        summary.map(|mut s| {
            s.mean = sum / s.num_points as f64;
            s
        })
    }
}
