//! FE Model - stress data handed over by a finite element solver

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{FatigueError, FatigueResult};
use crate::math::{self, Mat, Vec as StressVec, TENSOR_COMPONENTS};
use crate::results::EqStressSummary;

/// Minimum and maximum stress state of a load cycle, both `n x 6`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressEnvelope {
    pub min: Mat,
    pub max: Mat,
}

/// Finite element results used for fatigue evaluation
///
/// The stress table starts with the six tensor components
/// `[Sxx, Syy, Szz, Sxy, Syz, Szx]`, one row per evaluation point. Equivalent
/// stress results are appended to it as additional labelled columns; that is
/// the only mutation performed on a model. Appending needs `&mut self`, so a
/// model shared between callers must be guarded by its owner.
#[derive(Debug, Clone, Serialize)]
pub struct FEModel {
    element_ids: Vec<u32>,
    node_ids: Vec<u32>,
    /// Node coordinates, `node_ids.len() x 3`
    node_coordinates: Mat,
    stress_table: Mat,
    /// Labels of the columns appended after the tensor components
    column_labels: Vec<String>,
    /// Element id -> ordered node ids
    connectivity: HashMap<u32, Vec<u32>>,
    /// Node id -> element ids, derived from `connectivity`
    node_element_map: HashMap<u32, Vec<u32>>,
    stress_envelope: Option<StressEnvelope>,
}

fn check_unique(kind: &str, ids: &[u32]) -> FatigueResult<()> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(FatigueError::DuplicateId(format!("{kind} {id}")));
        }
    }
    Ok(())
}

impl FEModel {
    /// Create a model, validating ids, shapes and connectivity
    pub fn new(
        element_ids: Vec<u32>,
        node_ids: Vec<u32>,
        node_coordinates: Mat,
        stress_tensor: Mat,
        connectivity: HashMap<u32, Vec<u32>>,
    ) -> FatigueResult<Self> {
        check_unique("element", &element_ids)?;
        check_unique("node", &node_ids)?;

        if node_coordinates.nrows() != node_ids.len() || node_coordinates.ncols() != 3 {
            return Err(FatigueError::ShapeMismatch(format!(
                "node coordinates must be {}x3 for {} nodes, got {}x{}",
                node_ids.len(),
                node_ids.len(),
                node_coordinates.nrows(),
                node_coordinates.ncols()
            )));
        }
        math::check_tensor_shape("stress tensor", &stress_tensor)?;

        let known_elements: HashSet<u32> = element_ids.iter().copied().collect();
        let known_nodes: HashSet<u32> = node_ids.iter().copied().collect();
        for (element, nodes) in &connectivity {
            if !known_elements.contains(element) {
                return Err(FatigueError::ElementNotFound(*element));
            }
            if let Some(node) = nodes.iter().find(|n| !known_nodes.contains(n)) {
                return Err(FatigueError::NodeNotFound(*node));
            }
        }

        // Walk elements in id order so each node lists its elements deterministically
        let mut node_element_map: HashMap<u32, Vec<u32>> = HashMap::new();
        for element in &element_ids {
            if let Some(nodes) = connectivity.get(element) {
                for node in nodes {
                    let elements = node_element_map.entry(*node).or_default();
                    if !elements.contains(element) {
                        elements.push(*element);
                    }
                }
            }
        }

        log::debug!(
            "FE model: {} elements, {} nodes, {} stress points",
            element_ids.len(),
            node_ids.len(),
            stress_tensor.nrows()
        );

        Ok(Self {
            element_ids,
            node_ids,
            node_coordinates,
            stress_table: stress_tensor,
            column_labels: Vec::new(),
            connectivity,
            node_element_map,
            stress_envelope: None,
        })
    }

    /// Attach the min/max stress tensors of the load cycle
    pub fn with_stress_envelope(mut self, min: Mat, max: Mat) -> FatigueResult<Self> {
        math::check_tensor_shape("min stress tensor", &min)?;
        math::check_tensor_shape("max stress tensor", &max)?;
        let n = self.num_points();
        if min.nrows() != n || max.nrows() != n {
            return Err(FatigueError::ShapeMismatch(format!(
                "stress envelope rows ({} min, {} max) must match {} stress points",
                min.nrows(),
                max.nrows(),
                n
            )));
        }
        self.stress_envelope = Some(StressEnvelope { min, max });
        Ok(self)
    }

    // ========================
    // Column Append
    // ========================

    /// Append an unlabelled column to the stress table
    pub fn add_stress_column(&mut self, column: &StressVec) -> FatigueResult<()> {
        let label = format!("column_{}", self.stress_table.ncols());
        self.add_labeled_stress_column(&label, column)
    }

    /// Append a labelled column to the stress table
    ///
    /// Fails without touching the table when the column length differs from
    /// the number of stress points.
    pub fn add_labeled_stress_column(
        &mut self,
        label: &str,
        column: &StressVec,
    ) -> FatigueResult<()> {
        let n = self.num_points();
        if column.len() != n {
            return Err(FatigueError::ShapeMismatch(format!(
                "column '{}' has {} values, stress table has {} rows",
                label,
                column.len(),
                n
            )));
        }

        let at = self.stress_table.ncols();
        let table = std::mem::replace(&mut self.stress_table, Mat::zeros(0, 0));
        let mut table = table.insert_column(at, 0.0);
        table.set_column(at, column);
        self.stress_table = table;
        self.column_labels.push(label.to_string());

        log::debug!("Appended column '{}' at index {}", label, at);
        Ok(())
    }

    // ========================
    // Results Retrieval
    // ========================

    /// The six tensor components of every stress point, without appended columns
    pub fn stress_tensor(&self) -> Mat {
        self.stress_table.columns(0, TENSOR_COMPONENTS).into_owned()
    }

    /// Full stress table including appended columns
    pub fn stress_table(&self) -> &Mat {
        &self.stress_table
    }

    pub fn stress_envelope(&self) -> Option<&StressEnvelope> {
        self.stress_envelope.as_ref()
    }

    /// Number of evaluation points (rows of the stress table)
    pub fn num_points(&self) -> usize {
        self.stress_table.nrows()
    }

    /// Number of columns of the stress table
    pub fn num_columns(&self) -> usize {
        self.stress_table.ncols()
    }

    /// Copy of column `index` of the stress table
    pub fn column(&self, index: usize) -> Option<StressVec> {
        (index < self.num_columns()).then(|| self.stress_table.column(index).into_owned())
    }

    /// Labels of the appended columns, in append order
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Copy of the most recently appended column with this label
    pub fn column_by_label(&self, label: &str) -> Option<StressVec> {
        let pos = self.column_labels.iter().rposition(|l| l == label)?;
        self.column(TENSOR_COMPONENTS + pos)
    }

    /// Statistics of an appended column
    pub fn eq_stress_summary(&self, label: &str) -> Option<EqStressSummary> {
        let column = self.column_by_label(label)?;
        EqStressSummary::from_values(label, column.iter().copied())
    }

    pub fn element_ids(&self) -> &[u32] {
        &self.element_ids
    }

    pub fn node_ids(&self) -> &[u32] {
        &self.node_ids
    }

    /// Ordered node ids of an element
    pub fn element_nodes(&self, element_id: u32) -> FatigueResult<&[u32]> {
        self.connectivity
            .get(&element_id)
            .map(Vec::as_slice)
            .ok_or(FatigueError::ElementNotFound(element_id))
    }

    /// Elements connected to a node (empty for a known node without elements)
    pub fn node_elements(&self, node_id: u32) -> FatigueResult<&[u32]> {
        if !self.node_ids.contains(&node_id) {
            return Err(FatigueError::NodeNotFound(node_id));
        }
        Ok(self
            .node_element_map
            .get(&node_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }

    /// Coordinates [X, Y, Z] of a node
    pub fn node_coordinates(&self, node_id: u32) -> FatigueResult<[f64; 3]> {
        let row = self
            .node_ids
            .iter()
            .position(|&id| id == node_id)
            .ok_or(FatigueError::NodeNotFound(node_id))?;
        Ok([
            self.node_coordinates[(row, 0)],
            self.node_coordinates[(row, 1)],
            self.node_coordinates[(row, 2)],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two quads sharing an edge: nodes 1..6, elements 10 and 20
    fn two_quad_model() -> FEModel {
        let coords = Mat::from_row_slice(
            6,
            3,
            &[
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                2.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                1.0, 1.0, 0.0, //
                2.0, 1.0, 0.0,
            ],
        );
        let stress = Mat::from_row_slice(
            2,
            6,
            &[
                100.0, 20.0, 0.0, 5.0, 0.0, 0.0, //
                -40.0, 10.0, 0.0, 0.0, 0.0, 2.0,
            ],
        );
        let connectivity = HashMap::from([(10, vec![1, 2, 5, 4]), (20, vec![2, 3, 6, 5])]);

        FEModel::new(vec![10, 20], vec![1, 2, 3, 4, 5, 6], coords, stress, connectivity).unwrap()
    }

    #[test]
    fn test_node_element_map() {
        let model = two_quad_model();
        assert_eq!(model.node_elements(2).unwrap(), &[10, 20]);
        assert_eq!(model.node_elements(1).unwrap(), &[10]);
        assert_eq!(model.element_nodes(20).unwrap(), &[2, 3, 6, 5]);
        assert!(matches!(model.node_elements(99), Err(FatigueError::NodeNotFound(99))));
        assert_eq!(model.node_coordinates(6).unwrap(), [2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_append_column() {
        let mut model = two_quad_model();
        let column = StressVec::from_vec(vec![1.5, -2.5]);

        model.add_labeled_stress_column("eq", &column).unwrap();

        assert_eq!(model.num_columns(), 7);
        assert_eq!(model.num_points(), 2);
        assert_eq!(model.stress_table()[(0, 6)], 1.5);
        assert_eq!(model.stress_table()[(1, 6)], -2.5);
        assert_eq!(model.column_by_label("eq").unwrap(), column);
        // tensor part unchanged
        assert_eq!(model.stress_tensor().ncols(), 6);
        assert_eq!(model.stress_tensor()[(1, 0)], -40.0);
    }

    #[test]
    fn test_append_mismatched_column_fails() {
        let mut model = two_quad_model();
        let err = model
            .add_stress_column(&StressVec::from_vec(vec![1.0, 2.0, 3.0]))
            .unwrap_err();
        assert!(matches!(err, FatigueError::ShapeMismatch(_)));
        assert_eq!(model.num_columns(), 6);
        assert!(model.column_labels().is_empty());
    }

    #[test]
    fn test_unlabelled_column_gets_index_label() {
        let mut model = two_quad_model();
        model.add_stress_column(&StressVec::from_vec(vec![3.0, 4.0])).unwrap();
        assert_eq!(model.column_labels(), &["column_6".to_string()]);
        let summary = model.eq_stress_summary("column_6").unwrap();
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.max_point, 1);
    }

    #[test]
    fn test_rejects_invalid_models() {
        let stress = Mat::zeros(1, 6);
        let coords = Mat::zeros(2, 3);

        let err = FEModel::new(
            vec![1, 1],
            vec![1, 2],
            coords.clone(),
            stress.clone(),
            HashMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, FatigueError::DuplicateId(_)));

        let err = FEModel::new(
            vec![1],
            vec![1, 2],
            Mat::zeros(2, 2),
            stress.clone(),
            HashMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, FatigueError::ShapeMismatch(_)));

        let err = FEModel::new(
            vec![1],
            vec![1, 2],
            coords.clone(),
            Mat::zeros(1, 5),
            HashMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, FatigueError::ShapeMismatch(_)));

        let connectivity = HashMap::from([(1, vec![1, 7])]);
        let err = FEModel::new(vec![1], vec![1, 2], coords.clone(), stress.clone(), connectivity)
            .unwrap_err();
        assert!(matches!(err, FatigueError::NodeNotFound(7)));

        let connectivity = HashMap::from([(5, vec![1])]);
        let err = FEModel::new(vec![1], vec![1, 2], coords, stress, connectivity).unwrap_err();
        assert!(matches!(err, FatigueError::ElementNotFound(5)));
    }

    #[test]
    fn test_envelope_rows_must_match() {
        let model = two_quad_model();
        let err = model
            .clone()
            .with_stress_envelope(Mat::zeros(3, 6), Mat::zeros(3, 6))
            .unwrap_err();
        assert!(matches!(err, FatigueError::ShapeMismatch(_)));

        let model = model
            .with_stress_envelope(Mat::zeros(2, 6), Mat::zeros(2, 6))
            .unwrap();
        assert!(model.stress_envelope().is_some());
    }
}
