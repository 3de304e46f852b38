//! Mathematical utilities for stress tensor tables

pub mod invariants;

use nalgebra::{DMatrix, DVector};

use crate::error::{FatigueError, FatigueResult};

pub use invariants::{dang_van_reduction, manson_mcknight_reduction};

/// Table of stress components, one row per evaluation point
pub type Mat = DMatrix<f64>;
/// One scalar per evaluation point
pub type Vec = DVector<f64>;

/// Number of components in a symmetric stress tensor row
pub const TENSOR_COMPONENTS: usize = 6;

// Component order of a stress tensor row: [Sxx, Syy, Szz, Sxy, Syz, Szx]
pub const SXX: usize = 0;
pub const SYY: usize = 1;
pub const SZZ: usize = 2;
pub const SXY: usize = 3;
pub const SYZ: usize = 4;
pub const SZX: usize = 5;

/// Sign function with `sign(0) == 0`
///
/// `f64::signum` returns `1.0` for `+0.0`, which would give a purely
/// deviatoric mean state a positive equivalent mean stress.
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Sum of the normal components `Sxx + Syy + Szz` of one tensor row
pub fn hydrostatic_sum(row: &[f64; 6]) -> f64 {
    row[SXX] + row[SYY] + row[SZZ]
}

/// Von Mises type invariant of one tensor row
///
/// `0.5 * sqrt((Sxx-Syy)² + (Syy-Szz)² + (Szz-Sxx)² + 6(Sxy² + Syz² + Szx²))`
pub fn von_mises_invariant(row: &[f64; 6]) -> f64 {
    let (sxx, syy, szz) = (row[SXX], row[SYY], row[SZZ]);
    let (sxy, syz, szx) = (row[SXY], row[SYZ], row[SZX]);

    0.5 * ((sxx - syy).powi(2)
        + (syy - szz).powi(2)
        + (szz - sxx).powi(2)
        + 6.0 * (sxy.powi(2) + syz.powi(2) + szx.powi(2)))
    .sqrt()
}

/// Copy row `i` of a stress table into a fixed-size component array
///
/// The table must be at least six columns wide.
pub fn tensor_row(tensor: &Mat, i: usize) -> [f64; 6] {
    [
        tensor[(i, SXX)],
        tensor[(i, SYY)],
        tensor[(i, SZZ)],
        tensor[(i, SXY)],
        tensor[(i, SYZ)],
        tensor[(i, SZX)],
    ]
}

/// Reject tables that are not exactly six components wide
pub fn check_tensor_shape(name: &str, tensor: &Mat) -> FatigueResult<()> {
    if tensor.ncols() != TENSOR_COMPONENTS {
        return Err(FatigueError::ShapeMismatch(format!(
            "{} must have {} columns [Sxx, Syy, Szz, Sxy, Syz, Szx], got {}x{}",
            name,
            TENSOR_COMPONENTS,
            tensor.nrows(),
            tensor.ncols()
        )));
    }
    Ok(())
}

/// Reject per-point arrays of unequal length
pub fn check_same_len(what: &str, a: &Vec, b: &Vec) -> FatigueResult<()> {
    if a.len() != b.len() {
        return Err(FatigueError::ShapeMismatch(format!(
            "{}: lengths differ ({} vs {})",
            what,
            a.len(),
            b.len()
        )));
    }
    Ok(())
}
