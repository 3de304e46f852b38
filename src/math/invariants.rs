//! Reduction of multiaxial stress tensor tables to scalar invariants
//!
//! Every function here is pure and evaluates each row independently.

use super::{
    check_tensor_shape, hydrostatic_sum, sign, tensor_row, von_mises_invariant, Mat, Vec, SXX,
    SXY, SYY, SYZ, SZX, SZZ,
};
use crate::error::{FatigueError, FatigueResult};

/// Manson-McKnight reduction of a min/max tensor pair
///
/// For every point the mean tensor `(min + max) / 2` and amplitude tensor
/// `(max - min) / 2` are reduced with the von Mises type invariant. The mean
/// invariant takes the sign of the hydrostatic mean `Sxx + Syy + Szz`, which is
/// zero when that sum is exactly zero. The amplitude is never signed.
///
/// # Returns
/// `(eq_mean, eq_amplitude)`, one value per row
pub fn manson_mcknight_reduction(
    min_tensor: &Mat,
    max_tensor: &Mat,
) -> FatigueResult<(Vec, Vec)> {
    check_tensor_shape("min stress tensor", min_tensor)?;
    check_tensor_shape("max stress tensor", max_tensor)?;
    if min_tensor.nrows() != max_tensor.nrows() {
        return Err(FatigueError::ShapeMismatch(format!(
            "min and max stress tensors have {} and {} rows",
            min_tensor.nrows(),
            max_tensor.nrows()
        )));
    }

    let mean_tensor = (min_tensor + max_tensor) / 2.0;
    let amp_tensor = (max_tensor - min_tensor) / 2.0;

    let n = mean_tensor.nrows();
    let mut eq_mean = Vec::zeros(n);
    let mut eq_amp = Vec::zeros(n);

    for i in 0..n {
        let mean = tensor_row(&mean_tensor, i);
        let amp = tensor_row(&amp_tensor, i);

        eq_mean[i] = sign(hydrostatic_sum(&mean)) * von_mises_invariant(&mean);
        eq_amp[i] = von_mises_invariant(&amp);
    }

    log::debug!("Manson-McKnight reduction over {} points", n);
    Ok((eq_mean, eq_amp))
}

/// Dang Van combination of shear and hydrostatic terms
///
/// `tau_max + alpha * p` with `p = -(Sxx + Syy + Szz) / 3` and
/// `tau_max = sqrt(J2)` of the deviatoric tensor. `tau_limit` is the pure
/// shear fatigue limit the caller compares the result against; it does not
/// enter the returned value.
pub fn dang_van_reduction(stress_tensor: &Mat, alpha: f64, tau_limit: f64) -> FatigueResult<Vec> {
    check_tensor_shape("stress tensor", stress_tensor)?;

    let n = stress_tensor.nrows();
    let mut eq_stress = Vec::zeros(n);

    for i in 0..n {
        let s = tensor_row(stress_tensor, i);
        let p = -hydrostatic_sum(&s) / 3.0;

        let dxx = s[SXX] + p;
        let dyy = s[SYY] + p;
        let dzz = s[SZZ] + p;

        let j2 = 0.5 * (dxx.powi(2) + dyy.powi(2) + dzz.powi(2))
            + s[SXY].powi(2)
            + s[SYZ].powi(2)
            + s[SZX].powi(2);

        eq_stress[i] = j2.sqrt() + alpha * p;
    }

    log::debug!(
        "Dang Van reduction over {} points (alpha={}, tau_limit={})",
        n,
        alpha,
        tau_limit
    );
    Ok(eq_stress)
}
