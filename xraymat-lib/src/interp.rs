/// Piecewise-linear interpolation of `(xp, fp)` at every point of `x`.
///
/// Matches `numpy.interp`: points outside `[xp[0], xp[last]]` take the
/// boundary value instead of being extrapolated. `xp` must be non-empty and
/// non-decreasing. A sample listed twice marks a step (an absorption edge):
/// at and above it the second value applies.
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    x.iter().map(|&xi| interp_one(xi, xp, fp)).collect()
}

/// Interpolate a single value.
pub fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let last = xp.len() - 1;
    if x.is_nan() {
        return f64::NAN;
    }
    if x < xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    // first index with xp[hi] > x; in 1..=last here
    let hi = xp.partition_point(|&v| v <= x);
    let lo = hi - 1;
    if xp[lo] == x {
        return fp[lo];
    }

    let t = (x - xp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + t * (fp[hi] - fp[lo])
}

/// Why `energies` cannot serve as a tabulated energy grid, if it cannot.
///
/// Energies must be finite, positive and non-decreasing. One energy may be
/// listed twice, below and above an edge, but not three times.
pub(crate) fn energy_grid_defect(energies: &[f64]) -> Option<&'static str> {
    if energies.is_empty() {
        Some("no energies")
    } else if energies.iter().any(|e| !(e.is_finite() && *e > 0.0)) {
        Some("energies must be finite and positive")
    } else if energies.windows(2).any(|w| w[1] < w[0]) {
        Some("energies decrease")
    } else if energies.windows(3).any(|w| w[0] == w[2]) {
        Some("an energy is listed more than twice")
    } else {
        None
    }
}

/// Merge several non-decreasing grids into one.
///
/// The result is the sorted, de-duplicated union of all samples that fall
/// inside the range shared by every grid. When the ranges do not overlap the
/// whole union is returned. Empty grids are ignored.
pub fn common_grid<'a>(grids: impl IntoIterator<Item = &'a [f64]>) -> Vec<f64> {
    let grids: Vec<&[f64]> = grids.into_iter().filter(|g| !g.is_empty()).collect();
    let lo = grids.iter().map(|g| g[0]).fold(f64::NEG_INFINITY, f64::max);
    let hi = grids
        .iter()
        .map(|g| g[g.len() - 1])
        .fold(f64::INFINITY, f64::min);

    let mut merged: Vec<f64> = grids.iter().flat_map(|g| g.iter().copied()).collect();
    merged.sort_by(f64::total_cmp);
    merged.dedup();

    if lo <= hi {
        merged.retain(|&e| e >= lo && e <= hi);
    }
    merged
}
