//! Conversion between per-element mass density (g/cc) and number density (1/cc).

use crate::constants::ATOMIC_MASS_G;
use crate::elements::{self, ElementId};
use crate::error::{Result, check_lengths};

/// Mass of one atom of element `z` in grams.
pub(crate) fn atom_mass_g(z: u16) -> Result<f64> {
    Ok(elements::lookup(&ElementId::AtomicNumber(z))?.atomic_mass * ATOMIC_MASS_G)
}

/// Number densities (1/cc) from mass densities (g/cc).
///
/// # Examples
/// ```
/// use xraymat::density::number_density;
/// let n = number_density(&["H".into(), "O".into()], &[1.0, 2.0]).unwrap();
/// assert!((n[0] / 5.975e23 - 1.0).abs() < 1e-3);
/// ```
pub fn number_density(ids: &[ElementId], density_g_cc: &[f64]) -> Result<Vec<f64>> {
    check_lengths(ids.len(), density_g_cc.len())?;
    let z = elements::resolve_all(ids)?;
    number_density_z(&z, density_g_cc)
}

/// Mass densities (g/cc) from number densities (1/cc).
pub fn mass_density(ids: &[ElementId], number_density_cc: &[f64]) -> Result<Vec<f64>> {
    check_lengths(ids.len(), number_density_cc.len())?;
    let z = elements::resolve_all(ids)?;
    mass_density_z(&z, number_density_cc)
}

pub(crate) fn number_density_z(z: &[u16], density_g_cc: &[f64]) -> Result<Vec<f64>> {
    check_lengths(z.len(), density_g_cc.len())?;
    z.iter()
        .zip(density_g_cc)
        .map(|(&z, &rho)| Ok(rho / atom_mass_g(z)?))
        .collect()
}

pub(crate) fn mass_density_z(z: &[u16], number_density_cc: &[f64]) -> Result<Vec<f64>> {
    check_lengths(z.len(), number_density_cc.len())?;
    z.iter()
        .zip(number_density_cc)
        .map(|(&z, &n)| Ok(n * atom_mass_g(z)?))
        .collect()
}
