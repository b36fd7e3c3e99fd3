//! Complex refractive index `n = 1 - δ - iβ` and linear attenuation of mixtures.

use std::f64::consts::PI;

use crate::aggregate::Spectrum;
use crate::coefficients::{Column, MassCoefficient};
use crate::constants::{ELEMENTARY_CHARGE, HBAR, R_ELECTRON_CM, SPEED_OF_LIGHT};
use crate::density::{mass_density_z, number_density_z};
use crate::elements::{self, ElementId};
use crate::error::{Result, XrayMatError, check_lengths};
use crate::registry::Registry;

/// Photon wavelength in meters, `λ = 2πħc / (E·e)` with `E` in eV.
pub fn energy_to_wavelength_m(energy_ev: f64) -> f64 {
    let energy_j = energy_ev * ELEMENTARY_CHARGE;
    let angular_frequency = energy_j / HBAR;
    2.0 * PI * SPEED_OF_LIGHT / angular_frequency
}

/// Photon wavelength in centimeters for an energy in keV.
pub fn wavelength_cm(energy_kev: f64) -> f64 {
    energy_to_wavelength_m(energy_kev * 1e3) * 1e2
}

/// `r_e λ² / 2π` in cm³; multiplied by `n·f` it gives a δ or β contribution.
fn dispersion_prefactor(energy_kev: f64) -> f64 {
    let lambda_cm = wavelength_cm(energy_kev);
    R_ELECTRON_CM / (2.0 * PI) * lambda_cm * lambda_cm
}

/// Refractive index decrement and absorption index on an energy grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RefractiveIndex {
    pub energy_kev: Vec<f64>,
    pub delta: Vec<f64>,
    pub beta: Vec<f64>,
}

impl RefractiveIndex {
    /// 1/e intensity attenuation length `λ / 4πβ` in cm; infinite where β is zero.
    pub fn attenuation_length_cm(&self) -> Vec<f64> {
        self.energy_kev
            .iter()
            .zip(&self.beta)
            .map(|(&e, &beta)| {
                if beta > 0.0 {
                    wavelength_cm(e) / (4.0 * PI * beta)
                } else {
                    f64::INFINITY
                }
            })
            .collect()
    }

    /// `n = 1 - δ - iβ` at each energy.
    #[cfg(feature = "complex")]
    pub fn complex(&self) -> Vec<num_complex::Complex64> {
        self.delta
            .iter()
            .zip(&self.beta)
            .map(|(&d, &b)| num_complex::Complex64::new(1.0 - d, -b))
            .collect()
    }
}

/// Exactly one of the two density representations.
#[derive(Debug, Clone, Copy)]
enum Densities<'a> {
    Mass(&'a [f64]),
    Number(&'a [f64]),
}

impl<'a> Densities<'a> {
    fn from_options(mass_g_cc: Option<&'a [f64]>, number_cc: Option<&'a [f64]>) -> Result<Self> {
        match (mass_g_cc, number_cc) {
            (Some(m), None) => Ok(Densities::Mass(m)),
            (None, Some(n)) => Ok(Densities::Number(n)),
            (Some(_), Some(_)) => Err(XrayMatError::ConflictingDensityRepresentation),
            (None, None) => Err(XrayMatError::MissingDensity),
        }
    }

    fn len(&self) -> usize {
        match self {
            Densities::Mass(v) | Densities::Number(v) => v.len(),
        }
    }

    fn number_cc(&self, z: &[u16]) -> Result<Vec<f64>> {
        match *self {
            Densities::Mass(m) => number_density_z(z, m),
            Densities::Number(n) => Ok(n.to_vec()),
        }
    }

    fn mass_g_cc(&self, z: &[u16]) -> Result<Vec<f64>> {
        match *self {
            Densities::Mass(m) => Ok(m.to_vec()),
            Densities::Number(n) => mass_density_z(z, n),
        }
    }
}

impl Registry {
    /// δ and β of a mixture given as either per-element mass densities (g/cc)
    /// or number densities (1/cc), never both. Energies are in keV.
    pub fn refractive_index(
        &self,
        ids: &[ElementId],
        mass_g_cc: Option<&[f64]>,
        number_cc: Option<&[f64]>,
        energies: Option<&[f64]>,
    ) -> Result<RefractiveIndex> {
        let densities = Densities::from_options(mass_g_cc, number_cc)?;
        check_lengths(ids.len(), densities.len())?;
        let z = elements::resolve_all(ids)?;
        let n_cc = densities.number_cc(&z)?;
        self.refractive_index_z(&z, &n_cc, energies)
    }

    /// Linear attenuation coefficient μ (1/cm) of a mixture, from the total
    /// mass attenuation weighted by mass density.
    pub fn linear_attenuation(
        &self,
        ids: &[ElementId],
        mass_g_cc: Option<&[f64]>,
        number_cc: Option<&[f64]>,
        energies: Option<&[f64]>,
    ) -> Result<Spectrum> {
        let densities = Densities::from_options(mass_g_cc, number_cc)?;
        check_lengths(ids.len(), densities.len())?;
        let z = elements::resolve_all(ids)?;
        let g_cc = densities.mass_g_cc(&z)?;
        self.weighted_column(&z, &g_cc, MassCoefficient::Total.column(), energies)
    }

    pub(crate) fn refractive_index_z(
        &self,
        z: &[u16],
        n_cc: &[f64],
        energies: Option<&[f64]>,
    ) -> Result<RefractiveIndex> {
        let f1 = self.weighted_column(z, n_cc, Column::F1, energies)?;
        let f2 = self.weighted_column(z, n_cc, Column::F2, Some(&f1.energy_kev))?;

        let prefactor: Vec<f64> = f1
            .energy_kev
            .iter()
            .map(|&e| dispersion_prefactor(e))
            .collect();
        let delta = f1.values.iter().zip(&prefactor).map(|(s, p)| s * p).collect();
        let beta = f2.values.iter().zip(&prefactor).map(|(s, p)| s * p).collect();

        Ok(RefractiveIndex {
            energy_kev: f1.energy_kev,
            delta,
            beta,
        })
    }
}
