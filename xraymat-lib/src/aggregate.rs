//! Density-weighted sums of per-element coefficient curves.

use crate::coefficients::{CoefficientTable, Column, MassCoefficient};
use crate::elements::{self, ElementId};
use crate::error::{Result, XrayMatError, check_lengths};
use crate::interp::common_grid;
use crate::registry::Registry;

/// Values of a quantity on an energy grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub energy_kev: Vec<f64>,
    pub values: Vec<f64>,
}

impl Registry {
    /// Mixture value of a mass coefficient, `Σ coefficient_i(E) · ρ_i`.
    ///
    /// With mass densities in g/cc the result is a linear coefficient in 1/cm.
    /// When `energies` is `None` the grid is the union of the constituents'
    /// native samples inside their common energy range (see
    /// [`crate::interp::common_grid`]).
    pub fn mass_coefficient(
        &self,
        ids: &[ElementId],
        density_g_cc: &[f64],
        coefficient: MassCoefficient,
        energies: Option<&[f64]>,
    ) -> Result<Spectrum> {
        check_lengths(ids.len(), density_g_cc.len())?;
        let z = elements::resolve_all(ids)?;
        self.weighted_column(&z, density_g_cc, coefficient.column(), energies)
    }

    /// Like [`Registry::mass_coefficient`], naming the coefficient as a string
    /// (`"mu"`, `"mu_rho_pe_cm2_g"`, ...). Unsupported names fail with
    /// `InvalidProperty`.
    pub fn mass_coefficient_named(
        &self,
        ids: &[ElementId],
        density_g_cc: &[f64],
        coefficient: &str,
        energies: Option<&[f64]>,
    ) -> Result<Spectrum> {
        let coefficient: MassCoefficient = coefficient.parse()?;
        self.mass_coefficient(ids, density_g_cc, coefficient, energies)
    }

    /// Energy grid used for a set of elements when none is given.
    pub fn default_energy_grid(&self, ids: &[ElementId]) -> Result<Vec<f64>> {
        let z = elements::resolve_all(ids)?;
        let tables = self.tables(&z)?;
        Ok(common_grid(tables.iter().map(|t| t.energies())))
    }

    pub(crate) fn tables(&self, z: &[u16]) -> Result<Vec<&CoefficientTable>> {
        z.iter().map(|&z| self.coefficients_by_z(z)).collect()
    }

    /// `Σ weight_i · column_i(E)` over already-resolved atomic numbers.
    pub(crate) fn weighted_column(
        &self,
        z: &[u16],
        weights: &[f64],
        column: Column,
        energies: Option<&[f64]>,
    ) -> Result<Spectrum> {
        check_lengths(z.len(), weights.len())?;
        let tables = self.tables(z)?;
        let grid = match energies {
            Some(e) => {
                check_energies(e)?;
                e.to_vec()
            }
            None => {
                let grid = common_grid(tables.iter().map(|t| t.energies()));
                tracing::debug!(
                    elements = z.len(),
                    points = grid.len(),
                    "derived default energy grid"
                );
                grid
            }
        };
        let values = weighted_sum(&tables, weights, column, &grid);
        Ok(Spectrum {
            energy_kev: grid,
            values,
        })
    }
}

pub(crate) fn check_energies(energies: &[f64]) -> Result<()> {
    match energies.iter().find(|e| !(e.is_finite() && **e > 0.0)) {
        Some(&bad) => Err(XrayMatError::InvalidEnergy(bad)),
        None => Ok(()),
    }
}

fn scaled(table: &CoefficientTable, weight: f64, column: Column, grid: &[f64]) -> Vec<f64> {
    let mut values = table.interpolate(column, grid);
    for v in &mut values {
        *v *= weight;
    }
    values
}

fn add_into(mut acc: Vec<f64>, other: Vec<f64>) -> Vec<f64> {
    for (a, b) in acc.iter_mut().zip(other) {
        *a += b;
    }
    acc
}

#[cfg(not(feature = "parallel"))]
fn weighted_sum(
    tables: &[&CoefficientTable],
    weights: &[f64],
    column: Column,
    grid: &[f64],
) -> Vec<f64> {
    tables
        .iter()
        .zip(weights)
        .map(|(table, &w)| scaled(table, w, column, grid))
        .fold(vec![0.0; grid.len()], add_into)
}

#[cfg(feature = "parallel")]
fn weighted_sum(
    tables: &[&CoefficientTable],
    weights: &[f64],
    column: Column,
    grid: &[f64],
) -> Vec<f64> {
    use rayon::prelude::*;

    tables
        .par_iter()
        .zip(weights.par_iter())
        .map(|(table, &w)| scaled(table, w, column, grid))
        .reduce(|| vec![0.0; grid.len()], add_into)
}
