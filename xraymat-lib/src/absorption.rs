//! Measured attenuation curves of named standard materials.
//!
//! Unlike the element coefficient tables these are tabulated for the whole
//! material, so no mixing rule is involved: the curve is interpolated as is.

use std::fmt;
use std::str::FromStr;

use xraymat_data::AbsorptionRecord;

use crate::aggregate::{Spectrum, check_energies};
use crate::error::{Result, XrayMatError};
use crate::interp::{common_grid, energy_grid_defect, interp};
use crate::registry::Registry;

/// A column of a standard-material absorption table (both in cm²/g).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Absorption {
    /// Mass attenuation coefficient μ/ρ.
    Attenuation,
    /// Mass energy-absorption coefficient μ_en/ρ.
    EnergyAbsorption,
}

impl Absorption {
    pub fn name(self) -> &'static str {
        match self {
            Absorption::Attenuation => "mu_rho_cm2_g",
            Absorption::EnergyAbsorption => "muen_rho_cm2_g",
        }
    }
}

impl fmt::Display for Absorption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Absorption {
    type Err = XrayMatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mu" | "mu_rho_cm2_g" => Ok(Absorption::Attenuation),
            "muen" | "muen_rho_cm2_g" => Ok(Absorption::EnergyAbsorption),
            _ => Err(XrayMatError::InvalidProperty(s.to_string())),
        }
    }
}

/// Validated absorption table for one standard material.
#[derive(Debug, Clone)]
pub struct AbsorptionTable {
    record: AbsorptionRecord,
}

impl AbsorptionTable {
    pub fn new(record: AbsorptionRecord) -> Result<Self> {
        let n = record.energy_kev.len();
        for (column, found) in [
            (Absorption::Attenuation, record.mu_rho.len()),
            (Absorption::EnergyAbsorption, record.muen_rho.len()),
        ] {
            if found != n {
                return Err(XrayMatError::DataError(format!(
                    "column {column} of {:?} has {found} rows, expected {n}",
                    record.material
                )));
            }
        }
        if let Some(defect) = energy_grid_defect(&record.energy_kev) {
            return Err(XrayMatError::DataError(format!(
                "absorption table for {:?}: {defect}",
                record.material
            )));
        }
        Ok(AbsorptionTable { record })
    }

    pub fn material(&self) -> &str {
        &self.record.material
    }

    pub fn record(&self) -> &AbsorptionRecord {
        &self.record
    }

    /// Native energy samples (keV).
    pub fn energies(&self) -> &[f64] {
        &self.record.energy_kev
    }

    pub fn energy_range(&self) -> (f64, f64) {
        let e = self.energies();
        (e[0], e[e.len() - 1])
    }

    pub fn column(&self, column: Absorption) -> &[f64] {
        match column {
            Absorption::Attenuation => &self.record.mu_rho,
            Absorption::EnergyAbsorption => &self.record.muen_rho,
        }
    }

    /// Clamped linear interpolation of `column` at `energies` (keV).
    pub fn interpolate(&self, column: Absorption, energies: &[f64]) -> Vec<f64> {
        interp(energies, self.energies(), self.column(column))
    }
}

impl Registry {
    /// Tabulated mass coefficient (cm²/g) of a standard material.
    ///
    /// Without `energies` the table's own samples are used, each edge energy
    /// once, where the above-edge value applies.
    pub fn standard_absorption(
        &self,
        name: &str,
        column: Absorption,
        energies: Option<&[f64]>,
    ) -> Result<Spectrum> {
        let table = self.absorption_table(name)?;
        let grid = match energies {
            Some(e) => {
                check_energies(e)?;
                e.to_vec()
            }
            None => common_grid([table.energies()]),
        };
        let values = table.interpolate(column, &grid);
        Ok(Spectrum {
            energy_kev: grid,
            values,
        })
    }

    /// Like [`Registry::standard_absorption`], naming the column as a string.
    pub fn standard_absorption_named(
        &self,
        name: &str,
        column: &str,
        energies: Option<&[f64]>,
    ) -> Result<Spectrum> {
        self.standard_absorption(name, column.parse()?, energies)
    }
}
