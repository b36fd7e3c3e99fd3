use std::fmt;
use std::str::FromStr;

use xraymat_data::CoefficientRecord;

use crate::elements::{self, Element};
use crate::error::{Result, XrayMatError};
use crate::interp::{energy_grid_defect, interp};

/// A column of a per-element coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    F1,
    F2,
    MuPhoto,
    SigmaScatter,
    MuTotal,
    MuPhotoK,
    WavelengthNm,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::F1,
        Column::F2,
        Column::MuPhoto,
        Column::SigmaScatter,
        Column::MuTotal,
        Column::MuPhotoK,
        Column::WavelengthNm,
    ];

    /// Column header used in the raw element tables.
    pub fn name(self) -> &'static str {
        match self {
            Column::F1 => "f1_e_atom",
            Column::F2 => "f2_e_atom",
            Column::MuPhoto => "mu_rho_pe_cm2_g",
            Column::SigmaScatter => "sigma_rho_cm2_g",
            Column::MuTotal => "mu_rho_tot_cm2_g",
            Column::MuPhotoK => "mu_rho_K_cm2_g",
            Column::WavelengthNm => "lambda_nm",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = XrayMatError;

    fn from_str(s: &str) -> Result<Self> {
        Column::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| XrayMatError::InvalidProperty(s.to_string()))
    }
}

/// The mass coefficients that can be summed over a mixture (all in cm²/g).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassCoefficient {
    /// Total attenuation, photoelectric plus scattering.
    Total,
    Photo,
    /// K-shell share of the photoelectric attenuation.
    PhotoK,
    Scatter,
}

impl MassCoefficient {
    pub fn column(self) -> Column {
        match self {
            MassCoefficient::Total => Column::MuTotal,
            MassCoefficient::Photo => Column::MuPhoto,
            MassCoefficient::PhotoK => Column::MuPhotoK,
            MassCoefficient::Scatter => Column::SigmaScatter,
        }
    }
}

impl FromStr for MassCoefficient {
    type Err = XrayMatError;

    /// Accepts the raw column name or the short property name
    /// (`mu`, `mu_pe`, `mu_pe_k`, `sigma`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mu" | "mu_rho_tot_cm2_g" => Ok(MassCoefficient::Total),
            "mu_pe" | "mu_rho_pe_cm2_g" => Ok(MassCoefficient::Photo),
            "mu_pe_k" | "mu_rho_K_cm2_g" => Ok(MassCoefficient::PhotoK),
            "sigma" | "sigma_rho_cm2_g" => Ok(MassCoefficient::Scatter),
            _ => Err(XrayMatError::InvalidProperty(s.to_string())),
        }
    }
}

/// Validated coefficient table for one element.
#[derive(Debug, Clone)]
pub struct CoefficientTable {
    element: &'static Element,
    record: CoefficientRecord,
}

impl CoefficientTable {
    /// Check a raw record: known symbol, non-empty, equal column lengths and
    /// positive, non-decreasing energies. An absorption edge appears as one
    /// energy listed twice, with the pre-edge row first.
    pub fn new(record: CoefficientRecord) -> Result<Self> {
        let element = elements::by_symbol(&record.element)
            .ok_or_else(|| XrayMatError::UnknownElement(record.element.clone()))?;

        let n = record.energy_kev.len();
        if n == 0 {
            return Err(XrayMatError::DataError(format!(
                "empty coefficient table for {}",
                record.element
            )));
        }
        let table = CoefficientTable { element, record };
        for column in Column::ALL {
            let found = table.column(column).len();
            if found != n {
                return Err(XrayMatError::DataError(format!(
                    "column {column} of {} has {found} rows, expected {n}",
                    table.record.element
                )));
            }
        }
        if let Some(defect) = energy_grid_defect(&table.record.energy_kev) {
            return Err(XrayMatError::DataError(format!(
                "coefficient table for {}: {defect}",
                table.record.element
            )));
        }
        Ok(table)
    }

    pub fn element(&self) -> &'static Element {
        self.element
    }

    pub fn record(&self) -> &CoefficientRecord {
        &self.record
    }

    /// Native energy samples (keV).
    pub fn energies(&self) -> &[f64] {
        &self.record.energy_kev
    }

    /// Lowest and highest tabulated energy (keV).
    pub fn energy_range(&self) -> (f64, f64) {
        let e = self.energies();
        (e[0], e[e.len() - 1])
    }

    pub fn len(&self) -> usize {
        self.record.energy_kev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.energy_kev.is_empty()
    }

    pub fn column(&self, column: Column) -> &[f64] {
        let r = &self.record;
        match column {
            Column::F1 => &r.f1,
            Column::F2 => &r.f2,
            Column::MuPhoto => &r.mu_photo,
            Column::SigmaScatter => &r.sigma_scatter,
            Column::MuTotal => &r.mu_total,
            Column::MuPhotoK => &r.mu_photo_k,
            Column::WavelengthNm => &r.wavelength_nm,
        }
    }

    /// Linear interpolation of `column` at `energies` (keV), clamped to the
    /// table's end points.
    pub fn interpolate(&self, column: Column, energies: &[f64]) -> Vec<f64> {
        interp(energies, self.energies(), self.column(column))
    }
}
