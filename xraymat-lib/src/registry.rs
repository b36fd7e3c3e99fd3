use std::collections::HashMap;
use std::path::Path;

use xraymat_data::{CompositionRecord, ReferenceData, VersionRecord};

use crate::absorption::AbsorptionTable;
use crate::coefficients::CoefficientTable;
use crate::elements::{self, Element, ElementId};
use crate::error::{Result, XrayMatError, check_lengths};

/// Environment variable naming the compressed reference blob for [`Registry::from_env`].
pub const DATA_ENV_VAR: &str = "XRAYMAT_DATA";

/// Read-only reference data shared by every calculation.
///
/// Built once, then passed by reference. Holds the validated coefficient
/// tables keyed by atomic number, the standard composition table and the
/// standard-material absorption tables; the element table itself is static.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    version: Vec<VersionRecord>,
    coefficients: HashMap<u16, CoefficientTable>,
    compositions: Vec<CompositionRecord>,
    composition_index: HashMap<String, usize>,
    absorption: Vec<AbsorptionTable>,
    absorption_index: HashMap<String, usize>,
}

impl Registry {
    /// Validate and index reference data.
    pub fn new(data: ReferenceData) -> Result<Self> {
        let mut coefficients = HashMap::with_capacity(data.coefficients.len());
        for record in data.coefficients {
            let table = CoefficientTable::new(record)?;
            let z = table.element().atomic_number;
            if coefficients.insert(z, table).is_some() {
                return Err(XrayMatError::DataError(format!(
                    "duplicate coefficient table for Z={z}"
                )));
            }
        }

        let mut composition_index = HashMap::with_capacity(data.compositions.len());
        for (i, record) in data.compositions.iter().enumerate() {
            validate_composition(record)?;
            if composition_index.insert(record.material.clone(), i).is_some() {
                return Err(XrayMatError::DataError(format!(
                    "duplicate standard composition {:?}",
                    record.material
                )));
            }
        }

        let absorption = data
            .absorption
            .into_iter()
            .map(AbsorptionTable::new)
            .collect::<Result<Vec<_>>>()?;
        let mut absorption_index = HashMap::with_capacity(absorption.len());
        for (i, table) in absorption.iter().enumerate() {
            if absorption_index.insert(table.material().to_string(), i).is_some() {
                return Err(XrayMatError::DataError(format!(
                    "duplicate absorption table {:?}",
                    table.material()
                )));
            }
        }

        tracing::debug!(
            coefficient_tables = coefficients.len(),
            compositions = data.compositions.len(),
            absorption_tables = absorption.len(),
            "built reference registry"
        );

        Ok(Registry {
            version: data.version,
            coefficients,
            compositions: data.compositions,
            composition_index,
            absorption,
            absorption_index,
        })
    }

    /// A registry with the element table only; coefficient lookups fail.
    pub fn elements_only() -> Self {
        Self::default()
    }

    /// Decode a zstd-compressed postcard blob produced by `xraymat-generate`.
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(bytes)
            .map_err(|e| XrayMatError::DataError(format!("zstd header: {e}")))?;
        let mut decompressed = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut decompressed)
            .map_err(|e| XrayMatError::DataError(format!("zstd stream: {e}")))?;
        tracing::debug!(
            compressed = bytes.len(),
            decompressed = decompressed.len(),
            "decoded reference blob"
        );

        let data: ReferenceData = postcard::from_bytes(&decompressed)
            .map_err(|e| XrayMatError::DataError(format!("postcard: {e}")))?;
        Self::new(data)
    }

    /// Load a compressed blob from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            XrayMatError::DataError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_compressed(&bytes)
    }

    /// Load the blob named by the `XRAYMAT_DATA` environment variable.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(DATA_ENV_VAR).ok_or_else(|| {
            XrayMatError::DataError(format!("{DATA_ENV_VAR} is not set"))
        })?;
        Self::open(path)
    }

    pub fn version(&self) -> &[VersionRecord] {
        &self.version
    }

    pub fn element(&self, id: &ElementId) -> Result<&'static Element> {
        elements::lookup(id)
    }

    pub fn atomic_number(&self, id: &ElementId) -> Result<u16> {
        Ok(self.element(id)?.atomic_number)
    }

    pub fn symbol(&self, id: &ElementId) -> Result<&'static str> {
        Ok(self.element(id)?.symbol)
    }

    /// Atomic mass in amu (g/mol).
    pub fn molar_mass(&self, id: &ElementId) -> Result<f64> {
        Ok(self.element(id)?.atomic_mass)
    }

    /// Natural density in g/cc.
    pub fn density(&self, id: &ElementId) -> Result<f64> {
        Ok(self.element(id)?.density)
    }

    /// Coefficient table for an element.
    pub fn coefficients(&self, id: &ElementId) -> Result<&CoefficientTable> {
        let z = self.atomic_number(id)?;
        self.coefficients_by_z(z)
    }

    pub(crate) fn coefficients_by_z(&self, z: u16) -> Result<&CoefficientTable> {
        self.coefficients.get(&z).ok_or_else(|| {
            let name = elements::by_atomic_number(z)
                .map(|e| e.symbol.to_string())
                .unwrap_or_else(|| z.to_string());
            XrayMatError::UnknownElement(name)
        })
    }

    pub fn has_coefficients(&self, id: &ElementId) -> bool {
        self.coefficients(id).is_ok()
    }

    /// Names of the standard materials, in table order.
    pub fn standard_materials(&self) -> Vec<&str> {
        self.compositions
            .iter()
            .map(|c| c.material.as_str())
            .collect()
    }

    /// Composition of a standard material. Exact names are tried first, then
    /// a case-insensitive match.
    pub fn standard_composition(&self, name: &str) -> Result<&CompositionRecord> {
        if let Some(&i) = self.composition_index.get(name) {
            return Ok(&self.compositions[i]);
        }
        self.compositions
            .iter()
            .find(|c| c.material.eq_ignore_ascii_case(name))
            .ok_or_else(|| XrayMatError::UnknownMaterial(name.to_string()))
    }

    /// Names of the materials with a tabulated absorption curve, in table order.
    pub fn absorption_materials(&self) -> Vec<&str> {
        self.absorption.iter().map(|t| t.material()).collect()
    }

    /// Absorption table of a standard material, matched like
    /// [`Registry::standard_composition`].
    pub fn absorption_table(&self, name: &str) -> Result<&AbsorptionTable> {
        if let Some(&i) = self.absorption_index.get(name) {
            return Ok(&self.absorption[i]);
        }
        self.absorption
            .iter()
            .find(|t| t.material().eq_ignore_ascii_case(name))
            .ok_or_else(|| XrayMatError::UnknownMaterial(name.to_string()))
    }
}

fn validate_composition(record: &CompositionRecord) -> Result<()> {
    check_lengths(record.z.len(), record.fraction.len())?;
    for &z in &record.z {
        elements::lookup(&ElementId::AtomicNumber(z))?;
    }
    if !(record.density_g_cc.is_finite() && record.density_g_cc >= 0.0) {
        return Err(XrayMatError::InvalidDensity(record.density_g_cc));
    }
    let total: f64 = record.fraction.iter().sum();
    if (total - 1.0).abs() > 0.01 {
        tracing::warn!(
            material = %record.material,
            total,
            "mass fractions do not sum to 1"
        );
    }
    Ok(())
}
