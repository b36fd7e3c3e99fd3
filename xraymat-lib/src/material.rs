use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use xraymat_data::CompositionRecord;

use crate::aggregate::Spectrum;
use crate::coefficients::MassCoefficient;
use crate::density::{mass_density_z, number_density_z};
use crate::elements::{self, DENSE_LEN, ElementId};
use crate::error::{Result, XrayMatError, check_lengths};
use crate::refractive::RefractiveIndex;
use crate::registry::Registry;
use crate::stoichiometry::Stoichiometry;

/// Per-element mass densities making up a material.
///
/// A material is a list of atomic numbers with the partial density (g/cc) of
/// each; the overall density is their sum. Each element appears at most once.
/// Apart from [`Material::set_density`] every operation returns a new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MaterialRepr", into = "MaterialRepr")]
pub struct Material {
    z: Vec<u16>,
    g_cc: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct MaterialRepr {
    z: Vec<u16>,
    g_cc: Vec<f64>,
}

impl TryFrom<MaterialRepr> for Material {
    type Error = XrayMatError;

    fn try_from(repr: MaterialRepr) -> Result<Self> {
        Material::from_z(&repr.z, &repr.g_cc)
    }
}

impl From<Material> for MaterialRepr {
    fn from(m: Material) -> Self {
        MaterialRepr { z: m.z, g_cc: m.g_cc }
    }
}

fn check_density(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(XrayMatError::InvalidDensity(value))
    }
}

impl Material {
    /// Build from element identifiers and matching mass densities (g/cc).
    ///
    /// Repeated elements are merged by adding their densities.
    pub fn new(ids: &[ElementId], density_g_cc: &[f64]) -> Result<Self> {
        check_lengths(ids.len(), density_g_cc.len())?;
        let z = elements::resolve_all(ids)?;
        Self::from_z(&z, density_g_cc)
    }

    pub(crate) fn from_z(z: &[u16], density_g_cc: &[f64]) -> Result<Self> {
        check_lengths(z.len(), density_g_cc.len())?;
        let mut material = Material::default();
        for (&z, &rho) in z.iter().zip(density_g_cc) {
            elements::lookup(&ElementId::AtomicNumber(z))?;
            let rho = check_density(rho)?;
            match material.z.iter().position(|&existing| existing == z) {
                Some(i) => material.g_cc[i] += rho,
                None => {
                    material.z.push(z);
                    material.g_cc.push(rho);
                }
            }
        }
        Ok(material)
    }

    /// A pure element, at its natural density unless one is given.
    pub fn from_element(id: impl Into<ElementId>, density_g_cc: Option<f64>) -> Result<Self> {
        let element = elements::lookup(&id.into())?;
        let rho = density_g_cc.unwrap_or(element.density);
        Self::from_z(&[element.atomic_number], &[rho])
    }

    /// A compound from its formula and total density (1.0 g/cc when omitted).
    ///
    /// The formula's atom counts become number densities at the given total
    /// density, which are then converted to per-element mass densities.
    pub fn from_compound(formula: &str, density_g_cc: Option<f64>) -> Result<Self> {
        let total = check_density(density_g_cc.unwrap_or(1.0))?;
        let stoichiometry = Stoichiometry::parse(formula)?;
        let z = stoichiometry.atomic_numbers();
        let n_cc = stoichiometry.number_densities(total);
        let g_cc = mass_density_z(&z, &n_cc)?;
        Self::from_z(&z, &g_cc)
    }

    /// From a dense array where index `i` holds the density of element `i + 1`.
    /// Zero entries are treated as absent.
    pub fn from_array(density_g_cc: &[f64]) -> Result<Self> {
        if density_g_cc.len() > DENSE_LEN {
            return Err(XrayMatError::LengthMismatch {
                expected: DENSE_LEN,
                found: density_g_cc.len(),
            });
        }
        let mut z = Vec::new();
        let mut g_cc = Vec::new();
        for (i, &rho) in density_g_cc.iter().enumerate() {
            if check_density(rho)? != 0.0 {
                z.push(i as u16 + 1);
                g_cc.push(rho);
            }
        }
        Self::from_z(&z, &g_cc)
    }

    /// From `(element, density)` pairs, e.g. a symbol-to-density map.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<ElementId>,
    {
        let (ids, g_cc): (Vec<ElementId>, Vec<f64>) =
            pairs.into_iter().map(|(k, v)| (k.into(), v)).unzip();
        Self::new(&ids, &g_cc)
    }

    /// Per-element density is the overall density times each mass fraction.
    pub fn from_composition(record: &CompositionRecord) -> Result<Self> {
        check_lengths(record.z.len(), record.fraction.len())?;
        let g_cc: Vec<f64> = record
            .fraction
            .iter()
            .map(|f| record.density_g_cc * f)
            .collect();
        Self::from_z(&record.z, &g_cc)
    }

    /// A named material from the registry's standard composition table.
    pub fn from_standard(registry: &Registry, name: &str) -> Result<Self> {
        Self::from_composition(registry.standard_composition(name)?)
    }

    pub fn atomic_numbers(&self) -> &[u16] {
        &self.z
    }

    /// Partial densities (g/cc), parallel to [`Material::atomic_numbers`].
    pub fn densities(&self) -> &[f64] {
        &self.g_cc
    }

    pub fn element_ids(&self) -> Vec<ElementId> {
        self.z.iter().map(|&z| ElementId::AtomicNumber(z)).collect()
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.z
            .iter()
            .filter_map(|&z| elements::by_atomic_number(z))
            .map(|e| e.symbol)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// `(atomic number, density)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.z.iter().copied().zip(self.g_cc.iter().copied())
    }

    pub fn to_pairs(&self) -> Vec<(u16, f64)> {
        self.iter().collect()
    }

    /// Partial density of one element, zero when absent.
    pub fn density_of(&self, id: &ElementId) -> Result<f64> {
        let z = elements::lookup(id)?.atomic_number;
        Ok(self
            .iter()
            .find(|&(existing, _)| existing == z)
            .map_or(0.0, |(_, rho)| rho))
    }

    /// Dense representation; index `z - 1` holds the density of element `z`.
    pub fn to_array(&self) -> [f64; DENSE_LEN] {
        let mut dense = [0.0; DENSE_LEN];
        for (z, rho) in self.iter() {
            dense[usize::from(z) - 1] = rho;
        }
        dense
    }

    /// Overall density (g/cc).
    pub fn density(&self) -> f64 {
        self.g_cc.iter().sum()
    }

    /// Copy rescaled to a total density, keeping the elemental mass ratios.
    pub fn with_density(&self, density_g_cc: f64) -> Result<Self> {
        let mut material = self.clone();
        material.set_density(density_g_cc)?;
        Ok(material)
    }

    /// Rescale in place. Clones made earlier are independent and keep their
    /// old densities.
    pub fn set_density(&mut self, density_g_cc: f64) -> Result<()> {
        let target = check_density(density_g_cc)?;
        let current = self.density();
        if current <= 0.0 {
            return Err(XrayMatError::InvalidDensity(current));
        }
        let multiplier = target / current;
        for rho in &mut self.g_cc {
            *rho *= multiplier;
        }
        Ok(())
    }

    /// Keep only the listed elements, dropping everything else.
    pub fn select(&self, ids: &[ElementId]) -> Result<Self> {
        let keep = elements::resolve_all(ids)?;
        let (z, g_cc): (Vec<u16>, Vec<f64>) = self.iter().filter(|(z, _)| keep.contains(z)).unzip();
        Ok(Material { z, g_cc })
    }

    /// Superpose partial mass densities element by element. This is what `+` does.
    pub fn add_densities(&self, other: &Material) -> Material {
        let mut dense = self.to_array();
        for (z, rho) in other.iter() {
            dense[usize::from(z) - 1] += rho;
        }
        Material::dense_unchecked(&dense)
    }

    /// Superpose number densities element by element and convert back to
    /// mass densities.
    ///
    /// Since each element has one atomic mass this agrees with
    /// [`Material::add_densities`] up to rounding.
    pub fn add_number_densities(&self, other: &Material) -> Result<Material> {
        let mut dense_n = [0.0; DENSE_LEN];
        for m in [self, other] {
            for (z, n) in m.z.iter().zip(number_density_z(&m.z, &m.g_cc)?) {
                dense_n[usize::from(*z) - 1] += n;
            }
        }
        let (z, n_cc): (Vec<u16>, Vec<f64>) = (1..=DENSE_LEN as u16)
            .zip(dense_n)
            .filter(|&(_, n)| n != 0.0)
            .unzip();
        let g_cc = mass_density_z(&z, &n_cc)?;
        Material::from_z(&z, &g_cc)
    }

    /// Dense array whose entries are already known to be valid densities.
    pub(crate) fn dense_unchecked(dense: &[f64; DENSE_LEN]) -> Material {
        let (z, g_cc) = (1..=DENSE_LEN as u16)
            .zip(dense.iter().copied())
            .filter(|&(_, rho)| rho != 0.0)
            .unzip();
        Material { z, g_cc }
    }

    pub fn refractive_index(&self, registry: &Registry, energy_kev: &[f64]) -> Result<RefractiveIndex> {
        registry.refractive_index(&self.element_ids(), Some(&self.g_cc), None, Some(energy_kev))
    }

    /// Refractive index decrement δ, with `n = 1 - δ - iβ`.
    pub fn delta(&self, registry: &Registry, energy_kev: &[f64]) -> Result<Vec<f64>> {
        Ok(self.refractive_index(registry, energy_kev)?.delta)
    }

    /// Absorption index β, with `n = 1 - δ - iβ`.
    pub fn beta(&self, registry: &Registry, energy_kev: &[f64]) -> Result<Vec<f64>> {
        Ok(self.refractive_index(registry, energy_kev)?.beta)
    }

    /// Linear coefficient (1/cm) for any aggregatable mass coefficient.
    pub fn coefficient(
        &self,
        registry: &Registry,
        coefficient: MassCoefficient,
        energy_kev: &[f64],
    ) -> Result<Vec<f64>> {
        let Spectrum { values, .. } =
            registry.weighted_column(&self.z, &self.g_cc, coefficient.column(), Some(energy_kev))?;
        Ok(values)
    }

    /// Total attenuation coefficient (1/cm), photoelectric plus scattering.
    pub fn mu(&self, registry: &Registry, energy_kev: &[f64]) -> Result<Vec<f64>> {
        self.coefficient(registry, MassCoefficient::Total, energy_kev)
    }

    /// Photoelectric part of the attenuation coefficient (1/cm).
    pub fn mu_pe(&self, registry: &Registry, energy_kev: &[f64]) -> Result<Vec<f64>> {
        self.coefficient(registry, MassCoefficient::Photo, energy_kev)
    }

    /// K-shell part of the photoelectric attenuation coefficient (1/cm).
    pub fn mu_pe_k(&self, registry: &Registry, energy_kev: &[f64]) -> Result<Vec<f64>> {
        self.coefficient(registry, MassCoefficient::PhotoK, energy_kev)
    }

    /// Total scattering cross-section (1/cm).
    pub fn sigma(&self, registry: &Registry, energy_kev: &[f64]) -> Result<Vec<f64>> {
        self.coefficient(registry, MassCoefficient::Scatter, energy_kev)
    }
}

impl Add for &Material {
    type Output = Material;

    fn add(self, rhs: &Material) -> Material {
        self.add_densities(rhs)
    }
}

impl Add for Material {
    type Output = Material;

    fn add(self, rhs: Material) -> Material {
        self.add_densities(&rhs)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (symbol, rho)) in self.symbols().iter().zip(&self.g_cc).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}: {rho}")?;
        }
        f.write_str("}")
    }
}
