//! Mixing materials by volume or by mass.
//!
//! Volumes are assumed additive: mixing 2 cups of flour with 1/16 cup of
//! baking powder gives 2.0625 cups of mix.

use crate::elements::DENSE_LEN;
use crate::error::{Result, XrayMatError, check_lengths};
use crate::material::Material;

fn check_weight(w: f64) -> Result<f64> {
    if w.is_finite() && w >= 0.0 {
        Ok(w)
    } else {
        Err(XrayMatError::InvalidDensity(w))
    }
}

/// Mix materials in the given parts by volume.
///
/// Each element's density in the mixture is the volume-weighted mean of its
/// density in the inputs. With `final_density_g_cc` the result is rescaled to
/// that overall density.
pub fn sum_by_volume(
    materials: &[Material],
    volumes: &[f64],
    final_density_g_cc: Option<f64>,
) -> Result<Material> {
    check_lengths(materials.len(), volumes.len())?;
    let mut mass = [0.0; DENSE_LEN];
    let mut total_volume = 0.0;
    for (material, &volume) in materials.iter().zip(volumes) {
        let volume = check_weight(volume)?;
        total_volume += volume;
        for (z, rho) in material.iter() {
            mass[usize::from(z) - 1] += rho * volume;
        }
    }
    if total_volume <= 0.0 {
        return Err(XrayMatError::InvalidDensity(total_volume));
    }
    for m in &mut mass {
        *m /= total_volume;
    }

    let mixture = Material::dense_unchecked(&mass);
    match final_density_g_cc {
        Some(rho) => mixture.with_density(rho),
        None => Ok(mixture),
    }
}

/// Mix materials in the given parts by mass.
///
/// Each part is turned into a volume with its material's own density and the
/// mixture is then formed by volume, so "91 % RDX, 9 % binder by mass" stays
/// volume-additive underneath.
pub fn sum_by_mass(
    materials: &[Material],
    masses: &[f64],
    final_density_g_cc: Option<f64>,
) -> Result<Material> {
    check_lengths(materials.len(), masses.len())?;
    let volumes = materials
        .iter()
        .zip(masses)
        .map(|(material, &mass)| {
            let mass = check_weight(mass)?;
            let rho = material.density();
            if rho <= 0.0 {
                return Err(XrayMatError::InvalidDensity(rho));
            }
            Ok(mass / rho)
        })
        .collect::<Result<Vec<f64>>>()?;
    sum_by_volume(materials, &volumes, final_density_g_cc)
}

pub fn add_by_volume(
    first: &Material,
    first_volume: f64,
    second: &Material,
    second_volume: f64,
    final_density_g_cc: Option<f64>,
) -> Result<Material> {
    sum_by_volume(
        &[first.clone(), second.clone()],
        &[first_volume, second_volume],
        final_density_g_cc,
    )
}

pub fn add_by_mass(
    first: &Material,
    first_mass: f64,
    second: &Material,
    second_mass: f64,
    final_density_g_cc: Option<f64>,
) -> Result<Material> {
    sum_by_mass(
        &[first.clone(), second.clone()],
        &[first_mass, second_mass],
        final_density_g_cc,
    )
}

/// Whether mixture weights are parts by mass or parts by volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    Mass,
    Volume,
}

/// A mixing recipe, collected before the mixture is formed.
///
/// ```
/// use xraymat::{Material, Mixture};
/// let water = Material::from_compound("H2O", Some(1.0)).unwrap();
/// let iron = Material::from_element("Fe", None).unwrap();
/// let slurry = Mixture::by_mass()
///     .with(&water, 1.0)
///     .with(&iron, 1.0)
///     .build()
///     .unwrap();
/// assert!(slurry.density() > 1.0 && slurry.density() < 4.5);
/// ```
#[derive(Debug, Clone)]
pub struct Mixture {
    basis: Basis,
    materials: Vec<Material>,
    weights: Vec<f64>,
    final_density_g_cc: Option<f64>,
}

impl Mixture {
    pub fn new(basis: Basis) -> Self {
        Mixture {
            basis,
            materials: Vec::new(),
            weights: Vec::new(),
            final_density_g_cc: None,
        }
    }

    pub fn by_mass() -> Self {
        Self::new(Basis::Mass)
    }

    pub fn by_volume() -> Self {
        Self::new(Basis::Volume)
    }

    pub fn with(mut self, material: &Material, weight: f64) -> Self {
        self.materials.push(material.clone());
        self.weights.push(weight);
        self
    }

    pub fn final_density(mut self, density_g_cc: f64) -> Self {
        self.final_density_g_cc = Some(density_g_cc);
        self
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn build(&self) -> Result<Material> {
        match self.basis {
            Basis::Mass => sum_by_mass(&self.materials, &self.weights, self.final_density_g_cc),
            Basis::Volume => {
                sum_by_volume(&self.materials, &self.weights, self.final_density_g_cc)
            }
        }
    }
}
