//! Ready-made materials: common compounds, a few engineering mixtures and
//! every element at its natural density.

use crate::elements::{self, ELEMENTS};
use crate::error::{Result, XrayMatError};
use crate::material::Material;
use crate::mixing::sum_by_mass;

/// (name, formula, density in g/cc). Compounds without a known density get 1.0.
const COMPOUNDS: &[(&str, &str, Option<f64>)] = &[
    ("water", "H2O", Some(1.0)),
    ("acetic_acid", "C2H4O2", Some(1.049)),
    // lipids
    ("triolein", "C57H104O6", None),
    // sugars
    ("sucrose", "C12H22O11", None),
    ("fructose", "C6H12O6", None),
    ("glucose", "C6H12O6", None),
    ("maltose", "C12H22O11", None),
    ("gluconic_acid", "C6H12O7", None),
    // amino acids
    ("arginine", "C6H14N4O2", None),
    ("histidine", "C6H9N3O2", None),
    ("cellulose", "C6H10O5", Some(1.5)),
    // polymers
    ("polyethylene_terephthalate", "C10H8O4", Some(1.38)),
    ("polyoxymethylene", "CH2O", Some(1.41)),
    ("delrin", "CH2O", Some(1.41)),
    // C4 components
    ("rdx", "C3H6N6O6", Some(1.858)),
    ("dioctyl_sebacate", "C26H50O4", Some(0.9)),
    ("polyisobutylene", "C4H8", Some(0.92)),
    ("cyclohexene", "C6H10", None),
];

/// Names of the mixtures built by [`mixture`].
const MIXTURES: &[&str] = &[
    "cotton_clothes_packed",
    "live_oak",
    "white_oak",
    "sugar_maple",
    "jack_pine",
    "naval_brass",
    "phosphor_bronze",
    "stainless_steel",
];

/// Every name [`material`] accepts: mixtures, then compounds, then elements.
pub fn names() -> Vec<String> {
    MIXTURES
        .iter()
        .map(|s| s.to_string())
        .chain(COMPOUNDS.iter().map(|(name, _, _)| name.to_string()))
        .chain(ELEMENTS.iter().map(|e| e.name.to_lowercase()))
        .collect()
}

/// Look up a ready-made material by name (case-insensitive).
pub fn material(name: &str) -> Result<Material> {
    let lower = name.to_lowercase();
    if let Some(&(_, formula, density)) = COMPOUNDS.iter().find(|(n, _, _)| *n == lower) {
        return Material::from_compound(formula, density);
    }
    if MIXTURES.contains(&lower.as_str()) {
        return mixture(&lower);
    }
    if let Some(element) = elements::by_name(&lower) {
        return Material::from_element(element, None);
    }
    Err(XrayMatError::UnknownMaterial(name.to_string()))
}

fn element(symbol: &str) -> Result<Material> {
    Material::from_element(symbol, None)
}

fn mixture(name: &str) -> Result<Material> {
    match name {
        // packed clothing is roughly 0.25 g/cc of cellulose
        "cotton_clothes_packed" => material("cellulose")?.with_density(0.25),
        "live_oak" => wood()?.with_density(0.977),
        "white_oak" => wood()?.with_density(0.710),
        "sugar_maple" => wood()?.with_density(0.676),
        "jack_pine" => wood()?.with_density(0.461),
        "naval_brass" => alloy(&[("Pb", 0.5), ("Sn", 0.5), ("Zn", 38.0), ("Cu", 61.0)], 8.0),
        "phosphor_bronze" => alloy(&[("Sn", 11.0), ("P", 1.0), ("Cu", 88.0)], 8.7),
        "stainless_steel" => alloy(
            &[("Si", 0.5), ("Ni", 4.5), ("Mn", 6.5), ("Cr", 17.0), ("Fe", 71.5)],
            7.7,
        ),
        _ => Err(XrayMatError::UnknownMaterial(name.to_string())),
    }
}

/// Dry wood by mass: 50 % C, 42 % O, 6 % H, 1 % N.
fn wood() -> Result<Material> {
    alloy_parts(&[("C", 50.0), ("O", 42.0), ("H", 6.0), ("N", 1.0)], None)
}

fn alloy(parts: &[(&str, f64)], density_g_cc: f64) -> Result<Material> {
    alloy_parts(parts, Some(density_g_cc))
}

fn alloy_parts(parts: &[(&str, f64)], density_g_cc: Option<f64>) -> Result<Material> {
    let materials = parts
        .iter()
        .map(|(symbol, _)| element(symbol))
        .collect::<Result<Vec<_>>>()?;
    let masses: Vec<f64> = parts.iter().map(|(_, mass)| *mass).collect();
    sum_by_mass(&materials, &masses, density_g_cc)
}
