//! Small fixture tables shared by the integration tests.
//!
//! `mu_total` and `mu_photo` follow the NIST tables at the listed energies;
//! `f1`/`f2` are close to the FFAST values. Pb is deliberately tabulated on a
//! narrower, offset grid. The water absorption curve is the NIST table; the
//! bone curve is rounded and carries a doubled Ca K-edge energy.
#![allow(dead_code)]

use xraymat::Registry;
use xraymat::xraymat_data::{
    AbsorptionRecord, CoefficientRecord, CompositionRecord, ReferenceData, VersionRecord,
};

pub const ENERGIES: [f64; 9] = [2.0, 5.0, 8.0, 10.0, 15.0, 20.0, 30.0, 50.0, 100.0];

fn table(
    symbol: &str,
    energy_kev: &[f64],
    f1: &[f64],
    f2: &[f64],
    mu_total: &[f64],
    mu_photo: &[f64],
    k_share: f64,
) -> CoefficientRecord {
    CoefficientRecord {
        element: symbol.to_string(),
        energy_kev: energy_kev.to_vec(),
        f1: f1.to_vec(),
        f2: f2.to_vec(),
        mu_photo: mu_photo.to_vec(),
        sigma_scatter: mu_total.iter().zip(mu_photo).map(|(t, p)| t - p).collect(),
        mu_total: mu_total.to_vec(),
        mu_photo_k: mu_photo.iter().map(|p| p * k_share).collect(),
        wavelength_nm: energy_kev.iter().map(|e| 1.239842 / e).collect(),
    }
}

pub fn hydrogen() -> CoefficientRecord {
    table(
        "H",
        &ENERGIES,
        &[1.0; 9],
        &[2.0e-4, 1.2e-5, 2.6e-6, 1.3e-6, 3.6e-7, 1.4e-7, 3.9e-8, 7.5e-9, 8.0e-10],
        &[0.5, 0.4, 0.392, 0.3854, 0.3764, 0.3695, 0.357, 0.3355, 0.2944],
        &[0.11, 0.0063, 0.0013, 0.00061, 0.00017, 0.00007, 0.00002, 0.000004, 0.0000004],
        1.0,
    )
}

pub fn oxygen() -> CoefficientRecord {
    table(
        "O",
        &ENERGIES,
        &[8.25, 8.10, 8.06, 8.05, 8.03, 8.02, 8.01, 8.0, 8.0],
        &[0.62, 0.095, 0.037, 0.0213, 0.0066, 0.0029, 0.0009, 0.00022, 0.00003],
        &[694.9, 47.9, 11.63, 5.952, 1.836, 0.8651, 0.3779, 0.2132, 0.1551],
        &[694.0, 47.6, 11.4, 5.6, 1.58, 0.64, 0.18, 0.037, 0.004],
        0.94,
    )
}

pub fn iron() -> CoefficientRecord {
    table(
        "Fe",
        &ENERGIES,
        &[25.2, 24.6, 22.9, 25.3, 25.8, 25.9, 26.0, 26.0, 26.0],
        &[9.3, 2.6, 0.5, 3.3, 1.5, 0.85, 0.38, 0.13, 0.031],
        &[1626.0, 140.0, 300.0, 170.6, 57.08, 25.68, 8.176, 1.958, 0.3717],
        &[1620.0, 137.0, 296.0, 167.0, 54.5, 23.7, 6.9, 1.25, 0.16],
        0.87,
    )
}

pub fn lead() -> CoefficientRecord {
    table(
        "Pb",
        &[5.0, 12.0, 25.0, 60.0],
        &[70.0, 66.0, 79.0, 81.0],
        &[30.0, 12.0, 5.0, 1.2],
        &[730.0, 200.0, 62.0, 5.0],
        &[720.0, 195.0, 59.0, 4.5],
        0.0,
    )
}

pub fn compositions() -> Vec<CompositionRecord> {
    vec![
        CompositionRecord {
            material: "Water, Liquid".to_string(),
            density_g_cc: 1.0,
            z: vec![1, 8],
            fraction: vec![0.111894, 0.888106],
        },
        CompositionRecord {
            material: "Air, Dry (near sea level)".to_string(),
            density_g_cc: 0.00120479,
            z: vec![6, 7, 8, 18],
            fraction: vec![0.000124, 0.755268, 0.231781, 0.012827],
        },
    ]
}

pub fn absorption() -> Vec<AbsorptionRecord> {
    vec![
        AbsorptionRecord {
            material: "Water, Liquid".to_string(),
            energy_kev: vec![1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 15.0, 20.0],
            mu_rho: vec![
                4078.0, 1376.0, 617.3, 192.9, 82.78, 42.58, 24.64, 10.37, 5.329, 1.673, 0.8096,
            ],
            muen_rho: vec![
                4065.0, 1372.0, 615.2, 191.7, 81.91, 41.88, 24.05, 9.915, 4.944, 1.374, 0.5503,
            ],
        },
        AbsorptionRecord {
            material: "Bone, Cortical".to_string(),
            energy_kev: vec![3.0, 4.0381, 4.0381, 5.0, 10.0],
            mu_rho: vec![86.0, 41.0, 118.0, 72.0, 28.5],
            muen_rho: vec![84.0, 40.0, 110.0, 66.0, 26.8],
        },
    ]
}

pub fn reference_data() -> ReferenceData {
    ReferenceData {
        version: vec![VersionRecord {
            tag: "fixture".to_string(),
            date: "2024-01-01".to_string(),
            notes: "integration test tables".to_string(),
        }],
        coefficients: vec![hydrogen(), oxygen(), iron(), lead()],
        compositions: compositions(),
        absorption: absorption(),
    }
}

pub fn registry() -> Registry {
    Registry::new(reference_data()).expect("fixture registry is valid")
}
