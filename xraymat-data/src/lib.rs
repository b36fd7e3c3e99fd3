#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// The persisted reference tables, deserialized from a compressed blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub version: Vec<VersionRecord>,
    pub coefficients: Vec<CoefficientRecord>,
    pub compositions: Vec<CompositionRecord>,
    pub absorption: Vec<AbsorptionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionRecord {
    pub tag: String,
    pub date: String,
    pub notes: String,
}

/// Energy-indexed photon interaction table for one element.
///
/// All columns run parallel to `energy_kev`, which is non-decreasing; an
/// absorption edge is one energy listed twice, pre-edge row first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientRecord {
    /// Element symbol, e.g. "Fe".
    pub element: String,
    pub energy_kev: Vec<f64>,
    /// Real part of the atomic form factor (e/atom).
    pub f1: Vec<f64>,
    /// Imaginary part of the atomic form factor (e/atom).
    pub f2: Vec<f64>,
    /// Photoelectric mass attenuation coefficient (cm²/g).
    pub mu_photo: Vec<f64>,
    /// Coherent plus incoherent scattering estimate (cm²/g).
    pub sigma_scatter: Vec<f64>,
    /// Total mass attenuation coefficient (cm²/g).
    pub mu_total: Vec<f64>,
    /// K-shell part of the photoelectric coefficient (cm²/g).
    pub mu_photo_k: Vec<f64>,
    pub wavelength_nm: Vec<f64>,
}

/// Elemental make-up of a named standard material.
///
/// Field names match the JSON composition table so it deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionRecord {
    pub material: String,
    pub density_g_cc: f64,
    /// Atomic numbers of the constituents.
    pub z: Vec<u16>,
    /// Mass fraction of each constituent, parallel to `z`.
    pub fraction: Vec<f64>,
}

/// Measured attenuation of a named standard material (ICRU-44 style).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionRecord {
    pub material: String,
    /// Photon energies (keV), non-decreasing; an edge energy may appear twice.
    pub energy_kev: Vec<f64>,
    /// Mass attenuation coefficient μ/ρ (cm²/g).
    pub mu_rho: Vec<f64>,
    /// Mass energy-absorption coefficient μ_en/ρ (cm²/g).
    pub muen_rho: Vec<f64>,
}
