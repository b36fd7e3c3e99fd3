//! CODATA 2018 constants in the units the calculators need.

/// Atomic mass constant (g)
pub const ATOMIC_MASS_G: f64 = 1.66053906660e-24;

/// Reduced Planck constant (J·s)
pub const HBAR: f64 = 1.054571817e-34;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

/// Classical electron radius (cm)
pub const R_ELECTRON_CM: f64 = 2.8179403262e-13;

/// Planck's constant times speed of light (eV·nm)
pub const PLANCK_HC: f64 = 1239.84198;
