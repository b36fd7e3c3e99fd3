pub mod absorption;
pub mod aggregate;
pub mod coefficients;
pub mod constants;
pub mod density;
pub mod elements;
pub mod error;
pub mod interp;
pub mod library;
pub mod material;
pub mod mixing;
pub mod refractive;
pub mod registry;
pub mod stoichiometry;

pub use absorption::{Absorption, AbsorptionTable};
pub use aggregate::Spectrum;
pub use coefficients::{CoefficientTable, Column, MassCoefficient};
pub use elements::{DENSE_LEN, Element, ElementId};
pub use error::{Result, XrayMatError};
pub use material::Material;
pub use mixing::{Basis, Mixture, add_by_mass, add_by_volume, sum_by_mass, sum_by_volume};
pub use refractive::RefractiveIndex;
pub use registry::Registry;
pub use stoichiometry::Stoichiometry;
pub use xraymat_data;
