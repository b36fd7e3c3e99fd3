#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum XrayMatError {
    #[error("unknown element: {0}")]
    UnknownElement(String),
    #[error("unknown material: {0}")]
    UnknownMaterial(String),
    #[error("length mismatch: expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("invalid property: {0}")]
    InvalidProperty(String),
    #[error("both mass densities and number densities were given, expected exactly one")]
    ConflictingDensityRepresentation,
    #[error("neither mass densities nor number densities were given")]
    MissingDensity,
    #[error("malformed chemical formula: {0}")]
    MalformedFormula(String),
    #[error("invalid photon energy: {0} keV")]
    InvalidEnergy(f64),
    #[error("invalid density: {0}")]
    InvalidDensity(f64),
    #[error("data error: {0}")]
    DataError(String),
}

pub type Result<T> = std::result::Result<T, XrayMatError>;

pub(crate) fn check_lengths(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(XrayMatError::LengthMismatch { expected, found });
    }
    Ok(())
}
