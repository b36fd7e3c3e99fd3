//! Static element reference table (Z = 1..=99).
//!
//! Atomic masses are standard atomic weights in amu; densities are the
//! natural densities in g/cc, gases at STP.

use std::fmt;

use crate::error::{Result, XrayMatError};

/// Length of the dense per-element array; index `z - 1` holds element `z`.
pub const DENSE_LEN: usize = 99;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u16,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Atomic mass (amu, equal to g/mol)
    pub atomic_mass: f64,
    /// Natural density (g/cc)
    pub density: f64,
}

/// An element named either by symbol or by atomic number.
///
/// Public operations accept `ElementId` and resolve it to an atomic number
/// straight away; symbols are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    Symbol(String),
    AtomicNumber(u16),
}

impl From<&str> for ElementId {
    fn from(symbol: &str) -> Self {
        ElementId::Symbol(symbol.to_string())
    }
}

impl From<String> for ElementId {
    fn from(symbol: String) -> Self {
        ElementId::Symbol(symbol)
    }
}

impl From<u16> for ElementId {
    fn from(z: u16) -> Self {
        ElementId::AtomicNumber(z)
    }
}

impl From<&Element> for ElementId {
    fn from(element: &Element) -> Self {
        ElementId::AtomicNumber(element.atomic_number)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) => f.write_str(s),
            Self::AtomicNumber(z) => write!(f, "{z}"),
        }
    }
}

const fn el(
    atomic_number: u16,
    symbol: &'static str,
    name: &'static str,
    atomic_mass: f64,
    density: f64,
) -> Element {
    Element {
        atomic_number,
        symbol,
        name,
        atomic_mass,
        density,
    }
}

pub static ELEMENTS: [Element; DENSE_LEN] = [
    el(1, "H", "Hydrogen", 1.00794, 0.00008988),
    el(2, "He", "Helium", 4.002602, 0.0001785),
    el(3, "Li", "Lithium", 6.941, 0.534),
    el(4, "Be", "Beryllium", 9.012182, 1.848),
    el(5, "B", "Boron", 10.811, 2.34),
    el(6, "C", "Carbon", 12.0107, 2.267),
    el(7, "N", "Nitrogen", 14.0067, 0.0012506),
    el(8, "O", "Oxygen", 15.9994, 0.001429),
    el(9, "F", "Fluorine", 18.9984032, 0.001696),
    el(10, "Ne", "Neon", 20.1797, 0.0008999),
    el(11, "Na", "Sodium", 22.98977, 0.971),
    el(12, "Mg", "Magnesium", 24.305, 1.738),
    el(13, "Al", "Aluminium", 26.981538, 2.698),
    el(14, "Si", "Silicon", 28.0855, 2.329),
    el(15, "P", "Phosphorus", 30.973761, 1.82),
    el(16, "S", "Sulfur", 32.065, 2.067),
    el(17, "Cl", "Chlorine", 35.453, 0.003214),
    el(18, "Ar", "Argon", 39.948, 0.0017837),
    el(19, "K", "Potassium", 39.0983, 0.862),
    el(20, "Ca", "Calcium", 40.078, 1.54),
    el(21, "Sc", "Scandium", 44.95591, 2.989),
    el(22, "Ti", "Titanium", 47.867, 4.54),
    el(23, "V", "Vanadium", 50.9415, 6.11),
    el(24, "Cr", "Chromium", 51.9961, 7.19),
    el(25, "Mn", "Manganese", 54.938049, 7.44),
    el(26, "Fe", "Iron", 55.845, 7.874),
    el(27, "Co", "Cobalt", 58.9332, 8.9),
    el(28, "Ni", "Nickel", 58.6934, 8.908),
    el(29, "Cu", "Copper", 63.546, 8.96),
    el(30, "Zn", "Zinc", 65.409, 7.133),
    el(31, "Ga", "Gallium", 69.723, 5.907),
    el(32, "Ge", "Germanium", 72.64, 5.323),
    el(33, "As", "Arsenic", 74.9216, 5.72),
    el(34, "Se", "Selenium", 78.96, 4.79),
    el(35, "Br", "Bromine", 79.904, 3.12),
    el(36, "Kr", "Krypton", 83.798, 0.003733),
    el(37, "Rb", "Rubidium", 85.4678, 1.532),
    el(38, "Sr", "Strontium", 87.62, 2.54),
    el(39, "Y", "Yttrium", 88.90585, 4.469),
    el(40, "Zr", "Zirconium", 91.224, 6.506),
    el(41, "Nb", "Niobium", 92.90638, 8.57),
    el(42, "Mo", "Molybdenum", 95.94, 10.22),
    el(43, "Tc", "Technetium", 97.907, 11.5),
    el(44, "Ru", "Ruthenium", 101.07, 12.37),
    el(45, "Rh", "Rhodium", 102.9055, 12.41),
    el(46, "Pd", "Palladium", 106.42, 12.02),
    el(47, "Ag", "Silver", 107.8682, 10.5),
    el(48, "Cd", "Cadmium", 112.411, 8.65),
    el(49, "In", "Indium", 114.818, 7.31),
    el(50, "Sn", "Tin", 118.71, 7.31),
    el(51, "Sb", "Antimony", 121.76, 6.691),
    el(52, "Te", "Tellurium", 127.6, 6.24),
    el(53, "I", "Iodine", 126.90447, 4.93),
    el(54, "Xe", "Xenon", 131.293, 0.005887),
    el(55, "Cs", "Caesium", 132.90545, 1.873),
    el(56, "Ba", "Barium", 137.327, 3.5),
    el(57, "La", "Lanthanum", 138.9055, 6.145),
    el(58, "Ce", "Cerium", 140.116, 6.77),
    el(59, "Pr", "Praseodymium", 140.90765, 6.773),
    el(60, "Nd", "Neodymium", 144.24, 7.008),
    el(61, "Pm", "Promethium", 144.913, 7.264),
    el(62, "Sm", "Samarium", 150.36, 7.52),
    el(63, "Eu", "Europium", 151.964, 5.244),
    el(64, "Gd", "Gadolinium", 157.25, 7.901),
    el(65, "Tb", "Terbium", 158.92534, 8.23),
    el(66, "Dy", "Dysprosium", 162.5, 8.551),
    el(67, "Ho", "Holmium", 164.93032, 8.795),
    el(68, "Er", "Erbium", 167.259, 9.066),
    el(69, "Tm", "Thulium", 168.93421, 9.321),
    el(70, "Yb", "Ytterbium", 173.04, 6.966),
    el(71, "Lu", "Lutetium", 174.967, 9.841),
    el(72, "Hf", "Hafnium", 178.49, 13.31),
    el(73, "Ta", "Tantalum", 180.9479, 16.654),
    el(74, "W", "Tungsten", 183.84, 19.25),
    el(75, "Re", "Rhenium", 186.207, 21.02),
    el(76, "Os", "Osmium", 190.23, 22.61),
    el(77, "Ir", "Iridium", 192.217, 22.65),
    el(78, "Pt", "Platinum", 195.078, 21.45),
    el(79, "Au", "Gold", 196.96655, 19.3),
    el(80, "Hg", "Mercury", 200.59, 13.534),
    el(81, "Tl", "Thallium", 204.3833, 11.85),
    el(82, "Pb", "Lead", 207.2, 11.34),
    el(83, "Bi", "Bismuth", 208.98038, 9.78),
    el(84, "Po", "Polonium", 208.982, 9.196),
    el(85, "At", "Astatine", 209.987, 6.4),
    el(86, "Rn", "Radon", 222.018, 0.00973),
    el(87, "Fr", "Francium", 223.02, 1.87),
    el(88, "Ra", "Radium", 226.025, 5.5),
    el(89, "Ac", "Actinium", 227.028, 10.07),
    el(90, "Th", "Thorium", 232.0381, 11.72),
    el(91, "Pa", "Protactinium", 231.03588, 15.37),
    el(92, "U", "Uranium", 238.02891, 18.95),
    el(93, "Np", "Neptunium", 237.048, 20.45),
    el(94, "Pu", "Plutonium", 244.064, 19.84),
    el(95, "Am", "Americium", 243.061, 13.69),
    el(96, "Cm", "Curium", 247.07, 13.51),
    el(97, "Bk", "Berkelium", 247.07, 14.78),
    el(98, "Cf", "Californium", 251.08, 15.1),
    el(99, "Es", "Einsteinium", 252.083, 8.84),
];

/// Look up an element by atomic number.
pub fn by_atomic_number(z: u16) -> Option<&'static Element> {
    if z == 0 {
        return None;
    }
    ELEMENTS.get(usize::from(z) - 1)
}

/// Look up an element by symbol (case-sensitive: "Co" is cobalt, "CO" is not a symbol).
pub fn by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// Look up an element by its English name, ignoring case.
pub fn by_name(name: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

pub fn lookup(id: &ElementId) -> Result<&'static Element> {
    let found = match id {
        ElementId::Symbol(s) => by_symbol(s),
        ElementId::AtomicNumber(z) => by_atomic_number(*z),
    };
    found.ok_or_else(|| XrayMatError::UnknownElement(id.to_string()))
}

/// Resolve every identifier to its atomic number, failing on the first unknown one.
pub fn resolve_all(ids: &[ElementId]) -> Result<Vec<u16>> {
    ids.iter()
        .map(|id| lookup(id).map(|e| e.atomic_number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_atomic_number() {
        for (i, e) in ELEMENTS.iter().enumerate() {
            assert_eq!(usize::from(e.atomic_number), i + 1, "{}", e.symbol);
            assert!(e.atomic_mass > 0.0);
            assert!(e.density > 0.0);
        }
    }

    #[test]
    fn test_symbols_are_unique() {
        for (i, a) in ELEMENTS.iter().enumerate() {
            for b in &ELEMENTS[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(&"Fe".into()).unwrap().atomic_number, 26);
        assert_eq!(lookup(&ElementId::AtomicNumber(79)).unwrap().symbol, "Au");
        assert_eq!(by_name("iron").unwrap().symbol, "Fe");
        assert_eq!(by_symbol("Es").unwrap().atomic_number, 99);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(by_symbol("co").is_none());
        assert!(by_symbol("CO").is_none());
        assert_eq!(by_symbol("Co").unwrap().atomic_number, 27);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            lookup(&"Xx".into()),
            Err(XrayMatError::UnknownElement("Xx".to_string()))
        );
        assert!(lookup(&ElementId::AtomicNumber(0)).is_err());
        assert!(lookup(&ElementId::AtomicNumber(100)).is_err());
    }
}
