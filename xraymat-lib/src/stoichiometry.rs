//! Linear chemical formulas such as `"H2O"` or `"C22H10N2O5"`.
//!
//! A formula is a run of tokens, each an uppercase letter, an optional
//! lowercase letter and an optional integer count. Parentheses, hydrate dots,
//! charges and fractional counts are rejected with `MalformedFormula` rather
//! than guessed at.

use crate::constants::ATOMIC_MASS_G;
use crate::elements::{self, Element};
use crate::error::{Result, XrayMatError};

/// One element of a formula with its atom count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constituent {
    pub element: &'static Element,
    pub count: u32,
}

impl Constituent {
    pub fn symbol(&self) -> &'static str {
        self.element.symbol
    }

    pub fn atomic_mass(&self) -> f64 {
        self.element.atomic_mass
    }
}

/// Atomic composition of a formula, in order of first appearance.
///
/// A symbol that appears more than once (`CH3COOH`) is merged into its first
/// entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Stoichiometry {
    constituents: Vec<Constituent>,
}

struct Tokenizer<'a> {
    formula: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(formula: &'a str) -> Self {
        Tokenizer {
            formula,
            chars: formula.chars().filter(|c| !c.is_whitespace()).collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn malformed(&self, reason: &str) -> XrayMatError {
        XrayMatError::MalformedFormula(format!("{reason} in '{}'", self.formula))
    }

    /// Next `(symbol, count)` pair, or `None` at the end of input.
    fn next_token(&mut self) -> Result<Option<(String, u32)>> {
        let Some(first) = self.peek() else {
            return Ok(None);
        };
        if !first.is_ascii_uppercase() {
            return Err(self.malformed(&format!(
                "unexpected '{first}' at position {}",
                self.pos
            )));
        }
        let mut symbol = String::from(first);
        self.pos += 1;
        if let Some(c) = self.peek().filter(char::is_ascii_lowercase) {
            symbol.push(c);
            self.pos += 1;
        }

        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let count = if start == self.pos {
            1
        } else {
            let digits: String = self.chars[start..self.pos].iter().collect();
            digits
                .parse::<u32>()
                .map_err(|_| self.malformed(&format!("count '{digits}' out of range")))?
        };
        if count == 0 {
            return Err(self.malformed(&format!("zero count for {symbol}")));
        }
        Ok(Some((symbol, count)))
    }
}

impl Stoichiometry {
    /// Parse a formula, resolving each symbol against the element table.
    ///
    /// # Examples
    /// ```
    /// let water = xraymat::Stoichiometry::parse("H2O").unwrap();
    /// assert_eq!(water.symbols(), vec!["H", "O"]);
    /// assert_eq!(water.counts(), vec![2, 1]);
    /// ```
    pub fn parse(formula: &str) -> Result<Self> {
        let mut tokenizer = Tokenizer::new(formula);
        let mut constituents: Vec<Constituent> = Vec::new();

        while let Some((symbol, count)) = tokenizer.next_token()? {
            let element = elements::by_symbol(&symbol)
                .ok_or_else(|| XrayMatError::UnknownElement(symbol.clone()))?;
            match constituents.iter_mut().find(|c| c.element == element) {
                Some(existing) => {
                    existing.count = existing
                        .count
                        .checked_add(count)
                        .ok_or_else(|| tokenizer.malformed("count overflow"))?;
                }
                None => constituents.push(Constituent { element, count }),
            }
        }

        if constituents.is_empty() {
            return Err(XrayMatError::MalformedFormula(format!(
                "no elements in '{formula}'"
            )));
        }
        Ok(Stoichiometry { constituents })
    }

    pub fn constituents(&self) -> &[Constituent] {
        &self.constituents
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.constituents.iter().map(Constituent::symbol).collect()
    }

    pub fn atomic_numbers(&self) -> Vec<u16> {
        self.constituents
            .iter()
            .map(|c| c.element.atomic_number)
            .collect()
    }

    pub fn counts(&self) -> Vec<u32> {
        self.constituents.iter().map(|c| c.count).collect()
    }

    pub fn atomic_masses(&self) -> Vec<f64> {
        self.constituents
            .iter()
            .map(Constituent::atomic_mass)
            .collect()
    }

    /// Formula weight in g/mol.
    pub fn molar_mass(&self) -> f64 {
        self.constituents
            .iter()
            .map(|c| f64::from(c.count) * c.atomic_mass())
            .sum()
    }

    /// Per-element number densities (1/cc) of the compound at `total_density_g_cc`.
    pub fn number_densities(&self, total_density_g_cc: f64) -> Vec<f64> {
        let molecule_g = self.molar_mass() * ATOMIC_MASS_G;
        let molecules_cc = total_density_g_cc / molecule_g;
        self.constituents
            .iter()
            .map(|c| f64::from(c.count) * molecules_cc)
            .collect()
    }
}

/// Returns true if the formula parses and every symbol is known.
pub fn validate_formula(formula: &str) -> bool {
    Stoichiometry::parse(formula).is_ok()
}
