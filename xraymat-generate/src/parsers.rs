use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;
use xraymat_data::{AbsorptionRecord, CoefficientRecord, CompositionRecord};

/// Column order of both raw formats.
const COLUMNS: [&str; 8] = [
    "energy_keV",
    "f1_e_atom",
    "f2_e_atom",
    "mu_rho_pe_cm2_g",
    "sigma_rho_cm2_g",
    "mu_rho_tot_cm2_g",
    "mu_rho_K_cm2_g",
    "lambda_nm",
];

/// Older tables call the photoelectric column `mu_rho_cm2_g`.
fn column_index(name: &str) -> Option<usize> {
    let name = name.trim();
    match name {
        "mu_rho_cm2_g" => Some(3),
        "energy_kev" => Some(0),
        _ => COLUMNS.iter().position(|c| *c == name),
    }
}

/// Parse every `*.txt` / `*.dat` table in `dir`; the file stem is the element symbol.
pub fn parse_element_dir(dir: &Path) -> Result<Vec<CoefficientRecord>> {
    let paths = table_paths(dir)?;
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let symbol = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow!("bad file name {path:?}"))?;
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("failed to read {path:?}"))?;
        let record = parse_table(symbol, &content).with_context(|| format!("in {path:?}"))?;
        debug!(element = symbol, rows = record.energy_kev.len(), "parsed table");
        records.push(record);
    }
    Ok(records)
}

/// `*.txt` and `*.dat` files in `dir`, sorted by name.
fn table_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("failed to read {dir:?}"))? {
        let path = entry?.path();
        let is_table = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "txt" || e == "dat");
        if path.is_file() && is_table {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Parse one element table, either comma-separated with a header row or
/// whitespace-separated FFAST text whose non-numeric lines are headers.
pub fn parse_table(symbol: &str, content: &str) -> Result<CoefficientRecord> {
    let first = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .ok_or_else(|| anyhow!("empty table for {symbol}"))?;

    let mut rows = Rows::new(symbol);
    if first.split(',').count() > 1 && first.split(',').any(|n| column_index(n).is_some()) {
        parse_csv(content, &mut rows)?;
    } else {
        parse_ffast(content, &mut rows);
    }
    rows.finish()
}

fn parse_csv(content: &str, rows: &mut Rows) -> Result<()> {
    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'));
    let header = lines.next().ok_or_else(|| anyhow!("missing header"))?;

    // position in the file of each of the eight columns
    let names: Vec<&str> = header.split(',').collect();
    let mut positions = [usize::MAX; 8];
    for (pos, name) in names.iter().enumerate() {
        if let Some(idx) = column_index(name) {
            positions[idx] = pos;
        }
    }
    if let Some(missing) = positions.iter().position(|&p| p == usize::MAX) {
        bail!("missing column {}", COLUMNS[missing]);
    }

    for (n, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let mut row = [0.0; 8];
        for (idx, &pos) in positions.iter().enumerate() {
            let field = fields
                .get(pos)
                .ok_or_else(|| anyhow!("row {} has {} fields", n + 1, fields.len()))?;
            row[idx] = field
                .parse()
                .with_context(|| format!("row {}: bad number {field:?}", n + 1))?;
        }
        rows.push(row);
    }
    Ok(())
}

fn parse_ffast(content: &str, rows: &mut Rows) {
    for line in content.lines() {
        let parts: Vec<f64> = line
            .split_whitespace()
            .filter_map(|w| w.parse().ok())
            .collect();
        if let Ok(row) = <[f64; 8]>::try_from(parts.as_slice()) {
            rows.push(row);
        }
    }
}

/// Whether a row at `energy` may follow `energies`.
///
/// Energies must not decrease. An absorption edge is listed twice, pre-edge
/// row first, and both rows are kept; a third repeat is dropped.
fn accepts(energies: &[f64], energy: f64) -> bool {
    match energies {
        [.., before, last] => energy > *last || (energy == *last && before < last),
        [last] => energy >= *last,
        [] => true,
    }
}

/// Collects rows into a record, keeping energies non-decreasing.
struct Rows {
    record: CoefficientRecord,
    dropped: usize,
}

impl Rows {
    fn new(symbol: &str) -> Self {
        Rows {
            record: CoefficientRecord {
                element: symbol.to_string(),
                energy_kev: Vec::new(),
                f1: Vec::new(),
                f2: Vec::new(),
                mu_photo: Vec::new(),
                sigma_scatter: Vec::new(),
                mu_total: Vec::new(),
                mu_photo_k: Vec::new(),
                wavelength_nm: Vec::new(),
            },
            dropped: 0,
        }
    }

    fn push(&mut self, row: [f64; 8]) {
        let r = &mut self.record;
        if !accepts(&r.energy_kev, row[0]) {
            self.dropped += 1;
            return;
        }
        r.energy_kev.push(row[0]);
        r.f1.push(row[1]);
        r.f2.push(row[2]);
        r.mu_photo.push(row[3]);
        r.sigma_scatter.push(row[4]);
        r.mu_total.push(row[5]);
        r.mu_photo_k.push(row[6]);
        r.wavelength_nm.push(row[7]);
    }

    fn finish(self) -> Result<CoefficientRecord> {
        if self.record.energy_kev.is_empty() {
            bail!("no data rows for {}", self.record.element);
        }
        if self.dropped > 0 {
            debug!(
                element = %self.record.element,
                dropped = self.dropped,
                "dropped out-of-order energies"
            );
        }
        Ok(self.record)
    }
}

/// Parse every `*.txt` / `*.dat` absorption table in `dir`; the file stem is
/// the material name.
pub fn parse_absorption_dir(dir: &Path) -> Result<Vec<AbsorptionRecord>> {
    let mut records = Vec::new();
    for path in table_paths(dir)? {
        let material = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow!("bad file name {path:?}"))?;
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("failed to read {path:?}"))?;
        let record =
            parse_absorption(material, &content).with_context(|| format!("in {path:?}"))?;
        debug!(material, rows = record.energy_kev.len(), "parsed absorption table");
        records.push(record);
    }
    Ok(records)
}

/// Parse one absorption table with columns `energy_MeV, mu_rho_cm2_g,
/// muen_rho_cm2_g`, comma-separated under a header or whitespace-separated
/// NIST text. Energies are stored in keV.
pub fn parse_absorption(material: &str, content: &str) -> Result<AbsorptionRecord> {
    let mut record = AbsorptionRecord {
        material: material.to_string(),
        energy_kev: Vec::new(),
        mu_rho: Vec::new(),
        muen_rho: Vec::new(),
    };
    let mut dropped = 0;
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let words: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .collect();
        let numbers: Vec<f64> = words.iter().filter_map(|w| w.parse().ok()).collect();
        // edge rows carry a shell label (`20 K 4.0381E-03 ...`); keep their last three values
        let values = match numbers.len() {
            3 => &numbers[..],
            n if n > 3 && numbers.len() < words.len() => &numbers[n - 3..],
            _ => continue,
        };
        let [energy_mev, mu, muen] = [values[0], values[1], values[2]];
        let energy_kev = energy_mev * 1e3;
        if !accepts(&record.energy_kev, energy_kev) {
            dropped += 1;
            continue;
        }
        record.energy_kev.push(energy_kev);
        record.mu_rho.push(mu);
        record.muen_rho.push(muen);
    }
    if record.energy_kev.is_empty() {
        bail!("no data rows for {material}");
    }
    if dropped > 0 {
        debug!(material, dropped, "dropped out-of-order energies");
    }
    Ok(record)
}

/// Read the JSON standard-composition list.
pub fn parse_compositions(path: &Path) -> Result<Vec<CompositionRecord>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;
    parse_compositions_str(&content)
}

fn parse_compositions_str(content: &str) -> Result<Vec<CompositionRecord>> {
    let records: Vec<CompositionRecord> =
        serde_json::from_str(content).context("invalid composition JSON")?;
    for r in &records {
        if r.z.len() != r.fraction.len() {
            bail!(
                "{}: {} atomic numbers but {} fractions",
                r.material,
                r.z.len(),
                r.fraction.len()
            );
        }
    }
    Ok(records)
}
