use std::fmt;

/// Atom name of the single representative atom per residue.
pub const BACKBONE_MARKER: &str = "CA";

/// AtomRecord
///
/// Identifies one atom within a structure. Enough to build an x-axis label
/// and to tell backbone marker atoms apart from everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtomRecord {
    pub chain_id: String,
    pub res_seq: isize,
    pub insertion_code: Option<String>,
    pub atom_name: String,
    pub alt_loc: Option<String>,
}

impl AtomRecord {
    pub fn new(chain_id: &str, res_seq: isize, atom_name: &str) -> Self {
        AtomRecord {
            chain_id: chain_id.to_string(),
            res_seq,
            insertion_code: None,
            atom_name: atom_name.to_string(),
            alt_loc: None,
        }
    }

    pub fn with_insertion_code(mut self, code: &str) -> Self {
        self.insertion_code = Some(code.to_string());
        self
    }

    pub fn with_alt_loc(mut self, alt_loc: &str) -> Self {
        self.alt_loc = Some(alt_loc.to_string());
        self
    }

    pub fn is_backbone_marker(&self) -> bool {
        self.atom_name == BACKBONE_MARKER
    }

    /// Chain, residue and atom components concatenated, e.g. `A12CA` or `B27AOGB`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AtomRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.chain_id, self.res_seq)?;
        if let Some(code) = &self.insertion_code {
            f.write_str(code)?;
        }
        f.write_str(&self.atom_name)?;
        if let Some(alt_loc) = &self.alt_loc {
            f.write_str(alt_loc)?;
        }
        Ok(())
    }
}

/// BFactorSeries
///
/// Per-atom B-factors in structural atom order. Built once by the extractor
/// (see the `From<&PDB>` conversion) and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BFactorSeries {
    entries: Vec<(AtomRecord, f64)>,
}

impl BFactorSeries {
    pub fn new(entries: Vec<(AtomRecord, f64)>) -> Self {
        BFactorSeries { entries }
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn entries(&self) -> &[(AtomRecord, f64)] {
        &self.entries
    }
    pub fn records(&self) -> impl Iterator<Item = &AtomRecord> {
        self.entries.iter().map(|(record, _)| record)
    }
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, b)| *b)
    }
    pub fn get(&self, idx: usize) -> Option<&(AtomRecord, f64)> {
        self.entries.get(idx)
    }
}

impl FromIterator<(AtomRecord, f64)> for BFactorSeries {
    fn from_iter<T: IntoIterator<Item = (AtomRecord, f64)>>(iter: T) -> Self {
        BFactorSeries::new(iter.into_iter().collect())
    }
}
