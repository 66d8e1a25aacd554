//! The plotting pipeline: load, extract, compose, draw.

use crate::atoms::BFactorSeries;
use crate::chart::{compose, draw_png};
use crate::error::Result;
use crate::layout::Diagnostics;
use strum::{Display, EnumString};
use tracing::debug;

/// Which of the two related records to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StructureKind {
    /// The deposited PDB entry.
    Pdb,
    /// The re-refined BDB entry derived from it.
    Bdb,
}

/// Provides B-factor series for an identifier.
///
/// `Ok(None)` means the record does not exist; errors are reserved for records
/// that exist but cannot be read.
pub trait StructureSource {
    fn load(&self, pdb_id: &str, kind: StructureKind) -> Result<Option<BFactorSeries>>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    /// Plot C-alpha atoms only.
    pub backbone_only: bool,
    /// Plot `(b - mean) / sd` instead of raw B-factors.
    pub normalize: bool,
    /// Pixels per figure unit.
    pub dpi: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            backbone_only: true,
            normalize: false,
            dpi: 100.0,
        }
    }
}

/// An encoded PNG image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Png(Vec<u8>);

impl Png {
    pub const MIME_TYPE: &'static str = "image/png";
    pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
    pub fn mime_type(&self) -> &'static str {
        Self::MIME_TYPE
    }
}

/// Render the B-factor comparison for `pdb_id` from already extracted series.
pub fn render(
    pdb_id: &str,
    reference: &BFactorSeries,
    derived: Option<&BFactorSeries>,
    options: &PlotOptions,
    diagnostics: &dyn Diagnostics,
) -> Result<Png> {
    debug!("Creating figure for {pdb_id}...");
    let spec = compose(pdb_id, reference, derived, options, diagnostics);
    debug!(
        "Plotting {} xlabs, {} lines",
        spec.ticks.major_labels.len(),
        spec.lines.len()
    );
    let bytes = draw_png(&spec, options.dpi)?;
    Ok(Png(bytes))
}

/// Load both records for `pdb_id` and render them.
///
/// Returns `Ok(None)` when the PDB record is missing. A missing BDB record only
/// drops the second line.
pub fn plot_entry(
    source: &impl StructureSource,
    pdb_id: &str,
    options: &PlotOptions,
    diagnostics: &dyn Diagnostics,
) -> Result<Option<Png>> {
    let Some(reference) = source.load(pdb_id, StructureKind::Pdb)? else {
        debug!("No {} entry for {pdb_id}", StructureKind::Pdb);
        return Ok(None);
    };
    let derived = source.load(pdb_id, StructureKind::Bdb)?;
    if derived.is_none() {
        debug!("No {} entry for {pdb_id}, plotting PDB only", StructureKind::Bdb);
    }

    render(pdb_id, &reference, derived.as_ref(), options, diagnostics).map(Some)
}
