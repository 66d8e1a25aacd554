//! Figure size and x-axis tick planning.
//!
//! Two steps that talk to each other only through the `thinning` flag returned by
//! [`plan_figure`]: a clamped all-atom figure asks [`plan_ticks`] for sparser ticks.

use crate::atoms::AtomRecord;

/// Backbone plots always use this size, in figure units.
pub const BACKBONE_FIGURE: (f64, f64) = (23.0, 12.0);
/// Figure height for all-atom plots.
pub const FIGURE_HEIGHT: f64 = 12.0;
/// Figure width per plotted atom in all-atom mode.
pub const WIDTH_PER_ATOM: f64 = 0.2;
/// All-atom figures wider than this are clamped.
pub const MAX_FIGURE_WIDTH: f64 = 2417.0;
/// Width used once a figure has been clamped.
pub const CLAMPED_FIGURE_WIDTH: f64 = 409.0;

/// Receives the planner's diagnostic messages.
pub trait Diagnostics {
    fn debug(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSpec {
    pub width: f64,
    pub height: f64,
    pub downscaled: bool,
}

/// Choose the figure size for `atom_count` atoms.
///
/// Returns the figure and the tick thinning flag for [`plan_ticks`]. Backbone plots
/// pass `backbone_only` through unchanged; all-atom plots ask for thinning exactly
/// when their width had to be clamped.
pub fn plan_figure(
    atom_count: usize,
    backbone_only: bool,
    diagnostics: &dyn Diagnostics,
) -> (FigureSpec, bool) {
    if backbone_only {
        let (width, height) = BACKBONE_FIGURE;
        let figure = FigureSpec {
            width,
            height,
            downscaled: false,
        };
        return (figure, backbone_only);
    }

    let width = atom_count as f64 * WIDTH_PER_ATOM;
    if width > MAX_FIGURE_WIDTH {
        diagnostics.debug(&format!(
            "Figure width ({width}) too large. Setting max width"
        ));
        let figure = FigureSpec {
            width: CLAMPED_FIGURE_WIDTH,
            height: FIGURE_HEIGHT,
            downscaled: true,
        };
        return (figure, true);
    }

    let figure = FigureSpec {
        width,
        height: FIGURE_HEIGHT,
        downscaled: false,
    };
    (figure, false)
}

/// Major ticks with their labels, plus unlabelled minor ticks.
///
/// Positions index into the plotted values, not into the full series.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickPlan {
    pub major_positions: Vec<usize>,
    pub major_labels: Vec<String>,
    pub minor_positions: Vec<usize>,
}

impl TickPlan {
    pub fn label_at(&self, position: usize) -> Option<&str> {
        self.major_positions
            .binary_search(&position)
            .ok()
            .map(|i| self.major_labels[i].as_str())
    }
}

/// Plan x-axis ticks for the plotted atoms.
///
/// Every atom gets a labelled tick unless the plot is a backbone plot
/// (one step per 300 atoms) or a clamped all-atom plot (one step per 1000 atoms).
pub fn plan_ticks(records: &[&AtomRecord], backbone_only: bool, thinning: bool) -> TickPlan {
    let n = records.len();

    let (major_positions, minor_positions) = if backbone_only {
        stepped_positions(n, 300, 5)
    } else if thinning {
        stepped_positions(n, 1000, 2)
    } else {
        ((0..n).collect(), Vec::new())
    };

    let major_labels = major_positions
        .iter()
        .map(|&idx| records[idx].label())
        .collect();

    TickPlan {
        major_positions,
        major_labels,
        minor_positions,
    }
}

// `scale = n / per`; majors every `major_factor * scale`, minors every `scale`,
// both falling back to a step of one for short series.
fn stepped_positions(n: usize, per: usize, major_factor: usize) -> (Vec<usize>, Vec<usize>) {
    let scale = n / per;
    let (major_step, minor_step) = if scale > 0 {
        (major_factor * scale, scale)
    } else {
        (1, 1)
    };
    (
        (0..n).step_by(major_step).collect(),
        (0..n).step_by(minor_step).collect(),
    )
}
