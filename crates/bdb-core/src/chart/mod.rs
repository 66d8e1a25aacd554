//! Chart composition.
//!
//! [`compose`] turns the extracted series into a [`ChartSpec`]: figure size, ticks
//! and one line per record. Drawing lives in `draw` and only reads the [`ChartSpec`].
mod colors;
mod draw;

pub(crate) use self::draw::draw_png;

use crate::atoms::BFactorSeries;
use crate::layout::{plan_figure, plan_ticks, Diagnostics, FigureSpec, TickPlan};
use crate::plot::PlotOptions;
use crate::selection::select;
use colors::{BDB_BLUE, PDB_BROWN};
use itertools::Itertools;
use plotters::style::RGBColor;

pub const PDB_LABEL: &str = "pdb";
pub const BDB_LABEL: &str = "bdb";

#[derive(Clone, Debug, PartialEq)]
pub struct LineSpec {
    pub label: String,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

impl LineSpec {
    fn new(label: &str, color: RGBColor, values: &[f64]) -> Self {
        LineSpec {
            label: label.to_string(),
            color,
            points: values
                .iter()
                .enumerate()
                .map(|(i, &b)| (i as f64, b))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub y_label: String,
    pub figure: FigureSpec,
    pub ticks: TickPlan,
    pub lines: Vec<LineSpec>,
}

impl ChartSpec {
    /// Legend entries, one per line, in drawing order.
    pub fn legend(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.label.as_str()).collect()
    }

    /// Number of x positions any line occupies.
    pub fn x_extent(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.points.len())
            .max()
            .unwrap_or(0)
    }

    /// Smallest and largest finite value over all lines.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .flat_map(|line| line.points.iter().map(|&(_, y)| y))
            .filter(|y| y.is_finite())
            .minmax()
            .into_option()
    }
}

/// Compose the comparison chart for one entry.
///
/// The figure is sized from the full reference series. X-axis ticks are planned
/// from the reference selection only, so when a BDB line is present and differs
/// in length from the PDB line its points are still labelled with PDB atoms.
pub fn compose(
    pdb_id: &str,
    reference: &BFactorSeries,
    derived: Option<&BFactorSeries>,
    options: &PlotOptions,
    diagnostics: &dyn Diagnostics,
) -> ChartSpec {
    let (figure, thinning) = plan_figure(reference.len(), options.backbone_only, diagnostics);

    let pdb_selection = options.selection(reference);
    let ticks = plan_ticks(
        &pdb_selection.records(reference),
        options.backbone_only,
        thinning,
    );

    let mut lines = vec![LineSpec::new(PDB_LABEL, PDB_BROWN, pdb_selection.values())];
    if let Some(derived) = derived {
        let bdb_selection = options.selection(derived);
        lines.push(LineSpec::new(BDB_LABEL, BDB_BLUE, bdb_selection.values()));
    }

    let y_label = if options.normalize {
        "Normalized B-factor"
    } else {
        "B-factor"
    };

    ChartSpec {
        title: pdb_id.to_string(),
        y_label: y_label.to_string(),
        figure,
        ticks,
        lines,
    }
}

impl PlotOptions {
    fn selection(&self, series: &BFactorSeries) -> crate::selection::Selection {
        let selection = select(series, self.backbone_only);
        if self.normalize {
            selection.normalized()
        } else {
            selection
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::AtomRecord;
    use crate::layout::TracingDiagnostics;

    fn series(names: &[&str], offset: f64) -> BFactorSeries {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| (AtomRecord::new("A", (i / 2 + 1) as isize, name), offset + i as f64))
            .collect()
    }

    fn all_atoms() -> PlotOptions {
        PlotOptions {
            backbone_only: false,
            ..PlotOptions::default()
        }
    }

    #[test]
    fn test_compose_reference_only() {
        let reference = series(&["N", "CA", "C", "O"], 10.0);
        let spec = compose("1crn", &reference, None, &all_atoms(), &TracingDiagnostics);

        assert_eq!(spec.title, "1crn");
        assert_eq!(spec.y_label, "B-factor");
        assert_eq!(spec.legend(), vec!["pdb"]);
        assert_eq!(spec.lines[0].points.len(), 4);
        assert_eq!(spec.lines[0].points[3], (3.0, 13.0));
        assert_eq!(spec.lines[0].color, PDB_BROWN);
        assert_eq!(spec.ticks.major_labels, ["A1N", "A1CA", "A2C", "A2O"]);
        assert!((spec.figure.width - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_compose_with_derived() {
        let reference = series(&["N", "CA", "C", "O"], 10.0);
        let derived = series(&["N", "CA", "C", "O", "OXT"], 30.0);
        let spec = compose(
            "1crn",
            &reference,
            Some(&derived),
            &all_atoms(),
            &TracingDiagnostics,
        );

        assert_eq!(spec.legend(), vec!["pdb", "bdb"]);
        assert_eq!(spec.lines[0].points.len(), 4);
        assert_eq!(spec.lines[1].points.len(), 5);
        assert_eq!(spec.lines[1].color, BDB_BLUE);
        // ticks come from the reference series only
        assert_eq!(spec.ticks.major_positions, vec![0, 1, 2, 3]);
        assert_eq!(spec.x_extent(), 5);
        assert_eq!(spec.y_bounds(), Some((10.0, 34.0)));
    }

    #[test]
    fn test_compose_backbone() {
        let reference = series(&["N", "CA", "C", "CA", "O", "CA"], 0.0);
        let derived = series(&["CA", "C"], 5.0);
        let spec = compose(
            "1crn",
            &reference,
            Some(&derived),
            &PlotOptions::default(),
            &TracingDiagnostics,
        );
        assert_eq!(spec.lines[0].points, vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
        assert_eq!(spec.lines[1].points, vec![(0.0, 5.0)]);
        assert_eq!(spec.ticks.major_labels, ["A1CA", "A2CA", "A3CA"]);
        assert_eq!((spec.figure.width, spec.figure.height), (23.0, 12.0));
    }

    #[test]
    fn test_compose_normalized() {
        let reference = series(&["N", "CA", "C", "O"], 10.0);
        let options = PlotOptions {
            normalize: true,
            ..all_atoms()
        };
        let spec = compose("1crn", &reference, None, &options, &TracingDiagnostics);
        assert_eq!(spec.y_label, "Normalized B-factor");
        let mean: f64 = spec.lines[0].points.iter().map(|p| p.1).sum::<f64>() / 4.0;
        assert!(mean.abs() < 1e-12);
    }

    #[test]
    fn test_compose_clamped_all_atom() {
        let reference = series(&["N", "CA", "C", "O"].repeat(3250), 10.0);
        let derived = series(&["N", "CA", "C", "O"].repeat(3250), 5.0);
        assert_eq!(reference.len(), 13000);

        let spec = compose(
            "1crn",
            &reference,
            Some(&derived),
            &all_atoms(),
            &TracingDiagnostics,
        );
        assert!(spec.figure.downscaled);
        assert_eq!(spec.figure.width, 409.0);
        // plan_figure asks plan_ticks to thin: scale = 13
        assert_eq!(spec.ticks.major_positions[..3], [0, 26, 52]);
        assert_eq!(spec.ticks.major_positions.len(), 500);
        assert_eq!(spec.ticks.minor_positions[..3], [0, 13, 26]);
        assert_eq!(spec.ticks.minor_positions.len(), 1000);

        let png = draw_png(&spec, 5.0).unwrap();
        assert!(png.starts_with(&crate::plot::Png::SIGNATURE));
    }

    #[test]
    fn test_compose_backbone_thinned() {
        let reference = series(&["N", "CA", "C", "O"].repeat(650), 10.0);
        let spec = compose(
            "1crn",
            &reference,
            None,
            &PlotOptions::default(),
            &TracingDiagnostics,
        );
        assert!(!spec.figure.downscaled);
        assert_eq!(spec.lines[0].points.len(), 650);
        // scale = 2: majors every 10, minors every 2
        assert_eq!(spec.ticks.major_positions[..3], [0, 10, 20]);
        assert_eq!(spec.ticks.minor_positions[..3], [0, 2, 4]);

        let png = draw_png(&spec, 20.0).unwrap();
        assert!(png.starts_with(&crate::plot::Png::SIGNATURE));
    }

    #[test]
    fn test_compose_empty_reference() {
        let spec = compose(
            "1crn",
            &BFactorSeries::default(),
            None,
            &all_atoms(),
            &TracingDiagnostics,
        );
        assert_eq!(spec.legend(), vec!["pdb"]);
        assert!(spec.lines[0].points.is_empty());
        assert_eq!(spec.ticks, TickPlan::default());
        assert_eq!(spec.figure.width, 0.0);
        assert_eq!(spec.y_bounds(), None);
    }
}
