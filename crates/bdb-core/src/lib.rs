//! # bdb-core
//!
//! B-factor comparison plots for a PDB entry and its re-refined BDB counterpart.
//!
//! __bdb-core__ provides functionality for:
//! * Extracting per-atom B-factors from a parsed structure ([`BFactorSeries`])
//! * Selecting the atoms to plot (all atoms or C-alpha only)
//! * Planning figure size and x-axis tick density from the atom count
//! * Composing and rendering a two-series line chart to PNG bytes
//!
//! The main entry points are [`render`], which draws already-extracted series, and
//! [`plot_entry`], which asks a [`StructureSource`] for both records first.
//!
mod atoms;
mod chart;
mod conversions;
mod error;
mod layout;
mod plot;
mod selection;

pub use self::atoms::{AtomRecord, BFactorSeries, BACKBONE_MARKER};
pub use self::chart::{compose, ChartSpec, LineSpec};
pub use self::error::{PlotError, Result};
pub use self::layout::{
    plan_figure, plan_ticks, Diagnostics, FigureSpec, TickPlan, TracingDiagnostics,
};
pub use self::plot::{plot_entry, render, PlotOptions, Png, StructureKind, StructureSource};
pub use self::selection::{select, Selection};
