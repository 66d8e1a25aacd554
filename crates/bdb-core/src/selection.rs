//! Pick the atoms that end up on the plot.

use crate::atoms::{AtomRecord, BFactorSeries};

/// Selection
///
/// Indices into a [`BFactorSeries`] together with the B-factors found at
/// those indices, in series order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub(crate) indices: Vec<usize>,
    pub(crate) values: Vec<f64>,
}

impl Selection {
    pub fn new(indices: Vec<usize>, values: Vec<f64>) -> Self {
        Selection { indices, values }
    }
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
    pub fn values(&self) -> &[f64] {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.indices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Records of the selected atoms, gathered from the series the selection was made on.
    pub fn records<'a>(&'a self, series: &'a BFactorSeries) -> Vec<&'a AtomRecord> {
        self.indices
            .iter()
            .filter_map(|&idx| series.get(idx).map(|(record, _)| record))
            .collect()
    }

    /// Rescale values to zero mean and unit (population) variance.
    ///
    /// A flat series has no spread to divide by and is only centred.
    pub fn normalized(mut self) -> Self {
        if self.values.is_empty() {
            return self;
        }
        let n = self.values.len() as f64;
        let mean = self.values.iter().sum::<f64>() / n;
        let variance = self.values.iter().map(|b| (b - mean).powi(2)).sum::<f64>() / n;
        let sd = variance.sqrt();
        for b in self.values.iter_mut() {
            *b -= mean;
            if sd > 0.0 {
                *b /= sd;
            }
        }
        self
    }
}

/// Select the B-factors to plot.
///
/// With `backbone_only` only the C-alpha atoms are kept; otherwise every atom is,
/// and the indices are the dense range `0..series.len()`.
pub fn select(series: &BFactorSeries, backbone_only: bool) -> Selection {
    let (indices, values): (Vec<usize>, Vec<f64>) = if backbone_only {
        series
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, (record, _))| record.is_backbone_marker())
            .map(|(idx, (_, b))| (idx, *b))
            .unzip()
    } else {
        ((0..series.len()).collect(), series.values().collect())
    };
    Selection::new(indices, values)
}
