//! Per-round diagnostics of a fit.
use plotters::prelude::*;
use serde::Serialize;

use crate::{BoostError, Result};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;


/// Key of the validation loss.
pub const LOSS_ON_VAL: &str = "loss_on_val";
/// Key of the training loss.
pub const LOSS_ON_TRAIN: &str = "loss_on_train";
/// Key of the weight of each appended hypothesis,
/// i.e., the line-search step size times the learning rate.
pub const GAMMA: &str = "gamma";


const PLOT_SIZE: (u32, u32) = (800, 600);
const COLORS: [RGBColor; 4] = [RED, BLUE, GREEN, MAGENTA];


/// Metric name to the values recorded for it, one per round.
///
/// Keys are [`LOSS_ON_TRAIN`], [`GAMMA`] and,
/// when early stopping is enabled, [`LOSS_ON_VAL`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct History {
    records: BTreeMap<String, Vec<f64>>,
}


impl History {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }


    /// Append `value` to the sequence of `key`.
    pub fn append<S: Into<String>>(&mut self, key: S, value: f64) {
        self.records.entry(key.into())
            .or_default()
            .push(value);
    }


    /// The values recorded for `key`, oldest first.
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.records.get(key).map(|v| &v[..])
    }


    /// Iterate over `(key, values)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.records.iter()
            .map(|(k, v)| (k.as_str(), &v[..]))
    }


    /// Number of keys.
    pub fn len(&self) -> usize {
        self.records.len()
    }


    /// Returns `true` if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Length of the longest sequence.
    pub fn n_rounds(&self) -> usize {
        self.records.values()
            .map(|v| v.len())
            .max()
            .unwrap_or(0)
    }


    /// Write the history as CSV.
    /// The first column is the round, starting at `1`.
    /// A sequence shorter than the others leaves its cells empty.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = BufWriter::new(File::create(path)?);

        let header = std::iter::once("round")
            .chain(self.records.keys().map(|k| k.as_str()))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(file, "{header}")?;

        for round in 0..self.n_rounds() {
            let line = std::iter::once((round + 1).to_string())
                .chain(
                    self.records.values()
                        .map(|v| v.get(round)
                            .map(|x| x.to_string())
                            .unwrap_or_default()
                        )
                )
                .collect::<Vec<_>>()
                .join(",");
            writeln!(file, "{line}")?;
        }
        file.flush()?;
        Ok(())
    }


    /// Draw every recorded sequence against the round number
    /// into an SVG file.
    pub fn plot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if self.is_empty() {
            return Err(BoostError::InvalidSample(
                "cannot plot an empty history".into()
            ));
        }

        let path: &Path = path.as_ref();
        let n_rounds = self.n_rounds().max(2);

        let (lo, hi) = self.records.values()
            .flatten()
            .copied()
            .filter(|x| x.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        let (lo, hi) = if lo > hi {
            (0.0, 1.0)
        } else if lo == hi {
            (lo - 0.5, hi + 0.5)
        } else {
            let pad = 0.05 * (hi - lo);
            (lo - pad, hi + pad)
        };

        let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("History", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(1f64..n_rounds as f64, lo..hi)
            .map_err(plot_error)?;

        chart.configure_mesh()
            .x_desc("round")
            .draw()
            .map_err(plot_error)?;

        for (i, (key, values)) in self.records.iter().enumerate() {
            let color = COLORS[i % COLORS.len()];
            let points = values.iter()
                .enumerate()
                .filter(|(_, y)| y.is_finite())
                .map(|(t, &y)| ((t + 1) as f64, y));
            chart.draw_series(LineSeries::new(points, &color))
                .map_err(plot_error)?
                .label(key.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color)
                });
        }

        chart.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
        Ok(())
    }
}


fn plot_error<E: std::fmt::Display>(e: E) -> BoostError {
    BoostError::Plot(e.to_string())
}
