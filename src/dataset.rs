use serde::{Deserialize, Serialize};

/// Stock series colors used by the analysis results.
pub const COLOR_RED: &str = "#c62828";
pub const COLOR_GREEN: &str = "#2e7d32";
pub const COLOR_BLUE: &str = "#1565c0";

/// A named, colored series of `(x, y)` points ready for a plotting front end.
///
/// This is pure data marshaling: the library computes spectra, a display
/// layer decides how to draw them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    name: String,
    color: String,
    points: Vec<(f64, f64)>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            points: Vec::new(),
        }
    }

    /// Builds a series by pairing `xs` with `ys`; the shorter slice bounds
    /// the point count.
    pub fn from_points(
        name: impl Into<String>,
        color: impl Into<String>,
        xs: &[f64],
        ys: &[f64],
    ) -> Self {
        let mut dataset = Self::new(name, color);
        dataset
            .points
            .extend(xs.iter().copied().zip(ys.iter().copied()));
        dataset
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push((x, y));
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }
}
