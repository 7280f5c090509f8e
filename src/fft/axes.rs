use std::f64::consts::PI;

use serde::Serialize;

/// Natural-order frequency axes for a sampling window.
///
/// Holds parallel angular-frequency (rad per x-unit) and cyclic-frequency
/// (cycles per x-unit) arrays, one value per spectrum bin, sorted by
/// monotonically increasing frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyAxes {
    omega: Vec<f64>,
    freqs: Vec<f64>,
}

impl FrequencyAxes {
    /// Axes for a full complex spectrum of `bins` bins over `[xmin, xmax]`.
    ///
    /// Bin `i` carries integer frequency index `i - bins/2`, so DC sits at
    /// index `bins/2` and, for even `bins`, index 0 is the negative Nyquist
    /// frequency.
    pub fn centered(xmin: f64, xmax: f64, bins: usize) -> Self {
        let dw = 2.0 * PI / (xmax - xmin);
        let df = 1.0 / (xmax - xmin);
        let half = (bins / 2) as isize;
        let index = |i: usize| (i as isize - half) as f64;
        Self {
            omega: (0..bins).map(|i| index(i) * dw).collect(),
            freqs: (0..bins).map(|i| index(i) * df).collect(),
        }
    }

    /// Axes for a real half spectrum of `bins` bins over `[xmin, xmax]`,
    /// starting at DC.
    pub fn one_sided(xmin: f64, xmax: f64, bins: usize) -> Self {
        let dw = 2.0 * PI / (xmax - xmin);
        let df = 1.0 / (xmax - xmin);
        Self {
            omega: (0..bins).map(|i| i as f64 * dw).collect(),
            freqs: (0..bins).map(|i| i as f64 * df).collect(),
        }
    }

    /// Angular frequency per bin.
    pub fn omega(&self) -> &[f64] {
        &self.omega
    }

    /// Cyclic frequency per bin.
    pub fn frequencies(&self) -> &[f64] {
        &self.freqs
    }

    pub fn len(&self) -> usize {
        self.omega.len()
    }

    pub fn is_empty(&self) -> bool {
        self.omega.is_empty()
    }
}
