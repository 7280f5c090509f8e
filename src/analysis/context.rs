use serde::Serialize;

use crate::error::SpectralError;
use crate::fft::FrequencyAxes;

/// Relative tolerance when verifying uniform sample spacing.
const SPACING_TOLERANCE: f64 = 1e-6;

/// The continuous sampling window implied by a gutter-padded sample axis.
///
/// The engines derive the spacing from the first two axis points and reject
/// an axis whose remaining steps deviate from it, so a window always
/// describes a uniformly sampled interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleWindow {
    xmin: f64,
    xmax: f64,
    dx: f64,
    samples: usize,
    gutter: usize,
}

impl SampleWindow {
    /// Derives the window for `gutter` synthetic zero samples on each side of
    /// the axis. With `drop_odd`, a trailing odd sample is excluded so the
    /// carried count is always even.
    fn from_axis(x: &[f64], gutter: usize, drop_odd: bool) -> Result<Self, SpectralError> {
        if x.len() < 2 {
            return Err(SpectralError::AxisTooShort { got: x.len() });
        }
        let dx = x[1] - x[0];
        if dx <= 0.0 {
            return Err(SpectralError::AxisNotIncreasing { step: dx });
        }
        for (index, pair) in x.windows(2).enumerate().skip(1) {
            let step = pair[1] - pair[0];
            if (step - dx).abs() > SPACING_TOLERANCE * dx {
                return Err(SpectralError::NonUniformSpacing {
                    index: index + 1,
                    found: step,
                    expected: dx,
                });
            }
        }
        let samples = if drop_odd { x.len() - x.len() % 2 } else { x.len() };
        Ok(Self::from_parts(x[0], dx, samples, gutter))
    }

    /// Synthetic unit-spaced window starting at zero.
    fn unit(samples: usize, gutter: usize, drop_odd: bool) -> Result<Self, SpectralError> {
        if samples < 2 {
            return Err(SpectralError::AxisTooShort { got: samples });
        }
        let samples = if drop_odd { samples - samples % 2 } else { samples };
        Ok(Self::from_parts(0.0, 1.0, samples, gutter))
    }

    fn from_parts(x0: f64, dx: f64, samples: usize, gutter: usize) -> Self {
        let g = gutter as f64;
        Self {
            xmin: x0 - g * dx,
            xmax: x0 + (samples - 1) as f64 * dx + (g + 1.0) * dx,
            dx,
            samples,
            gutter,
        }
    }

    /// Start of the implied continuous window, gutter included.
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// End of the implied continuous window, gutter included.
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Sample spacing.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Number of signal samples carried into the working buffer.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Zero samples padded on each side of the signal.
    pub fn gutter(&self) -> usize {
        self.gutter
    }

    pub fn span(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Working-buffer length: carried samples plus both gutters.
    pub(crate) fn padded_len(&self) -> usize {
        self.samples + 2 * self.gutter
    }
}

/// Per-bin rotation that re-references transform phases from the padded
/// buffer origin to the window origin `xmin`, folded together with the
/// engine's normalization factor.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PhaseCorrection {
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl PhaseCorrection {
    fn new(omega: &[f64], xmin: f64, norm: f64) -> Self {
        Self {
            cos: omega.iter().map(|w| norm * (w * xmin).cos()).collect(),
            sin: omega.iter().map(|w| norm * (w * xmin).sin()).collect(),
        }
    }

    /// The DC term has no mirror negative-frequency partner and must not be
    /// double-counted by the real-transform normalization.
    fn halve_dc(&mut self) {
        if let Some(c) = self.cos.first_mut() {
            *c *= 0.5;
        }
        if let Some(s) = self.sin.first_mut() {
            *s *= 0.5;
        }
    }

    /// Rotation by `e^{-i·omega[i]·xmin}`, scaled.
    pub(crate) fn rotate(&self, i: usize, re: f64, im: f64) -> (f64, f64) {
        (
            re * self.cos[i] + im * self.sin[i],
            im * self.cos[i] - re * self.sin[i],
        )
    }

    /// Rotation producing cosine/sine coefficients over the physical domain.
    pub(crate) fn to_sin_cos(&self, i: usize, re: f64, im: f64) -> (f64, f64) {
        (
            re * self.cos[i] + im * self.sin[i],
            re * self.sin[i] - im * self.cos[i],
        )
    }
}

/// Cached state for repeated complex spectral analysis over a fixed window.
///
/// Produced by [`ComplexAnalyzer::analyze`](crate::analysis::ComplexAnalyzer)
/// or built directly, then threaded into `reanalyze` calls. Immutable, so the
/// reuse contract is explicit in the signatures.
#[derive(Debug, Clone)]
pub struct ComplexContext {
    window: SampleWindow,
    axes: FrequencyAxes,
    correction: PhaseCorrection,
}

impl ComplexContext {
    pub fn new(x: &[f64], gutter: usize) -> Result<Self, SpectralError> {
        Ok(Self::from_window(SampleWindow::from_axis(x, gutter, false)?))
    }

    /// Unit-spaced window starting at zero with no gutter, for callers that
    /// stream samples without a physical axis.
    pub fn unit(samples: usize) -> Result<Self, SpectralError> {
        Ok(Self::from_window(SampleWindow::unit(samples, 0, false)?))
    }

    fn from_window(window: SampleWindow) -> Self {
        let bins = window.padded_len();
        let axes = FrequencyAxes::centered(window.xmin(), window.xmax(), bins);
        let norm = bins as f64 / window.samples() as f64;
        let correction = PhaseCorrection::new(axes.omega(), window.xmin(), norm);
        Self {
            window,
            axes,
            correction,
        }
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn axes(&self) -> &FrequencyAxes {
        &self.axes
    }

    /// Number of spectrum bins, equal to the padded buffer length.
    pub fn bins(&self) -> usize {
        self.window.padded_len()
    }

    pub(crate) fn correction(&self) -> &PhaseCorrection {
        &self.correction
    }
}

/// Cached state for repeated sin/cos spectral analysis over a fixed window.
#[derive(Debug, Clone)]
pub struct SinCosContext {
    window: SampleWindow,
    axes: FrequencyAxes,
    correction: PhaseCorrection,
}

impl SinCosContext {
    pub fn new(x: &[f64], gutter: usize) -> Result<Self, SpectralError> {
        Ok(Self::from_window(SampleWindow::from_axis(x, gutter, true)?))
    }

    /// Unit-spaced window starting at zero with no gutter.
    pub fn unit(samples: usize) -> Result<Self, SpectralError> {
        Ok(Self::from_window(SampleWindow::unit(samples, 0, true)?))
    }

    fn from_window(window: SampleWindow) -> Self {
        let bins = window.padded_len() / 2;
        let axes = FrequencyAxes::one_sided(window.xmin(), window.xmax(), bins);
        let norm = 2.0 / window.samples() as f64;
        let mut correction = PhaseCorrection::new(axes.omega(), window.xmin(), norm);
        correction.halve_dc();
        Self {
            window,
            axes,
            correction,
        }
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn axes(&self) -> &FrequencyAxes {
        &self.axes
    }

    /// Number of coefficient bins (half the padded buffer length, Nyquist
    /// dropped).
    pub fn bins(&self) -> usize {
        self.window.padded_len() / 2
    }

    pub(crate) fn correction(&self) -> &PhaseCorrection {
        &self.correction
    }
}
