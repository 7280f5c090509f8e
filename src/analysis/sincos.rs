use log::debug;
use num_complex::Complex;
use serde::Serialize;

use crate::analysis::SinCosContext;
use crate::dataset::{COLOR_BLUE, COLOR_GREEN, COLOR_RED, Dataset};
use crate::error::SpectralError;
use crate::fft::{RealDft, RealFftKernel};

/// Cosine/sine coefficient pair at one frequency bin.
///
/// The analyzed signal is approximated by
/// `Σ cos_i·cos(omega[i]·x) + sin_i·sin(omega[i]·x)` over the physical
/// `x` domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SinCos {
    pub cos: f64,
    pub sin: f64,
}

/// Phase-corrected cosine/sine spectra of real sampled signals.
///
/// Same gutter-padding and phase-correction discipline as
/// [`ComplexAnalyzer`](crate::analysis::ComplexAnalyzer), but the transform
/// exploits Hermitian symmetry and the output is a half spectrum of
/// cosine/sine coefficient pairs. A trailing odd sample is dropped so the
/// padded buffer always carries an even number of samples.
pub struct SinCosAnalyzer {
    dft: Box<dyn RealDft>,
    buffer: Vec<f64>,
    spectrum: Vec<Complex<f64>>,
    coefficients: Vec<SinCos>,
}

impl SinCosAnalyzer {
    pub fn new() -> Self {
        Self::with_dft(Box::new(RealFftKernel::new()))
    }

    /// Uses a custom transform backend; see [`RealDft`] for the contract the
    /// backend must honor.
    pub fn with_dft(dft: Box<dyn RealDft>) -> Self {
        Self {
            dft,
            buffer: Vec::new(),
            spectrum: Vec::new(),
            coefficients: Vec::new(),
        }
    }

    /// Full analysis of `y` sampled at `x`, with `gutter` zero samples padded
    /// on each side.
    pub fn analyze(
        &mut self,
        x: &[f64],
        y: &[f64],
        gutter: usize,
    ) -> Result<SinCosAnalysis, SpectralError> {
        if y.len() != x.len() {
            return Err(SpectralError::LengthMismatch {
                signal: y.len(),
                expected: x.len(),
            });
        }
        let context = SinCosContext::new(x, gutter)?;
        debug!(
            "sin/cos analysis: {} samples carried, gutter {}, {} bins",
            context.window().samples(),
            gutter,
            context.bins()
        );
        self.transform(&context, y)?;
        Ok(SinCosAnalysis {
            coefficients: self.coefficients.clone(),
            context,
        })
    }

    /// Re-transforms a new signal over a previously analyzed window, reusing
    /// the cached axes and phase vectors — including their sign convention,
    /// which is identical to `analyze`.
    ///
    /// Accepts the carried sample count or one more (the original odd-length
    /// shape); a trailing odd sample is ignored. The returned slice aliases
    /// the engine's coefficient buffer and is valid until the next call.
    pub fn reanalyze<'a>(
        &'a mut self,
        context: &SinCosContext,
        y: &[f64],
    ) -> Result<&'a [SinCos], SpectralError> {
        self.transform(context, y)?;
        Ok(&self.coefficients)
    }

    fn transform(&mut self, context: &SinCosContext, y: &[f64]) -> Result<(), SpectralError> {
        let samples = context.window().samples();
        if y.len() != samples && y.len() != samples + 1 {
            return Err(SpectralError::WindowMismatch {
                signal: y.len(),
                expected: samples,
            });
        }
        let gutter = context.window().gutter();
        let bins = context.bins();
        let padded = 2 * bins;

        self.buffer.resize(padded, 0.0);
        self.buffer[..gutter].fill(0.0);
        self.buffer[gutter + samples..].fill(0.0);
        self.buffer[gutter..gutter + samples].copy_from_slice(&y[..samples]);

        // half spectrum carries one extra (Nyquist) bin that is dropped below
        self.spectrum.resize(bins + 1, Complex::new(0.0, 0.0));
        self.dft.transform(&mut self.buffer, &mut self.spectrum)?;

        let correction = context.correction();
        self.coefficients.resize(bins, SinCos { cos: 0.0, sin: 0.0 });
        for (i, coefficient) in self.coefficients.iter_mut().enumerate() {
            let bin = self.spectrum[i];
            let (cos, sin) = correction.to_sin_cos(i, bin.re, bin.im);
            *coefficient = SinCos { cos, sin };
        }
        Ok(())
    }
}

impl Default for SinCosAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Phase-corrected cosine/sine coefficients together with their analysis
/// context.
#[derive(Debug, Clone)]
pub struct SinCosAnalysis {
    context: SinCosContext,
    coefficients: Vec<SinCos>,
}

impl SinCosAnalysis {
    pub fn context(&self) -> &SinCosContext {
        &self.context
    }

    pub fn coefficients(&self) -> &[SinCos] {
        &self.coefficients
    }

    pub fn cosines(&self) -> Vec<f64> {
        self.coefficients.iter().map(|c| c.cos).collect()
    }

    pub fn sines(&self) -> Vec<f64> {
        self.coefficients.iter().map(|c| c.sin).collect()
    }

    /// Per-bin power, `cos² + sin²`.
    pub fn power(&self) -> Vec<f64> {
        self.coefficients
            .iter()
            .map(|c| c.cos * c.cos + c.sin * c.sin)
            .collect()
    }

    /// Packages the coefficients as "cos", "sin" and "power" series against
    /// the cyclic-frequency axis.
    pub fn to_datasets(&self) -> Vec<Dataset> {
        let freqs = self.context.axes().frequencies();
        vec![
            Dataset::from_points("cos", COLOR_RED, freqs, &self.cosines()),
            Dataset::from_points("sin", COLOR_GREEN, freqs, &self.sines()),
            Dataset::from_points("power", COLOR_BLUE, freqs, &self.power()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn constant_signal_lands_in_the_dc_bin() {
        let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let y = vec![4.2; 8];

        let mut engine = SinCosAnalyzer::new();
        let analysis = engine.analyze(&x, &y, 0).unwrap();

        let coefficients = analysis.coefficients();
        assert_eq!(coefficients.len(), 4);
        assert!((coefficients[0].cos - 4.2).abs() < EPS);
        assert!(coefficients[0].sin.abs() < EPS);
        for (i, c) in coefficients.iter().enumerate().skip(1) {
            assert!(c.cos.abs() < EPS && c.sin.abs() < EPS, "leakage at bin {i}");
        }
    }

    #[test]
    fn recovers_a_dc_cosine_sine_mix() {
        let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let w1 = 2.0 * PI / 8.0;
        let w2 = 2.0 * w1;
        let y: Vec<f64> = x
            .iter()
            .map(|&xi| 1.0 + 3.0 * (w1 * xi).cos() + 2.0 * (w2 * xi).sin())
            .collect();

        let mut engine = SinCosAnalyzer::new();
        let analysis = engine.analyze(&x, &y, 0).unwrap();

        let c = analysis.coefficients();
        assert!((c[0].cos - 1.0).abs() < EPS && c[0].sin.abs() < EPS);
        assert!((c[1].cos - 3.0).abs() < EPS && c[1].sin.abs() < EPS);
        assert!(c[2].cos.abs() < EPS && (c[2].sin - 2.0).abs() < EPS);
        assert!(c[3].cos.abs() < EPS && c[3].sin.abs() < EPS);
    }

    #[test]
    fn coefficients_reference_absolute_x() {
        // window starts away from zero; the recovered coefficients still
        // describe cos/sin over the physical axis
        let x: Vec<f64> = (0..8).map(|i| 5.0 + i as f64).collect();
        let w1 = 2.0 * PI / 8.0;
        let y: Vec<f64> = x.iter().map(|&xi| 2.5 * (w1 * xi).cos()).collect();

        let mut engine = SinCosAnalyzer::new();
        let analysis = engine.analyze(&x, &y, 0).unwrap();

        let c = analysis.coefficients();
        assert!((c[1].cos - 2.5).abs() < EPS, "cos[1] was {}", c[1].cos);
        assert!(c[1].sin.abs() < EPS, "sin[1] was {}", c[1].sin);
    }

    #[test]
    fn sine_keeps_its_sign_through_reanalyze() {
        let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let w1 = 2.0 * PI / 8.0;
        let y: Vec<f64> = x.iter().map(|&xi| 1.5 * (w1 * xi).sin()).collect();

        let mut engine = SinCosAnalyzer::new();
        let analysis = engine.analyze(&x, &y, 0).unwrap();
        assert!((analysis.coefficients()[1].sin - 1.5).abs() < EPS);

        // reanalyze applies the same convention, so streaming callers never
        // see the sine coefficients flip sign between frames
        let repeated = engine.reanalyze(analysis.context(), &y).unwrap();
        assert!((repeated[1].sin - 1.5).abs() < EPS);
        assert!(repeated[1].cos.abs() < EPS);
    }

    #[test]
    fn odd_input_equals_its_even_truncation() {
        let x: Vec<f64> = (0..9).map(|i| i as f64).collect();
        let mut rng = StdRng::seed_from_u64(11);
        let y: Vec<f64> = (0..9).map(|_| rng.random_range(-1.0..1.0)).collect();

        let mut engine = SinCosAnalyzer::new();
        let odd = engine.analyze(&x, &y, 2).unwrap();
        let even = engine.analyze(&x[..8], &y[..8], 2).unwrap();

        assert_eq!(odd.coefficients().len(), even.coefficients().len());
        for (a, b) in odd.coefficients().iter().zip(even.coefficients()) {
            assert!((a.cos - b.cos).abs() < EPS && (a.sin - b.sin).abs() < EPS);
        }
    }

    #[test]
    fn constant_signal_keeps_dc_across_gutters() {
        let x: Vec<f64> = (0..16).map(|i| i as f64 * 0.5).collect();
        let y = vec![-2.25; 16];

        let mut engine = SinCosAnalyzer::new();
        for gutter in [0, 3, 8] {
            let analysis = engine.analyze(&x, &y, gutter).unwrap();
            let dc = analysis.coefficients()[0];
            assert!(
                (dc.cos + 2.25).abs() < EPS && dc.sin.abs() < EPS,
                "gutter {gutter}: DC was {dc:?}"
            );
        }
    }

    #[test]
    fn reanalyze_matches_analyze() {
        let x: Vec<f64> = (0..32).map(|i| 2.0 + i as f64 * 0.125).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let y: Vec<f64> = (0..32).map(|_| rng.random_range(-1.0..1.0)).collect();

        let mut engine = SinCosAnalyzer::new();
        let analysis = engine.analyze(&x, &y, 5).unwrap();
        let repeated = engine.reanalyze(analysis.context(), &y).unwrap();

        for (a, b) in repeated.iter().zip(analysis.coefficients()) {
            assert!((a.cos - b.cos).abs() < EPS && (a.sin - b.sin).abs() < EPS);
        }
    }

    #[test]
    fn reanalyze_accepts_the_legacy_odd_shape() {
        let x: Vec<f64> = (0..9).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..9).map(|i| (i as f64 * 0.4).sin()).collect();

        let mut engine = SinCosAnalyzer::new();
        let analysis = engine.analyze(&x, &y, 0).unwrap();
        // 8 carried samples; both the odd original and its truncation pass
        let with_tail = engine.reanalyze(analysis.context(), &y).unwrap().to_vec();
        let truncated = engine.reanalyze(analysis.context(), &y[..8]).unwrap();
        for (a, b) in with_tail.iter().zip(truncated) {
            assert!((a.cos - b.cos).abs() < EPS);
        }

        let too_short = vec![0.0; 7];
        assert_eq!(
            engine.reanalyze(analysis.context(), &too_short).unwrap_err(),
            SpectralError::WindowMismatch {
                signal: 7,
                expected: 8,
            }
        );
    }

    #[test]
    fn unit_context_supports_axisless_streaming() {
        let y: Vec<f64> = (0..8).map(|i| (i as f64 * 0.9).cos()).collect();
        let context = SinCosContext::unit(8).unwrap();

        let mut engine = SinCosAnalyzer::new();
        let streamed = engine.reanalyze(&context, &y).unwrap().to_vec();

        let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let reference = engine.analyze(&x, &y, 0).unwrap();
        for (a, b) in streamed.iter().zip(reference.coefficients()) {
            assert!((a.cos - b.cos).abs() < EPS && (a.sin - b.sin).abs() < EPS);
        }
    }

    #[test]
    fn mismatched_signal_is_rejected() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 2.0];
        let mut engine = SinCosAnalyzer::new();
        assert_eq!(
            engine.analyze(&x, &y, 0).unwrap_err(),
            SpectralError::LengthMismatch {
                signal: 2,
                expected: 4,
            }
        );
    }

    #[test]
    fn datasets_carry_the_frequency_axis() {
        let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&xi| (2.0 * PI * xi / 8.0).cos()).collect();
        let mut engine = SinCosAnalyzer::new();
        let analysis = engine.analyze(&x, &y, 0).unwrap();

        let datasets = analysis.to_datasets();
        assert_eq!(datasets.len(), 3);
        assert_eq!(datasets[0].name(), "cos");
        assert_eq!(datasets[1].name(), "sin");
        assert_eq!(datasets[2].xs(), analysis.context().axes().frequencies());
    }
}
