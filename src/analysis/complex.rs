use log::debug;
use num_complex::Complex;

use crate::analysis::ComplexContext;
use crate::dataset::{COLOR_BLUE, COLOR_GREEN, COLOR_RED, Dataset};
use crate::error::SpectralError;
use crate::fft::{ComplexDft, FftKernel, to_natural_order};

/// Phase-corrected Fourier spectra of complex sampled signals.
///
/// The engine pads the signal with zero-valued gutters, transforms it,
/// reorders the result to natural frequency order and rotates every bin so
/// phases are referenced to the physical window start rather than the padded
/// buffer origin. `analyze` builds a [`ComplexContext`] from the sample axis;
/// `reanalyze` reuses it, which is the hot path for streaming displays where
/// the window is fixed and only sample values change.
pub struct ComplexAnalyzer {
    dft: Box<dyn ComplexDft>,
    buffer: Vec<Complex<f64>>,
}

impl ComplexAnalyzer {
    pub fn new() -> Self {
        Self::with_dft(Box::new(FftKernel::new()))
    }

    /// Uses a custom transform backend; see [`ComplexDft`] for the contract
    /// the backend must honor.
    pub fn with_dft(dft: Box<dyn ComplexDft>) -> Self {
        Self {
            dft,
            buffer: Vec::new(),
        }
    }

    /// Full analysis of `z` sampled at `x`, with `gutter` zero samples padded
    /// on each side.
    pub fn analyze(
        &mut self,
        x: &[f64],
        z: &[Complex<f64>],
        gutter: usize,
    ) -> Result<ComplexAnalysis, SpectralError> {
        if z.len() != x.len() {
            return Err(SpectralError::LengthMismatch {
                signal: z.len(),
                expected: x.len(),
            });
        }
        let context = ComplexContext::new(x, gutter)?;
        debug!(
            "complex analysis: {} samples, gutter {}, {} bins",
            context.window().samples(),
            gutter,
            context.bins()
        );
        self.transform(&context, z)?;
        Ok(ComplexAnalysis {
            spectrum: self.buffer.clone(),
            context,
        })
    }

    /// Re-transforms a new signal over a previously analyzed window, reusing
    /// the cached axes and phase vectors.
    ///
    /// The returned slice aliases the engine's working buffer and is valid
    /// until the next call. O(n log n) per call with no allocation beyond the
    /// transform's own scratch once the buffer matches the context.
    pub fn reanalyze<'a>(
        &'a mut self,
        context: &ComplexContext,
        z: &[Complex<f64>],
    ) -> Result<&'a [Complex<f64>], SpectralError> {
        self.transform(context, z)?;
        Ok(&self.buffer)
    }

    fn transform(
        &mut self,
        context: &ComplexContext,
        z: &[Complex<f64>],
    ) -> Result<(), SpectralError> {
        let samples = context.window().samples();
        if z.len() != samples {
            return Err(SpectralError::WindowMismatch {
                signal: z.len(),
                expected: samples,
            });
        }
        let gutter = context.window().gutter();
        let bins = context.bins();

        self.buffer.resize(bins, Complex::new(0.0, 0.0));
        self.buffer[..gutter].fill(Complex::new(0.0, 0.0));
        self.buffer[gutter + samples..].fill(Complex::new(0.0, 0.0));
        self.buffer[gutter..gutter + samples].copy_from_slice(z);

        self.dft.transform(&mut self.buffer);
        to_natural_order(&mut self.buffer);

        let correction = context.correction();
        for (i, bin) in self.buffer.iter_mut().enumerate() {
            let (re, im) = correction.rotate(i, bin.re, bin.im);
            *bin = Complex::new(re, im);
        }
        Ok(())
    }
}

impl Default for ComplexAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// A phase-corrected complex spectrum together with its analysis context.
#[derive(Debug, Clone)]
pub struct ComplexAnalysis {
    context: ComplexContext,
    spectrum: Vec<Complex<f64>>,
}

impl ComplexAnalysis {
    pub fn context(&self) -> &ComplexContext {
        &self.context
    }

    /// Natural-order spectrum bins.
    pub fn spectrum(&self) -> &[Complex<f64>] {
        &self.spectrum
    }

    pub fn amplitudes(&self) -> Vec<f64> {
        self.spectrum.iter().map(|bin| bin.norm()).collect()
    }

    pub fn phases(&self) -> Vec<f64> {
        self.spectrum.iter().map(|bin| bin.arg()).collect()
    }

    pub fn power(&self) -> Vec<f64> {
        self.spectrum.iter().map(|bin| bin.norm_sqr()).collect()
    }

    /// Packages the spectrum as "re", "im" and "power" series against the
    /// cyclic-frequency axis.
    pub fn to_datasets(&self) -> Vec<Dataset> {
        let freqs = self.context.axes().frequencies();
        let re: Vec<f64> = self.spectrum.iter().map(|bin| bin.re).collect();
        let im: Vec<f64> = self.spectrum.iter().map(|bin| bin.im).collect();
        vec![
            Dataset::from_points("re", COLOR_RED, freqs, &re),
            Dataset::from_points("im", COLOR_GREEN, freqs, &im),
            Dataset::from_points("power", COLOR_BLUE, freqs, &self.power()),
        ]
    }
}
