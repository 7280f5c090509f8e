use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};

use crate::error::SpectralError;

/// Forward discrete Fourier transform over a complex buffer.
///
/// Contract: the transform runs in place and leaves the spectrum in
/// transform-native wrap-around order (DC first, negative frequencies in the
/// upper half), scaled by `1/len` so that a unit-amplitude complex
/// exponential aligned with a bin concentrates into a single unit bin. The
/// basis functions are defined over the buffer index domain `[0, 2π)` with no
/// pre-shift for negative frequencies.
pub trait ComplexDft {
    fn transform(&mut self, data: &mut [Complex<f64>]);
}

/// Forward discrete Fourier transform over a real, even-length buffer.
///
/// Contract: writes the unnormalized half spectrum (`input.len()/2 + 1`
/// complex bins, ascending frequency, DC first) into `output`. The input
/// buffer may be used as scratch space.
pub trait RealDft {
    fn transform(
        &mut self,
        input: &mut [f64],
        output: &mut [Complex<f64>],
    ) -> Result<(), SpectralError>;
}

/// Default [`ComplexDft`] backed by rustfft.
///
/// Plans are cached by the planner and the scratch buffer is reused, so
/// repeated transforms of one length allocate nothing.
pub struct FftKernel {
    planner: FftPlanner<f64>,
    scratch: Vec<Complex<f64>>,
}

impl FftKernel {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            scratch: Vec::new(),
        }
    }
}

impl Default for FftKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexDft for FftKernel {
    fn transform(&mut self, data: &mut [Complex<f64>]) {
        if data.is_empty() {
            return;
        }
        let fft = self.planner.plan_fft_forward(data.len());
        if self.scratch.len() < fft.get_inplace_scratch_len() {
            self.scratch
                .resize(fft.get_inplace_scratch_len(), Complex::new(0.0, 0.0));
        }
        fft.process_with_scratch(data, &mut self.scratch);
        let scale = 1.0 / data.len() as f64;
        for bin in data.iter_mut() {
            *bin *= scale;
        }
    }
}

/// Default [`RealDft`] backed by realfft.
pub struct RealFftKernel {
    planner: RealFftPlanner<f64>,
    scratch: Vec<Complex<f64>>,
}

impl RealFftKernel {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::new(),
            scratch: Vec::new(),
        }
    }
}

impl Default for RealFftKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl RealDft for RealFftKernel {
    fn transform(
        &mut self,
        input: &mut [f64],
        output: &mut [Complex<f64>],
    ) -> Result<(), SpectralError> {
        let fft = self.planner.plan_fft_forward(input.len());
        if self.scratch.len() < fft.get_scratch_len() {
            self.scratch
                .resize(fft.get_scratch_len(), Complex::new(0.0, 0.0));
        }
        fft.process_with_scratch(input, output, &mut self.scratch)
            .map_err(|err| SpectralError::Backend(err.to_string()))
    }
}

/// Reorders a wrap-around spectrum so bins run from the most negative
/// frequency up to the most positive, with DC landing at index `len/2`.
pub fn to_natural_order<T>(spectrum: &mut [T]) {
    let n = spectrum.len();
    if n > 1 {
        spectrum.rotate_left(n.div_ceil(2));
    }
}
