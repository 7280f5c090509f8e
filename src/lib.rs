//! Fourier spectral analysis for uniformly sampled signals.
//!
//! A finite sampled window, fed straight into a DFT, is implicitly treated as
//! one period of an infinite signal. This crate reduces the resulting leakage
//! by padding the signal with zero-valued "gutter" regions before
//! transforming, and then rotates every spectrum bin so phases are referenced
//! to the physical sampling window instead of the padded buffer origin.
//!
//! Two engines cover the two input shapes:
//!
//! - [`ComplexAnalyzer`] — complex signals, full natural-order spectrum.
//! - [`SinCosAnalyzer`] — real signals, half spectrum of cosine/sine
//!   coefficient pairs.
//!
//! `analyze` validates the sample axis and produces an immutable context
//! (window, frequency axes, phase-correction vectors); `reanalyze` threads
//! that context back in and reuses every cached piece, which is the hot path
//! for streaming displays where the window is fixed and only sample values
//! change per frame.
//!
//! ```
//! use fourier_scan_rs::SinCosAnalyzer;
//!
//! let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|&xi| (2.0 * std::f64::consts::PI * xi / 8.0).cos()).collect();
//!
//! let mut engine = SinCosAnalyzer::new();
//! let analysis = engine.analyze(&x, &y, 0)?;
//! assert!((analysis.coefficients()[1].cos - 1.0).abs() < 1e-9);
//!
//! // hot path: same window, new samples
//! let coefficients = engine.reanalyze(analysis.context(), &y)?;
//! assert_eq!(coefficients.len(), 4);
//! # Ok::<(), fourier_scan_rs::SpectralError>(())
//! ```

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod fft;

pub use analysis::{
    ComplexAnalysis, ComplexAnalyzer, ComplexContext, SampleWindow, SinCos, SinCosAnalysis,
    SinCosAnalyzer, SinCosContext,
};
pub use dataset::Dataset;
pub use error::SpectralError;
pub use fft::{ComplexDft, FftKernel, FrequencyAxes, RealDft, RealFftKernel, to_natural_order};
