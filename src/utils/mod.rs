//! Signal helpers for scanline processing
//!
//! - Grayscale conversion and band sampling
//! - Least-squares regression threshold
//! - Binarization against that threshold

pub mod binarization;
pub mod grayscale;
pub mod regression;
