//! Boleto barcode decoding
//!
//! This module turns a thresholded scanline into a boleto barcode:
//! - Run-length grouping and guard trimming
//! - Narrow/wide classification and Interleaved 2 of 5 lookup
//! - DAC check digits (modulus 10 and 11)
//! - The reader that orchestrates the pipeline

/// Reader settings and policies
pub mod config;
/// DAC check digit computation and general-check verification
pub mod dac;
/// Narrow/wide classification and digit-pair decoding
pub mod interleaved;
/// Pipeline orchestration
pub mod reader;
/// Run-length grouping of binary scanlines
pub mod runs;
/// Interleaved 2 of 5 pattern table
pub mod tables;
