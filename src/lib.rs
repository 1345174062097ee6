//! boleto_reader - FEBRABAN boleto barcode reader
//!
//! Reads the Interleaved 2 of 5 barcode printed on Brazilian payment slips
//! from a single horizontal scanline of an image. Luminance is thresholded
//! against a least-squares regression line, run lengths are split into
//! narrow and wide the same way, and the 44 decoded digits are returned as
//! four 11-digit fields with their DAC check digits.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Boleto decoding modules (run lengths, I2of5 lookup, DAC, reader)
pub mod decoder;
/// Error type shared by every stage
pub mod error;
/// Frame sources and the stop-on-first-decode driver
pub mod frames;
/// Core data structures (Scanline, Width, BoletoBarcode)
pub mod models;
/// Scanline visualisation
pub mod render;
/// Synthetic barcodes and image discovery
pub mod tools;
/// Signal utilities (grayscale, regression, binarization)
pub mod utils;

pub use decoder::config::{ChecksumPolicy, Mod10Overflow, ReaderConfig};
pub use decoder::reader::{BarcodeReader, DecodeReport};
pub use error::DecodeError;
pub use frames::{FrameHit, FrameSource, ImageSequence, IterFrames, scan_frames};
pub use models::{BarcodeBlock, BoletoBarcode, Scanline, Width};

use image::DynamicImage;
use std::path::Path;

/// Decode the boleto barcode crossing the middle row of `image`
///
/// # Example
/// ```
/// use boleto_reader::tools::{SynthesisOptions, synthesize_image};
///
/// let code = "81650000001500009720261019000000000000000000";
/// let image = synthesize_image(code, &SynthesisOptions::default(), 20).unwrap();
/// let barcode = boleto_reader::decode(&image).unwrap();
/// assert_eq!(
///     barcode.to_string(),
///     "81650000001-2 50000972026-8 10190000000-7 00000000000-0"
/// );
/// ```
pub fn decode(image: &DynamicImage) -> Result<BoletoBarcode, DecodeError> {
    BarcodeReader::new().decode(image)
}

/// Open an image file and decode it with default settings
pub fn decode_path<P: AsRef<Path>>(path: P) -> Result<BoletoBarcode, DecodeError> {
    BarcodeReader::new().decode_path(path)
}
