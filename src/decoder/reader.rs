use super::config::{ChecksumPolicy, ReaderConfig};
use super::dac::{Modulus, compute_check_digit, verify_general_check_digit};
use super::interleaved::{classify_runs, decode_digits};
use super::runs::{run_length_encode, trim_guards};
use crate::error::DecodeError;
use crate::models::{BarcodeBlock, BoletoBarcode, Scanline};
use crate::utils::binarization::regression_binarize;
use crate::utils::grayscale::sample_scanline;
use image::DynamicImage;
use std::path::Path;

/// Digits in a boleto barcode
pub const BOLETO_DIGITS: usize = 44;
/// Digits per formatted field
pub const BLOCK_DIGITS: usize = 11;

/// Outcome of a decode along with the binary sequence it was read from
#[derive(Debug, Clone)]
pub struct DecodeReport {
    /// Thresholded scanline (1 = light, 0 = dark), empty if sampling failed
    pub bits: Vec<u8>,
    /// Decoded barcode or the reason decoding stopped
    pub result: Result<BoletoBarcode, DecodeError>,
}

/// Boleto barcode reader
///
/// Stateless apart from its configuration; share it freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarcodeReader {
    config: ReaderConfig,
}

impl BarcodeReader {
    /// Reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Reader with explicit settings
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Reader configured from `BOLETO_*` environment variables
    pub fn from_env() -> Self {
        Self::with_config(ReaderConfig::from_env())
    }

    /// Active settings
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Sample the configured band of `image`
    pub fn scanline(&self, image: &DynamicImage) -> Result<Scanline, DecodeError> {
        sample_scanline(image, self.config.band_height, self.config.vertical_offset)
    }

    /// Binarize one scanline of `image` against its own regression line
    pub fn binarize_line(
        &self,
        image: &DynamicImage,
        band_height: u32,
        vertical_offset: i32,
    ) -> Result<Vec<u8>, DecodeError> {
        let line = sample_scanline(image, band_height, vertical_offset)?;
        regression_binarize(line.samples())
    }

    /// Decode the boleto barcode crossing the configured band of `image`
    pub fn decode(&self, image: &DynamicImage) -> Result<BoletoBarcode, DecodeError> {
        self.decode_report(image).result
    }

    /// Like [`decode`](Self::decode), also returning the binary sequence
    pub fn decode_report(&self, image: &DynamicImage) -> DecodeReport {
        let bits = match self
            .scanline(image)
            .and_then(|line| regression_binarize(line.samples()))
        {
            Ok(bits) => bits,
            Err(err) => {
                return DecodeReport {
                    bits: Vec::new(),
                    result: Err(err),
                };
            }
        };
        let result = self.decode_bits(&bits);
        DecodeReport { bits, result }
    }

    /// Open an image file and decode it
    pub fn decode_path<P: AsRef<Path>>(&self, path: P) -> Result<BoletoBarcode, DecodeError> {
        let image = image::open(path)?;
        self.decode(&image)
    }

    /// Decode from an already sampled scanline
    pub fn decode_scanline(&self, scanline: &Scanline) -> Result<BoletoBarcode, DecodeError> {
        let bits = regression_binarize(scanline.samples())?;
        self.decode_bits(&bits)
    }

    /// Decode from a thresholded scanline
    pub fn decode_bits(&self, bits: &[u8]) -> Result<BoletoBarcode, DecodeError> {
        let runs = run_length_encode(bits)?;
        let elements = trim_guards(&runs);
        log::debug!(
            "scanline: {} samples, {} runs, {} elements",
            bits.len(),
            runs.len(),
            elements.len()
        );
        if elements.len() < 8 {
            return Err(DecodeError::NoBarcode);
        }

        let widths = classify_runs(elements)?;
        let code = decode_digits(&widths)?;
        if code.len() != BOLETO_DIGITS {
            return Err(DecodeError::UnexpectedLength { found: code.len() });
        }
        self.assemble(code)
    }

    fn assemble(&self, code: String) -> Result<BoletoBarcode, DecodeError> {
        let overflow = self.config.mod10_overflow;
        let mut blocks = Vec::with_capacity(4);
        for start in (0..BOLETO_DIGITS).step_by(BLOCK_DIGITS) {
            let digits = &code[start..start + BLOCK_DIGITS];
            let dac = overflow.apply(compute_check_digit(digits, Modulus::Ten)?);
            blocks.push(BarcodeBlock {
                digits: digits.to_string(),
                dac,
            });
        }
        let blocks: [BarcodeBlock; 4] = blocks
            .try_into()
            .map_err(|_| DecodeError::UnexpectedLength { found: code.len() })?;

        let general_check = verify_general_check_digit(&code, overflow);
        if !general_check {
            match self.config.checksum_policy {
                ChecksumPolicy::Enforce => return Err(DecodeError::ChecksumMismatch { code }),
                ChecksumPolicy::Warn => {
                    log::warn!("general check digit mismatch for {}", code);
                }
            }
        }

        Ok(BoletoBarcode {
            code,
            blocks,
            general_check,
        })
    }
}
