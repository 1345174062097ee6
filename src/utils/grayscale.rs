//! Luminance conversion and scanline sampling
//!
//! Y = 0.299*R + 0.587*G + 0.114*B, computed with integer weights:
//! Y = (76*R + 150*G + 29*B) >> 8

use crate::error::DecodeError;
use crate::models::Scanline;
use image::{DynamicImage, GenericImageView};

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

/// Luminance of a single RGB pixel
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let lum = (COEF_R * r as u32 + COEF_G * g as u32 + COEF_B * b as u32) >> 8;
    lum.min(255) as u8
}

/// Convert packed RGB bytes to one luminance byte per pixel
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    rgb.chunks_exact(3)
        .take(pixel_count)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect()
}

/// Average each column of a row-major grayscale band into one sample
pub fn collapse_rows(gray: &[u8], width: usize, rows: usize) -> Vec<u8> {
    if rows == 0 {
        return Vec::new();
    }
    let mut sums = vec![0u32; width];
    for row in gray.chunks_exact(width).take(rows) {
        for (sum, &v) in sums.iter_mut().zip(row) {
            *sum += v as u32;
        }
    }
    let rows = rows as u32;
    sums.into_iter()
        .map(|sum| ((sum + rows / 2) / rows) as u8)
        .collect()
}

/// Sample a horizontal luminance scanline from `image`.
///
/// The band starts at the vertical midpoint shifted by `vertical_offset`
/// (negative moves up) and spans `band_height` rows. Rows outside the image
/// are ignored; the remaining rows are averaged per column.
pub fn sample_scanline(
    image: &DynamicImage,
    band_height: u32,
    vertical_offset: i32,
) -> Result<Scanline, DecodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::UnreadableImage(format!(
            "image has zero size ({}x{})",
            width, height
        )));
    }
    if band_height == 0 {
        return Err(DecodeError::UnreadableImage(
            "scan band height must be at least one row".to_string(),
        ));
    }

    let top = (height / 2) as i64 + vertical_offset as i64;
    let bottom = top + band_height as i64;
    let first = top.max(0);
    let last = bottom.min(height as i64);
    if first >= last {
        return Err(DecodeError::UnreadableImage(format!(
            "scan band rows {}..{} lie outside image height {}",
            top, bottom, height
        )));
    }

    let rows = (last - first) as u32;
    let band = image.crop_imm(0, first as u32, width, rows).to_rgb8();
    let gray = rgb_to_grayscale(band.as_raw(), width as usize, rows as usize);
    Ok(Scanline::new(collapse_rows(
        &gray,
        width as usize,
        rows as usize,
    )))
}
