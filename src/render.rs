//! Visual inspection of thresholded scanlines

use crate::decoder::reader::BarcodeReader;
use image::{DynamicImage, GenericImageView, GrayImage, Luma};
use rayon::prelude::*;

/// Draw a binary sequence as a barcode `height` pixels tall
pub fn barcode_image(bits: &[u8], height: u32) -> GrayImage {
    GrayImage::from_fn(bits.len() as u32, height, |x, _| {
        Luma([if bits[x as usize] == 1 { 255 } else { 0 }])
    })
}

/// Threshold `lines` consecutive rows from the vertical midpoint down and
/// stack them as strips `block` pixels tall.
///
/// Rows are sampled in parallel; rows that cannot be sampled stay black.
pub fn scan_image(reader: &BarcodeReader, image: &DynamicImage, lines: u32, block: u32) -> GrayImage {
    let (width, height) = image.dimensions();
    // Output height must fit in u32
    let lines = lines.min(u32::MAX / block.max(1));
    // Offsets at or past this row fall below the image
    let sampled = lines.min(height - height / 2);
    let rows: Vec<Option<Vec<u8>>> = (0..sampled)
        .into_par_iter()
        .map(|offset| match reader.binarize_line(image, 1, offset as i32) {
            Ok(bits) => Some(bits),
            Err(err) => {
                log::debug!("scan line {} skipped: {}", offset, err);
                None
            }
        })
        .collect();

    let mut scan = GrayImage::new(width, lines * block);
    for (line, bits) in rows.iter().enumerate() {
        let Some(bits) = bits else { continue };
        let top = line as u32 * block;
        for (x, &bit) in bits.iter().enumerate().take(width as usize) {
            if bit == 0 {
                continue;
            }
            for y in top..top + block {
                scan.put_pixel(x as u32, y, Luma([255]));
            }
        }
    }
    scan
}
