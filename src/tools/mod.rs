//! Helpers shared by the CLI, benches and tests: synthetic barcode
//! generation and image discovery on disk.

use crate::decoder::tables::{I25_PATTERNS, START_PATTERN, STOP_PATTERN};
use crate::error::DecodeError;
use crate::models::Width;
use image::{DynamicImage, GrayImage, Luma};
use std::fs;
use std::path::{Path, PathBuf};

/// Geometry and contrast of a synthetic barcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Pixels per narrow element
    pub narrow: usize,
    /// Pixels per wide element
    pub wide: usize,
    /// Light pixels before and after the symbol
    pub quiet: usize,
    /// Luminance of spaces and quiet zones
    pub light: u8,
    /// Luminance of bars
    pub dark: u8,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            narrow: 2,
            wide: 5,
            quiet: 20,
            light: 255,
            dark: 0,
        }
    }
}

/// Element widths of an Interleaved 2 of 5 symbol, start and stop included.
///
/// `digits` must hold an even number of decimal digits.
pub fn encode_elements(digits: &str) -> Result<Vec<Width>, DecodeError> {
    let values = digits
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or(DecodeError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    if values.len() % 2 != 0 {
        return Err(DecodeError::UnexpectedLength {
            found: values.len(),
        });
    }

    let mut widths = START_PATTERN.to_vec();
    for pair in values.chunks_exact(2) {
        let bars = &I25_PATTERNS[pair[0] as usize];
        let spaces = &I25_PATTERNS[pair[1] as usize];
        for (&bar, &space) in bars.iter().zip(spaces) {
            widths.push(bar);
            widths.push(space);
        }
    }
    widths.extend(STOP_PATTERN);
    Ok(widths)
}

/// Ideal luminance row for `digits`, bars starting dark
pub fn synthesize_scanline(
    digits: &str,
    options: &SynthesisOptions,
) -> Result<Vec<u8>, DecodeError> {
    let widths = encode_elements(digits)?;
    let mut row = vec![options.light; options.quiet];
    for (i, width) in widths.iter().enumerate() {
        let value = if i % 2 == 0 { options.dark } else { options.light };
        let pixels = match width {
            Width::Narrow => options.narrow,
            Width::Wide => options.wide,
        };
        row.extend(std::iter::repeat_n(value, pixels));
    }
    row.extend(std::iter::repeat_n(options.light, options.quiet));
    Ok(row)
}

/// Thresholded form of [`synthesize_scanline`] (1 = light, 0 = dark)
pub fn synthesize_bits(digits: &str, options: &SynthesisOptions) -> Result<Vec<u8>, DecodeError> {
    let row = synthesize_scanline(digits, options)?;
    Ok(row
        .into_iter()
        .map(|v| u8::from(v == options.light))
        .collect())
}

/// Grayscale image with the synthetic row repeated `height` times
pub fn synthesize_image(
    digits: &str,
    options: &SynthesisOptions,
    height: u32,
) -> Result<DynamicImage, DecodeError> {
    let row = synthesize_scanline(digits, options)?;
    let width = row.len() as u32;
    let image = GrayImage::from_fn(width, height, |x, _| Luma([row[x as usize]]));
    Ok(DynamicImage::ImageLuma8(image))
}

/// Extensions treated as frames, matched case-insensitively
pub const FRAME_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff"];

fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| FRAME_EXTENSIONS.contains(&ext.as_str()))
}

/// Image files under `root` in playback order, with an optional limit
///
/// Directories are walked depth first with entries sorted by name, so
/// `frame_009.png` plays before `frame_010.png` and a subfolder's frames
/// play where the subfolder sorts. Hidden entries are skipped.
pub fn frame_paths<P: AsRef<Path>>(root: P, limit: Option<usize>) -> Vec<PathBuf> {
    let mut frames = Vec::new();
    walk_frames(root.as_ref(), limit.unwrap_or(usize::MAX), &mut frames);
    frames
}

fn walk_frames(dir: &Path, limit: usize, frames: &mut Vec<PathBuf>) {
    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries.flatten().map(|entry| entry.path()).collect(),
        Err(err) => {
            log::debug!("skipping {}: {}", dir.display(), err);
            return;
        }
    };
    entries.sort();

    for path in entries {
        if frames.len() >= limit {
            return;
        }
        let hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        if hidden {
            continue;
        }
        if path.is_dir() {
            walk_frames(&path, limit, frames);
        } else if is_frame_file(&path) {
            frames.push(path);
        }
    }
}
