//! Frame sources feeding the reader one image at a time
//!
//! A camera, a video decoder or a folder of snapshots all reduce to a lazy
//! sequence of images. [`scan_frames`] drives any of them until the first
//! frame that decodes.

use crate::decoder::reader::BarcodeReader;
use crate::error::DecodeError;
use crate::models::BoletoBarcode;
use crate::tools::frame_paths;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Producer of frames, finite or not
pub trait FrameSource {
    /// Next frame; `None` ends the stream
    fn next_frame(&mut self) -> Option<Result<DynamicImage, DecodeError>>;
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn next_frame(&mut self) -> Option<Result<DynamicImage, DecodeError>> {
        (**self).next_frame()
    }
}

/// Frames from any iterator of in-memory images
pub struct IterFrames<I> {
    inner: I,
}

impl<I> IterFrames<I>
where
    I: Iterator<Item = DynamicImage>,
{
    /// Wrap an image iterator
    pub fn new<T: IntoIterator<IntoIter = I>>(frames: T) -> Self {
        Self {
            inner: frames.into_iter(),
        }
    }
}

impl<I> FrameSource for IterFrames<I>
where
    I: Iterator<Item = DynamicImage>,
{
    fn next_frame(&mut self) -> Option<Result<DynamicImage, DecodeError>> {
        self.inner.next().map(Ok)
    }
}

/// Image files played back in path order, opened lazily
pub struct ImageSequence {
    paths: std::vec::IntoIter<PathBuf>,
}

impl ImageSequence {
    /// Every image under `root`, recursively, up to `limit` files
    pub fn from_dir<P: AsRef<Path>>(root: P, limit: Option<usize>) -> Self {
        Self::from_paths(frame_paths(root, limit))
    }

    /// Explicit list of files, played in the given order
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into_iter(),
        }
    }

    /// Frames not yet played
    pub fn remaining(&self) -> usize {
        self.paths.len()
    }
}

impl FrameSource for ImageSequence {
    fn next_frame(&mut self) -> Option<Result<DynamicImage, DecodeError>> {
        let path = self.paths.next()?;
        Some(image::open(&path).map_err(|err| {
            DecodeError::UnreadableImage(format!("{}: {}", path.display(), err))
        }))
    }
}

/// First successful decode in a frame stream
#[derive(Debug, Clone)]
pub struct FrameHit {
    /// Zero-based index of the frame that decoded
    pub frame: usize,
    /// Decoded barcode
    pub barcode: BoletoBarcode,
}

/// Decode frames in order until one yields a barcode.
///
/// Each frame is processed to completion before the next is pulled. Frames
/// that fail to load or decode are skipped. At most `max_frames` frames are
/// pulled when a limit is given.
pub fn scan_frames<S: FrameSource>(
    reader: &BarcodeReader,
    mut source: S,
    max_frames: Option<usize>,
) -> Option<FrameHit> {
    let mut frame = 0usize;
    while max_frames.is_none_or(|max| frame < max) {
        let next = source.next_frame()?;
        match next.and_then(|image| reader.decode(&image)) {
            Ok(barcode) => {
                log::info!("frame {} decoded: {}", frame, barcode);
                return Some(FrameHit { frame, barcode });
            }
            Err(DecodeError::UnreadableImage(reason)) => {
                log::warn!("frame {} unreadable: {}", frame, reason);
            }
            Err(err) => {
                log::debug!("frame {}: {}", frame, err);
            }
        }
        frame += 1;
    }
    log::debug!("frame budget of {} exhausted", frame);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{SynthesisOptions, synthesize_image};
    use image::{GrayImage, Luma};

    const VALID: &str = "81650000001500009720261019000000000000000000";

    fn blank() -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 16, Luma([255])))
    }

    fn boleto() -> DynamicImage {
        synthesize_image(VALID, &SynthesisOptions::default(), 16).unwrap()
    }

    /// Counts pulls so tests can check the stream stops early
    struct Counting<S> {
        inner: S,
        pulled: usize,
    }

    impl<S: FrameSource> FrameSource for Counting<S> {
        fn next_frame(&mut self) -> Option<Result<DynamicImage, DecodeError>> {
            self.pulled += 1;
            self.inner.next_frame()
        }
    }

    #[test]
    fn test_stops_at_first_decode() {
        let mut source = Counting {
            inner: IterFrames::new(vec![blank(), blank(), boleto(), boleto(), blank()]),
            pulled: 0,
        };
        let hit = scan_frames(&BarcodeReader::new(), &mut source, None).unwrap();
        assert_eq!(hit.frame, 2);
        assert_eq!(hit.barcode.code, VALID);
        assert_eq!(source.pulled, 3);
    }

    #[test]
    fn test_frame_budget() {
        let source = IterFrames::new(vec![blank(), blank(), boleto()]);
        assert!(scan_frames(&BarcodeReader::new(), source, Some(2)).is_none());
    }

    #[test]
    fn test_exhausted_stream() {
        let source = IterFrames::new(vec![blank(), blank()]);
        assert!(scan_frames(&BarcodeReader::new(), source, None).is_none());
    }

    #[test]
    fn test_unreadable_frames_are_skipped() {
        let frames: Vec<Result<DynamicImage, DecodeError>> = vec![
            Err(DecodeError::UnreadableImage("torn frame".to_string())),
            Ok(boleto()),
        ];
        struct Fixed(std::vec::IntoIter<Result<DynamicImage, DecodeError>>);
        impl FrameSource for Fixed {
            fn next_frame(&mut self) -> Option<Result<DynamicImage, DecodeError>> {
                self.0.next()
            }
        }
        let hit = scan_frames(&BarcodeReader::new(), Fixed(frames.into_iter()), None).unwrap();
        assert_eq!(hit.frame, 1);
    }
}
