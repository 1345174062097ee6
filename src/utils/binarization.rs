use super::regression::{LineFit, Sample, fit_threshold};
use crate::error::DecodeError;

/// Threshold `values` against `fit`.
/// Returns 1 where the value is on or above the line, 0 below.
pub fn binarize<T: Sample>(values: &[T], fit: &LineFit) -> Vec<u8> {
    values
        .iter()
        .enumerate()
        .map(|(x, &y)| u8::from(y.value() >= fit.at(x)))
        .collect()
}

/// Fit a regression line to `values` and threshold them against it
pub fn regression_binarize<T: Sample>(values: &[T]) -> Result<Vec<u8>, DecodeError> {
    let fit = fit_threshold(values)?;
    Ok(binarize(values, &fit))
}
