//! Least-squares line fit used as an adaptive threshold

use crate::error::DecodeError;

/// Values that can be fed to the regression threshold
pub trait Sample: Copy {
    /// Value on the y axis
    fn value(self) -> f64;
}

impl Sample for u8 {
    fn value(self) -> f64 {
        self as f64
    }
}

impl Sample for usize {
    fn value(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    fn value(self) -> f64 {
        self
    }
}

/// Line `y = slope * x + intercept` over sample indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Change in threshold per sample
    pub slope: f64,
    /// Threshold at index 0
    pub intercept: f64,
}

impl LineFit {
    /// Threshold value at index `x`
    #[inline]
    pub fn at(&self, x: usize) -> f64 {
        self.slope * x as f64 + self.intercept
    }
}

/// Fit a line through `(index, value)` pairs by ordinary least squares.
///
/// A single sample gives a flat line through it.
pub fn fit_threshold<T: Sample>(values: &[T]) -> Result<LineFit, DecodeError> {
    if values.is_empty() {
        return Err(DecodeError::EmptySequence);
    }

    let n = values.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;
    for (i, &v) in values.iter().enumerate() {
        let x = i as f64;
        let y = v.value();
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_xy += x * y;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        return Ok(LineFit {
            slope: 0.0,
            intercept: sum_y / n,
        });
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(LineFit { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fit_exact_line() {
        let values: Vec<f64> = (0..10).map(|x| 3.0 * x as f64 + 7.0).collect();
        let fit = fit_threshold(&values).unwrap();
        assert!(close(fit.slope, 3.0));
        assert!(close(fit.intercept, 7.0));
        assert!(close(fit.at(4), 19.0));
    }

    #[test]
    fn test_fit_alternating_values() {
        let fit = fit_threshold(&[10u8, 20, 10, 20]).unwrap();
        assert!(close(fit.slope, 2.0));
        assert!(close(fit.intercept, 12.0));
    }

    #[test]
    fn test_fit_single_sample() {
        let fit = fit_threshold(&[42usize]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 42.0);
    }

    #[test]
    fn test_fit_empty_fails() {
        let empty: [u8; 0] = [];
        assert_eq!(fit_threshold(&empty), Err(DecodeError::EmptySequence));
    }
}
