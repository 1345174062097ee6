//! Interleaved 2 of 5 symbol decoding
//!
//! Run lengths are split into narrow and wide with the same regression
//! threshold used on luminance, so classification does not depend on the
//! absolute module size of the scan.

use super::tables::digit_for;
use crate::error::DecodeError;
use crate::models::Width;
use crate::utils::binarization::regression_binarize;

/// Elements skipped before the first data block (start pattern)
const START_ELEMENTS: usize = 4;
/// Elements reserved after the last data block (stop pattern)
const STOP_ELEMENTS: usize = 4;
/// Bars and spaces in one digit pair
const BLOCK_ELEMENTS: usize = 10;

/// Classify run lengths as narrow or wide
pub fn classify_runs(runs: &[usize]) -> Result<Vec<Width>, DecodeError> {
    Ok(regression_binarize(runs)?
        .into_iter()
        .map(Width::from_bit)
        .collect())
}

/// Decode digit pairs from a classified element sequence.
///
/// Blocks of ten start after the start pattern; bars (even offsets) carry
/// the first digit and spaces (odd offsets) the second. Any unmatched or
/// truncated block fails the whole sequence.
pub fn decode_digits(widths: &[Width]) -> Result<String, DecodeError> {
    if widths.len() < START_ELEMENTS + STOP_ELEMENTS {
        return Err(DecodeError::NoBarcode);
    }

    let end = widths.len() - STOP_ELEMENTS;
    let mut digits = String::with_capacity((end - START_ELEMENTS) / 5);
    for (block, start) in (START_ELEMENTS..end).step_by(BLOCK_ELEMENTS).enumerate() {
        let chunk = widths
            .get(start..start + BLOCK_ELEMENTS)
            .ok_or(DecodeError::AmbiguousSymbol { block })?;
        let (bars, spaces) = split_pair(chunk);
        let (Some(first), Some(second)) = (digit_for(&bars), digit_for(&spaces)) else {
            log::debug!("unmatched block {}: {}", block, render(chunk));
            return Err(DecodeError::AmbiguousSymbol { block });
        };
        digits.push(char::from(b'0' + first));
        digits.push(char::from(b'0' + second));
    }
    Ok(digits)
}

fn split_pair(chunk: &[Width]) -> ([Width; 5], [Width; 5]) {
    let mut bars = [Width::Narrow; 5];
    let mut spaces = [Width::Narrow; 5];
    for i in 0..5 {
        bars[i] = chunk[2 * i];
        spaces[i] = chunk[2 * i + 1];
    }
    (bars, spaces)
}

fn render(widths: &[Width]) -> String {
    widths.iter().map(Width::symbol).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::tables::{START_PATTERN, STOP_PATTERN, pattern_for};

    const NARROW: usize = 3;
    const WIDE: usize = 7;

    fn interleave(first: u8, second: u8) -> Vec<Width> {
        let bars = pattern_for(first).unwrap();
        let spaces = pattern_for(second).unwrap();
        bars.iter()
            .zip(spaces.iter())
            .flat_map(|(&b, &s)| [b, s])
            .collect()
    }

    fn symbol(digits: &[u8]) -> Vec<Width> {
        let mut widths = START_PATTERN.to_vec();
        for pair in digits.chunks(2) {
            widths.extend(interleave(pair[0], pair[1]));
        }
        widths.extend(STOP_PATTERN);
        widths
    }

    fn to_runs(widths: &[Width]) -> Vec<usize> {
        widths
            .iter()
            .map(|w| if *w == Width::Wide { WIDE } else { NARROW })
            .collect()
    }

    #[test]
    fn test_every_digit_pair_round_trips() {
        for first in 0..10u8 {
            for second in 0..10u8 {
                let widths = symbol(&[first, second, 1, 2]);
                let classified = classify_runs(&to_runs(&widths)).unwrap();
                assert_eq!(classified, widths);
                let expected = format!("{}{}12", first, second);
                assert_eq!(decode_digits(&classified).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_classification_ignores_scale() {
        let widths = symbol(&[9, 0, 4, 7]);
        let scaled: Vec<usize> = to_runs(&widths).iter().map(|r| r * 11).collect();
        assert_eq!(classify_runs(&scaled).unwrap(), widths);
    }

    #[test]
    fn test_unmatched_group_fails_whole_decode() {
        let mut widths = symbol(&[1, 2, 3, 4]);
        // Third bar of the second block becomes wide: three wide bars
        let idx = 4 + 10 + 2 * 2;
        widths[idx] = if widths[idx] == Width::Wide {
            Width::Narrow
        } else {
            Width::Wide
        };
        assert_eq!(
            decode_digits(&widths),
            Err(DecodeError::AmbiguousSymbol { block: 1 })
        );
    }

    #[test]
    fn test_truncated_block_fails() {
        let mut widths = symbol(&[5, 6]);
        widths.truncate(widths.len() - 3);
        widths.extend([Width::Narrow; 6]);
        assert!(matches!(
            decode_digits(&widths),
            Err(DecodeError::AmbiguousSymbol { block: 1 })
        ));
    }

    #[test]
    fn test_too_short_for_guards() {
        assert_eq!(
            decode_digits(&[Width::Narrow; 7]),
            Err(DecodeError::NoBarcode)
        );
        assert_eq!(decode_digits(&[Width::Narrow; 8]).unwrap(), "");
    }

    #[test]
    fn test_classify_empty_fails() {
        assert_eq!(classify_runs(&[]), Err(DecodeError::EmptySequence));
    }
}
