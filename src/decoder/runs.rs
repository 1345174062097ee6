use crate::error::DecodeError;

/// Group consecutive equal bits into run lengths.
///
/// A final run of length 1 is treated as noise and dropped; every other run
/// is kept in order. Empty input is an error.
pub fn run_length_encode(bits: &[u8]) -> Result<Vec<usize>, DecodeError> {
    let (&first, rest) = bits.split_first().ok_or(DecodeError::EmptySequence)?;

    let mut runs = Vec::new();
    let mut current = first;
    let mut length = 1usize;
    for &bit in rest {
        if bit == current {
            length += 1;
        } else {
            runs.push(length);
            current = bit;
            length = 1;
        }
    }
    if length > 1 {
        runs.push(length);
    }
    Ok(runs)
}

/// Drop the leading and trailing runs (quiet zones around the symbol)
pub fn trim_guards(runs: &[usize]) -> &[usize] {
    if runs.len() < 2 {
        return &[];
    }
    &runs[1..runs.len() - 1]
}
