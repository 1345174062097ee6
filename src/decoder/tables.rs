use crate::models::Width;

const N: Width = Width::Narrow;
const W: Width = Width::Wide;

/// Interleaved 2 of 5 element widths, indexed by the digit they encode
pub const I25_PATTERNS: [[Width; 5]; 10] = [
    [N, N, W, W, N], // 0
    [W, N, N, N, W], // 1
    [N, W, N, N, W], // 2
    [W, W, N, N, N], // 3
    [N, N, W, N, W], // 4
    [W, N, W, N, N], // 5
    [N, W, W, N, N], // 6
    [N, N, N, W, W], // 7
    [W, N, N, W, N], // 8
    [N, W, N, W, N], // 9
];

/// Start guard: narrow bar, narrow space, narrow bar, narrow space
pub const START_PATTERN: [Width; 4] = [N, N, N, N];

/// Stop guard: wide bar, narrow space, narrow bar
pub const STOP_PATTERN: [Width; 3] = [W, N, N];

/// Digit encoded by a group of five widths
pub fn digit_for(pattern: &[Width; 5]) -> Option<u8> {
    I25_PATTERNS
        .iter()
        .position(|p| p == pattern)
        .map(|d| d as u8)
}

/// Widths encoding `digit`, `None` above 9
pub fn pattern_for(digit: u8) -> Option<&'static [Width; 5]> {
    I25_PATTERNS.get(digit as usize)
}
