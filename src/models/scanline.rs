use std::fmt;

/// Luminance samples taken across one horizontal band of an image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scanline {
    samples: Vec<u8>,
}

impl Scanline {
    /// Wrap samples ordered left to right
    pub fn new(samples: Vec<u8>) -> Self {
        Self { samples }
    }

    /// Luminance values, one per column
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Number of columns sampled
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no column was sampled
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<u8>> for Scanline {
    fn from(samples: Vec<u8>) -> Self {
        Self::new(samples)
    }
}

/// Relative width of a bar or space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// Narrow element (`n`)
    Narrow,
    /// Wide element (`W`)
    Wide,
}

impl Width {
    /// Map a thresholded run bit: 1 is wide, 0 is narrow
    pub fn from_bit(bit: u8) -> Self {
        if bit == 1 { Width::Wide } else { Width::Narrow }
    }

    /// Single character used in diagnostics (`n` / `W`)
    pub fn symbol(&self) -> char {
        match self {
            Width::Narrow => 'n',
            Width::Wide => 'W',
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
