use thiserror::Error;

/// Everything that can stop a boleto decode attempt.
///
/// Every failure is terminal for the attempt that produced it; nothing in the
/// crate retries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The source image could not be opened, cropped or converted.
    #[error("unreadable image: {0}")]
    UnreadableImage(String),
    /// A regression or run-length step received no samples.
    #[error("empty sample sequence")]
    EmptySequence,
    /// Too few bar/space transitions to hold start and stop patterns.
    #[error("no barcode transitions found on the scanline")]
    NoBarcode,
    /// A bar or space group did not match any Interleaved 2 of 5 pattern.
    #[error("unmatched bar/space group in block {block}")]
    AmbiguousSymbol {
        /// Zero-based index of the 10-element block that failed.
        block: usize,
    },
    /// The decoded digit count does not match a boleto barcode.
    #[error("expected 44 digits, decoded {found}")]
    UnexpectedLength {
        /// Number of digits actually decoded.
        found: usize,
    },
    /// A check digit was requested over a non-decimal character.
    #[error("invalid digit {0:?}")]
    InvalidDigit(char),
    /// The general DAC did not verify and the reader enforces it.
    #[error("general check digit mismatch for {code}")]
    ChecksumMismatch {
        /// The 44-digit code that failed verification.
        code: String,
    },
}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        DecodeError::UnreadableImage(err.to_string())
    }
}
