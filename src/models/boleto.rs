use std::fmt;

/// One 11-digit field of a boleto barcode and its DAC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeBlock {
    /// The 11 digits of the field
    pub digits: String,
    /// Check digit computed over `digits`. Only exceeds 9 when the reader
    /// preserves the raw modulus-10 value.
    pub dac: u8,
}

impl fmt::Display for BarcodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.digits, self.dac)
    }
}

/// Decoded boleto barcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoletoBarcode {
    /// All 44 digits as read from the bars
    pub code: String,
    /// The code split into four 11-digit fields with their DACs
    pub blocks: [BarcodeBlock; 4],
    /// Whether the general check digit (4th position) verified
    pub general_check: bool,
}

impl BoletoBarcode {
    /// Value identifier (3rd digit) selecting the general DAC modulus
    pub fn value_identifier(&self) -> Option<char> {
        self.code.chars().nth(2)
    }

    /// Digit found in the general check position (4th digit)
    pub fn general_check_digit(&self) -> Option<char> {
        self.code.chars().nth(3)
    }
}

impl fmt::Display for BoletoBarcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b1, b2, b3, b4] = &self.blocks;
        write!(f, "{} {} {} {}", b1, b2, b3, b4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(digits: &str, dac: u8) -> BarcodeBlock {
        BarcodeBlock {
            digits: digits.to_string(),
            dac,
        }
    }

    #[test]
    fn test_display_format() {
        let barcode = BoletoBarcode {
            code: "81650000001500009720261019000000000000000000".to_string(),
            blocks: [
                block("81650000001", 2),
                block("50000972026", 8),
                block("10190000000", 7),
                block("00000000000", 10),
            ],
            general_check: true,
        };
        assert_eq!(
            barcode.to_string(),
            "81650000001-2 50000972026-8 10190000000-7 00000000000-10"
        );
        assert_eq!(barcode.value_identifier(), Some('6'));
        assert_eq!(barcode.general_check_digit(), Some('5'));
    }
}
